use std::fs;
use std::path::Path;

use crate::errors::GenerationError;

/// Read seed words from a plain-text file: one word per line, trimmed,
/// blank lines skipped.
pub fn load_seed_words(path: &Path) -> Result<Vec<String>, GenerationError> {
    let contents = fs::read_to_string(path).map_err(|source| GenerationError::SeedFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
