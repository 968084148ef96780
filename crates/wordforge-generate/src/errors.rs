use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Invalid pattern or range, detected before generation.
    #[error(transparent)]
    Invalid(#[from] wordforge_core::Error),
    /// No generation source was configured, or none yielded a usable word.
    #[error("no generation source produced any usable words")]
    NoInput,
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output path could not be written.
    #[error("failed to write wordlist {path}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
