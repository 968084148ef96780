use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write the wordlist one word per line, newline-terminated, UTF-8.
///
/// The file is written to a sibling temp path and renamed into place, so the
/// destination is either fully written or absent. Returns bytes written.
pub fn write_wordlist(path: &Path, words: &[String]) -> io::Result<u64> {
    let tmp_path = temp_path(path)?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    let mut writer = BufWriter::new(file);

    let mut bytes = 0_u64;
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
        bytes += word.len() as u64 + 1;
    }

    writer.flush()?;
    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    std::fs::rename(&tmp_path, path)?;

    Ok(bytes)
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
