//! Reading job scripts from disk.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};

/// Read a job script into lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped; all other whitespace is
/// kept. The file handle is closed before returning, on success and on error.
pub fn read_script(path: impl AsRef<Path>) -> ConvertResult<Vec<String>> {
    let path = resolve(path.as_ref());

    let file = File::open(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::InputNotFound(path.clone()),
        _ => ConvertError::InputRead {
            path: path.clone(),
            source: e,
        },
    })?;

    if file.metadata().is_ok_and(|m| m.is_dir()) {
        return Err(ConvertError::InputRead {
            source: std::io::Error::other("is a directory"),
            path,
        });
    }

    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ConvertError::InputRead {
            path: path.clone(),
            source: e,
        })?;

    debug!(path = %path.display(), lines = lines.len(), "read job script");

    Ok(lines)
}

/// Absolute form of `path`, falling back to the path as given.
fn resolve(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
