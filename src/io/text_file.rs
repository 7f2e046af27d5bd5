//! Whole-file text reads and writes.
//!
//! This is the only place the crate touches the filesystem. Callers hand it
//! opaque strings (snapshot or config JSON) and get strings back.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{NetError, Result};

/// Reads the whole file at `path` into a string.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("file does not exist: {}", path.display());
        return Err(NetError::FileNotFound { path: path.to_path_buf() });
    }

    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(source) => {
            warn!("unable to load {}: {source}", path.display());
            Err(NetError::Io { path: path.to_path_buf(), source })
        }
    }
}

/// Writes `content` to `path`, replacing any existing file.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|source| {
        warn!("unable to write {}: {source}", path.display());
        NetError::Io { path: path.to_path_buf(), source }
    })?;
    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");

        write_text(&path, "[0.5, -0.25]").unwrap();
        assert_eq!(read_text(&path).unwrap(), "[0.5, -0.25]");
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match read_text(&path) {
            Err(NetError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");

        assert!(matches!(write_text(&path, "{}"), Err(NetError::Io { .. })));
    }

    #[test]
    fn reading_a_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_text(dir.path()), Err(NetError::Io { .. })));
    }
}
