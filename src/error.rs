//! Errors for the operations around the network core: loading and saving
//! text, decoding snapshots and configs.
//!
//! Forward and backward propagation never fail; a badly shaped network is a
//! contract violation and panics there.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum NetError {
    /// The path given to `read_text` does not exist.
    #[error("file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be read, or could not be written.
    #[error("unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot or config text is not valid JSON for the expected type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A decoded layer breaks the three-layer shape invariants.
    #[error("{layer} layer shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, NetError>;
