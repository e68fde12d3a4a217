//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Error represents a failure at the boundary of the merge engine.
///
/// Merging two typed trees cannot fail. Errors only come from decoding or
/// encoding documents, from reading files, and from merging two
/// [`Resource`](crate::resource::Resource) values whose kinds differ.
#[derive(Debug, Error)]
pub enum Error {
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document has no kind")]
    MissingKind,

    #[error("unsupported kind: {0}")]
    UnknownKind(String),

    #[error("cannot merge {overlay} overlay onto {baseline} baseline")]
    KindMismatch { baseline: String, overlay: String },
}

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a kind mismatch error.
    pub fn kind_mismatch(baseline: impl Into<String>, overlay: impl Into<String>) -> Self {
        Error::KindMismatch {
            baseline: baseline.into(),
            overlay: overlay.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
