//! Error types for fetching and classifying a screenshot.
//!
//! Every error is terminal for the screenshot being processed: no partial
//! frame is returned alongside one.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Source image or cache sidecar could not be read or written.
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP exchange itself failed (DNS, connection, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The vision service answered with a non-200 status and a readable
    /// error envelope. Displays as the remote message only.
    #[error("{message}")]
    Remote { code: String, message: String },

    /// Malformed JSON in either the success body or the error envelope.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A bounding box with fewer than eight coordinates.
    #[error("Malformed bounding box for {content:?}: expected 8 coordinates, got {len}")]
    MalformedBoundingBox { content: String, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
