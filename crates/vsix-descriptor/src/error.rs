//! Error types for vsix-descriptor

use std::path::PathBuf;

/// Result type for vsix-descriptor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, querying, or writing descriptors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Descriptor not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Malformed XML in {origin}: {message}")]
    MalformedXml { origin: String, message: String },

    #[error("Path '{path}' matched {count} elements, expected at most one")]
    AmbiguousPath { path: String, count: usize },

    #[error("Element not found: {path}")]
    ElementNotFound { path: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(origin: impl Into<String>, error: &roxmltree::Error) -> Self {
        Self::MalformedXml {
            origin: origin.into(),
            message: error.to_string(),
        }
    }
}
