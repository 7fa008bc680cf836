//! Error types for vsix-codegen

/// Result type for vsix-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while emitting the constant artifact
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Field '{field}' cannot be losslessly escaped: {reason}")]
    Escaping { field: String, reason: String },

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
