//! Error types for vsix-manifest

/// Result type for vsix-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting manifest metadata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Manifest is missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error(transparent)]
    Descriptor(#[from] vsix_descriptor::Error),
}

impl Error {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }
}
