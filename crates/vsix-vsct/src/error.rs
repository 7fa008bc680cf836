//! Error types for vsix-vsct

/// Result type for vsix-vsct operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or merging command tables
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate GUID group name: {name}")]
    DuplicateGroupName { name: String },

    #[error("Duplicate ID name '{name}' in group '{group}'")]
    DuplicateIdName { group: String, name: String },

    #[error("Invalid GUID format: '{text}'")]
    InvalidGuidFormat { text: String },

    #[error("Invalid ID value '{value}' for '{name}' in group '{group}'")]
    InvalidIdValue {
        group: String,
        name: String,
        value: String,
    },

    #[error("GuidSymbol element is missing attribute '{attribute}'")]
    MissingSymbolAttribute { attribute: &'static str },

    #[error(transparent)]
    Descriptor(#[from] vsix_descriptor::Error),
}
