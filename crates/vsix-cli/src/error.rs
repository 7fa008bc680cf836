//! Error types for vsix-cli

use vsix_inject::Code;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Descriptor(#[from] vsix_descriptor::Error),

    #[error(transparent)]
    Manifest(#[from] vsix_manifest::Error),

    #[error(transparent)]
    Vsct(#[from] vsix_vsct::Error),

    #[error(transparent)]
    Codegen(#[from] vsix_codegen::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// The stable diagnostic code for this failure class, when one exists.
    pub fn code(&self) -> Option<Code> {
        use vsix_descriptor::Error as D;
        match self {
            Self::Descriptor(e) | Self::Manifest(vsix_manifest::Error::Descriptor(e)) => {
                Some(match e {
                    D::FileNotFound { .. } => Code::SourceNotFound,
                    D::Io { .. } | D::LockFailed { .. } => Code::IoFailure,
                    D::ElementNotFound { .. } | D::AmbiguousPath { .. } => Code::InvalidStructure,
                    D::MalformedXml { .. } => Code::Unexpected,
                })
            }
            Self::Manifest(vsix_manifest::Error::MissingRequiredField { .. }) => {
                Some(Code::MissingRequiredField)
            }
            Self::Vsct(e) => Some(match e {
                vsix_vsct::Error::DuplicateGroupName { .. } => Code::DuplicateGroupName,
                vsix_vsct::Error::DuplicateIdName { .. } => Code::DuplicateIdName,
                vsix_vsct::Error::InvalidGuidFormat { .. } => Code::InvalidGuidFormat,
                vsix_vsct::Error::InvalidIdValue { .. }
                | vsix_vsct::Error::MissingSymbolAttribute { .. } => Code::InvalidStructure,
                vsix_vsct::Error::Descriptor(d) => match d {
                    D::FileNotFound { .. } => Code::SourceNotFound,
                    D::Io { .. } | D::LockFailed { .. } => Code::IoFailure,
                    D::ElementNotFound { .. } | D::AmbiguousPath { .. } => Code::InvalidStructure,
                    D::MalformedXml { .. } => Code::Unexpected,
                },
            }),
            Self::Codegen(_) => Some(Code::Unexpected),
            Self::Json(_) | Self::User { .. } => None,
        }
    }
}
