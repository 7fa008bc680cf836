//! Structured diagnostics with stable codes

use serde::Serialize;

/// Stable diagnostic codes, so automated tooling can react to specific
/// failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Code {
    #[serde(rename = "VSIX020")]
    SourceNotFound,
    #[serde(rename = "VSIX021")]
    InvalidStructure,
    #[serde(rename = "VSIX022")]
    DuplicateGroupName,
    #[serde(rename = "VSIX023")]
    DuplicateIdName,
    #[serde(rename = "VSIX024")]
    InvalidGuidFormat,
    #[serde(rename = "VSIX025")]
    MissingRequiredField,
    #[serde(rename = "VSIX026")]
    IoFailure,
    #[serde(rename = "VSIX029")]
    Unexpected,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceNotFound => "VSIX020",
            Self::InvalidStructure => "VSIX021",
            Self::DuplicateGroupName => "VSIX022",
            Self::DuplicateIdName => "VSIX023",
            Self::InvalidGuidFormat => "VSIX024",
            Self::MissingRequiredField => "VSIX025",
            Self::IoFailure => "VSIX026",
            Self::Unexpected => "VSIX029",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic severity. `Info` is the low-severity channel used for soft
/// conditions such as an entry that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Notice,
    Info,
}

/// One diagnostic record. Fatal conditions carry a [`Code`]; progress
/// notices do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<Code>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: Code, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Notice,
            code: None,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
