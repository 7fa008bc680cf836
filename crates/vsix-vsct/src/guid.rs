//! GUID value with lossless source text

use serde::Serialize;
use uuid::Uuid;

use crate::{Error, Result};

/// A 128-bit GUID plus the exact text it was written as.
///
/// The source text is retained losslessly (no case normalization); the
/// canonical renderings are produced on demand for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guid {
    value: Uuid,
    source: String,
}

impl Guid {
    /// Parse a GUID from descriptor text. Accepts braced, hyphenated, and
    /// simple forms in any casing.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let value = Uuid::parse_str(trimmed).map_err(|_| Error::InvalidGuidFormat {
            text: text.to_string(),
        })?;
        Ok(Self {
            value,
            source: trimmed.to_string(),
        })
    }

    /// The 128-bit value.
    pub fn value(&self) -> Uuid {
        self.value
    }

    /// The GUID exactly as written in the source document.
    pub fn source_text(&self) -> &str {
        &self.source
    }

    /// Braced uppercase rendering, e.g. `{C5B71B4F-...}`.
    pub fn braced_upper(&self) -> String {
        format!(
            "{{{}}}",
            self.value
                .as_hyphenated()
                .to_string()
                .to_ascii_uppercase()
        )
    }

    /// Dashed lowercase rendering, e.g. `c5b71b4f-...`.
    pub fn dashed_lower(&self) -> String {
        self.value.as_hyphenated().to_string()
    }
}
