//! VSIX package manifest metadata extraction.
//!
//! Parses the `source.extension.vsixmanifest` descriptor into a fixed
//! record of scalar fields for constant-table generation.

pub mod error;
pub mod metadata;

pub use error::{Error, Result};
pub use metadata::ManifestMetadata;
