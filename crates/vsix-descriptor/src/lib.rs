//! Whitespace-preserving XML descriptor model for VSIX build tools.
//!
//! Descriptors (the `source.extension.vsixmanifest` package manifest and
//! `.vsct` command tables) are hand-authored XML. This crate parses them
//! with `roxmltree` and performs mutations by splicing the raw source at
//! byte-accurate positions, so everything outside the edited region
//! round-trips verbatim.

pub mod document;
pub mod error;
pub mod io;
pub mod ns;

pub use document::{Document, ElementInfo, escape_attr};
pub use error::{Error, Result};
