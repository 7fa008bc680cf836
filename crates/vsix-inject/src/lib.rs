//! Idempotent content injection into VSIX manifests.
//!
//! Given a source manifest and flags for discovered template folders,
//! produces a derived manifest with the corresponding `<Content>` entries
//! present exactly once, leaving everything else in the document
//! untouched. Re-running on the result is a byte-identical no-op.

pub mod diagnostics;
pub mod inject;

pub use diagnostics::{Code, Diagnostic, Severity};
pub use inject::{InjectOutcome, InjectRequest, inject};
