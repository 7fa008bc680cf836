//! Constant table emission.
//!
//! Renders the extracted manifest metadata and command-table model into a
//! deterministic, build-reproducible Rust source artifact.

pub mod emit;
pub mod error;
pub mod ident;

pub use emit::emit;
pub use error::{Error, Result};
