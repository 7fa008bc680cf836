//! Command table (`.vsct`) symbol extraction.
//!
//! A command table declares named GUID groups (`<GuidSymbol>`), each
//! scoping a set of named integer identifiers (`<IDSymbol>`). Several
//! documents can be merged into one table; name collisions are hard
//! errors.

pub mod error;
pub mod guid;
pub mod table;

pub use error::{Error, Result};
pub use guid::Guid;
pub use table::{CommandTable, GuidGroup, IdSymbol};
