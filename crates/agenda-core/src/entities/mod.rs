//! Entity structs for agenda.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON output
//! and schema validation. Remote wire shapes are not defined here; see
//! `agenda-notion`.

mod entry;

pub use entry::{Entry, MISSING_TEXT};
