//! # agenda-core
//!
//! Entity model and validation for agenda.
//!
//! This crate provides the types shared across all agenda crates:
//! - Closed enums for the addressable databases and entry statuses
//! - The [`Entry`](entities::Entry) record with its construction rules
//! - Timestamp parsing for the formats the remote service and CLI produce
//! - Validation and missing-field error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod time;

pub use entities::Entry;
pub use enums::{DatabaseRef, Status};
pub use errors::CoreError;
