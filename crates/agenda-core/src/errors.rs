//! Validation and missing-field errors.
//!
//! Transport and configuration errors live in their own crates
//! (`agenda-notion`, `agenda-config`); `anyhow` is only used by the binary.

use thiserror::Error;

/// Errors raised while constructing or preparing entities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A value is outside its enumerated set or violates a field constraint.
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// An operation needs a field that is not set on the entity.
    #[error("Missing field '{field}' required by {operation}")]
    MissingField { field: String, operation: String },
}

impl CoreError {
    /// Build a [`CoreError::Validation`] for `field`.
    #[must_use]
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a [`CoreError::MissingField`] for `field` in `operation`.
    #[must_use]
    pub fn missing(field: &str, operation: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Validation { field, .. } | Self::MissingField { field, .. } => field,
        }
    }
}
