//! Core error type for the validation system

use thiserror::Error;

/// A validation failure.
///
/// Carries a single human-readable message and nothing else: bare validator
/// invocation reports failure as a boolean, and only the [`parse`]
/// entry points convert that boolean into an error.
///
/// [`parse`]: crate::core::parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
