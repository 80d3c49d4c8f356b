//! Cross-cutting error types for Ventore.
//!
//! Fetch and build errors are defined in `ventore-sheets` and
//! `ventore-model`. A unified error is deferred to `ventore-cli`.

use thiserror::Error;

/// Errors that can be raised by any Ventore crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum value, malformed identifier).
    #[error("Validation error: {0}")]
    Validation(String),
}
