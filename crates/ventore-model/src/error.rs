//! Model build error types.

use thiserror::Error;
use ventore_sheets::SheetError;

/// Errors that abort a model build. Data-quality problems are never errors;
/// they are collected on [`ventore_core::entities::DataModel::issues`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// One of the source sheets could not be fetched.
    #[error(transparent)]
    Fetch(#[from] SheetError),
}
