//! Error types for table analysis

use thiserror::Error;

/// Errors raised by the cleaning and aggregation functions.
///
/// Table operations return `anyhow::Result`; these variants are wrapped
/// inside it and can be recovered with `downcast_ref::<AnalysisError>()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A column required by an operation is absent from the input table.
    #[error("Column '{column}' is required by {operation} but is not present in the table")]
    MissingColumn {
        column: String,
        operation: &'static str,
    },

    /// A column is present in the table but has no kind in the schema.
    #[error("Column '{0}' is not declared in the table schema")]
    UndeclaredColumn(String),
}
