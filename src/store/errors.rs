//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the climate store.
///
/// Empty result sets are not errors: a station with no measurements or a
/// date range matching nothing yields empty vectors or null aggregate
/// fields. Only hard database failures reach this type.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure (missing file, bad schema, I/O)
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A measurement date in the dataset was not `YYYY-MM-DD`
    #[error("invalid date in dataset: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}
