use folio_core::error::CoreError;

/// Error type for repository operations.
///
/// Separates invariant violations (caught before the query runs) from
/// underlying database failures so callers can map them to different
/// HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain invariant rejected the write before it reached the database.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// An underlying database failure.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
