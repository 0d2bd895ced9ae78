/// Store-level error type
///
/// Every persistence failure surfaces through [`StoreError`]. The repository
/// performs no retries; callers decide how a failure maps to a response.

use thiserror::Error;

/// Errors produced by the generic repository
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected an update: the id does not exist, or a constraint
    /// was violated concurrently.
    #[error("update rejected: {0}")]
    UpdateConflict(String),

    /// Any other persistence failure (connectivity, protocol, constraint on
    /// insert), carrying the underlying cause.
    #[error("store failure: {0}")]
    Database(#[from] sqlx::Error),
}
