use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by an account store implementation.
///
/// `Conflict` is the at-most-one-writer signal: the row changed between the
/// caller's load and its save, and the caller must re-read and retry.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Concurrent update detected for account {id}")]
    Conflict { id: Uuid },

    #[error("Store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
