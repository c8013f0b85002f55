use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::error::StoreResult;

/// Generic store trait for saving a modified entity.
///
/// Implementations must compare-and-swap on the entity's version: the write
/// only lands if the stored version still matches the one the snapshot was
/// loaded with, otherwise the call fails with `StoreError::Conflict` and the
/// caller re-reads. This is what gives the pure rules engine its
/// at-most-one-writer guarantee per account.
#[async_trait]
pub trait Update<DB: Database, T: Identifiable>: Send + Sync {
    /// Returns the saved entity with its version already bumped
    async fn update(&self, item: T) -> StoreResult<T>;
}
