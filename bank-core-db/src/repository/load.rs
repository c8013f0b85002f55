use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::repository::error::StoreResult;

/// Generic store trait for loading one entity by id.
///
/// `Ok(None)` is the not-found case; errors are reserved for backend
/// failures. The loaded value is a fresh snapshot and must not be reused
/// across a failed save.
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    async fn load(&self, id: Uuid) -> StoreResult<Option<T>>;
}
