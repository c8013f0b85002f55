use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;
use crate::repository::error::StoreResult;

/// Generic store trait for inserting a newly created entity
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    async fn create(&self, item: T) -> StoreResult<T>;
}
