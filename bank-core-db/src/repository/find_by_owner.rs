use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use bank_core_api::domain::AccountVariant;

use crate::models::account::AccountModel;
use crate::repository::error::StoreResult;

/// Owner-scoped account lookups.
///
/// `find_by_owner_and_type` backs the one-account-per-variant rule at
/// creation time; the store additionally enforces it with a unique index.
#[async_trait]
pub trait FindByOwner<DB: Database>: Send + Sync {
    async fn find_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<AccountModel>>;

    async fn find_by_owner_and_type(
        &self,
        owner_id: Uuid,
        account_type: AccountVariant,
    ) -> StoreResult<Option<AccountModel>>;
}
