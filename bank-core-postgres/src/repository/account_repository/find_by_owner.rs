use async_trait::async_trait;
use sqlx::Postgres;
use uuid::Uuid;

use bank_core_api::domain::AccountVariant;
use bank_core_db::models::account::AccountModel;
use bank_core_db::repository::{FindByOwner, StoreError, StoreResult};

use crate::utils::TryFromRow;

use super::repo_impl::AccountRepositoryImpl;

#[async_trait]
impl FindByOwner<Postgres> for AccountRepositoryImpl {
    async fn find_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<AccountModel>> {
        let rows = sqlx::query("SELECT * FROM account WHERE owner_id = $1 ORDER BY created_at")
            .bind(owner_id)
            .fetch_all(&*self.pool)
            .await?;

        let mut accounts = Vec::with_capacity(rows.len());
        for row in rows {
            accounts.push(AccountModel::try_from_row(&row).map_err(StoreError::Backend)?);
        }
        Ok(accounts)
    }

    async fn find_by_owner_and_type(
        &self,
        owner_id: Uuid,
        account_type: AccountVariant,
    ) -> StoreResult<Option<AccountModel>> {
        let row = sqlx::query("SELECT * FROM account WHERE owner_id = $1 AND account_type = $2")
            .bind(owner_id)
            .bind(account_type.to_string())
            .fetch_optional(&*self.pool)
            .await?;

        row.map(|r| AccountModel::try_from_row(&r))
            .transpose()
            .map_err(StoreError::Backend)
    }
}
