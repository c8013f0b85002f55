use async_trait::async_trait;
use sqlx::Postgres;
use tracing::debug;

use bank_core_db::models::account::AccountModel;
use bank_core_db::repository::{StoreError, StoreResult, Update};

use super::repo_impl::AccountRepositoryImpl;

#[async_trait]
impl Update<Postgres, AccountModel> for AccountRepositoryImpl {
    /// Compare-and-swap save: the write only lands if the row still carries
    /// the version the snapshot was loaded with. Zero affected rows means a
    /// concurrent writer got there first (or the row is gone) and the caller
    /// must re-read.
    async fn update(&self, mut item: AccountModel) -> StoreResult<AccountModel> {
        let result = sqlx::query(
            r#"
            UPDATE account
            SET balance = $1, transactions = $2, version = version + 1
            WHERE id = $3 AND version = $4
            "#,
        )
        .bind(item.balance)
        .bind(&item.transactions)
        .bind(item.id)
        .bind(item.version)
        .execute(&*self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict { id: item.id });
        }

        item.version += 1;
        debug!(account_id = %item.id, version = item.version, "account row updated");
        Ok(item)
    }
}
