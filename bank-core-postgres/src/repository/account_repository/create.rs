use async_trait::async_trait;
use sqlx::Postgres;
use tracing::debug;

use bank_core_db::models::account::AccountModel;
use bank_core_db::repository::{Create, StoreResult};

use super::repo_impl::AccountRepositoryImpl;

#[async_trait]
impl Create<Postgres, AccountModel> for AccountRepositoryImpl {
    async fn create(&self, item: AccountModel) -> StoreResult<AccountModel> {
        sqlx::query(
            r#"
            INSERT INTO account (
                id, owner_id, account_number, account_type,
                balance, maturity_date, transactions, version, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id)
        .bind(item.owner_id)
        .bind(item.account_number.as_str())
        .bind(item.account_type.to_string())
        .bind(item.balance)
        .bind(item.maturity_date)
        .bind(&item.transactions)
        .bind(item.version)
        .bind(item.created_at)
        .execute(&*self.pool)
        .await?;

        debug!(account_id = %item.id, account_type = %item.account_type, "account row inserted");
        Ok(item)
    }
}
