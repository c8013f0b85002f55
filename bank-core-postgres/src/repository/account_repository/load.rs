use async_trait::async_trait;
use sqlx::Postgres;
use uuid::Uuid;

use bank_core_db::models::account::AccountModel;
use bank_core_db::repository::{Load, StoreError, StoreResult};

use crate::utils::TryFromRow;

use super::repo_impl::AccountRepositoryImpl;

#[async_trait]
impl Load<Postgres, AccountModel> for AccountRepositoryImpl {
    async fn load(&self, id: Uuid) -> StoreResult<Option<AccountModel>> {
        let row = sqlx::query("SELECT * FROM account WHERE id = $1")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        row.map(|r| AccountModel::try_from_row(&r))
            .transpose()
            .map_err(StoreError::Backend)
    }
}

#[cfg(test)]
#[serial_test::serial]
mod tests {
    use super::super::test_utils::create_test_account;
    use crate::test_helper::setup_test_context;
    use bank_core_api::domain::AccountVariant;
    use bank_core_db::repository::{Create, Load};
    use uuid::Uuid;

    #[tokio::test]
    #[ignore] // requires a live PostgreSQL instance
    async fn load_round_trips_the_stored_row() -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    {
        let ctx = setup_test_context().await?;
        let repo = ctx.account_repository();

        let account = create_test_account(AccountVariant::Savings);
        repo.create(account.clone()).await?;

        let loaded = repo.load(account.id).await?.expect("account should exist");
        assert_eq!(loaded.id, account.id);
        assert_eq!(loaded.balance, account.balance);
        assert_eq!(loaded.account_type, account.account_type);
        assert_eq!(loaded.transactions.0, account.transactions.0);
        assert_eq!(loaded.version, 1);

        Ok(())
    }

    #[tokio::test]
    #[ignore] // requires a live PostgreSQL instance
    async fn load_of_unknown_id_is_none() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repo = ctx.account_repository();

        assert!(repo.load(Uuid::new_v4()).await?.is_none());

        Ok(())
    }
}
