use std::error::Error;
use std::sync::Arc;

use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use bank_core_api::domain::{AccountVariant, TransactionEntry};
use bank_core_db::models::account::AccountModel;

use crate::utils::{get_heapless_string, TryFromRow};

/// Postgres-backed account store.
///
/// Thin by design: each operation is a single statement, and the writer
/// serialization the core relies on comes from the version compare-and-swap
/// in the update path rather than any locking here.
pub struct AccountRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AccountRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPool::connect(database_url).await?;
        crate::repository::db_init::init_database(&pool).await?;
        Ok(Self::new(Arc::new(pool)))
    }
}

impl TryFromRow<PgRow> for AccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let account_type: String = row.try_get("account_type")?;
        let account_type = account_type.parse::<AccountVariant>()?;

        let transactions: Json<Vec<TransactionEntry>> = row.try_get("transactions")?;

        Ok(AccountModel {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            account_number: get_heapless_string(row, "account_number")?,
            account_type,
            balance: row.try_get("balance")?,
            maturity_date: row.try_get("maturity_date")?,
            transactions,
            version: row.try_get("version")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
