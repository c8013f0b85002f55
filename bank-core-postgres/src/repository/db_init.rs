//! Database schema initialization.

use sqlx::PgPool;

/// Run the embedded migrations against the given pool.
///
/// Safe to call at every process start; already-applied migrations are
/// skipped.
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
