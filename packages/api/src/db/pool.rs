//! Database connection pool using OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database pool is not initialized")]
    Uninitialized,
    #[error(transparent)]
    Connect(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect, run migrations, and keep the pool for the rest of the process.
pub async fn init_pool(database_url: &str) -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(|| async {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database ready");
        Ok::<_, DbError>(pool)
    })
    .await
}

pub fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get().ok_or(DbError::Uninitialized)
}
