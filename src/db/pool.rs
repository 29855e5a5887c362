//! Async database connection pool.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use diesel_migrations::{EmbeddedMigrations, embed_migrations};

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// bb8 pools are reference counted, so cloning is cheap and structs holding
/// one can derive `Clone` without an extra `Arc`.
pub type AsyncDbPool = Pool<AsyncPgConnection>;

/// Migrations compiled into the binary, applied by `hvacdesk migrate` or on
/// startup when `database.auto_migrate` is set.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Builds the pool and opens `min_connections` up front.
///
/// ```ignore
/// let pool = establish_async_connection_pool(&settings.database).await?;
/// let mut conn = pool.get().await?;
/// ```
pub async fn establish_async_connection_pool(
    config: &DatabaseConfig,
) -> Result<AsyncDbPool, AppError> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.as_str());
    Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(Duration::from_secs(config.connection_timeout))
        .build(manager)
        .await
        .map_err(|e| AppError::ConnectionPool {
            source: anyhow::anyhow!("failed to build connection pool: {}", e),
        })
}

/// Pool that connects on first use. Lets routes be exercised without a
/// database; any handler that touches it fails with a pool error.
pub fn lazy_pool(database_url: &str) -> AsyncDbPool {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Pool::builder()
        .connection_timeout(Duration::from_millis(250))
        .build_unchecked(manager)
}
