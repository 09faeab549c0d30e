pub mod companies;
pub mod invoices;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Creates the connection pool for the BizTime database.
pub async fn create_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url)
        .await?;

    tracing::info!("database pool created");

    Ok(pool)
}
