use sqlx::PgPool;
use std::env;

use crate::db;

/// Shared application state. The database pool is the only resource shared
/// across in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|e| anyhow::anyhow!("DATABASE_URL must be set: {}", e))?;
        let db_pool = db::create_db_pool(&database_url).await?;

        Ok(AppState { db_pool })
    }

    /// Builds state around an existing pool. Used by tests.
    pub fn with_pool(db_pool: PgPool) -> Self {
        AppState { db_pool }
    }
}
