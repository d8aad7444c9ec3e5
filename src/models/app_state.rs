use std::{sync::Arc, time::Duration};

use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

use crate::{config::app_config::DatabaseConfig, models::error::ServerError};

#[derive(Clone)]
pub struct AppState {
    pool: Pool<Postgres>,
}

impl AppState {
    pub async fn from_config(config: &DatabaseConfig) -> Result<Arc<Self>, ServerError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: Pool<Postgres>) -> Arc<Self> {
        Arc::new(Self { pool })
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
