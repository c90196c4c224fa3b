//! Conexión a PostgreSQL

use anyhow::Result;
use sqlx::PgPool;

use crate::config::database::DatabaseConfig;

/// Pool de conexiones con las migraciones aplicadas
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = config.create_pool().await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Conectar usando DATABASE_URL del entorno
    pub async fn new_default() -> Result<Self> {
        Self::new(&DatabaseConfig::default()).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
