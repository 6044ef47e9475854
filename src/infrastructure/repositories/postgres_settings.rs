// src/infrastructure/repositories/postgres_settings.rs
use super::map_sqlx;
use crate::application::{
    ApplicationResult, error::ApplicationError, ports::settings::SettingsStore,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Name/value options stored in the `options` table.
#[derive(Clone)]
pub struct PostgresSettingsStore {
    pool: PgPool,
}

impl PostgresSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for PostgresSettingsStore {
    async fn get_option(&self, name: &str) -> ApplicationResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT value FROM options WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| ApplicationError::from(map_sqlx(err)))
    }

    async fn update_option(&self, name: &str, value: &str) -> ApplicationResult<()> {
        sqlx::query(
            "INSERT INTO options (name, value) VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| ApplicationError::from(map_sqlx(err)))?;
        Ok(())
    }
}
