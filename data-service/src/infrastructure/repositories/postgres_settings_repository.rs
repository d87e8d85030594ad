use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{GenerationSettings, SettingsRow};
use crate::domain::repositories::SettingsRepository;

/// Settings are a singleton row, keyed by this fixed id.
const SETTINGS_ID: Uuid = Uuid::nil();

pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn get(&self) -> DomainResult<GenerationSettings> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"SELECT id, settings, updated_at FROM generation_settings WHERE id = $1"#,
        )
        .bind(SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => Ok(row.into_settings()),
            None => self.update(GenerationSettings::default()).await,
        }
    }

    async fn update(&self, settings: GenerationSettings) -> DomainResult<GenerationSettings> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO generation_settings (id, settings, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO UPDATE SET settings = EXCLUDED.settings, updated_at = NOW()
            RETURNING id, settings, updated_at
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(sqlx::types::Json(settings))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(row.into_settings())
    }
}
