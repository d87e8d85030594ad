use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{CreateShiftTemplateRequest, ShiftTemplate, UpdateShiftTemplateRequest};
use crate::domain::repositories::ShiftTemplateRepository;

pub struct PostgresShiftTemplateRepository {
    pool: PgPool,
}

impl PostgresShiftTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftTemplateRepository for PostgresShiftTemplateRepository {
    async fn create(&self, request: CreateShiftTemplateRequest) -> DomainResult<ShiftTemplate> {
        let active_days: Vec<i16> = request
            .active_days
            .normalize()
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?
            .into_iter()
            .map(i16::from)
            .collect();

        let template = sqlx::query_as::<_, ShiftTemplate>(
            r#"
            INSERT INTO shift_templates (name, start_time, end_time, shift_type, active_days)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, start_time, end_time, shift_type, active_days, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(&request.shift_type)
        .bind(&active_days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(template)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ShiftTemplate>> {
        let template = sqlx::query_as::<_, ShiftTemplate>(
            r#"
            SELECT id, name, start_time, end_time, shift_type, active_days, created_at, updated_at
            FROM shift_templates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(template)
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<ShiftTemplate>, u64)> {
        let offset = (page.saturating_sub(1)) * page_size;

        let templates = sqlx::query_as::<_, ShiftTemplate>(
            r#"
            SELECT id, name, start_time, end_time, shift_type, active_days, created_at, updated_at
            FROM shift_templates
            ORDER BY start_time
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shift_templates")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((templates, total.0 as u64))
    }

    async fn list_all(&self) -> DomainResult<Vec<ShiftTemplate>> {
        let templates = sqlx::query_as::<_, ShiftTemplate>(
            r#"
            SELECT id, name, start_time, end_time, shift_type, active_days, created_at, updated_at
            FROM shift_templates
            ORDER BY start_time
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(templates)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateShiftTemplateRequest,
    ) -> DomainResult<ShiftTemplate> {
        let current = self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("ShiftTemplate with id {} not found", id))
        })?;

        let active_days = match request.active_days {
            Some(wire) => wire
                .normalize()
                .map_err(|e| DomainError::InvalidInput(e.to_string()))?
                .into_iter()
                .map(i16::from)
                .collect(),
            None => current.active_days,
        };

        let template = sqlx::query_as::<_, ShiftTemplate>(
            r#"
            UPDATE shift_templates
            SET name = $1, start_time = $2, end_time = $3, shift_type = $4, active_days = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING id, name, start_time, end_time, shift_type, active_days, created_at, updated_at
            "#,
        )
        .bind(request.name.unwrap_or(current.name))
        .bind(request.start_time.unwrap_or(current.start_time))
        .bind(request.end_time.unwrap_or(current.end_time))
        .bind(request.shift_type.unwrap_or(current.shift_type))
        .bind(&active_days)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(template)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM shift_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "ShiftTemplate with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
