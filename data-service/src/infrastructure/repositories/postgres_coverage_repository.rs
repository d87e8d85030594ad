use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{CoverageRequirement, CreateCoverageRequest, UpdateCoverageRequest};
use crate::domain::repositories::CoverageRepository;

pub struct PostgresCoverageRepository {
    pool: PgPool,
}

impl PostgresCoverageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = r#"id, day_index, start_time, end_time, min_employees, max_employees,
            allowed_groups, requires_keyholder, keyholder_before_minutes,
            keyholder_after_minutes, created_at, updated_at"#;

#[async_trait]
impl CoverageRepository for PostgresCoverageRepository {
    async fn create(&self, request: CreateCoverageRequest) -> DomainResult<CoverageRequirement> {
        let query = format!(
            r#"
            INSERT INTO coverage_requirements
                (day_index, start_time, end_time, min_employees, max_employees,
                 allowed_groups, requires_keyholder, keyholder_before_minutes, keyholder_after_minutes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        );

        let coverage = sqlx::query_as::<_, CoverageRequirement>(&query)
            .bind(request.day_index)
            .bind(request.start_time)
            .bind(request.end_time)
            .bind(request.min_employees)
            .bind(request.max_employees)
            .bind(&request.allowed_groups)
            .bind(request.requires_keyholder)
            .bind(request.keyholder_before_minutes)
            .bind(request.keyholder_after_minutes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(coverage)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CoverageRequirement>> {
        let query = format!("SELECT {COLUMNS} FROM coverage_requirements WHERE id = $1");

        let coverage = sqlx::query_as::<_, CoverageRequirement>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(coverage)
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<CoverageRequirement>, u64)> {
        let offset = (page.saturating_sub(1)) * page_size;
        let query =
            format!("SELECT {COLUMNS} FROM coverage_requirements ORDER BY day_index, start_time LIMIT $1 OFFSET $2");

        let rows = sqlx::query_as::<_, CoverageRequirement>(&query)
            .bind(page_size as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM coverage_requirements")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((rows, total.0 as u64))
    }

    async fn list_all(&self) -> DomainResult<Vec<CoverageRequirement>> {
        let query = format!("SELECT {COLUMNS} FROM coverage_requirements ORDER BY day_index, start_time");

        let rows = sqlx::query_as::<_, CoverageRequirement>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(rows)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateCoverageRequest,
    ) -> DomainResult<CoverageRequirement> {
        let current = self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("CoverageRequirement with id {} not found", id))
        })?;

        let query = format!(
            r#"
            UPDATE coverage_requirements
            SET day_index = $1, start_time = $2, end_time = $3, min_employees = $4, max_employees = $5,
                allowed_groups = $6, requires_keyholder = $7, keyholder_before_minutes = $8,
                keyholder_after_minutes = $9, updated_at = NOW()
            WHERE id = $10
            RETURNING {COLUMNS}
            "#
        );

        let coverage = sqlx::query_as::<_, CoverageRequirement>(&query)
            .bind(request.day_index.unwrap_or(current.day_index))
            .bind(request.start_time.unwrap_or(current.start_time))
            .bind(request.end_time.unwrap_or(current.end_time))
            .bind(request.min_employees.unwrap_or(current.min_employees))
            .bind(request.max_employees.unwrap_or(current.max_employees))
            .bind(request.allowed_groups.unwrap_or(current.allowed_groups))
            .bind(request.requires_keyholder.unwrap_or(current.requires_keyholder))
            .bind(request.keyholder_before_minutes.or(current.keyholder_before_minutes))
            .bind(request.keyholder_after_minutes.or(current.keyholder_after_minutes))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(coverage)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM coverage_requirements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "CoverageRequirement with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
