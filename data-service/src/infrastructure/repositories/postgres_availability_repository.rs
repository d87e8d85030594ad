use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Availability, CreateAvailabilityRequest, UpdateAvailabilityRequest};
use crate::domain::repositories::AvailabilityRepository;

pub struct PostgresAvailabilityRepository {
    pool: PgPool,
}

impl PostgresAvailabilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepository {
    async fn create(&self, request: CreateAvailabilityRequest) -> DomainResult<Availability> {
        let record = sqlx::query_as::<_, Availability>(
            r#"
            INSERT INTO availabilities (employee_id, day_of_week, hour, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, employee_id, day_of_week, hour, category, created_at, updated_at
            "#,
        )
        .bind(request.employee_id)
        .bind(request.day_of_week)
        .bind(request.hour)
        .bind(request.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Availability>> {
        let record = sqlx::query_as::<_, Availability>(
            r#"
            SELECT id, employee_id, day_of_week, hour, category, created_at, updated_at
            FROM availabilities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(record)
    }

    async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Availability>> {
        let records = sqlx::query_as::<_, Availability>(
            r#"
            SELECT id, employee_id, day_of_week, hour, category, created_at, updated_at
            FROM availabilities
            WHERE employee_id = $1
            ORDER BY day_of_week, hour
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(records)
    }

    async fn list_relevant_to_horizon(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> DomainResult<Vec<Availability>> {
        // Weekly patterns recur regardless of calendar date, so every record
        // is relevant to every horizon.
        let records = sqlx::query_as::<_, Availability>(
            r#"
            SELECT id, employee_id, day_of_week, hour, category, created_at, updated_at
            FROM availabilities
            ORDER BY employee_id, day_of_week, hour
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(records)
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateAvailabilityRequest,
    ) -> DomainResult<Availability> {
        let record = sqlx::query_as::<_, Availability>(
            r#"
            UPDATE availabilities
            SET category = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, employee_id, day_of_week, hour, category, created_at, updated_at
            "#,
        )
        .bind(request.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("Availability with id {} not found", id)))?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM availabilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Availability with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
