use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Absence, CreateAbsenceRequest, UpdateAbsenceRequest};
use crate::domain::repositories::AbsenceRepository;

pub struct PostgresAbsenceRepository {
    pool: PgPool,
}

impl PostgresAbsenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AbsenceRepository for PostgresAbsenceRepository {
    async fn create(&self, request: CreateAbsenceRequest) -> DomainResult<Absence> {
        let absence = sqlx::query_as::<_, Absence>(
            r#"
            INSERT INTO absences (employee_id, start_date, end_date, reason)
            VALUES ($1, $2, $3, $4)
            RETURNING id, employee_id, start_date, end_date, reason, created_at, updated_at
            "#,
        )
        .bind(request.employee_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(&request.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(absence)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Absence>> {
        let absence = sqlx::query_as::<_, Absence>(
            r#"
            SELECT id, employee_id, start_date, end_date, reason, created_at, updated_at
            FROM absences
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(absence)
    }

    async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Absence>> {
        let absences = sqlx::query_as::<_, Absence>(
            r#"
            SELECT id, employee_id, start_date, end_date, reason, created_at, updated_at
            FROM absences
            WHERE employee_id = $1
            ORDER BY start_date
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(absences)
    }

    async fn list_intersecting(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<Vec<Absence>> {
        let absences = sqlx::query_as::<_, Absence>(
            r#"
            SELECT id, employee_id, start_date, end_date, reason, created_at, updated_at
            FROM absences
            WHERE start_date <= $2 AND end_date >= $1
            ORDER BY start_date
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(absences)
    }

    async fn update(&self, id: Uuid, request: UpdateAbsenceRequest) -> DomainResult<Absence> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Absence with id {} not found", id)))?;

        let absence = sqlx::query_as::<_, Absence>(
            r#"
            UPDATE absences
            SET start_date = $1, end_date = $2, reason = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, employee_id, start_date, end_date, reason, created_at, updated_at
            "#,
        )
        .bind(request.start_date.unwrap_or(current.start_date))
        .bind(request.end_date.unwrap_or(current.end_date))
        .bind(request.reason.unwrap_or(current.reason))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(absence)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM absences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Absence with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
