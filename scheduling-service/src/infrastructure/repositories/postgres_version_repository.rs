use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainError, DomainResult, VersionStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Assignment, Version};
use crate::domain::repositories::VersionRepository;

pub struct PostgresVersionRepository {
    pool: PgPool,
}

impl PostgresVersionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_version(&self, version: i64) -> DomainResult<Option<Version>> {
        sqlx::query_as::<_, Version>(
            r#"
            SELECT number, date_range_start, date_range_end, created_at, status, base_version, notes
            FROM version_meta
            WHERE number = $1
            "#,
        )
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl VersionRepository for PostgresVersionRepository {
    async fn allocate_version(
        &self,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        base_version: Option<i64>,
        notes: Option<String>,
    ) -> DomainResult<Version> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let next: (i64,) = sqlx::query_as("SELECT COALESCE(MAX(number), 0) + 1 FROM version_meta FOR UPDATE")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let version = sqlx::query_as::<_, Version>(
            r#"
            INSERT INTO version_meta (number, date_range_start, date_range_end, status, base_version, notes)
            VALUES ($1, $2, $3, 'DRAFT', $4, $5)
            RETURNING number, date_range_start, date_range_end, created_at, status, base_version, notes
            "#,
        )
        .bind(next.0)
        .bind(horizon_start)
        .bind(horizon_end)
        .bind(base_version)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        tx.commit().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(version)
    }

    async fn persist_assignments(&self, version: i64, assignments: Vec<Assignment>) -> DomainResult<()> {
        let current = self
            .fetch_version(version)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;
        if current.status != VersionStatus::Draft {
            return Err(DomainError::InvalidStatusTransition {
                from: format!("{:?}", current.status),
                to: "assignments rewritten".to_string(),
            });
        }

        let mut tx = self.pool.begin().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM assignment WHERE version = $1")
            .bind(version)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        for assignment in &assignments {
            sqlx::query(
                r#"
                INSERT INTO assignment (
                    id, version, employee_id, shift_template_id, date,
                    start_time, end_time, break_minutes, status, availability_category_at_assignment
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(assignment.id)
            .bind(assignment.version)
            .bind(assignment.employee_id)
            .bind(assignment.shift_template_id)
            .bind(assignment.date)
            .bind(assignment.start_time)
            .bind(assignment.end_time)
            .bind(assignment.break_minutes)
            .bind(assignment.status)
            .bind(assignment.availability_category_at_assignment)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        tx.commit().await.map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    async fn set_notes(&self, version: i64, notes: Option<String>) -> DomainResult<Version> {
        let updated = sqlx::query_as::<_, Version>(
            r#"
            UPDATE version_meta
            SET notes = $1
            WHERE number = $2
            RETURNING number, date_range_start, date_range_end, created_at, status, base_version, notes
            "#,
        )
        .bind(notes)
        .bind(version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?
        .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;

        Ok(updated)
    }

    async fn get_version(&self, version: i64) -> DomainResult<Option<Version>> {
        self.fetch_version(version).await
    }

    async fn list_versions(&self, horizon_start: Option<NaiveDate>, horizon_end: Option<NaiveDate>) -> DomainResult<Vec<Version>> {
        let versions = sqlx::query_as::<_, Version>(
            r#"
            SELECT number, date_range_start, date_range_end, created_at, status, base_version, notes
            FROM version_meta
            WHERE ($1::DATE IS NULL OR date_range_end >= $1)
              AND ($2::DATE IS NULL OR date_range_start <= $2)
            ORDER BY number DESC
            "#,
        )
        .bind(horizon_start)
        .bind(horizon_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(versions)
    }

    async fn list_assignments(&self, version: i64) -> DomainResult<Vec<Assignment>> {
        let assignments = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT id, version, employee_id, shift_template_id, date,
                   start_time, end_time, break_minutes, status, availability_category_at_assignment
            FROM assignment
            WHERE version = $1
            ORDER BY date, employee_id
            "#,
        )
        .bind(version)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(assignments)
    }

    async fn set_status(&self, version: i64, next: VersionStatus) -> DomainResult<Version> {
        let current = self
            .fetch_version(version)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;

        if !current.status.can_transition_to(next) {
            return Err(DomainError::InvalidStatusTransition {
                from: format!("{:?}", current.status),
                to: format!("{:?}", next),
            });
        }

        let updated = sqlx::query_as::<_, Version>(
            r#"
            UPDATE version_meta
            SET status = $1
            WHERE number = $2
            RETURNING number, date_range_start, date_range_end, created_at, status, base_version, notes
            "#,
        )
        .bind(next)
        .bind(version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if next == VersionStatus::Published || next == VersionStatus::Archived {
            sqlx::query("UPDATE assignment SET status = $1 WHERE version = $2")
                .bind(next)
                .bind(version)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        }

        Ok(updated)
    }

    async fn duplicate(&self, source: i64, notes: Option<String>) -> DomainResult<Version> {
        let source_version = self
            .fetch_version(source)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("version {source} not found")))?;

        let new_version = self
            .allocate_version(source_version.date_range_start, source_version.date_range_end, Some(source), notes)
            .await?;

        let source_assignments = self.list_assignments(source).await?;
        let duplicated: Vec<Assignment> = source_assignments
            .into_iter()
            .map(|mut a| {
                a.id = Uuid::new_v4();
                a.version = new_version.number;
                a.status = VersionStatus::Draft;
                a
            })
            .collect();

        self.persist_assignments(new_version.number, duplicated).await?;
        Ok(new_version)
    }

    async fn delete(&self, version: i64, force: bool) -> DomainResult<()> {
        let current = self
            .fetch_version(version)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("version {version} not found")))?;

        if current.status == VersionStatus::Published && !force {
            return Err(DomainError::InvalidStatusTransition {
                from: "PUBLISHED".to_string(),
                to: "DELETED".to_string(),
            });
        }

        sqlx::query("DELETE FROM version_meta WHERE number = $1")
            .bind(version)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn list_overlapping(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<Vec<Version>> {
        let versions = sqlx::query_as::<_, Version>(
            r#"
            SELECT number, date_range_start, date_range_end, created_at, status, base_version, notes
            FROM version_meta
            WHERE date_range_start <= $2 AND date_range_end >= $1
              AND status != 'ARCHIVED'
            "#,
        )
        .bind(horizon_start)
        .bind(horizon_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(versions)
    }
}
