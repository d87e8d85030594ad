use async_trait::async_trait;
use shared::{DomainError, DomainResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::domain::repositories::EmployeeRepository;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, request: CreateEmployeeRequest) -> DomainResult<Employee> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, "group", contracted_hours, is_keyholder, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, "group", contracted_hours, is_keyholder, is_active, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(request.group)
        .bind(request.contracted_hours)
        .bind(request.is_keyholder)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, "group", contracted_hours, is_keyholder, is_active, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Employee>, u64)> {
        let offset = (page.saturating_sub(1)) * page_size;

        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, "group", contracted_hours, is_keyholder, is_active, created_at, updated_at
            FROM employees
            ORDER BY name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok((employees, total.0 as u64))
    }

    async fn list_active(&self) -> DomainResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, "group", contracted_hours, is_keyholder, is_active, created_at, updated_at
            FROM employees
            WHERE is_active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employees)
    }

    async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> DomainResult<Employee> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Employee with id {} not found", id)))?;

        let employee = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $1, "group" = $2, contracted_hours = $3, is_keyholder = $4, is_active = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING id, name, "group", contracted_hours, is_keyholder, is_active, created_at, updated_at
            "#,
        )
        .bind(request.name.unwrap_or(current.name))
        .bind(request.group.unwrap_or(current.group))
        .bind(request.contracted_hours.unwrap_or(current.contracted_hours))
        .bind(request.is_keyholder.unwrap_or(current.is_keyholder))
        .bind(request.is_active.unwrap_or(current.is_active))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(employee)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Employee with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
