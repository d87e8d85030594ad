use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use redis::AsyncCommands;
use shared::{ApiResponse, DomainError, PaginationParams};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::entities::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest};

const EMPLOYEE_CACHE_TTL: u64 = 300;

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created successfully", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let employee = state
        .employee_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del("employees:list:*").await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Employee created successfully",
            EmployeeResponse::from(employee),
        )),
    ))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = ApiResponse<EmployeeResponse>),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "employees"
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cache_key = format!("employees:id:{}", id);
    let mut redis_conn = state.redis_pool.clone();

    let cached: Result<String, _> = redis_conn.get(&cache_key).await;
    if let Ok(cached_data) = cached {
        if let Ok(response) = serde_json::from_str::<ApiResponse<EmployeeResponse>>(&cached_data) {
            return Ok((StatusCode::OK, Json(response)));
        }
    }

    let employee = state
        .employee_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Employee not found".to_string()))?;

    let response = ApiResponse::success("Employee retrieved successfully", EmployeeResponse::from(employee));

    let _: Result<(), _> = redis_conn
        .set_ex(
            &cache_key,
            serde_json::to_string(&response).unwrap(),
            EMPLOYEE_CACHE_TTL,
        )
        .await;

    Ok((StatusCode::OK, Json(response)))
}

/// List all employees with pagination
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(PaginationParams),
    responses(
        (status = 200, description = "Employee list", body = ApiResponse<Vec<EmployeeResponse>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cache_key = format!("employees:list:{}:{}", params.page, params.page_size);
    let mut redis_conn = state.redis_pool.clone();

    let cached: Result<String, _> = redis_conn.get(&cache_key).await;
    if let Ok(cached_data) = cached {
        if let Ok(response) =
            serde_json::from_str::<ApiResponse<Vec<EmployeeResponse>>>(&cached_data)
        {
            return Ok((StatusCode::OK, Json(response)));
        }
    }

    let (employees, total) = state
        .employee_repo
        .list(params.page, params.page_size)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<EmployeeResponse> = employees.into_iter().map(EmployeeResponse::from).collect();
    let response = ApiResponse::with_total("Employee list retrieved successfully", serialized, total);

    let _: Result<(), _> = redis_conn
        .set_ex(
            &cache_key,
            serde_json::to_string(&response).unwrap(),
            EMPLOYEE_CACHE_TTL,
        )
        .await;

    Ok((StatusCode::OK, Json(response)))
}

/// Update employee by ID
#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated successfully", body = ApiResponse<EmployeeResponse>),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let employee = state.employee_repo.update(id, request).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del(format!("employees:id:{}", id)).await;
    let _: Result<(), _> = redis_conn.del("employees:list:*").await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Employee updated successfully",
            EmployeeResponse::from(employee),
        )),
    ))
}

/// Delete employee by ID
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Employee deleted successfully"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.employee_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del(format!("employees:id:{}", id)).await;
    let _: Result<(), _> = redis_conn.del("employees:list:*").await;

    Ok(StatusCode::NO_CONTENT)
}
