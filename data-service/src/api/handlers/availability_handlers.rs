use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::entities::{
    AvailabilityResponse, CreateAvailabilityRequest, UpdateAvailabilityRequest,
};

/// Create an availability record
#[utoipa::path(
    post,
    path = "/api/v1/availability",
    request_body = CreateAvailabilityRequest,
    responses(
        (status = 201, description = "Availability created", body = ApiResponse<AvailabilityResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "availability"
)]
pub async fn create_availability(
    State(state): State<AppState>,
    Json(request): Json<CreateAvailabilityRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let record = state
        .availability_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Availability created successfully",
            AvailabilityResponse::from(record),
        )),
    ))
}

/// List availability records for an employee
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}/availability",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Availability list", body = ApiResponse<Vec<AvailabilityResponse>>)
    ),
    tag = "availability"
)]
pub async fn list_availability_for_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let records = state
        .availability_repo
        .list_by_employee(employee_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<AvailabilityResponse> =
        records.into_iter().map(AvailabilityResponse::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Availability list retrieved successfully",
            serialized,
        )),
    ))
}

/// Update an availability record's category
#[utoipa::path(
    put,
    path = "/api/v1/availability/{id}",
    params(("id" = Uuid, Path, description = "Availability ID")),
    request_body = UpdateAvailabilityRequest,
    responses(
        (status = 200, description = "Availability updated", body = ApiResponse<AvailabilityResponse>),
        (status = 404, description = "Availability not found")
    ),
    tag = "availability"
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let record = state.availability_repo.update(id, request).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Availability updated successfully",
            AvailabilityResponse::from(record),
        )),
    ))
}

/// Delete an availability record
#[utoipa::path(
    delete,
    path = "/api/v1/availability/{id}",
    params(("id" = Uuid, Path, description = "Availability ID")),
    responses(
        (status = 204, description = "Availability deleted"),
        (status = 404, description = "Availability not found")
    ),
    tag = "availability"
)]
pub async fn delete_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.availability_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok(StatusCode::NO_CONTENT)
}
