use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::entities::{AbsenceResponse, CreateAbsenceRequest, UpdateAbsenceRequest};

/// Create an absence record
#[utoipa::path(
    post,
    path = "/api/v1/absences",
    request_body = CreateAbsenceRequest,
    responses(
        (status = 201, description = "Absence created", body = ApiResponse<AbsenceResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "absences"
)]
pub async fn create_absence(
    State(state): State<AppState>,
    Json(request): Json<CreateAbsenceRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let absence = state
        .absence_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Absence created successfully",
            AbsenceResponse::from(absence),
        )),
    ))
}

/// List absences for an employee
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}/absences",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Absence list", body = ApiResponse<Vec<AbsenceResponse>>)
    ),
    tag = "absences"
)]
pub async fn list_absences_for_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let absences = state
        .absence_repo
        .list_by_employee(employee_id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<AbsenceResponse> = absences.into_iter().map(AbsenceResponse::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Absence list retrieved successfully", serialized)),
    ))
}

/// Update an absence record
#[utoipa::path(
    put,
    path = "/api/v1/absences/{id}",
    params(("id" = Uuid, Path, description = "Absence ID")),
    request_body = UpdateAbsenceRequest,
    responses(
        (status = 200, description = "Absence updated", body = ApiResponse<AbsenceResponse>),
        (status = 404, description = "Absence not found")
    ),
    tag = "absences"
)]
pub async fn update_absence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAbsenceRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let absence = state.absence_repo.update(id, request).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Absence updated successfully",
            AbsenceResponse::from(absence),
        )),
    ))
}

/// Delete an absence record
#[utoipa::path(
    delete,
    path = "/api/v1/absences/{id}",
    params(("id" = Uuid, Path, description = "Absence ID")),
    responses(
        (status = 204, description = "Absence deleted"),
        (status = 404, description = "Absence not found")
    ),
    tag = "absences"
)]
pub async fn delete_absence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.absence_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok(StatusCode::NO_CONTENT)
}
