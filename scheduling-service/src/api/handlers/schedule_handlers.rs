use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError};

use crate::api::requests::{GenerateScheduleResponse, GenerateScheduleRequest, ListAssignmentsQuery};
use crate::api::state::AppState;
use crate::domain::generator::{CancellationToken, GenerationOptions};

/// Run one generation pass over a horizon and persist the result under a
/// freshly allocated version.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/generate",
    request_body = GenerateScheduleRequest,
    responses(
        (status = 200, description = "Generation run completed", body = ApiResponse<GenerateScheduleResponse>),
        (status = 409, description = "Another run over an overlapping horizon is in flight"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn generate_schedule(
    State(state): State<AppState>,
    Json(request): Json<GenerateScheduleRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if request.end_date < request.start_date {
        return Err((StatusCode::BAD_REQUEST, "end_date must not precede start_date".to_string()));
    }

    let guard = state
        .generation_lock
        .acquire(request.start_date, request.end_date)
        .await
        .map_err(|e| match e {
            DomainError::ConcurrentGeneration => (StatusCode::CONFLICT, e.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    let options = GenerationOptions {
        create_empty_schedules: request.create_empty_schedules,
        base_version: request.base_version,
        notes: request.notes,
    };

    let result = state
        .generator
        .generate(request.start_date, request.end_date, options, CancellationToken::new())
        .await;

    drop(guard);

    if !result.errors.is_empty() {
        return Ok((
            StatusCode::OK,
            Json(ApiResponse::success(
                "generation run failed",
                GenerateScheduleResponse::from(result),
            )),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "generation run completed",
            GenerateScheduleResponse::from(result),
        )),
    ))
}

/// List the assignments of a previously generated version.
#[utoipa::path(
    get,
    path = "/api/v1/schedules",
    params(ListAssignmentsQuery),
    responses(
        (status = 200, description = "Assignments for the version", body = ApiResponse<crate::domain::entities::Assignment>),
        (status = 404, description = "Version not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "schedules"
)]
pub async fn list_schedule_assignments(
    State(state): State<AppState>,
    Query(query): Query<ListAssignmentsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .version_repository
        .get_version(query.version)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, format!("version {} not found", query.version)))?;

    let assignments = state
        .version_repository
        .list_assignments(query.version)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let total = assignments.len() as u64;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_total("assignments retrieved successfully", assignments, total)),
    ))
}
