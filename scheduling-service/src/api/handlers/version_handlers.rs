use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError};

use crate::api::requests::{AllocateVersionRequest, DeleteVersionQuery, DuplicateVersionRequest, SetNotesRequest, SetStatusRequest};
use crate::api::state::AppState;
use crate::domain::entities::Version;

fn map_domain_error(error: DomainError) -> (StatusCode, String) {
    match error {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, error.to_string()),
        DomainError::InvalidInput(_) | DomainError::InvalidStatusTransition { .. } => {
            (StatusCode::BAD_REQUEST, error.to_string())
        }
        DomainError::ConcurrentGeneration => (StatusCode::CONFLICT, error.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
    }
}

/// Allocate a new DRAFT version over a horizon without running generation.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/version",
    request_body = AllocateVersionRequest,
    responses(
        (status = 201, description = "Version allocated", body = ApiResponse<Version>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "versions"
)]
pub async fn allocate_version(
    State(state): State<AppState>,
    Json(request): Json<AllocateVersionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if request.end_date < request.start_date {
        return Err((StatusCode::BAD_REQUEST, "end_date must not precede start_date".to_string()));
    }

    let version = state
        .version_repository
        .allocate_version(request.start_date, request.end_date, request.base_version, request.notes)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success("version allocated", version))))
}

/// Transition a version's lifecycle status.
#[utoipa::path(
    put,
    path = "/api/v1/schedules/versions/{v}/status",
    params(("v" = i64, Path, description = "Version number")),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<Version>),
        (status = 400, description = "Illegal status transition"),
        (status = 404, description = "Version not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "versions"
)]
pub async fn set_version_status(
    State(state): State<AppState>,
    Path(version): Path<i64>,
    Json(request): Json<SetStatusRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let updated = state
        .version_repository
        .set_status(version, request.status)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success("version status updated", updated))))
}

/// Update a version's free-text notes. Unlike assignment generation, this is
/// allowed regardless of the version's current status.
#[utoipa::path(
    put,
    path = "/api/v1/schedules/versions/{v}/notes",
    params(("v" = i64, Path, description = "Version number")),
    request_body = SetNotesRequest,
    responses(
        (status = 200, description = "Notes updated", body = ApiResponse<Version>),
        (status = 404, description = "Version not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "versions"
)]
pub async fn set_version_notes(
    State(state): State<AppState>,
    Path(version): Path<i64>,
    Json(request): Json<SetNotesRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let updated = state
        .version_repository
        .set_notes(version, request.notes)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::OK, Json(ApiResponse::success("version notes updated", updated))))
}

/// Duplicate a version's assignments under a freshly allocated DRAFT version.
#[utoipa::path(
    post,
    path = "/api/v1/schedules/version/duplicate",
    request_body = DuplicateVersionRequest,
    responses(
        (status = 201, description = "Version duplicated", body = ApiResponse<Version>),
        (status = 404, description = "Source version not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "versions"
)]
pub async fn duplicate_version(
    State(state): State<AppState>,
    Json(request): Json<DuplicateVersionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let duplicated = state
        .version_repository
        .duplicate(request.source_version, request.notes)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success("version duplicated", duplicated))))
}

/// Delete a version and its assignments. Refused for a PUBLISHED version
/// unless `force` is set.
#[utoipa::path(
    delete,
    path = "/api/v1/schedules/versions/{v}",
    params(
        ("v" = i64, Path, description = "Version number"),
        DeleteVersionQuery,
    ),
    responses(
        (status = 204, description = "Version deleted"),
        (status = 400, description = "Refused: version is published"),
        (status = 404, description = "Version not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "versions"
)]
pub async fn delete_version(
    State(state): State<AppState>,
    Path(version): Path<i64>,
    Query(query): Query<DeleteVersionQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .version_repository
        .delete(version, query.force)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
