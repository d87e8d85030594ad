use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{ApiResponse, DomainError, PaginationParams};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::entities::{CoverageResponse, CreateCoverageRequest, UpdateCoverageRequest};

/// Create a new coverage requirement
#[utoipa::path(
    post,
    path = "/api/v1/coverage",
    request_body = CreateCoverageRequest,
    responses(
        (status = 201, description = "Coverage requirement created", body = ApiResponse<CoverageResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "coverage"
)]
pub async fn create_coverage(
    State(state): State<AppState>,
    Json(request): Json<CreateCoverageRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let coverage = state
        .coverage_repo
        .create(request)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Coverage requirement created successfully",
            CoverageResponse::from(coverage),
        )),
    ))
}

/// Get a coverage requirement by ID
#[utoipa::path(
    get,
    path = "/api/v1/coverage/{id}",
    params(("id" = Uuid, Path, description = "Coverage requirement ID")),
    responses(
        (status = 200, description = "Coverage requirement found", body = ApiResponse<CoverageResponse>),
        (status = 404, description = "Coverage requirement not found")
    ),
    tag = "coverage"
)]
pub async fn get_coverage_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let coverage = state
        .coverage_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Coverage requirement not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Coverage requirement retrieved successfully",
            CoverageResponse::from(coverage),
        )),
    ))
}

/// List coverage requirements with pagination
#[utoipa::path(
    get,
    path = "/api/v1/coverage",
    params(PaginationParams),
    responses(
        (status = 200, description = "Coverage requirement list", body = ApiResponse<Vec<CoverageResponse>>)
    ),
    tag = "coverage"
)]
pub async fn list_coverage(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (rows, total) = state
        .coverage_repo
        .list(params.page, params.page_size)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<CoverageResponse> = rows.into_iter().map(CoverageResponse::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_total(
            "Coverage requirement list retrieved successfully",
            serialized,
            total,
        )),
    ))
}

/// Update a coverage requirement by ID
#[utoipa::path(
    put,
    path = "/api/v1/coverage/{id}",
    params(("id" = Uuid, Path, description = "Coverage requirement ID")),
    request_body = UpdateCoverageRequest,
    responses(
        (status = 200, description = "Coverage requirement updated", body = ApiResponse<CoverageResponse>),
        (status = 404, description = "Coverage requirement not found")
    ),
    tag = "coverage"
)]
pub async fn update_coverage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCoverageRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let coverage = state.coverage_repo.update(id, request).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Coverage requirement updated successfully",
            CoverageResponse::from(coverage),
        )),
    ))
}

/// Delete a coverage requirement by ID
#[utoipa::path(
    delete,
    path = "/api/v1/coverage/{id}",
    params(("id" = Uuid, Path, description = "Coverage requirement ID")),
    responses(
        (status = 204, description = "Coverage requirement deleted"),
        (status = 404, description = "Coverage requirement not found")
    ),
    tag = "coverage"
)]
pub async fn delete_coverage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state.coverage_repo.delete(id).await.map_err(|e| match e {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    })?;

    Ok(StatusCode::NO_CONTENT)
}
