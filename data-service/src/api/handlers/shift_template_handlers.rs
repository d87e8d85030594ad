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
use crate::domain::entities::{
    CreateShiftTemplateRequest, ShiftTemplateResponse, UpdateShiftTemplateRequest,
};

const SHIFT_TEMPLATE_CACHE_TTL: u64 = 300;

/// Create a new shift template
#[utoipa::path(
    post,
    path = "/api/v1/shift-templates",
    request_body = CreateShiftTemplateRequest,
    responses(
        (status = 201, description = "Shift template created", body = ApiResponse<ShiftTemplateResponse>),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "shift-templates"
)]
pub async fn create_shift_template(
    State(state): State<AppState>,
    Json(request): Json<CreateShiftTemplateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let template = state
        .shift_template_repo
        .create(request)
        .await
        .map_err(|e| match e {
            DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del("shift-templates:list:*").await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Shift template created successfully",
            ShiftTemplateResponse::from(template),
        )),
    ))
}

/// Get shift template by ID
#[utoipa::path(
    get,
    path = "/api/v1/shift-templates/{id}",
    params(("id" = Uuid, Path, description = "Shift template ID")),
    responses(
        (status = 200, description = "Shift template found", body = ApiResponse<ShiftTemplateResponse>),
        (status = 404, description = "Shift template not found")
    ),
    tag = "shift-templates"
)]
pub async fn get_shift_template_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let template = state
        .shift_template_repo
        .find_by_id(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or((StatusCode::NOT_FOUND, "Shift template not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Shift template retrieved successfully",
            ShiftTemplateResponse::from(template),
        )),
    ))
}

/// List all shift templates with pagination
#[utoipa::path(
    get,
    path = "/api/v1/shift-templates",
    params(PaginationParams),
    responses(
        (status = 200, description = "Shift template list", body = ApiResponse<Vec<ShiftTemplateResponse>>)
    ),
    tag = "shift-templates"
)]
pub async fn list_shift_templates(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cache_key = format!("shift-templates:list:{}:{}", params.page, params.page_size);
    let mut redis_conn = state.redis_pool.clone();

    let cached: Result<String, _> = redis_conn.get(&cache_key).await;
    if let Ok(cached_data) = cached {
        if let Ok(response) =
            serde_json::from_str::<ApiResponse<Vec<ShiftTemplateResponse>>>(&cached_data)
        {
            return Ok((StatusCode::OK, Json(response)));
        }
    }

    let (templates, total) = state
        .shift_template_repo
        .list(params.page, params.page_size)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let serialized: Vec<ShiftTemplateResponse> =
        templates.into_iter().map(ShiftTemplateResponse::from).collect();
    let response = ApiResponse::with_total("Shift template list retrieved successfully", serialized, total);

    let _: Result<(), _> = redis_conn
        .set_ex(
            &cache_key,
            serde_json::to_string(&response).unwrap(),
            SHIFT_TEMPLATE_CACHE_TTL,
        )
        .await;

    Ok((StatusCode::OK, Json(response)))
}

/// Update shift template by ID
#[utoipa::path(
    put,
    path = "/api/v1/shift-templates/{id}",
    params(("id" = Uuid, Path, description = "Shift template ID")),
    request_body = UpdateShiftTemplateRequest,
    responses(
        (status = 200, description = "Shift template updated", body = ApiResponse<ShiftTemplateResponse>),
        (status = 404, description = "Shift template not found")
    ),
    tag = "shift-templates"
)]
pub async fn update_shift_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateShiftTemplateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let template = state
        .shift_template_repo
        .update(id, request)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del("shift-templates:list:*").await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Shift template updated successfully",
            ShiftTemplateResponse::from(template),
        )),
    ))
}

/// Delete shift template by ID
#[utoipa::path(
    delete,
    path = "/api/v1/shift-templates/{id}",
    params(("id" = Uuid, Path, description = "Shift template ID")),
    responses(
        (status = 204, description = "Shift template deleted"),
        (status = 404, description = "Shift template not found")
    ),
    tag = "shift-templates"
)]
pub async fn delete_shift_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .shift_template_repo
        .delete(id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        })?;

    let mut redis_conn = state.redis_pool.clone();
    let _: Result<(), _> = redis_conn.del("shift-templates:list:*").await;

    Ok(StatusCode::NO_CONTENT)
}
