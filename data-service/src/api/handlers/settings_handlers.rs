use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::ApiResponse;

use crate::api::state::AppState;
use crate::domain::entities::{GenerationSettings, UpdateSettingsRequest};

/// Get the current generation settings
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    responses(
        (status = 200, description = "Generation settings", body = ApiResponse<GenerationSettings>),
        (status = 500, description = "Internal server error")
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let settings = state
        .settings_repo
        .get()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Settings retrieved successfully", settings)),
    ))
}

/// Update the generation settings
#[utoipa::path(
    put,
    path = "/api/v1/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Generation settings updated", body = ApiResponse<GenerationSettings>),
        (status = 500, description = "Internal server error")
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let current = state
        .settings_repo
        .get()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let updated = state
        .settings_repo
        .update(request.apply(current))
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Settings updated successfully", updated)),
    ))
}
