use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::ApiResponse;
use utoipa::IntoParams;

use crate::api::state::AppState;
use crate::domain::entities::SnapshotResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SnapshotQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Fetch the resource snapshot for a scheduling horizon
#[utoipa::path(
    get,
    path = "/api/v1/snapshot",
    params(SnapshotQuery),
    responses(
        (status = 200, description = "Resource snapshot", body = ApiResponse<SnapshotResponse>),
        (status = 400, description = "Invalid horizon"),
        (status = 500, description = "Internal server error")
    ),
    tag = "snapshot"
)]
pub async fn get_snapshot(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<SnapshotQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if query.end < query.start {
        return Err((
            StatusCode::BAD_REQUEST,
            "end date must not precede start date".to_string(),
        ));
    }

    let snapshot = state
        .snapshot_service
        .build(query.start, query.end)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Snapshot retrieved successfully", snapshot)),
    ))
}
