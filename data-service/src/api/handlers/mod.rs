pub mod absence_handlers;
pub mod availability_handlers;
pub mod coverage_handlers;
pub mod employee_handlers;
pub mod settings_handlers;
pub mod shift_template_handlers;
pub mod snapshot_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
