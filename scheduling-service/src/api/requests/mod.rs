pub mod generation_response;

pub use generation_response::GenerateScheduleResponse;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::VersionStatus;
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/v1/schedules/generate`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateScheduleRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_version: Option<i64>,
    #[serde(default)]
    pub create_empty_schedules: bool,
    pub session_id: Option<String>,
    pub notes: Option<String>,
}

/// Query params of `GET /api/v1/schedules`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAssignmentsQuery {
    pub version: i64,
}

/// Body of `POST /api/v1/schedules/version`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AllocateVersionRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_version: Option<i64>,
    pub notes: Option<String>,
}

/// Body of `PUT /api/v1/schedules/versions/{v}/notes`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetNotesRequest {
    pub notes: Option<String>,
}

/// Body of `PUT /api/v1/schedules/versions/{v}/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    pub status: VersionStatus,
}

/// Body of `POST /api/v1/schedules/version/duplicate`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DuplicateVersionRequest {
    pub source_version: i64,
    pub notes: Option<String>,
}

/// Query params of `DELETE /api/v1/schedules/versions/{v}`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteVersionQuery {
    #[serde(default)]
    pub force: bool,
}
