use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::VersionStatus;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A schedule version. The version number itself is the identity — there is
/// no separate UUID, mirroring the monotone-integer contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Version {
    pub number: i64,
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub status: VersionStatus,
    pub base_version: Option<i64>,
    pub notes: Option<String>,
}

impl Version {
    pub fn overlaps_horizon(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date_range_start <= end && start <= self.date_range_end
    }
}
