use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{EmployeeGroup, Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A per-weekday staffing target for a time-of-day interval.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CoverageRequirement {
    pub id: Uuid,
    pub day_index: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub min_employees: i32,
    pub max_employees: i32,
    /// Empty = any group allowed.
    pub allowed_groups: Vec<EmployeeGroup>,
    pub requires_keyholder: bool,
    pub keyholder_before_minutes: Option<i32>,
    pub keyholder_after_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for CoverageRequirement {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for CoverageRequirement {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCoverageRequest {
    pub day_index: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub min_employees: i32,
    pub max_employees: i32,
    #[serde(default)]
    pub allowed_groups: Vec<EmployeeGroup>,
    #[serde(default)]
    pub requires_keyholder: bool,
    pub keyholder_before_minutes: Option<i32>,
    pub keyholder_after_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCoverageRequest {
    pub day_index: Option<i16>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
    pub allowed_groups: Option<Vec<EmployeeGroup>>,
    pub requires_keyholder: Option<bool>,
    pub keyholder_before_minutes: Option<i32>,
    pub keyholder_after_minutes: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoverageResponse {
    pub id: Uuid,
    pub day_index: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub min_employees: i32,
    pub max_employees: i32,
    pub allowed_groups: Vec<EmployeeGroup>,
    pub requires_keyholder: bool,
    pub keyholder_before_minutes: Option<i32>,
    pub keyholder_after_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CoverageRequirement> for CoverageResponse {
    fn from(coverage: CoverageRequirement) -> Self {
        Self {
            id: coverage.id,
            day_index: coverage.day_index,
            start_time: coverage.start_time,
            end_time: coverage.end_time,
            min_employees: coverage.min_employees,
            max_employees: coverage.max_employees,
            allowed_groups: coverage.allowed_groups,
            requires_keyholder: coverage.requires_keyholder,
            keyholder_before_minutes: coverage.keyholder_before_minutes,
            keyholder_after_minutes: coverage.keyholder_after_minutes,
            created_at: coverage.created_at,
            updated_at: coverage.updated_at,
        }
    }
}
