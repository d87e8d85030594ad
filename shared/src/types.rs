use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The contract class an employee belongs to, drawn from a small closed set.
/// Daily/weekly hour caps and contracted-hours bands are configured per group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "employee_group", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeGroup {
    FullTime,
    PartTime,
    MiniJob,
    TeamLead,
}

/// Availability category for an (employee, date, interval) triple, in order
/// of strength. Resolution order lives in the availability resolver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "availability_category", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityCategory {
    Fixed,
    Preferred,
    Available,
    Unavailable,
}

/// Lifecycle status of a schedule version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "version_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionStatus {
    Draft,
    Published,
    Archived,
}

impl VersionStatus {
    /// Whether transitioning from `self` to `next` is a legal lifecycle step.
    pub fn can_transition_to(self, next: VersionStatus) -> bool {
        matches!(
            (self, next),
            (VersionStatus::Draft, VersionStatus::Published)
                | (VersionStatus::Draft, VersionStatus::Archived)
                | (VersionStatus::Published, VersionStatus::Archived)
        )
    }
}

pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

pub trait Identifiable {
    fn id(&self) -> Uuid;
}
