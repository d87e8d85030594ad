use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{AvailabilityCategory, Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An explicit weekly-pattern availability record: on this weekday, at this
/// hour-of-day, the employee's category is this.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Availability {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub day_of_week: i16,
    pub hour: i16,
    pub category: AvailabilityCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Availability {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Availability {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAvailabilityRequest {
    pub employee_id: Uuid,
    pub day_of_week: i16,
    pub hour: i16,
    pub category: AvailabilityCategory,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAvailabilityRequest {
    pub category: AvailabilityCategory,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub day_of_week: i16,
    pub hour: i16,
    pub category: AvailabilityCategory,
}

impl From<Availability> for AvailabilityResponse {
    fn from(record: Availability) -> Self {
        Self {
            id: record.id,
            employee_id: record.employee_id,
            day_of_week: record.day_of_week,
            hour: record.hour,
            category: record.category,
        }
    }
}
