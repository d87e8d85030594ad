use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{ActiveDaysWire, Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A reusable shift definition: a start/end time-of-day, a type tag, and the
/// weekdays it may be instantiated on. `end_time <= start_time` means the
/// shift wraps past midnight.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftTemplate {
    pub id: Uuid,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub shift_type: String,
    /// Canonical weekday indices, 0 = Monday .. 6 = Sunday.
    pub active_days: Vec<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ShiftTemplate {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for ShiftTemplate {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShiftTemplateRequest {
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub shift_type: String,
    pub active_days: ActiveDaysWire,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateShiftTemplateRequest {
    pub name: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub shift_type: Option<String>,
    pub active_days: Option<ActiveDaysWire>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShiftTemplateResponse {
    pub id: Uuid,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub shift_type: String,
    pub active_days: Vec<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShiftTemplate> for ShiftTemplateResponse {
    fn from(template: ShiftTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            start_time: template.start_time,
            end_time: template.end_time,
            shift_type: template.shift_type,
            active_days: template.active_days,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}
