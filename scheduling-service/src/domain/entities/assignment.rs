use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::{AvailabilityCategory, VersionStatus};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A single assignment row. `shift_template_id`/`start_time`/`end_time` are
/// `None` for the placeholder rows `create_empty_schedules` pre-emits — a
/// real assignment overwrites the placeholder for that `(employee_id,
/// date)` pair. `status` denormalizes the owning version's status so
/// queries over assignments don't require a join to answer "is this
/// published".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: Uuid,
    pub version: i64,
    pub employee_id: Uuid,
    pub shift_template_id: Option<Uuid>,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: i32,
    pub status: VersionStatus,
    pub availability_category_at_assignment: AvailabilityCategory,
}

impl Assignment {
    pub fn is_placeholder(&self) -> bool {
        self.shift_template_id.is_none()
    }
}
