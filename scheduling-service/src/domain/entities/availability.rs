use serde::{Deserialize, Serialize};
use shared::AvailabilityCategory;
use uuid::Uuid;

/// An explicit weekly-pattern availability record, as served by the data
/// service: on this weekday, at this hour-of-day, the employee's category
/// is this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub day_of_week: i16,
    pub hour: i16,
    pub category: AvailabilityCategory,
}
