use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contiguous date range during which an employee is unavailable
/// regardless of their weekly availability pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Absence {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl Absence {
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
