use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use shared::EmployeeGroup;
use uuid::Uuid;

use crate::domain::time::ShiftTime;

/// A per-weekday staffing target for a time-of-day interval, as served by
/// the data service.
#[derive(Debug, Clone, Serialize, Deserialize)]
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
}

impl CoverageRequirement {
    pub fn start(&self) -> ShiftTime {
        ShiftTime::new(self.start_time.hour() as u8, self.start_time.minute() as u8)
            .expect("NaiveTime is already range-checked")
    }

    pub fn end(&self) -> ShiftTime {
        ShiftTime::new(self.end_time.hour() as u8, self.end_time.minute() as u8)
            .expect("NaiveTime is already range-checked")
    }

    pub fn allows_group(&self, group: EmployeeGroup) -> bool {
        self.allowed_groups.is_empty() || self.allowed_groups.contains(&group)
    }

    /// Whether `interval_start` (within this row's window) falls inside the
    /// pre-open/post-close keyholder-presence window, if configured.
    pub fn keyholder_window_covers(&self, interval_start: ShiftTime) -> bool {
        if !self.requires_keyholder {
            return false;
        }
        let row_start = self.start().as_minutes() as i64;
        let row_end = self.end().as_minutes() as i64;
        let point = interval_start.as_minutes() as i64;
        let before = self.keyholder_before_minutes.unwrap_or(0) as i64;
        let after = self.keyholder_after_minutes.unwrap_or(0) as i64;
        point >= row_start - before && point < row_end + after
    }
}
