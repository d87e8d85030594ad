use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::time::ShiftTime;

/// A reusable shift definition as served by the data service. `end_time <=
/// start_time` means the shift wraps past midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: Uuid,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub shift_type: String,
    /// Canonical weekday indices, 0 = Monday .. 6 = Sunday.
    pub active_days: Vec<i16>,
}

impl ShiftTemplate {
    pub fn start(&self) -> ShiftTime {
        ShiftTime::new(self.start_time.hour() as u8, self.start_time.minute() as u8)
            .expect("NaiveTime is already range-checked")
    }

    pub fn end(&self) -> ShiftTime {
        ShiftTime::new(self.end_time.hour() as u8, self.end_time.minute() as u8)
            .expect("NaiveTime is already range-checked")
    }

    pub fn active_on_weekday(&self, weekday_index: u8) -> bool {
        self.active_days.iter().any(|d| *d == weekday_index as i16)
    }

    pub fn duration_minutes(&self) -> u32 {
        crate::domain::time::duration_minutes(self.start(), self.end())
    }

    /// Break length in minutes for this template's duration, per the legal
    /// band (>6h => 30 min, >9h => 45 min, otherwise none).
    pub fn required_break_minutes(&self) -> u32 {
        let hours = self.duration_minutes() as f64 / 60.0;
        if hours > 9.0 {
            45
        } else if hours > 6.0 {
            30
        } else {
            0
        }
    }
}
