use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A constraint violation is data, not an error — the checker reports every
/// violation it finds rather than failing fast on the first one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    ShiftInvalid,
    ResourceError,
    MaxConsecutiveDays,
    MinRestBefore,
    MinRestAfter,
    MaxDailyHours,
    MaxWeeklyHoursGroup,
    MaxWeeklyHoursContract,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
    pub limit: f64,
    pub observed: f64,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>, limit: f64, observed: f64) -> Self {
        Self {
            kind,
            message: message.into(),
            limit,
            observed,
        }
    }
}
