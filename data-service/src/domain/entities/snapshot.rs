use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Absence, Availability, CoverageRequirement, Employee, GenerationSettings, ShiftTemplate};

/// The aggregate the scheduling engine's resource loader consumes for a
/// horizon. This is the raw, unvalidated view: active employees, every
/// shift template and coverage row, absences intersecting the horizon, and
/// every availability record (weekly patterns recur). Validation and
/// normalization of wire-tolerant fields happen on the consuming side.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SnapshotResponse {
    pub horizon_start: NaiveDate,
    pub horizon_end: NaiveDate,
    pub employees: Vec<Employee>,
    pub shift_templates: Vec<ShiftTemplate>,
    pub coverage: Vec<CoverageRequirement>,
    pub availability: Vec<Availability>,
    pub absences: Vec<Absence>,
    pub settings: GenerationSettings,
}
