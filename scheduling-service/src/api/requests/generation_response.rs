use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::Assignment;
use crate::domain::generator::GenerationResult;
use crate::domain::resources::Warning;

/// Wire shape of a completed (or failed) generation run.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateScheduleResponse {
    pub version: Option<i64>,
    pub assignments: Vec<Assignment>,
    pub warnings: Vec<Warning>,
    pub errors: Vec<String>,
    pub hours_by_employee: HashMap<Uuid, f64>,
    pub shifts_by_category: HashMap<String, u32>,
    pub fairness_score: f64,
}

impl From<GenerationResult> for GenerateScheduleResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            version: result.version,
            assignments: result.assignments,
            warnings: result.warnings,
            errors: result.errors,
            hours_by_employee: result.metrics.hours_by_employee,
            shifts_by_category: result.metrics.shifts_by_category,
            fairness_score: result.metrics.fairness_score,
        }
    }
}
