pub mod normalize;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::DomainResult;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::entities::{Absence, Availability, CoverageRequirement, Employee, GenerationSettings, ShiftTemplate};

/// Non-fatal problem surfaced on a loaded snapshot. Collected on the
/// snapshot itself rather than merely logged — the generator and its
/// callers need to see these, not just an operator tailing logs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Warning {
    EmptyActiveDays { shift_template_id: Uuid },
    NoCoverageForWeekday { weekday: u8 },
    CoverageShortfall { day_index: u8, interval: String, shortfall: i32 },
}

/// The full set of resources a generation run consults, read-only for the
/// run's duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub horizon_start: NaiveDate,
    pub horizon_end: NaiveDate,
    pub employees: Vec<Employee>,
    pub shift_templates: Vec<ShiftTemplate>,
    pub coverage: Vec<CoverageRequirement>,
    pub availability: Vec<Availability>,
    pub absences: Vec<Absence>,
    pub settings: GenerationSettings,
    pub warnings: Vec<Warning>,
}

impl Snapshot {
    /// Weekdays (0=Monday..6=Sunday) actually present in `[horizon_start,
    /// horizon_end]`.
    pub fn horizon_weekdays(&self) -> Vec<u8> {
        let mut weekdays = Vec::new();
        let mut cursor = self.horizon_start;
        while cursor <= self.horizon_end {
            let weekday = cursor.weekday().num_days_from_monday() as u8;
            if !weekdays.contains(&weekday) {
                weekdays.push(weekday);
            }
            cursor += chrono::Duration::days(1);
        }
        weekdays
    }

    fn build_warnings(
        shift_templates: &[ShiftTemplate],
        coverage: &[CoverageRequirement],
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
    ) -> Vec<Warning> {
        let mut warnings = Vec::new();
        for template in shift_templates {
            if template.active_days.is_empty() {
                warnings.push(Warning::EmptyActiveDays { shift_template_id: template.id });
            }
        }

        let mut cursor = horizon_start;
        while cursor <= horizon_end {
            let weekday = cursor.weekday().num_days_from_monday() as u8;
            if !coverage.iter().any(|row| row.day_index == weekday as i16) {
                if !warnings
                    .iter()
                    .any(|w| matches!(w, Warning::NoCoverageForWeekday { weekday: w } if *w == weekday))
                {
                    warnings.push(Warning::NoCoverageForWeekday { weekday });
                }
            }
            cursor += chrono::Duration::days(1);
        }
        warnings
    }

    pub fn assemble(
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        employees: Vec<Employee>,
        shift_templates: Vec<ShiftTemplate>,
        coverage: Vec<CoverageRequirement>,
        availability: Vec<Availability>,
        absences: Vec<Absence>,
        settings: GenerationSettings,
    ) -> DomainResult<Self> {
        use shared::DomainError;

        let active_employees: Vec<Employee> = employees.into_iter().filter(|e| e.is_active).collect();
        if active_employees.is_empty() {
            return Err(DomainError::InvalidInput("no active employees in snapshot".to_string()));
        }
        if shift_templates.is_empty() {
            return Err(DomainError::InvalidInput("no shift templates in snapshot".to_string()));
        }
        if coverage.is_empty() {
            return Err(DomainError::InvalidInput("no coverage requirements in snapshot".to_string()));
        }
        for template in &shift_templates {
            normalize::active_days(&template.active_days)?;
        }

        let warnings = Self::build_warnings(&shift_templates, &coverage, horizon_start, horizon_end);

        Ok(Self {
            horizon_start,
            horizon_end,
            employees: active_employees,
            shift_templates,
            coverage,
            availability,
            absences,
            settings,
            warnings,
        })
    }
}

/// Loads the resources a generation run needs for a horizon.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    async fn load(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<Snapshot>;
}
