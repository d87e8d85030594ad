use std::sync::Arc;

use chrono::NaiveDate;
use shared::DomainResult;

use crate::domain::entities::SnapshotResponse;
use crate::domain::repositories::{
    AbsenceRepository, AvailabilityRepository, CoverageRepository, EmployeeRepository,
    SettingsRepository, ShiftTemplateRepository,
};

/// Assembles the resource snapshot the scheduling engine consumes for a horizon.
pub struct SnapshotService {
    employee_repo: Arc<dyn EmployeeRepository>,
    shift_template_repo: Arc<dyn ShiftTemplateRepository>,
    coverage_repo: Arc<dyn CoverageRepository>,
    availability_repo: Arc<dyn AvailabilityRepository>,
    absence_repo: Arc<dyn AbsenceRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
}

impl SnapshotService {
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        shift_template_repo: Arc<dyn ShiftTemplateRepository>,
        coverage_repo: Arc<dyn CoverageRepository>,
        availability_repo: Arc<dyn AvailabilityRepository>,
        absence_repo: Arc<dyn AbsenceRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            employee_repo,
            shift_template_repo,
            coverage_repo,
            availability_repo,
            absence_repo,
            settings_repo,
        }
    }

    /// Fetch every entity the scheduling engine needs for `horizon_start..=horizon_end`,
    /// concurrently. Each repository call has a different return type so this uses
    /// `tokio::try_join!` rather than a homogeneous future combinator.
    pub async fn build(
        &self,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
    ) -> DomainResult<SnapshotResponse> {
        let (employees, shift_templates, coverage, availability, absences, settings) = tokio::try_join!(
            self.employee_repo.list_active(),
            self.shift_template_repo.list_all(),
            self.coverage_repo.list_all(),
            self.availability_repo.list_relevant_to_horizon(horizon_start, horizon_end),
            self.absence_repo.list_intersecting(horizon_start, horizon_end),
            self.settings_repo.get(),
        )?;

        Ok(SnapshotResponse {
            horizon_start,
            horizon_end,
            employees,
            shift_templates,
            coverage,
            availability,
            absences,
            settings,
        })
    }
}
