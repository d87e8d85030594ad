use std::sync::Arc;

use crate::domain::repositories::{
    AbsenceRepository, AvailabilityRepository, CoverageRepository, EmployeeRepository,
    SettingsRepository, ShiftTemplateRepository,
};
use crate::infrastructure::redis::RedisPool;
use crate::infrastructure::SnapshotService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub shift_template_repo: Arc<dyn ShiftTemplateRepository>,
    pub coverage_repo: Arc<dyn CoverageRepository>,
    pub availability_repo: Arc<dyn AvailabilityRepository>,
    pub absence_repo: Arc<dyn AbsenceRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub snapshot_service: Arc<SnapshotService>,
    pub redis_pool: RedisPool,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        shift_template_repo: Arc<dyn ShiftTemplateRepository>,
        coverage_repo: Arc<dyn CoverageRepository>,
        availability_repo: Arc<dyn AvailabilityRepository>,
        absence_repo: Arc<dyn AbsenceRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        snapshot_service: Arc<SnapshotService>,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            employee_repo,
            shift_template_repo,
            coverage_repo,
            availability_repo,
            absence_repo,
            settings_repo,
            snapshot_service,
            redis_pool,
        }
    }
}
