mod lock;
mod metrics;

pub use lock::GenerationLock;
pub use metrics::RunMetrics;

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use shared::{DomainError, DomainResult, VersionStatus};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::availability::AvailabilityResolver;
use crate::domain::distribution::{DistributionManager, RunningState};
use crate::domain::entities::Assignment;
use crate::domain::repositories::VersionRepository;
use crate::domain::resources::{ResourceLoader, Snapshot, Warning};
use crate::domain::time::IntervalGrid;

/// Caller-supplied knobs for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub create_empty_schedules: bool,
    pub base_version: Option<i64>,
    pub notes: Option<String>,
}

/// Outcome of one `ScheduleGenerator::generate` call. Never carries a panic
/// or an unhandled error across the boundary — fatal conditions land in
/// `errors` with an empty `assignments` list and no allocated version.
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    pub version: Option<i64>,
    pub assignments: Vec<Assignment>,
    pub warnings: Vec<Warning>,
    pub errors: Vec<String>,
    pub metrics: RunMetrics,
}

/// A cooperative cancellation signal checked between dates. A plain
/// `Arc<std::sync::atomic::AtomicBool>` rather than a channel, since the
/// orchestrator only ever needs to poll it, never await on it.
#[derive(Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<std::sync::atomic::AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Drives one generation run end to end: load resources, allocate a
/// version, walk the horizon date by date and interval by interval asking
/// the distribution manager for candidates, then persist.
pub struct ScheduleGenerator {
    resource_loader: Arc<dyn ResourceLoader>,
    version_repository: Arc<dyn VersionRepository>,
}

impl ScheduleGenerator {
    pub fn new(resource_loader: Arc<dyn ResourceLoader>, version_repository: Arc<dyn VersionRepository>) -> Self {
        Self { resource_loader, version_repository }
    }

    pub async fn generate(
        &self,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        options: GenerationOptions,
        cancellation: CancellationToken,
    ) -> GenerationResult {
        let snapshot = match self.resource_loader.load(horizon_start, horizon_end).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                return GenerationResult {
                    errors: vec![err.to_string()],
                    ..Default::default()
                };
            }
        };

        let version = match self
            .version_repository
            .allocate_version(horizon_start, horizon_end, options.base_version, options.notes.clone())
            .await
        {
            Ok(version) => version,
            Err(err) => {
                return GenerationResult {
                    errors: vec![err.to_string()],
                    ..Default::default()
                };
            }
        };

        let grid = match IntervalGrid::new(snapshot.settings.interval_minutes as u32) {
            Ok(grid) => grid,
            Err(err) => {
                self.archive_on_failure(version.number).await;
                return GenerationResult {
                    errors: vec![err.to_string()],
                    ..Default::default()
                };
            }
        };

        let mut assignments = Vec::new();
        let mut warnings = snapshot.warnings.clone();
        let mut state = RunningState::new();
        let resolver = AvailabilityResolver::new(&snapshot.absences, &snapshot.availability);
        let manager = DistributionManager::new();

        if options.create_empty_schedules {
            assignments.extend(placeholder_assignments(&snapshot, version.number));
        }

        let mut cursor = horizon_start;
        while cursor <= horizon_end {
            if cancellation.is_cancelled() {
                warn!(version = version.number, date = %cursor, "generation cancelled mid-horizon");
                self.archive_on_failure(version.number).await;
                return GenerationResult {
                    version: None,
                    ..Default::default()
                };
            }

            let day_assignments = self.generate_day(cursor, version.number, &snapshot, &grid, &resolver, &manager, &mut state, &mut warnings);
            assignments.extend(day_assignments);
            cursor += chrono::Duration::days(1);
        }

        let real_assignment_count = assignments.iter().filter(|a| !a.is_placeholder()).count();
        let metrics = RunMetrics::compute(&assignments, &snapshot.employees, &snapshot.shift_templates);

        if let Err(err) = self.version_repository.persist_assignments(version.number, assignments.clone()).await {
            warn!(version = version.number, error = %err, "persistence failed, archiving draft");
            self.archive_on_failure(version.number).await;
            return GenerationResult {
                errors: vec![err.to_string()],
                ..Default::default()
            };
        }

        info!(version = version.number, assignments = real_assignment_count, "generation run complete");

        GenerationResult {
            version: Some(version.number),
            assignments,
            warnings,
            errors: vec![],
            metrics,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn generate_day(
        &self,
        date: NaiveDate,
        version: i64,
        snapshot: &Snapshot,
        grid: &IntervalGrid,
        resolver: &AvailabilityResolver,
        manager: &DistributionManager,
        state: &mut RunningState,
        warnings: &mut Vec<Warning>,
    ) -> Vec<Assignment> {
        let weekday = date.weekday().num_days_from_monday() as u8;
        let mut assignments = Vec::new();

        let day_coverage: Vec<_> = snapshot.coverage.iter().filter(|c| c.day_index == weekday as i16).collect();
        let day_templates: Vec<_> = snapshot.shift_templates.iter().filter(|t| t.active_on_weekday(weekday)).collect();

        let mut sorted_coverage = day_coverage;
        sorted_coverage.sort_by_key(|c| (c.start_time, !c.requires_keyholder));

        for coverage in sorted_coverage {
            let intervals = match grid.intervals_for_range(coverage.start(), coverage.end()) {
                Ok(intervals) => intervals,
                Err(_) => continue,
            };

            for interval_start in intervals {
                let templates_for_slot: Vec<_> = day_templates
                    .iter()
                    .copied()
                    .filter(|t| crate::domain::time::contains(t.start(), t.end(), interval_start))
                    .collect();
                if templates_for_slot.is_empty() {
                    continue;
                }

                loop {
                    let staffing = state.staffing(date, interval_start);
                    let keyholder_satisfied = !coverage.requires_keyholder || staffing.keyholder_present;
                    if staffing.current_employees >= coverage.max_employees {
                        break;
                    }
                    if staffing.current_employees >= coverage.min_employees && keyholder_satisfied {
                        break;
                    }

                    let selected = manager.select(
                        date,
                        interval_start,
                        coverage,
                        &templates_for_slot,
                        &snapshot.employees,
                        resolver,
                        state,
                        &snapshot.settings,
                    );

                    let Some(candidate) = selected else {
                        if staffing.current_employees < coverage.min_employees {
                            warnings.push(Warning::CoverageShortfall {
                                day_index: weekday,
                                interval: interval_start.render(),
                                shortfall: coverage.min_employees - staffing.current_employees,
                            });
                        }
                        break;
                    };

                    let template = day_templates.iter().find(|t| t.id == candidate.template_id);
                    let covered = template
                        .and_then(|t| grid.intervals_for_range(t.start(), t.end()).ok())
                        .unwrap_or_default();

                    state.record_assignment(
                        candidate.employee_id,
                        date,
                        candidate.start_dt,
                        candidate.end_dt,
                        &candidate.shift_type,
                        &candidate.group_key,
                        candidate.is_keyholder,
                        &covered,
                    );

                    assignments.push(Assignment {
                        id: Uuid::new_v4(),
                        version,
                        employee_id: candidate.employee_id,
                        shift_template_id: Some(candidate.template_id),
                        date,
                        start_time: Some(candidate.start_dt.time()),
                        end_time: Some(candidate.end_dt.time()),
                        break_minutes: template.map(|t| t.required_break_minutes() as i32).unwrap_or(0),
                        status: VersionStatus::Draft,
                        availability_category_at_assignment: resolver.category_for(candidate.employee_id, date, interval_start),
                    });
                }
            }
        }

        assignments
    }

    async fn archive_on_failure(&self, version: i64) {
        if let Err(err) = self.version_repository.set_status(version, VersionStatus::Archived).await {
            warn!(version, error = %err, "failed to archive draft version after run failure");
        }
    }
}

fn placeholder_assignments(snapshot: &Snapshot, version: i64) -> Vec<Assignment> {
    let mut placeholders = Vec::new();
    let mut cursor = snapshot.horizon_start;
    while cursor <= snapshot.horizon_end {
        for employee in &snapshot.employees {
            placeholders.push(Assignment {
                id: Uuid::new_v4(),
                version,
                employee_id: employee.id,
                shift_template_id: None,
                date: cursor,
                start_time: None,
                end_time: None,
                break_minutes: 0,
                status: VersionStatus::Draft,
                availability_category_at_assignment: shared::AvailabilityCategory::Available,
            });
        }
        cursor += chrono::Duration::days(1);
    }
    placeholders
}

/// Rejects a run whose settings have already been validated upstream but
/// whose interval grid still fails the divisibility invariant, returning a
/// typed error instead of panicking deep in the loop.
pub fn validate_interval_minutes(interval_minutes: i32) -> DomainResult<()> {
    IntervalGrid::new(interval_minutes.max(0) as u32)
        .map(|_| ())
        .map_err(|_| DomainError::InvalidInput(format!("interval_minutes {interval_minutes} does not divide a day")))
}
