mod running_state;
mod scoring;

pub use running_state::{IntervalStaffing, RunningState};
pub use scoring::score;

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::domain::availability::AvailabilityResolver;
use crate::domain::entities::{CoverageRequirement, Employee, GenerationSettings, ShiftTemplate};
use crate::domain::rules::{AssignmentContext, ConstraintChecker};
use crate::domain::time::ShiftTime;

/// Scheduling floor below which a candidate is ineligible regardless of how
/// few alternatives exist.
pub const SCORE_FLOOR: f64 = 0.0;

/// A candidate picked for one interval, ready to become an assignment once
/// the caller records it against running state.
#[derive(Debug, Clone)]
pub struct SelectedCandidate {
    pub employee_id: Uuid,
    pub template_id: Uuid,
    pub shift_type: String,
    pub start_dt: NaiveDateTime,
    pub end_dt: NaiveDateTime,
    pub is_keyholder: bool,
    pub group_key: String,
}

/// Scores and selects candidates for coverage intervals. Holds no state of
/// its own beyond the constraint checker; all running counts live in the
/// `RunningState` the caller threads through the horizon.
pub struct DistributionManager {
    checker: ConstraintChecker,
}

impl DistributionManager {
    pub fn new() -> Self {
        Self { checker: ConstraintChecker::new() }
    }

    /// Picks the best feasible `(employee, template)` for `interval_start`
    /// on `date`, or `None` if no eligible candidate remains. Does not
    /// mutate `state` — callers call `RunningState::record_assignment` on
    /// the result themselves, since the same pick may need to be discarded
    /// if the caller's own bookkeeping (e.g. per-interval cap) rejects it.
    #[allow(clippy::too_many_arguments)]
    pub fn select(
        &self,
        date: NaiveDate,
        interval_start: ShiftTime,
        coverage: &CoverageRequirement,
        templates: &[&ShiftTemplate],
        employees: &[Employee],
        resolver: &AvailabilityResolver,
        state: &RunningState,
        settings: &GenerationSettings,
    ) -> Option<SelectedCandidate> {
        let mut scored: Vec<(f64, &Employee, &ShiftTemplate)> = Vec::new();

        for employee in employees {
            if state.already_assigned_on(employee.id, date) {
                continue;
            }
            for template in templates {
                let category = resolver.category_for(employee.id, date, interval_start);
                let value = score(employee, template, coverage, category, date, interval_start, state, settings);
                if value < SCORE_FLOOR {
                    continue;
                }
                scored.push((value, employee, template));
            }
        }

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let weekly_a = state.prior_minutes_in_week_of(a.1.id, date);
                    let weekly_b = state.prior_minutes_in_week_of(b.1.id, date);
                    weekly_a.cmp(&weekly_b)
                })
                .then_with(|| state.total_shifts(a.1.id).cmp(&state.total_shifts(b.1.id)))
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        for (_, employee, template) in scored {
            let template_start = template.start();
            let naive_time = chrono::NaiveTime::from_hms_opt(template_start.hour as u32, template_start.minute as u32, 0)
                .expect("ShiftTime is already range-checked");
            let start_dt = date.and_time(naive_time);
            let duration = template.duration_minutes();
            let end_dt = start_dt + chrono::Duration::minutes(duration as i64);

            let context = AssignmentContext {
                employee: Some(employee),
                new_start_dt: start_dt,
                new_end_dt: end_dt,
                prior_assignments: state.prior_assignments(employee.id),
                settings,
            };
            if !self.checker.check(&context).is_empty() {
                continue;
            }

            return Some(SelectedCandidate {
                employee_id: employee.id,
                template_id: template.id,
                shift_type: template.shift_type.clone(),
                start_dt,
                end_dt,
                is_keyholder: employee.is_keyholder,
                group_key: employee.group_key(),
            });
        }
        None
    }
}

impl Default for DistributionManager {
    fn default() -> Self {
        Self::new()
    }
}
