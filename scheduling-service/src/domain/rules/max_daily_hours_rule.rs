use crate::domain::entities::{Violation, ViolationKind};

use super::{AssignmentContext, Rule};

const DEFAULT_MAX_DAILY_HOURS: f64 = 8.0;

/// Caps the length of a single shift against the employee's group daily cap.
pub struct MaxDailyHoursRule;

impl Rule for MaxDailyHoursRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        let Some(employee) = context.employee else {
            return vec![];
        };
        let duration_hours = (context.new_end_dt - context.new_start_dt).num_minutes() as f64 / 60.0;
        let limit = context
            .settings
            .max_daily_hours_per_group
            .get(&employee.group_key())
            .copied()
            .unwrap_or(DEFAULT_MAX_DAILY_HOURS);

        if duration_hours > limit {
            return vec![Violation::new(
                ViolationKind::MaxDailyHours,
                format!("shift of {duration_hours:.2}h exceeds the {limit}h daily cap for this group"),
                limit,
                duration_hours,
            )];
        }
        vec![]
    }
}
