use crate::domain::entities::{Violation, ViolationKind};
use crate::domain::time;

use super::{AssignmentContext, Rule};

/// Symmetric to `MinRestBeforeRule`: enforces the rest gap against the
/// earliest subsequent assignment.
pub struct MinRestAfterRule;

impl Rule for MinRestAfterRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        if !context.settings.enforce_rest_periods {
            return vec![];
        }
        let Some(next_start) = context
            .prior_assignments
            .iter()
            .filter(|a| a.start_dt > context.new_end_dt)
            .map(|a| a.start_dt)
            .min()
        else {
            return vec![];
        };

        let rest = time::rest_hours(context.new_end_dt, next_start);
        let limit = context.settings.min_rest_hours;
        if rest < limit {
            return vec![Violation::new(
                ViolationKind::MinRestAfter,
                format!("only {rest:.2}h of rest after this shift, minimum is {limit}h"),
                limit,
                rest,
            )];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GenerationSettings;
    use crate::domain::rules::PriorAssignment;
    use chrono::NaiveDate;

    fn dt(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn flags_insufficient_rest_after() {
        let settings = GenerationSettings::default();
        let prior = vec![PriorAssignment {
            date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
            start_dt: dt(6, 6),
            end_dt: dt(6, 14),
        }];
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(5, 14),
            new_end_dt: dt(5, 22),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert_eq!(MinRestAfterRule.check(&context).len(), 1);
    }

    #[test]
    fn allows_sufficient_rest_after() {
        let settings = GenerationSettings::default();
        let prior = vec![PriorAssignment {
            date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
            start_dt: dt(6, 9),
            end_dt: dt(6, 17),
        }];
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(5, 9),
            new_end_dt: dt(5, 17),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert!(MinRestAfterRule.check(&context).is_empty());
    }
}
