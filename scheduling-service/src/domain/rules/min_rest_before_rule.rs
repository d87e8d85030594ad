use crate::domain::entities::{Violation, ViolationKind};
use crate::domain::time;

use super::{AssignmentContext, Rule};

/// Enforces a minimum rest gap before the candidate shift, against the
/// latest prior assignment ending before it starts.
pub struct MinRestBeforeRule;

impl Rule for MinRestBeforeRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        if !context.settings.enforce_rest_periods {
            return vec![];
        }
        let Some(prev_end) = context
            .prior_assignments
            .iter()
            .filter(|a| a.end_dt < context.new_start_dt)
            .map(|a| a.end_dt)
            .max()
        else {
            return vec![];
        };

        let rest = time::rest_hours(prev_end, context.new_start_dt);
        let limit = context.settings.min_rest_hours;
        if rest < limit {
            return vec![Violation::new(
                ViolationKind::MinRestBefore,
                format!("only {rest:.2}h of rest before this shift, minimum is {limit}h"),
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
    fn flags_insufficient_rest() {
        let settings = GenerationSettings::default();
        let prior = vec![PriorAssignment {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            start_dt: dt(5, 14),
            end_dt: dt(5, 22),
        }];
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(6, 6),
            new_end_dt: dt(6, 14),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert_eq!(MinRestBeforeRule.check(&context).len(), 1);
    }

    #[test]
    fn allows_sufficient_rest() {
        let settings = GenerationSettings::default();
        let prior = vec![PriorAssignment {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            start_dt: dt(5, 9),
            end_dt: dt(5, 17),
        }];
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(6, 9),
            new_end_dt: dt(6, 17),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert!(MinRestBeforeRule.check(&context).is_empty());
    }
}
