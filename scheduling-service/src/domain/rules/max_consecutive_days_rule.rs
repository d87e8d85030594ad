use std::collections::BTreeSet;

use crate::domain::entities::{Violation, ViolationKind};

use super::{AssignmentContext, Rule};

/// Bounds the unbroken run of worked days ending on the candidate's date.
pub struct MaxConsecutiveDaysRule;

impl Rule for MaxConsecutiveDaysRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        let new_date = context.new_start_dt.date();
        let mut worked_dates: BTreeSet<_> = context.prior_assignments.iter().map(|a| a.date).collect();
        worked_dates.insert(new_date);

        let mut streak = 0i64;
        let mut cursor = new_date;
        while worked_dates.contains(&cursor) {
            streak += 1;
            cursor -= chrono::Duration::days(1);
        }

        let limit = context.settings.max_consecutive_days as f64;
        if streak as f64 > limit {
            return vec![Violation::new(
                ViolationKind::MaxConsecutiveDays,
                format!(
                    "assigning {new_date} would extend the consecutive-day streak to {streak}, exceeding {limit}"
                ),
                limit,
                streak as f64,
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
    fn flags_streak_beyond_the_default_cap() {
        let settings = GenerationSettings::default();
        let prior: Vec<PriorAssignment> = (1..=7)
            .map(|day| PriorAssignment {
                date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
                start_dt: dt(day, 9),
                end_dt: dt(day, 17),
            })
            .collect();
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(8, 9),
            new_end_dt: dt(8, 17),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert_eq!(MaxConsecutiveDaysRule.check(&context).len(), 1);
    }

    #[test]
    fn allows_a_break_in_the_streak() {
        let settings = GenerationSettings::default();
        let prior = vec![PriorAssignment {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            start_dt: dt(5, 9),
            end_dt: dt(5, 17),
        }];
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(8, 9),
            new_end_dt: dt(8, 17),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert!(MaxConsecutiveDaysRule.check(&context).is_empty());
    }
}
