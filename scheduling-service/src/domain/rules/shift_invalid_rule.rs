use crate::domain::entities::{Violation, ViolationKind};

use super::{AssignmentContext, Rule};

/// A shift whose end does not fall after its start, once overnight wrap is
/// already accounted for by the caller, is never acceptable.
pub struct ShiftInvalidRule;

impl Rule for ShiftInvalidRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        let duration_minutes = (context.new_end_dt - context.new_start_dt).num_minutes();
        if duration_minutes <= 0 {
            return vec![Violation::new(
                ViolationKind::ShiftInvalid,
                format!(
                    "shift end {} does not follow start {}",
                    context.new_end_dt, context.new_start_dt
                ),
                0.0,
                duration_minutes as f64,
            )];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GenerationSettings;
    use chrono::NaiveDate;

    fn dt(hour: u32, minute: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn flags_end_before_start() {
        let settings = GenerationSettings::default();
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(9, 0),
            new_end_dt: dt(8, 0),
            prior_assignments: &[],
            settings: &settings,
        };
        assert_eq!(ShiftInvalidRule.check(&context).len(), 1);
    }

    #[test]
    fn allows_positive_duration() {
        let settings = GenerationSettings::default();
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(9, 0),
            new_end_dt: dt(17, 0),
            prior_assignments: &[],
            settings: &settings,
        };
        assert!(ShiftInvalidRule.check(&context).is_empty());
    }
}
