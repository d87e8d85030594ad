use crate::domain::entities::{Violation, ViolationKind};

use super::{AssignmentContext, Rule};

/// Caps weekly hours against a per-group limit, if one is configured. The
/// week is Monday-Sunday regardless of where the generation horizon starts.
pub struct MaxWeeklyHoursGroupRule;

impl Rule for MaxWeeklyHoursGroupRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        let Some(employee) = context.employee else {
            return vec![];
        };
        let Some(&limit) = context.settings.max_weekly_hours_per_group.get(&employee.group_key()) else {
            return vec![];
        };

        let new_minutes = (context.new_end_dt - context.new_start_dt).num_minutes();
        let prior_minutes = context.prior_minutes_in_week_of(context.new_start_dt.date());
        let total_hours = (prior_minutes + new_minutes) as f64 / 60.0;

        if total_hours > limit {
            return vec![Violation::new(
                ViolationKind::MaxWeeklyHoursGroup,
                format!("weekly total of {total_hours:.2}h exceeds the {limit}h group cap"),
                limit,
                total_hours,
            )];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Employee, GenerationSettings};
    use crate::domain::rules::PriorAssignment;
    use chrono::NaiveDate;
    use shared::EmployeeGroup;
    use uuid::Uuid;

    fn employee() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            group: EmployeeGroup::PartTime,
            contracted_hours: 20.0,
            is_keyholder: false,
            is_active: true,
        }
    }

    fn dt(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn flags_total_beyond_configured_group_cap() {
        let mut settings = GenerationSettings::default();
        settings.max_weekly_hours_per_group.insert("PART_TIME".to_string(), 20.0);
        let employee = employee();
        let prior = vec![PriorAssignment {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            start_dt: dt(5, 9),
            end_dt: dt(5, 17),
        }];
        let context = AssignmentContext {
            employee: Some(&employee),
            new_start_dt: dt(6, 9),
            new_end_dt: dt(6, 21),
            prior_assignments: &prior,
            settings: &settings,
        };
        assert_eq!(MaxWeeklyHoursGroupRule.check(&context).len(), 1);
    }

    #[test]
    fn allows_unconfigured_group_cap() {
        let settings = GenerationSettings::default();
        let employee = employee();
        let context = AssignmentContext {
            employee: Some(&employee),
            new_start_dt: dt(6, 9),
            new_end_dt: dt(6, 21),
            prior_assignments: &[],
            settings: &settings,
        };
        assert!(MaxWeeklyHoursGroupRule.check(&context).is_empty());
    }
}
