use crate::domain::entities::{Violation, ViolationKind};

use super::{AssignmentContext, Rule};

/// Caps weekly hours against the employee's own contracted hours, scaled by
/// `contracted_hours_limit_factor`. Skipped for employees with zero
/// contracted hours (no contract to overrun).
pub struct MaxWeeklyHoursContractRule;

impl Rule for MaxWeeklyHoursContractRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        let Some(employee) = context.employee else {
            return vec![];
        };
        if employee.contracted_hours <= 0.0 {
            return vec![];
        }

        let limit = employee.contracted_hours * context.settings.contracted_hours_limit_factor;
        let new_minutes = (context.new_end_dt - context.new_start_dt).num_minutes();
        let prior_minutes = context.prior_minutes_in_week_of(context.new_start_dt.date());
        let total_hours = (prior_minutes + new_minutes) as f64 / 60.0;

        if total_hours > limit {
            return vec![Violation::new(
                ViolationKind::MaxWeeklyHoursContract,
                format!(
                    "weekly total of {total_hours:.2}h exceeds {limit:.2}h ({}h contracted x{})",
                    employee.contracted_hours, context.settings.contracted_hours_limit_factor
                ),
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

    fn employee(contracted_hours: f64) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            group: EmployeeGroup::FullTime,
            contracted_hours,
            is_keyholder: false,
            is_active: true,
        }
    }

    fn dt(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn flags_total_beyond_contracted_hours_times_factor() {
        let settings = GenerationSettings::default();
        let employee = employee(20.0);
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
        assert_eq!(MaxWeeklyHoursContractRule.check(&context).len(), 1);
    }

    #[test]
    fn skips_employees_with_no_contracted_hours() {
        let settings = GenerationSettings::default();
        let employee = employee(0.0);
        let context = AssignmentContext {
            employee: Some(&employee),
            new_start_dt: dt(6, 0),
            new_end_dt: dt(7, 0),
            prior_assignments: &[],
            settings: &settings,
        };
        assert!(MaxWeeklyHoursContractRule.check(&context).is_empty());
    }
}
