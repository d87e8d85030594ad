use crate::domain::entities::{Violation, ViolationKind};

use super::{AssignmentContext, Rule};

/// The candidate must resolve to a known employee.
pub struct ResourceErrorRule;

impl Rule for ResourceErrorRule {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        if context.employee.is_none() {
            return vec![Violation::new(
                ViolationKind::ResourceError,
                "employee is not present in the loaded snapshot",
                0.0,
                0.0,
            )];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Employee, GenerationSettings};
    use chrono::NaiveDate;
    use shared::EmployeeGroup;
    use uuid::Uuid;

    fn dt() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn flags_unknown_employee() {
        let settings = GenerationSettings::default();
        let context = AssignmentContext {
            employee: None,
            new_start_dt: dt(),
            new_end_dt: dt(),
            prior_assignments: &[],
            settings: &settings,
        };
        assert_eq!(ResourceErrorRule.check(&context).len(), 1);
    }

    #[test]
    fn allows_known_employee() {
        let settings = GenerationSettings::default();
        let employee = Employee {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            group: EmployeeGroup::FullTime,
            contracted_hours: 40.0,
            is_keyholder: false,
            is_active: true,
        };
        let context = AssignmentContext {
            employee: Some(&employee),
            new_start_dt: dt(),
            new_end_dt: dt(),
            prior_assignments: &[],
            settings: &settings,
        };
        assert!(ResourceErrorRule.check(&context).is_empty());
    }
}
