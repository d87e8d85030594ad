use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::rules::{iso_week_range, PriorAssignment};
use crate::domain::time::ShiftTime;

/// Live headcount for one `(date, interval_start)` slot, updated as
/// candidates are approved and recorded.
#[derive(Debug, Clone, Default)]
pub struct IntervalStaffing {
    pub current_employees: i32,
    pub keyholder_present: bool,
    pub group_counts: HashMap<String, i32>,
}

/// Mutable bookkeeping threaded through one generation run. Not persisted —
/// rebuilt from scratch (or seeded from already-placed placeholders) each
/// time the orchestrator runs.
#[derive(Debug, Default)]
pub struct RunningState {
    assignments_by_employee: HashMap<Uuid, Vec<PriorAssignment>>,
    category_counts_by_employee: HashMap<Uuid, HashMap<String, u32>>,
    interval_staffing: HashMap<(NaiveDate, ShiftTime), IntervalStaffing>,
}

impl RunningState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prior_assignments(&self, employee_id: Uuid) -> &[PriorAssignment] {
        self.assignments_by_employee.get(&employee_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn prior_minutes_in_week_of(&self, employee_id: Uuid, date: NaiveDate) -> i64 {
        let (week_start, week_end) = iso_week_range(date);
        self.prior_assignments(employee_id)
            .iter()
            .filter(|a| a.date >= week_start && a.date <= week_end)
            .map(|a| (a.end_dt - a.start_dt).num_minutes())
            .sum()
    }

    pub fn already_assigned_on(&self, employee_id: Uuid, date: NaiveDate) -> bool {
        self.prior_assignments(employee_id).iter().any(|a| a.date == date)
    }

    pub fn category_count(&self, employee_id: Uuid, category: &str) -> u32 {
        self.category_counts_by_employee
            .get(&employee_id)
            .and_then(|counts| counts.get(category))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_shifts(&self, employee_id: Uuid) -> u32 {
        self.assignments_by_employee.get(&employee_id).map(|a| a.len() as u32).unwrap_or(0)
    }

    pub fn staffing(&self, date: NaiveDate, interval_start: ShiftTime) -> IntervalStaffing {
        self.interval_staffing.get(&(date, interval_start)).cloned().unwrap_or_default()
    }

    pub fn is_fully_staffed(&self, date: NaiveDate, interval_start: ShiftTime, max_employees: i32) -> bool {
        self.staffing(date, interval_start).current_employees >= max_employees
    }

    /// Records an approved assignment: appends the prior-assignment entry,
    /// bumps the employee's category count, and updates headcount for every
    /// interval the shift covers.
    pub fn record_assignment(
        &mut self,
        employee_id: Uuid,
        date: NaiveDate,
        start_dt: chrono::NaiveDateTime,
        end_dt: chrono::NaiveDateTime,
        category: &str,
        group_key: &str,
        is_keyholder: bool,
        covered_intervals: &[ShiftTime],
    ) {
        self.assignments_by_employee
            .entry(employee_id)
            .or_default()
            .push(PriorAssignment { date, start_dt, end_dt });

        *self
            .category_counts_by_employee
            .entry(employee_id)
            .or_default()
            .entry(category.to_string())
            .or_insert(0) += 1;

        for &interval in covered_intervals {
            let staffing = self.interval_staffing.entry((date, interval)).or_default();
            staffing.current_employees += 1;
            staffing.keyholder_present |= is_keyholder;
            *staffing.group_counts.entry(group_key.to_string()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn records_assignment_and_bumps_interval_staffing() {
        let mut state = RunningState::new();
        let employee_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let interval = ShiftTime::new(9, 0).unwrap();

        state.record_assignment(
            employee_id,
            date,
            dt(5, 9),
            dt(5, 17),
            "early",
            "FULL_TIME",
            true,
            &[interval],
        );

        assert!(state.already_assigned_on(employee_id, date));
        assert_eq!(state.category_count(employee_id, "early"), 1);
        assert_eq!(state.total_shifts(employee_id), 1);
        let staffing = state.staffing(date, interval);
        assert_eq!(staffing.current_employees, 1);
        assert!(staffing.keyholder_present);
        assert!(state.is_fully_staffed(date, interval, 1));
    }

    #[test]
    fn prior_minutes_are_scoped_to_the_containing_week() {
        let mut state = RunningState::new();
        let employee_id = Uuid::new_v4();
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        state.record_assignment(employee_id, monday, dt(5, 9), dt(5, 17), "early", "FULL_TIME", false, &[]);

        let next_monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        assert_eq!(state.prior_minutes_in_week_of(employee_id, monday), 8 * 60);
        assert_eq!(state.prior_minutes_in_week_of(employee_id, next_monday), 0);
    }
}
