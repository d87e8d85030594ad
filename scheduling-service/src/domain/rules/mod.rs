mod max_consecutive_days_rule;
mod max_daily_hours_rule;
mod max_weekly_hours_contract_rule;
mod max_weekly_hours_group_rule;
mod min_rest_after_rule;
mod min_rest_before_rule;
mod resource_error_rule;
mod shift_invalid_rule;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

pub use max_consecutive_days_rule::MaxConsecutiveDaysRule;
pub use max_daily_hours_rule::MaxDailyHoursRule;
pub use max_weekly_hours_contract_rule::MaxWeeklyHoursContractRule;
pub use max_weekly_hours_group_rule::MaxWeeklyHoursGroupRule;
pub use min_rest_after_rule::MinRestAfterRule;
pub use min_rest_before_rule::MinRestBeforeRule;
pub use resource_error_rule::ResourceErrorRule;
pub use shift_invalid_rule::ShiftInvalidRule;

use crate::domain::entities::{Employee, GenerationSettings, Violation};

/// One already-committed assignment for the employee under consideration,
/// reduced to the fields the checker actually needs.
#[derive(Debug, Clone, Copy)]
pub struct PriorAssignment {
    pub date: NaiveDate,
    pub start_dt: NaiveDateTime,
    pub end_dt: NaiveDateTime,
}

/// Everything a rule needs to judge one candidate assignment. Built fresh
/// per candidate by the distribution manager; a rule consults no state
/// beyond what's handed to it here.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentContext<'a> {
    pub employee: Option<&'a Employee>,
    pub new_start_dt: NaiveDateTime,
    pub new_end_dt: NaiveDateTime,
    pub prior_assignments: &'a [PriorAssignment],
    pub settings: &'a GenerationSettings,
}

impl<'a> AssignmentContext<'a> {
    /// Total worked minutes within the Monday-Sunday week containing
    /// `new_start_dt`, not counting the new shift itself.
    pub fn prior_minutes_in_week_of(&self, date: NaiveDate) -> i64 {
        let (week_start, week_end) = iso_week_range(date);
        self.prior_assignments
            .iter()
            .filter(|a| a.date >= week_start && a.date <= week_end)
            .map(|a| (a.end_dt - a.start_dt).num_minutes())
            .sum()
    }
}

/// Monday-Sunday range containing `date`, regardless of the horizon's own
/// start day.
pub fn iso_week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    let week_start = date - chrono::Duration::days(days_from_monday);
    let week_end = week_start + chrono::Duration::days(6);
    (week_start, week_end)
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// A single named constraint. Returns every violation it finds rather than
/// stopping at the first — violations are reported, not raised.
pub trait Rule: Send + Sync {
    fn check(&self, context: &AssignmentContext) -> Vec<Violation>;
}

/// Runs every constraint against a candidate assignment and pools the
/// results. Pure: consults no state beyond what's passed in per call.
pub struct ConstraintChecker {
    rules: Vec<Box<dyn Rule>>,
}

impl ConstraintChecker {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ShiftInvalidRule),
                Box::new(ResourceErrorRule),
                Box::new(MaxConsecutiveDaysRule),
                Box::new(MinRestBeforeRule),
                Box::new(MinRestAfterRule),
                Box::new(MaxDailyHoursRule),
                Box::new(MaxWeeklyHoursGroupRule),
                Box::new(MaxWeeklyHoursContractRule),
            ],
        }
    }

    pub fn check(&self, context: &AssignmentContext) -> Vec<Violation> {
        self.rules.iter().flat_map(|rule| rule.check(context)).collect()
    }
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::new()
    }
}
