use shared::AvailabilityCategory;

use crate::domain::entities::{CoverageRequirement, Employee, GenerationSettings, ShiftTemplate};

use super::RunningState;

const KEYHOLDER_MATCH_BONUS: f64 = 150.0;
const KEYHOLDER_MISSING_PENALTY: f64 = -1000.0;
const GROUP_MATCH_BONUS: f64 = 75.0;
const GROUP_MISMATCH_PENALTY: f64 = -750.0;
const DESIRABILITY_WEIGHT: f64 = 5.0;
const HISTORY_PENALTY_PER_SHIFT: f64 = 5.0;
const OVERSTAFFING_PENALTY: f64 = -50.0;

fn availability_base(category: AvailabilityCategory) -> f64 {
    match category {
        AvailabilityCategory::Fixed => 100.0,
        AvailabilityCategory::Preferred => 50.0,
        AvailabilityCategory::Available => 10.0,
        AvailabilityCategory::Unavailable => f64::NEG_INFINITY,
    }
}

/// How unpleasant a shift category is, higher means less desirable. Open
/// coded per category name rather than data-driven since the category set
/// is small and fixed.
fn base_desirability(shift_type: &str) -> f64 {
    match shift_type.to_ascii_lowercase().as_str() {
        "night" => 3.0,
        "closing" | "late" | "evening" => 2.0,
        _ => 1.0,
    }
}

fn keyholder_term(coverage: &CoverageRequirement, employee: &Employee, interval_start: crate::domain::time::ShiftTime) -> f64 {
    if !coverage.requires_keyholder || !coverage.keyholder_window_covers(interval_start) {
        return 0.0;
    }
    if employee.is_keyholder {
        KEYHOLDER_MATCH_BONUS
    } else {
        KEYHOLDER_MISSING_PENALTY
    }
}

fn group_term(coverage: &CoverageRequirement, employee: &Employee) -> f64 {
    if coverage.allowed_groups.is_empty() {
        return 0.0;
    }
    if coverage.allows_group(employee.group) {
        GROUP_MATCH_BONUS
    } else {
        GROUP_MISMATCH_PENALTY
    }
}

fn overstaffing_term(
    template: &ShiftTemplate,
    coverage: &CoverageRequirement,
    state: &RunningState,
    date: chrono::NaiveDate,
    target_interval: crate::domain::time::ShiftTime,
) -> f64 {
    let Ok(grid) = crate::domain::time::IntervalGrid::new(60) else {
        return 0.0;
    };
    let Ok(intervals) = grid.intervals_for_range(template.start(), template.end()) else {
        return 0.0;
    };
    intervals
        .into_iter()
        .filter(|&interval| interval != target_interval)
        .filter(|&interval| state.is_fully_staffed(date, interval, coverage.max_employees))
        .count() as f64
        * OVERSTAFFING_PENALTY
}

/// The multi-term candidate score. Pure given its inputs; each term is a
/// small named function so it stays independently testable.
#[allow(clippy::too_many_arguments)]
pub fn score(
    employee: &Employee,
    template: &ShiftTemplate,
    coverage: &CoverageRequirement,
    availability: AvailabilityCategory,
    date: chrono::NaiveDate,
    interval_start: crate::domain::time::ShiftTime,
    state: &RunningState,
    settings: &GenerationSettings,
) -> f64 {
    let base = availability_base(availability);
    if base.is_infinite() {
        return base;
    }

    let history_penalty = state.category_count(employee.id, &template.shift_type) as f64 * HISTORY_PENALTY_PER_SHIFT;
    let preference_adjustment = if availability == AvailabilityCategory::Preferred {
        settings.preferred_availability_bonus * 10.0
    } else {
        0.0
    };

    base + keyholder_term(coverage, employee, interval_start)
        + group_term(coverage, employee)
        - base_desirability(&template.shift_type) * DESIRABILITY_WEIGHT
        - history_penalty
        + preference_adjustment
        + overstaffing_term(template, coverage, state, date, interval_start)
}
