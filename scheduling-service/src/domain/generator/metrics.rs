use std::collections::HashMap;

use chrono::Timelike;
use uuid::Uuid;

use crate::domain::entities::{Assignment, Employee, ShiftTemplate};
use crate::domain::time::ShiftTime;

/// Run-level metrics handed back alongside the assignment list. `fairness_score`
/// is the coefficient of variation of per-employee hour totals, inverted so
/// higher is better (1.0 = perfectly even distribution, 0.0 = maximally uneven).
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub hours_by_employee: HashMap<Uuid, f64>,
    pub shifts_by_category: HashMap<String, u32>,
    pub fairness_score: f64,
}

impl RunMetrics {
    pub fn compute(assignments: &[Assignment], employees: &[Employee], shift_templates: &[ShiftTemplate]) -> Self {
        let mut hours_by_employee: HashMap<Uuid, f64> = employees.iter().map(|e| (e.id, 0.0)).collect();
        let mut shifts_by_category: HashMap<String, u32> = HashMap::new();

        for assignment in assignments.iter().filter(|a| !a.is_placeholder()) {
            if let (Some(start), Some(end)) = (assignment.start_time, assignment.end_time) {
                let start = ShiftTime::new(start.hour() as u8, start.minute() as u8).unwrap_or(ShiftTime::from_minutes(0));
                let end = ShiftTime::new(end.hour() as u8, end.minute() as u8).unwrap_or(ShiftTime::from_minutes(0));
                let minutes = crate::domain::time::duration_minutes(start, end);
                *hours_by_employee.entry(assignment.employee_id).or_insert(0.0) += minutes as f64 / 60.0;
            }
            if let Some(template) = assignment
                .shift_template_id
                .and_then(|id| shift_templates.iter().find(|t| t.id == id))
            {
                *shifts_by_category.entry(template.shift_type.clone()).or_insert(0) += 1;
            }
        }

        let fairness_score = fairness_score(hours_by_employee.values().copied());

        Self {
            hours_by_employee,
            shifts_by_category,
            fairness_score,
        }
    }
}

fn fairness_score(hours: impl Iterator<Item = f64>) -> f64 {
    let values: Vec<f64> = hours.collect();
    if values.is_empty() {
        return 1.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean == 0.0 {
        return 1.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    let stddev = variance.sqrt();
    let coefficient_of_variation = stddev / mean;
    (1.0 - coefficient_of_variation).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fairness_score_is_perfect_for_equal_hours() {
        assert_eq!(fairness_score(vec![40.0, 40.0, 40.0].into_iter()), 1.0);
    }

    #[test]
    fn fairness_score_drops_for_uneven_hours() {
        let score = fairness_score(vec![40.0, 10.0, 0.0].into_iter());
        assert!(score < 1.0);
    }
}
