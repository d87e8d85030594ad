use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The generation-affecting settings, mirrored from the data service's
/// `GenerationSettings` shape. Group caps are keyed by `EmployeeGroup`'s wire
/// form (e.g. `"FULL_TIME"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub max_consecutive_days: i32,
    pub min_rest_hours: f64,
    pub enforce_rest_periods: bool,
    pub contracted_hours_limit_factor: f64,
    pub max_weekly_hours_per_group: HashMap<String, f64>,
    pub max_daily_hours_per_group: HashMap<String, f64>,
    pub interval_minutes: i32,
    pub preferred_availability_bonus: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_consecutive_days: 7,
            min_rest_hours: 11.0,
            enforce_rest_periods: true,
            contracted_hours_limit_factor: 1.2,
            max_weekly_hours_per_group: HashMap::new(),
            max_daily_hours_per_group: HashMap::new(),
            interval_minutes: 60,
            preferred_availability_bonus: 0.2,
        }
    }
}
