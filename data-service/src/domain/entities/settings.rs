use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The generation-affecting settings the core consumes (spec §6's settings
/// table). Stored as a single row; `updated_at` tracks the last edit.
///
/// Group caps are keyed by `EmployeeGroup`'s wire form (e.g. `"FULL_TIME"`)
/// rather than the enum itself — `serde_json` can't serialize a non-string
/// enum as a map key, so callers parse with `EmployeeGroup`'s `Deserialize`
/// at lookup time (see `scheduling-service::domain::resources::normalize`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
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

/// The single-row storage shape: the settings blob plus bookkeeping columns.
#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
    pub id: Uuid,
    pub settings: sqlx::types::Json<GenerationSettings>,
    pub updated_at: DateTime<Utc>,
}

impl SettingsRow {
    pub fn into_settings(self) -> GenerationSettings {
        self.settings.0
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub max_consecutive_days: Option<i32>,
    pub min_rest_hours: Option<f64>,
    pub enforce_rest_periods: Option<bool>,
    pub contracted_hours_limit_factor: Option<f64>,
    pub max_weekly_hours_per_group: Option<HashMap<String, f64>>,
    pub max_daily_hours_per_group: Option<HashMap<String, f64>>,
    pub interval_minutes: Option<i32>,
    pub preferred_availability_bonus: Option<f64>,
}

impl UpdateSettingsRequest {
    pub fn apply(self, mut current: GenerationSettings) -> GenerationSettings {
        if let Some(value) = self.max_consecutive_days {
            current.max_consecutive_days = value;
        }
        if let Some(value) = self.min_rest_hours {
            current.min_rest_hours = value;
        }
        if let Some(value) = self.enforce_rest_periods {
            current.enforce_rest_periods = value;
        }
        if let Some(value) = self.contracted_hours_limit_factor {
            current.contracted_hours_limit_factor = value;
        }
        if let Some(value) = self.max_weekly_hours_per_group {
            current.max_weekly_hours_per_group = value;
        }
        if let Some(value) = self.max_daily_hours_per_group {
            current.max_daily_hours_per_group = value;
        }
        if let Some(value) = self.interval_minutes {
            current.interval_minutes = value;
        }
        if let Some(value) = self.preferred_availability_bonus {
            current.preferred_availability_bonus = value;
        }
        current
    }
}
