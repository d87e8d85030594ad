use serde::{Deserialize, Serialize};
use shared::EmployeeGroup;
use uuid::Uuid;

/// Roster entry as served by the data service's snapshot endpoint. The
/// roster is treated as immutable for the duration of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub group: EmployeeGroup,
    pub contracted_hours: f64,
    pub is_keyholder: bool,
    pub is_active: bool,
}

impl Employee {
    /// The group's wire-form key (e.g. `"FULL_TIME"`), as used by settings'
    /// per-group hour caps — `serde_json` can't serialize a non-string enum
    /// as a map key, so caps are keyed by string at the settings boundary.
    pub fn group_key(&self) -> String {
        serde_json::to_value(self.group)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    }
}
