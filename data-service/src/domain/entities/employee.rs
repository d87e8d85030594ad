use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{EmployeeGroup, Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Employee entity. The roster is treated as immutable during one
/// generation run; updates happen outside the core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub group: EmployeeGroup,
    pub contracted_hours: f64,
    pub is_keyholder: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Employee {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub group: EmployeeGroup,
    pub contracted_hours: f64,
    #[serde(default)]
    pub is_keyholder: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub group: Option<EmployeeGroup>,
    pub contracted_hours: Option<f64>,
    pub is_keyholder: Option<bool>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub name: String,
    pub group: EmployeeGroup,
    pub contracted_hours: f64,
    pub is_keyholder: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            group: employee.group,
            contracted_hours: employee.contracted_hours,
            is_keyholder: employee.is_keyholder,
            is_active: employee.is_active,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}
