use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::{Identifiable, Timestamped};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A contiguous date range during which an employee is unavailable
/// regardless of their weekly availability pattern (vacation, sick leave).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Absence {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for Absence {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Timestamped for Absence {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAbsenceRequest {
    pub employee_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAbsenceRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AbsenceResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl From<Absence> for AbsenceResponse {
    fn from(absence: Absence) -> Self {
        Self {
            id: absence.id,
            employee_id: absence.employee_id,
            start_date: absence.start_date,
            end_date: absence.end_date,
            reason: absence.reason,
        }
    }
}
