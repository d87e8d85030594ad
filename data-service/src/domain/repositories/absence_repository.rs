use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{Absence, CreateAbsenceRequest, UpdateAbsenceRequest};

#[async_trait]
pub trait AbsenceRepository: Send + Sync {
    async fn create(&self, request: CreateAbsenceRequest) -> DomainResult<Absence>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Absence>>;

    async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Absence>>;

    /// Absences intersecting `[start, end]` — used by the snapshot endpoint.
    async fn list_intersecting(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<Vec<Absence>>;

    async fn update(&self, id: Uuid, request: UpdateAbsenceRequest) -> DomainResult<Absence>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
