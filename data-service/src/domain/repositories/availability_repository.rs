use async_trait::async_trait;
use chrono::NaiveDate;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{Availability, CreateAvailabilityRequest, UpdateAvailabilityRequest};

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn create(&self, request: CreateAvailabilityRequest) -> DomainResult<Availability>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Availability>>;

    async fn list_by_employee(&self, employee_id: Uuid) -> DomainResult<Vec<Availability>>;

    /// Records relevant to any weekday in `[start, end]` — used by the
    /// snapshot endpoint. Weekly patterns recur, so this returns all
    /// records (day-of-week has no notion of a calendar range) but exists
    /// as its own method to mirror the other snapshot-feeding queries and
    /// leave room for a future per-horizon override table.
    async fn list_relevant_to_horizon(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Availability>>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateAvailabilityRequest,
    ) -> DomainResult<Availability>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
