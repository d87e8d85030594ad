use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{CreateShiftTemplateRequest, ShiftTemplate, UpdateShiftTemplateRequest};

#[async_trait]
pub trait ShiftTemplateRepository: Send + Sync {
    async fn create(&self, request: CreateShiftTemplateRequest) -> DomainResult<ShiftTemplate>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ShiftTemplate>>;

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<ShiftTemplate>, u64)>;

    /// All templates, unpaginated — used by the snapshot endpoint.
    async fn list_all(&self) -> DomainResult<Vec<ShiftTemplate>>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateShiftTemplateRequest,
    ) -> DomainResult<ShiftTemplate>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
