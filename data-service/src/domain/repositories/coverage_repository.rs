use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{CoverageRequirement, CreateCoverageRequest, UpdateCoverageRequest};

#[async_trait]
pub trait CoverageRepository: Send + Sync {
    async fn create(&self, request: CreateCoverageRequest) -> DomainResult<CoverageRequirement>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<CoverageRequirement>>;

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<CoverageRequirement>, u64)>;

    /// All coverage rows, unpaginated — used by the snapshot endpoint.
    async fn list_all(&self) -> DomainResult<Vec<CoverageRequirement>>;

    async fn update(
        &self,
        id: Uuid,
        request: UpdateCoverageRequest,
    ) -> DomainResult<CoverageRequirement>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
