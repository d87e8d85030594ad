use async_trait::async_trait;
use shared::DomainResult;
use uuid::Uuid;

use crate::domain::entities::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, request: CreateEmployeeRequest) -> DomainResult<Employee>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Employee>>;

    async fn list(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Employee>, u64)>;

    /// Active employees only, unpaginated — used by the snapshot endpoint.
    async fn list_active(&self) -> DomainResult<Vec<Employee>>;

    async fn update(&self, id: Uuid, request: UpdateEmployeeRequest) -> DomainResult<Employee>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
