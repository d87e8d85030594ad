use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{DomainResult, VersionStatus};

use crate::domain::entities::{Assignment, Version};

/// The version store: schedule versions and the assignments belonging to
/// them. Every write that touches more than one row is transactional.
#[async_trait]
pub trait VersionRepository: Send + Sync {
    /// Reserves the next version number for `[horizon_start, horizon_end]`
    /// and inserts the `DRAFT` row. Does not write assignments.
    async fn allocate_version(
        &self,
        horizon_start: NaiveDate,
        horizon_end: NaiveDate,
        base_version: Option<i64>,
        notes: Option<String>,
    ) -> DomainResult<Version>;

    /// Replaces every assignment belonging to `version` with `assignments`
    /// in one transaction (delete-then-insert). Refuses once the version has
    /// left `DRAFT` — published assignments are immutable.
    async fn persist_assignments(&self, version: i64, assignments: Vec<Assignment>) -> DomainResult<()>;

    /// Updates a version's free-text notes. Unlike `persist_assignments`,
    /// callable regardless of the version's current status.
    async fn set_notes(&self, version: i64, notes: Option<String>) -> DomainResult<Version>;

    async fn get_version(&self, version: i64) -> DomainResult<Option<Version>>;

    async fn list_versions(&self, horizon_start: Option<NaiveDate>, horizon_end: Option<NaiveDate>) -> DomainResult<Vec<Version>>;

    async fn list_assignments(&self, version: i64) -> DomainResult<Vec<Assignment>>;

    /// Errors with `DomainError::InvalidStatusTransition` if `next` is not
    /// reachable from the version's current status.
    async fn set_status(&self, version: i64, next: VersionStatus) -> DomainResult<Version>;

    /// Copies `source`'s assignments into a freshly allocated `DRAFT`
    /// version over the same horizon.
    async fn duplicate(&self, source: i64, notes: Option<String>) -> DomainResult<Version>;

    /// Refuses to delete a `PUBLISHED` version unless `force` is set.
    async fn delete(&self, version: i64, force: bool) -> DomainResult<()>;

    /// Versions whose horizon overlaps `[horizon_start, horizon_end]`, used
    /// by the generation lock to detect concurrent overlapping runs.
    async fn list_overlapping(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<Vec<Version>>;
}
