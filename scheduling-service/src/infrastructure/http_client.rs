use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::cache::{cache_keys, cache_ttl, get_cached, set_cached};
use shared::{ApiResponse, DomainError, DomainResult};
use tracing::warn;

use crate::domain::entities::{Absence, Availability, CoverageRequirement, Employee, GenerationSettings, ShiftTemplate};
use crate::domain::resources::{ResourceLoader, Snapshot};
use crate::infrastructure::redis::RedisPool;

/// Wire shape of the data service's `GET /api/v1/snapshot` response. Mirrors
/// `data-service::domain::entities::SnapshotResponse` field for field; kept
/// as a separate type rather than a shared crate dependency since the two
/// services are independently deployable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotWire {
    pub horizon_start: NaiveDate,
    pub horizon_end: NaiveDate,
    pub employees: Vec<Employee>,
    pub shift_templates: Vec<ShiftTemplate>,
    pub coverage: Vec<CoverageRequirement>,
    pub availability: Vec<Availability>,
    pub absences: Vec<Absence>,
    pub settings: GenerationSettings,
}

/// Fetches the resource snapshot for a horizon from the data service over
/// HTTP, cache-aside through Redis. This crate's own Postgres database holds
/// only the version store — resource data lives entirely in the data
/// service.
pub struct DataServiceClient {
    base_url: String,
    client: reqwest::Client,
    redis: RedisPool,
}

impl DataServiceClient {
    pub fn new(base_url: String, timeout: std::time::Duration, redis: RedisPool) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { base_url, client, redis }
    }

    async fn fetch_remote(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<SnapshotWire> {
        let url = format!("{}/api/v1/snapshot", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("start", horizon_start.to_string()), ("end", horizon_end.to_string())])
            .send()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalServiceError(format!(
                "data service returned {status}: {error_text}"
            )));
        }

        let api_response = response
            .json::<ApiResponse<SnapshotWire>>()
            .await
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        Ok(api_response.data)
    }
}

#[async_trait]
impl ResourceLoader for DataServiceClient {
    async fn load(&self, horizon_start: NaiveDate, horizon_end: NaiveDate) -> DomainResult<Snapshot> {
        let cache_key = cache_keys::snapshot(horizon_start, horizon_end);
        let mut redis_conn = self.redis.clone();

        let wire = match get_cached::<SnapshotWire>(&mut redis_conn, &cache_key).await {
            Some(cached) => cached,
            None => {
                let fetched = self.fetch_remote(horizon_start, horizon_end).await?;
                set_cached(&mut redis_conn, &cache_key, &fetched, cache_ttl::SNAPSHOT).await;
                fetched
            }
        };

        if wire.horizon_start != horizon_start || wire.horizon_end != horizon_end {
            warn!(
                requested_start = %horizon_start,
                requested_end = %horizon_end,
                returned_start = %wire.horizon_start,
                returned_end = %wire.horizon_end,
                "data service returned a snapshot for a different horizon than requested"
            );
        }

        Snapshot::assemble(
            horizon_start,
            horizon_end,
            wire.employees,
            wire.shift_templates,
            wire.coverage,
            wire.availability,
            wire.absences,
            wire.settings,
        )
    }
}
