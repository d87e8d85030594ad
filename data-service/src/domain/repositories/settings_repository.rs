use async_trait::async_trait;
use shared::DomainResult;

use crate::domain::entities::GenerationSettings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> DomainResult<GenerationSettings>;

    async fn update(&self, settings: GenerationSettings) -> DomainResult<GenerationSettings>;
}
