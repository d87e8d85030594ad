use std::sync::Arc;

use crate::domain::generator::{GenerationLock, ScheduleGenerator};
use crate::domain::repositories::VersionRepository;
use crate::infrastructure::redis::RedisPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub version_repository: Arc<dyn VersionRepository>,
    pub generator: Arc<ScheduleGenerator>,
    pub generation_lock: Arc<GenerationLock>,
    pub redis_pool: RedisPool,
}

impl AppState {
    pub fn new(
        version_repository: Arc<dyn VersionRepository>,
        generator: Arc<ScheduleGenerator>,
        generation_lock: Arc<GenerationLock>,
        redis_pool: RedisPool,
    ) -> Self {
        Self {
            version_repository,
            generator,
            generation_lock,
            redis_pool,
        }
    }
}
