mod api;
mod domain;
mod infrastructure;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::generator::{GenerationLock, ScheduleGenerator};
use domain::repositories::VersionRepository;
use domain::resources::ResourceLoader;
use infrastructure::{
    config::Settings,
    database,
    http_client::DataServiceClient,
    redis,
    repositories::PostgresVersionRepository,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheduling_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scheduling Service...");

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    // Initialize database pool (version store only — resource data lives in the data service)
    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize Redis connection
    let redis_pool = redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    // Initialize repositories and the data service client
    let version_repository: Arc<dyn VersionRepository> =
        Arc::new(PostgresVersionRepository::new(db_pool.clone()));
    let resource_loader: Arc<dyn ResourceLoader> = Arc::new(DataServiceClient::new(
        settings.data_service.url.clone(),
        Duration::from_secs(settings.data_service.timeout_seconds),
        redis_pool.clone(),
    ));

    tracing::info!("Repositories initialized");

    // Initialize services
    let generator = Arc::new(ScheduleGenerator::new(resource_loader, version_repository.clone()));
    let generation_lock = Arc::new(GenerationLock::new());

    tracing::info!("Services initialized");

    // Create application state
    let app_state = AppState::new(version_repository, generator, generation_lock, redis_pool);

    // Create router
    let app = api::create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Scheduling Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
