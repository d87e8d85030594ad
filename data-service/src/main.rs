mod api;
mod domain;
mod infrastructure;

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::AppState;
use domain::repositories::{
    AbsenceRepository, AvailabilityRepository, CoverageRepository, EmployeeRepository,
    SettingsRepository, ShiftTemplateRepository,
};
use infrastructure::{
    config::Settings,
    database, redis,
    repositories::{
        PostgresAbsenceRepository, PostgresAvailabilityRepository, PostgresCoverageRepository,
        PostgresEmployeeRepository, PostgresSettingsRepository, PostgresShiftTemplateRepository,
    },
    SnapshotService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Data Service...");

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded: {:?}", settings);

    // Initialize database pool
    let db_pool =
        database::create_pool(&settings.database.url, settings.database.max_connections).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize Redis connection
    let redis_pool = redis::create_redis_pool(&settings.redis.url).await?;
    tracing::info!("Redis connection established");

    // Initialize repositories
    let employee_repo: Arc<dyn EmployeeRepository> =
        Arc::new(PostgresEmployeeRepository::new(db_pool.clone()));
    let shift_template_repo: Arc<dyn ShiftTemplateRepository> =
        Arc::new(PostgresShiftTemplateRepository::new(db_pool.clone()));
    let coverage_repo: Arc<dyn CoverageRepository> =
        Arc::new(PostgresCoverageRepository::new(db_pool.clone()));
    let availability_repo: Arc<dyn AvailabilityRepository> =
        Arc::new(PostgresAvailabilityRepository::new(db_pool.clone()));
    let absence_repo: Arc<dyn AbsenceRepository> =
        Arc::new(PostgresAbsenceRepository::new(db_pool.clone()));
    let settings_repo: Arc<dyn SettingsRepository> =
        Arc::new(PostgresSettingsRepository::new(db_pool.clone()));

    tracing::info!("Repositories initialized");

    // Initialize services
    let snapshot_service = Arc::new(SnapshotService::new(
        employee_repo.clone(),
        shift_template_repo.clone(),
        coverage_repo.clone(),
        availability_repo.clone(),
        absence_repo.clone(),
        settings_repo.clone(),
    ));

    tracing::info!("Services initialized");

    // Create application state
    let app_state = AppState::new(
        employee_repo,
        shift_template_repo,
        coverage_repo,
        availability_repo,
        absence_repo,
        settings_repo,
        snapshot_service,
        redis_pool,
    );

    // Create router
    let app = api::create_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(settings.server_address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Data Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
