use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{handlers, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Service API",
        version = "1.0.0",
        description = "Shift schedule generation and version lifecycle management"
    ),
    paths(
        handlers::schedule_handlers::generate_schedule,
        handlers::schedule_handlers::list_schedule_assignments,
        handlers::version_handlers::allocate_version,
        handlers::version_handlers::set_version_status,
        handlers::version_handlers::set_version_notes,
        handlers::version_handlers::duplicate_version,
        handlers::version_handlers::delete_version,
    ),
    components(schemas(
        shared::VersionStatus,
        shared::AvailabilityCategory,
        crate::domain::entities::Version,
        crate::domain::entities::Assignment,
        crate::domain::resources::Warning,
        crate::api::requests::GenerateScheduleRequest,
        crate::api::requests::GenerateScheduleResponse,
        crate::api::requests::AllocateVersionRequest,
        crate::api::requests::SetStatusRequest,
        crate::api::requests::SetNotesRequest,
        crate::api::requests::DuplicateVersionRequest,
    )),
    tags(
        (name = "schedules", description = "Schedule generation and assignment retrieval"),
        (name = "versions", description = "Schedule version lifecycle management"),
    )
)]
struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let schedule_routes = Router::new()
        .route("/schedules/generate", post(handlers::schedule_handlers::generate_schedule))
        .route("/schedules", get(handlers::schedule_handlers::list_schedule_assignments));

    let version_routes = Router::new()
        .route("/schedules/version", post(handlers::version_handlers::allocate_version))
        .route("/schedules/version/duplicate", post(handlers::version_handlers::duplicate_version))
        .route(
            "/schedules/versions/:v/status",
            put(handlers::version_handlers::set_version_status),
        )
        .route(
            "/schedules/versions/:v/notes",
            put(handlers::version_handlers::set_version_notes),
        )
        .route(
            "/schedules/versions/:v",
            axum::routing::delete(handlers::version_handlers::delete_version),
        );

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(schedule_routes)
        .merge(version_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
