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
        title = "Data Service API",
        version = "1.0.0",
        description = "Employee, shift template, coverage, availability, absence and settings management for the scheduling engine"
    ),
    paths(
        handlers::employee_handlers::create_employee,
        handlers::employee_handlers::get_employee_by_id,
        handlers::employee_handlers::list_employees,
        handlers::employee_handlers::update_employee,
        handlers::employee_handlers::delete_employee,
        handlers::shift_template_handlers::create_shift_template,
        handlers::shift_template_handlers::get_shift_template_by_id,
        handlers::shift_template_handlers::list_shift_templates,
        handlers::shift_template_handlers::update_shift_template,
        handlers::shift_template_handlers::delete_shift_template,
        handlers::coverage_handlers::create_coverage,
        handlers::coverage_handlers::get_coverage_by_id,
        handlers::coverage_handlers::list_coverage,
        handlers::coverage_handlers::update_coverage,
        handlers::coverage_handlers::delete_coverage,
        handlers::availability_handlers::create_availability,
        handlers::availability_handlers::list_availability_for_employee,
        handlers::availability_handlers::update_availability,
        handlers::availability_handlers::delete_availability,
        handlers::absence_handlers::create_absence,
        handlers::absence_handlers::list_absences_for_employee,
        handlers::absence_handlers::update_absence,
        handlers::absence_handlers::delete_absence,
        handlers::settings_handlers::get_settings,
        handlers::settings_handlers::update_settings,
        handlers::snapshot_handlers::get_snapshot,
    ),
    components(schemas(
        shared::PaginationParams,
        shared::EmployeeGroup,
        shared::AvailabilityCategory,
        crate::domain::entities::Employee,
        crate::domain::entities::EmployeeResponse,
        crate::domain::entities::CreateEmployeeRequest,
        crate::domain::entities::UpdateEmployeeRequest,
        crate::domain::entities::ShiftTemplate,
        crate::domain::entities::ShiftTemplateResponse,
        crate::domain::entities::CreateShiftTemplateRequest,
        crate::domain::entities::UpdateShiftTemplateRequest,
        crate::domain::entities::CoverageRequirement,
        crate::domain::entities::CoverageResponse,
        crate::domain::entities::CreateCoverageRequest,
        crate::domain::entities::UpdateCoverageRequest,
        crate::domain::entities::Availability,
        crate::domain::entities::AvailabilityResponse,
        crate::domain::entities::CreateAvailabilityRequest,
        crate::domain::entities::UpdateAvailabilityRequest,
        crate::domain::entities::Absence,
        crate::domain::entities::AbsenceResponse,
        crate::domain::entities::CreateAbsenceRequest,
        crate::domain::entities::UpdateAbsenceRequest,
        crate::domain::entities::GenerationSettings,
        crate::domain::entities::UpdateSettingsRequest,
        crate::domain::entities::SnapshotResponse,
    )),
    tags(
        (name = "employees", description = "Employee management endpoints"),
        (name = "shift_templates", description = "Shift template management endpoints"),
        (name = "coverage", description = "Coverage requirement management endpoints"),
        (name = "availability", description = "Employee availability management endpoints"),
        (name = "absences", description = "Employee absence management endpoints"),
        (name = "settings", description = "Generation settings endpoints"),
        (name = "snapshot", description = "Resource snapshot endpoint consumed by the scheduling engine"),
    )
)]
struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let employee_routes = Router::new()
        .route(
            "/employees",
            get(handlers::employee_handlers::list_employees)
                .post(handlers::employee_handlers::create_employee),
        )
        .route(
            "/employees/:id",
            get(handlers::employee_handlers::get_employee_by_id)
                .put(handlers::employee_handlers::update_employee)
                .delete(handlers::employee_handlers::delete_employee),
        )
        .route(
            "/employees/:id/availability",
            get(handlers::availability_handlers::list_availability_for_employee),
        )
        .route(
            "/employees/:id/absences",
            get(handlers::absence_handlers::list_absences_for_employee),
        );

    let shift_template_routes = Router::new()
        .route(
            "/shift-templates",
            get(handlers::shift_template_handlers::list_shift_templates)
                .post(handlers::shift_template_handlers::create_shift_template),
        )
        .route(
            "/shift-templates/:id",
            get(handlers::shift_template_handlers::get_shift_template_by_id)
                .put(handlers::shift_template_handlers::update_shift_template)
                .delete(handlers::shift_template_handlers::delete_shift_template),
        );

    let coverage_routes = Router::new()
        .route(
            "/coverage",
            get(handlers::coverage_handlers::list_coverage)
                .post(handlers::coverage_handlers::create_coverage),
        )
        .route(
            "/coverage/:id",
            get(handlers::coverage_handlers::get_coverage_by_id)
                .put(handlers::coverage_handlers::update_coverage)
                .delete(handlers::coverage_handlers::delete_coverage),
        );

    let availability_routes = Router::new()
        .route(
            "/availability",
            post(handlers::availability_handlers::create_availability),
        )
        .route(
            "/availability/:id",
            put(handlers::availability_handlers::update_availability)
                .delete(handlers::availability_handlers::delete_availability),
        );

    let absence_routes = Router::new()
        .route("/absences", post(handlers::absence_handlers::create_absence))
        .route(
            "/absences/:id",
            put(handlers::absence_handlers::update_absence)
                .delete(handlers::absence_handlers::delete_absence),
        );

    let settings_routes = Router::new().route(
        "/settings",
        get(handlers::settings_handlers::get_settings)
            .put(handlers::settings_handlers::update_settings),
    );

    let snapshot_routes =
        Router::new().route("/snapshot", get(handlers::snapshot_handlers::get_snapshot));

    let api_router = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(employee_routes)
        .merge(shift_template_routes)
        .merge(coverage_routes)
        .merge(availability_routes)
        .merge(absence_routes)
        .merge(settings_routes)
        .merge(snapshot_routes);

    Router::new()
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
