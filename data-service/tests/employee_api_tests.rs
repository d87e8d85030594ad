//! Employee API integration tests

#[path = "common/mod.rs"]
mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{
    create_mock_redis_pool, create_sample_employee, create_test_app_state,
    MockAbsenceRepository, MockAvailabilityRepository, MockCoverageRepository,
    MockEmployeeRepository, MockSettingsRepository, MockShiftTemplateRepository,
};
use data_service::api::create_router;
use serde_json::json;
use shared::EmployeeGroup;
use std::sync::Arc;
use uuid::Uuid;

async fn setup_test_server() -> TestServer {
    setup_test_server_with_employees(vec![]).await
}

async fn setup_test_server_with_employees(
    employees: Vec<data_service::domain::entities::Employee>,
) -> TestServer {
    let employee_repo = Arc::new(MockEmployeeRepository::with_employees(employees));
    let shift_template_repo = Arc::new(MockShiftTemplateRepository::new());
    let coverage_repo = Arc::new(MockCoverageRepository::new());
    let availability_repo = Arc::new(MockAvailabilityRepository::new());
    let absence_repo = Arc::new(MockAbsenceRepository::new());
    let settings_repo = Arc::new(MockSettingsRepository::new());
    let redis_pool = create_mock_redis_pool().await;

    let state = create_test_app_state(
        employee_repo,
        shift_template_repo,
        coverage_repo,
        availability_repo,
        absence_repo,
        settings_repo,
        redis_pool,
    );
    let app = create_router(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = setup_test_server().await;

    let response = server.get("/api/v1/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_employee_success() {
    let server = setup_test_server().await;

    let request_body = json!({
        "name": "Alice Keyholder",
        "group": "FULL_TIME",
        "contracted_hours": 40.0,
        "is_keyholder": true
    });

    let response = server.post("/api/v1/employees").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Alice Keyholder");
    assert_eq!(body["data"]["group"], "FULL_TIME");
    assert_eq!(body["data"]["is_keyholder"], true);
    assert_eq!(body["data"]["is_active"], true);
}

#[tokio::test]
async fn test_create_employee_defaults_active_true() {
    let server = setup_test_server().await;

    let request_body = json!({
        "name": "Bob Part Time",
        "group": "PART_TIME",
        "contracted_hours": 20.0
    });

    let response = server.post("/api/v1/employees").json(&request_body).await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["is_active"], true);
    assert_eq!(body["data"]["is_keyholder"], false);
}

#[tokio::test]
async fn test_get_employee_by_id_found() {
    let id = Uuid::new_v4();
    let employee = create_sample_employee(id, "Carol", EmployeeGroup::TeamLead);
    let server = setup_test_server_with_employees(vec![employee]).await;

    let response = server.get(&format!("/api/v1/employees/{id}")).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["name"], "Carol");
}

#[tokio::test]
async fn test_get_employee_by_id_not_found() {
    let server = setup_test_server().await;

    let response = server.get(&format!("/api/v1/employees/{}", Uuid::new_v4())).await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_employees() {
    let employees = vec![
        create_sample_employee(Uuid::new_v4(), "Dana", EmployeeGroup::FullTime),
        create_sample_employee(Uuid::new_v4(), "Erik", EmployeeGroup::MiniJob),
    ];
    let server = setup_test_server_with_employees(employees).await;

    let response = server.get("/api/v1/employees?page=1&page_size=10").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_employee_not_found() {
    let server = setup_test_server().await;

    let response = server
        .put(&format!("/api/v1/employees/{}", Uuid::new_v4()))
        .json(&json!({ "contracted_hours": 35.0 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_employee_success() {
    let id = Uuid::new_v4();
    let employee = create_sample_employee(id, "Fay", EmployeeGroup::PartTime);
    let server = setup_test_server_with_employees(vec![employee]).await;

    let response = server
        .put(&format!("/api/v1/employees/{id}"))
        .json(&json!({ "is_active": false }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["is_active"], false);
}

#[tokio::test]
async fn test_delete_employee() {
    let id = Uuid::new_v4();
    let employee = create_sample_employee(id, "Gus", EmployeeGroup::FullTime);
    let server = setup_test_server_with_employees(vec![employee]).await;

    let response = server.delete(&format!("/api/v1/employees/{id}")).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/v1/employees/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}
