use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use vehicle_registry::config::EnvironmentConfig;
use vehicle_registry::repositories::InMemoryVehicleRepository;
use vehicle_registry::routes::create_app_router;
use vehicle_registry::state::AppState;

// Función helper para crear la app de test
fn create_test_app() -> Router {
    let repository = Arc::new(InMemoryVehicleRepository::new());
    create_app_router(AppState::new(repository, EnvironmentConfig::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn gol() -> Value {
    json!({
        "licensePlate": "abc1d23",
        "vin": "9BWZZZ377VT004251",
        "renavam": "12345678901",
        "model": "Gol",
        "make": "Volkswagen",
        "modelYear": 2020
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_crud_flow() {
    let app = create_test_app();

    let (status, created) = send(&app, "POST", "/vehicles", Some(gol())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["licensePlate"], "ABC1D23");
    assert_eq!(created["modelYear"], 2020);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(&app, "GET", &format!("/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/vehicles/{}", id),
        Some(json!({ "model": "Polo", "modelYear": 2021 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["model"], "Polo");
    assert_eq!(updated["modelYear"], 2021);
    assert_eq!(updated["vin"], "9BWZZZ377VT004251");

    let (status, list) = send(&app, "GET", "/vehicles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, "DELETE", &format!("/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_license_plate_is_conflict() {
    let app = create_test_app();
    send(&app, "POST", "/vehicles", Some(gol())).await;

    let mut second = gol();
    second["vin"] = json!("9BWZZZ377VT004252");
    let (status, body) = send(&app, "POST", "/vehicles", Some(second)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["details"]["field"], "licensePlate");
    assert_eq!(body["details"]["value"], "ABC1D23");
}

#[tokio::test]
async fn test_domain_validation_error_is_bad_request() {
    let app = create_test_app();
    let mut invalid = gol();
    invalid["vin"] = json!("9BWZZZ377VT00425I");

    let (status, body) = send(&app, "POST", "/vehicles", Some(invalid)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "vin");
    assert_eq!(
        body["message"],
        "Invalid VIN format. Expected 17 alphanumeric characters (excluding I, O, Q)"
    );
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = create_test_app();
    let mut invalid = gol();
    invalid["modelYear"] = json!("2020");

    let (status, body) = send(&app, "POST", "/vehicles", Some(invalid)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_vehicle_update_and_delete() {
    let app = create_test_app();

    let (status, _) = send(&app, "PUT", "/vehicles/999", Some(json!({ "model": "Polo" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/vehicles/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Vehicle with ID 999 not found");
}
