// tests/support/helpers.rs
use super::builders;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use statuspage_extras::application::services::ApplicationServices;
use statuspage_extras::domain::{
    changelog::ChangeRecordRepository, content_type::ContentTypeRepository,
    user::AccountDirectory,
};
use statuspage_extras::infrastructure::repositories::{
    InMemoryAccountDirectory, InMemoryChangeRecordRepository, InMemoryContentTypeRepository,
};
use statuspage_extras::presentation::http::{
    middleware::RequestBudget,
    routes::{RouterSettings, build_router, build_router_with_settings},
    state::HttpState,
};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_services() -> Arc<ApplicationServices> {
    let change_repo: Arc<dyn ChangeRecordRepository> =
        Arc::new(InMemoryChangeRecordRepository::new(builders::change_log()));
    let content_type_repo: Arc<dyn ContentTypeRepository> =
        Arc::new(InMemoryContentTypeRepository::new(builders::content_types()));
    let accounts: Arc<dyn AccountDirectory> =
        Arc::new(InMemoryAccountDirectory::new(builders::accounts()));

    Arc::new(ApplicationServices::new(change_repo, content_type_repo, accounts))
}

pub fn make_test_router() -> axum::Router {
    build_router(HttpState {
        services: build_services(),
    })
}

pub fn make_test_router_with_budget(budget: RequestBudget) -> axum::Router {
    build_router_with_settings(
        HttpState {
            services: build_services(),
        },
        RouterSettings {
            budget,
            ..RouterSettings::default()
        },
    )
}

/// Issue a GET and return the status with the decoded JSON body.
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

pub fn item_ids(json: &Value) -> Vec<i64> {
    json.get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("id").and_then(Value::as_i64))
                .collect()
        })
        .unwrap_or_default()
}

/// Assert an ErrorResponse body with the expected status and error string.
pub fn assert_error_response(
    status: StatusCode,
    json: &Value,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(status, expected_status, "body: {json}");
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
