use super::*;
use crate::routes::extract::PLAN_HEADER;
use crate::state::test_helpers::{TEST_ADMIN_TOKEN, sample_palette, test_app_state};
use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Value, json};
use tower::ServiceExt;

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request")
}

/// Send one request through a fresh clone of `router`; returns status and JSON body.
async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn assert_error(actual: &(StatusCode, Value), status: StatusCode, code: &str) {
    assert_eq!(actual.0, status, "body: {}", actual.1);
    assert_eq!(actual.1["code"], code);
    assert!(actual.1["message"].is_string());
}

#[test]
fn router_builds_without_route_conflicts() {
    let _router = app(test_app_state());
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn catalogs_are_served() {
    let axum::Json(plans) = catalog::list_plans().await;
    assert_eq!(plans.len(), 3);
    let axum::Json(templates) = catalog::list_templates().await;
    assert!(!templates.is_empty());
}

// =============================================================================
// through the router
// =============================================================================

#[tokio::test]
async fn routed_healthz_and_catalogs() {
    let router = app(test_app_state());
    let response = router.clone().oneshot(empty_request("GET", "/healthz")).await.expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);

    let (status, plans) = send(&router, empty_request("GET", "/api/plans")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plans.as_array().map(Vec::len), Some(3));

    let (status, templates) = send(&router, empty_request("GET", "/api/templates")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(templates.as_array().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn roles_route_round_trips_json() {
    let router = app(test_app_state());
    let palette = serde_json::to_value(sample_palette()).expect("encode");
    let (status, roles) = send(&router, json_request("POST", "/api/roles", &palette)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roles["onBrand"], "#FFFFFF");
    assert_eq!(roles["onBg1"], "#000000");
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let router = app(test_app_state());

    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/roles", &json!({ "brand": 1 })))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["code"], "E_INVALID_BODY");

    let syntax = Request::builder()
        .method("POST")
        .uri("/api/contrast")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    assert_error(&send(&router, syntax).await, StatusCode::BAD_REQUEST, "E_INVALID_BODY");

    let untyped = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .body(Body::from(r##"{"color":"#fff"}"##))
        .expect("request");
    assert_error(&send(&router, untyped).await, StatusCode::UNSUPPORTED_MEDIA_TYPE, "E_INVALID_BODY");
}

#[tokio::test]
async fn convert_route_reports_invalid_color() {
    let router = app(test_app_state());
    let result = send(&router, json_request("POST", "/api/convert", &json!({ "color": "teal-ish" }))).await;
    assert_error(&result, StatusCode::UNPROCESSABLE_ENTITY, "E_INVALID_COLOR");
}

#[tokio::test]
async fn generate_honors_plan_header() {
    let router = app(test_app_state());

    let mut request = json_request("POST", "/api/palettes/generate", &json!({ "count": 50 }));
    request.headers_mut().insert(PLAN_HEADER, "pro".parse().expect("header"));
    let (status, batch) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(batch.as_array().map(Vec::len), Some(20));

    let (status, batch) = send(&router, json_request("POST", "/api/palettes/generate", &json!({ "count": 50 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(batch.as_array().map(Vec::len), Some(5));

    let mut request = json_request("POST", "/api/palettes/generate", &json!({}));
    request.headers_mut().insert(PLAN_HEADER, "gold".parse().expect("header"));
    assert_error(&send(&router, request).await, StatusCode::BAD_REQUEST, "E_UNKNOWN_PLAN");
}

#[tokio::test]
async fn saved_palettes_through_the_router() {
    let router = app(test_app_state());
    let body = json!({ "name": "Harbor", "palette": sample_palette(), "templateId": "saas-landing" });
    let (status, created) = send(&router, json_request("POST", "/api/palettes", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_owned();

    let (status, detail) = send(&router, empty_request("GET", &format!("/api/palettes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "Harbor");
    assert_eq!(detail["roles"]["onBrand"], "#FFFFFF");

    let (status, updated) =
        send(&router, json_request("PATCH", &format!("/api/palettes/{id}"), &json!({ "templateId": "" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["templateId"].is_null());

    let response = router
        .clone()
        .oneshot(empty_request("GET", &format!("/api/palettes/{id}/export?format=json")))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-disposition"], "attachment; filename=\"harbor.json\"");

    let (status, deleted) = send(&router, empty_request("DELETE", &format!("/api/palettes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "ok": true }));

    let gone = send(&router, empty_request("GET", &format!("/api/palettes/{id}"))).await;
    assert_error(&gone, StatusCode::NOT_FOUND, "E_NOT_FOUND");
}

#[tokio::test]
async fn bad_path_and_query_get_json_errors() {
    let router = app(test_app_state());
    let bad_id = send(&router, empty_request("GET", "/api/palettes/not-a-uuid")).await;
    assert_error(&bad_id, StatusCode::BAD_REQUEST, "E_INVALID_PATH");

    let body = json!({ "name": "Query", "palette": sample_palette() });
    let (_, created) = send(&router, json_request("POST", "/api/palettes", &body)).await;
    let id = created["id"].as_str().expect("id").to_owned();
    let uri = format!("/api/palettes/{id}/export?format=css&format=json");
    assert_error(&send(&router, empty_request("GET", &uri)).await, StatusCode::BAD_REQUEST, "E_INVALID_QUERY");

    let uri = format!("/api/palettes/{id}/export?format=scss");
    assert_error(&send(&router, empty_request("GET", &uri)).await, StatusCode::FORBIDDEN, "E_PLAN_LIMIT");
}

#[tokio::test]
async fn preset_writes_require_admin_bearer() {
    let router = app(test_app_state());
    let body = json!({ "name": "Routed", "palette": sample_palette() });

    let missing = send(&router, json_request("POST", "/api/presets", &body)).await;
    assert_error(&missing, StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED");

    let mut wrong = json_request("POST", "/api/presets", &body);
    wrong.headers_mut().insert(AUTHORIZATION, "Bearer nope".parse().expect("header"));
    assert_error(&send(&router, wrong).await, StatusCode::FORBIDDEN, "E_FORBIDDEN");

    let bearer = format!("Bearer {TEST_ADMIN_TOKEN}");
    let mut request = json_request("POST", "/api/presets", &body);
    request.headers_mut().insert(AUTHORIZATION, bearer.parse().expect("header"));
    let (status, preset) = send(&router, request).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = preset["id"].as_str().expect("id").to_owned();

    let (status, listed) = send(&router, empty_request("GET", "/api/presets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let mut request = empty_request("DELETE", &format!("/api/presets/{id}"));
    request.headers_mut().insert(AUTHORIZATION, bearer.parse().expect("header"));
    let (status, deleted) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "ok": true }));
}
