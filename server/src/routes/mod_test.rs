use super::*;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::rate_limit::RateLimitConfig;
use crate::services::feedback::QUESTIONS;
use crate::services::health::UNHEALTHY_MESSAGE;
use crate::state::test_helpers;

async fn send(router: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = router.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, headers, json)
}

fn post_feedback(body: &serde_json::Value, client: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/feedback")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let router = api_routes(test_helpers::test_app_state());
    let request = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let (status, _, _) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let router = api_routes(test_helpers::test_app_state());
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, _, json) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["message"], UNHEALTHY_MESSAGE);
    assert_eq!(json["failures"]["database_check"], false);
}

// =============================================================================
// Feedback
// =============================================================================

#[tokio::test]
async fn questions_lists_survey() {
    let router = api_routes(test_helpers::test_app_state());
    let request = Request::builder().uri("/api/feedback/questions").body(Body::empty()).unwrap();
    let (status, _, json) = send(router, request).await;
    assert_eq!(status, StatusCode::OK);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), QUESTIONS.len());
    assert_eq!(questions[0], QUESTIONS[0]);
}

#[tokio::test]
async fn blank_feedback_is_bad_request() {
    let router = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({"request_id": "r1", "answers": ["", "  "]});
    let (status, _, json) = send(router, post_feedback(&body, "203.0.113.1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "at least one answer is required");
}

#[tokio::test]
async fn invalid_feedback_does_not_consume_quota() {
    let state = test_helpers::test_app_state_with_limit(RateLimitConfig { limit: 1, window_secs: 86_400 });
    let blank = serde_json::json!({"answers": [""]});
    let (status, _, _) = send(api_routes(state.clone()), post_feedback(&blank, "203.0.113.2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.rate_limiter.check_and_record("203.0.113.2").is_ok());
}

#[tokio::test]
async fn database_failure_is_internal_error() {
    let router = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({"requestId": "r2", "answers": ["the sidebar"]});
    let (status, _, json) = send(router, post_feedback(&body, "203.0.113.3")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "Could not record feedback.");
}

#[tokio::test]
async fn exhausted_quota_is_too_many_requests() {
    let state = test_helpers::test_app_state_with_limit(RateLimitConfig { limit: 1, window_secs: 86_400 });
    state.rate_limiter.check_and_record("203.0.113.4").unwrap();

    let body = serde_json::json!({"answers": ["again"]});
    let (status, headers, json) = send(api_routes(state), post_feedback(&body, "203.0.113.4")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["detail"], feedback::RATE_LIMITED_DETAIL);
    let retry_after = json["retry_after"].as_u64().unwrap();
    assert!(retry_after >= 1 && retry_after <= 86_400);
    let header_value = headers.get(header::RETRY_AFTER).unwrap().to_str().unwrap();
    assert_eq!(header_value, retry_after.to_string());
}

#[tokio::test]
async fn quota_is_per_client() {
    let state = test_helpers::test_app_state_with_limit(RateLimitConfig { limit: 1, window_secs: 86_400 });
    state.rate_limiter.check_and_record("203.0.113.5").unwrap();

    let body = serde_json::json!({"answers": ["hello"]});
    let (status, _, _) = send(api_routes(state), post_feedback(&body, "203.0.113.6")).await;
    // Passes the limiter, then fails on the unreachable database.
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
