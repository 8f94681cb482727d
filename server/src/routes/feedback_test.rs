use super::*;

#[test]
fn validation_errors_map_to_bad_request() {
    assert_eq!(feedback_error_to_status(&FeedbackError::NoAnswers), StatusCode::BAD_REQUEST);
    assert_eq!(
        feedback_error_to_status(&FeedbackError::TooManyAnswers { given: 9, max: 5 }),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        feedback_error_to_status(&FeedbackError::AnswerTooLong { index: 0, max: 4000 }),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn database_error_maps_to_internal_error() {
    let err = FeedbackError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(feedback_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn request_accepts_either_request_id_spelling() {
    let snake: FeedbackRequest = serde_json::from_str(r#"{"request_id":"a","answers":[]}"#).unwrap();
    let camel: FeedbackRequest = serde_json::from_str(r#"{"requestId":"b","answers":[]}"#).unwrap();
    let none: FeedbackRequest = serde_json::from_str(r#"{"answers":["x"]}"#).unwrap();
    assert_eq!(snake.request_id.as_deref(), Some("a"));
    assert_eq!(camel.request_id.as_deref(), Some("b"));
    assert_eq!(none.request_id, None);
}

#[test]
fn rate_limited_response_sets_retry_after_header() {
    let response = rate_limited_response(42);
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "42");
}
