//! Feedback survey endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every failure answers with a JSON `{ "detail": ... }` body. Rate-limited
//! requests also carry `retry_after` seconds and a matching `Retry-After`
//! header.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::client_ip::ClientIp;
use crate::rate_limit::RateLimitError;
use crate::services::feedback::{self, FEEDBACK_RECORDED_MESSAGE, FeedbackEntry, FeedbackError, QUESTIONS};
use crate::state::AppState;

pub(crate) const RATE_LIMITED_DETAIL: &str = "Rate limit exceeded. Please try again later.";

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default, alias = "requestId")]
    pub request_id: Option<String>,
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

pub(crate) fn feedback_error_to_status(err: &FeedbackError) -> StatusCode {
    match err {
        FeedbackError::NoAnswers | FeedbackError::TooManyAnswers { .. } | FeedbackError::AnswerTooLong { .. } => {
            StatusCode::BAD_REQUEST
        }
        FeedbackError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn feedback_error_response(err: &FeedbackError) -> Response {
    let detail = match err {
        FeedbackError::Database(_) => "Could not record feedback.".to_owned(),
        other => other.to_string(),
    };
    (feedback_error_to_status(err), Json(ErrorBody { detail, retry_after: None })).into_response()
}

fn rate_limited_response(retry_after: u64) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(ErrorBody { detail: RATE_LIMITED_DETAIL.to_owned(), retry_after: Some(retry_after) }),
    )
        .into_response();
    response
        .headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
    response
}

/// `GET /api/feedback/questions`
pub async fn questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse { questions: &QUESTIONS })
}

/// `POST /api/feedback`
pub async fn submit(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Json(body): Json<FeedbackRequest>,
) -> Response {
    let request_id = body.request_id.as_deref().unwrap_or("-");

    let answers = match feedback::validate_answers(&body.answers) {
        Ok(answers) => answers,
        Err(e) => {
            warn!(%request_id, %client_ip, error = %e, "feedback rejected");
            return feedback_error_response(&e);
        }
    };

    if let Err(RateLimitError::Exceeded { retry_after, .. }) = state.rate_limiter.check_and_record(&client_ip) {
        warn!(
            %request_id,
            %client_ip,
            path = "/api/feedback",
            retry_after,
            rate_limit = %state.rate_limiter.config(),
            "rate limit exceeded"
        );
        return rate_limited_response(retry_after);
    }

    let entry = FeedbackEntry { request_id: body.request_id.clone(), client_ip, answers };
    match feedback::record_feedback(&state.pool, &entry).await {
        Ok(_) => Json(FeedbackResponse { message: FEEDBACK_RECORDED_MESSAGE }).into_response(),
        Err(e) => {
            error!(%request_id, error = %e, "feedback insert failed");
            feedback_error_response(&e)
        }
    }
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
