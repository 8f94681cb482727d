//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! request degrades to a toast. Error strings prefer the server's `detail`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{FeedbackAck, FeedbackQuestions, FeedbackSubmission};

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Render a retry delay as the largest two units (`"2h 5m"`, `"40s"`).
#[cfg(any(test, feature = "hydrate"))]
fn format_retry_after(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    match (h, m) {
        (0, 0) => format!("{s}s"),
        (0, _) => format!("{m}m {s}s"),
        _ => format!("{h}h {m}m"),
    }
}

/// Build the user-facing message for a failed API response.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(what: &str, status: u16, body: Option<ApiErrorBody>) -> String {
    match body {
        Some(ApiErrorBody { detail, retry_after: Some(secs) }) => {
            format!("{detail} Try again in {}.", format_retry_after(secs))
        }
        Some(ApiErrorBody { detail, retry_after: None }) => detail,
        None => request_failed_message(what, status),
    }
}

/// Fetch the survey questions from `GET /api/feedback/questions`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_feedback_questions() -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/feedback/questions")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(error_message("questions request", status, resp.json().await.ok()));
        }
        let body: FeedbackQuestions = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.questions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit survey answers via `POST /api/feedback` and return the server's message.
///
/// # Errors
///
/// Returns the server's `detail` (with a retry hint when rate limited), or a
/// generic error string if the request itself fails.
pub async fn submit_feedback(answers: Vec<String>) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = FeedbackSubmission { request_id: Some(uuid::Uuid::new_v4().to_string()), answers };
        let resp = gloo_net::http::Request::post("/api/feedback")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            return Err(error_message("feedback submission", status, resp.json().await.ok()));
        }
        let body: FeedbackAck = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = answers;
        Err("not available on server".to_owned())
    }
}
