//! Wire DTOs for the feedback survey API.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON bodies field for field. Error bodies carry a
//! `detail` string and, for rate-limited requests, `retry_after` seconds.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `GET /api/feedback/questions` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackQuestions {
    pub questions: Vec<String>,
}

/// `POST /api/feedback` request body. Answers match questions by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub answers: Vec<String>,
}

/// Successful `POST /api/feedback` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAck {
    pub message: String,
}

/// Error body returned by the API for 4xx/5xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}
