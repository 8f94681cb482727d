//! Feedback survey: fixed questions, answer validation, and persistence.
//!
//! DESIGN
//! ======
//! Answers are matched to `QUESTIONS` by position. A submission may answer
//! fewer questions than exist (trailing ones are skipped) but never more, and
//! at least one answer must be non-blank.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub const QUESTIONS: [&str; 5] = [
    "What frustrated you the most while using this?",
    "Was anything confusing, broken, or just... not it?",
    "Was there anything that worked well for you?",
    "If you could change one thing about this app, what would it be?",
    "Any final thoughts, rants, or feedback you wish we'd asked for?",
];

/// Upper bound on a single answer, in characters.
pub const MAX_ANSWER_CHARS: usize = 4000;

pub const FEEDBACK_RECORDED_MESSAGE: &str = "Thanks! Your feedback has been recorded.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("at least one answer is required")]
    NoAnswers,
    #[error("too many answers: got {given}, expected at most {max}")]
    TooManyAnswers { given: usize, max: usize },
    #[error("answer {} exceeds {max} characters", .index + 1)]
    AnswerTooLong { index: usize, max: usize },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A validated submission ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub request_id: Option<String>,
    pub client_ip: String,
    pub answers: Vec<String>,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trim and check answers against the survey rules.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_answers(answers: &[String]) -> Result<Vec<String>, FeedbackError> {
    if answers.len() > QUESTIONS.len() {
        return Err(FeedbackError::TooManyAnswers { given: answers.len(), max: QUESTIONS.len() });
    }
    let trimmed: Vec<String> = answers.iter().map(|a| a.trim().to_owned()).collect();
    if let Some(index) = trimmed
        .iter()
        .position(|a| a.chars().count() > MAX_ANSWER_CHARS)
    {
        return Err(FeedbackError::AnswerTooLong { index, max: MAX_ANSWER_CHARS });
    }
    if trimmed.iter().all(String::is_empty) {
        return Err(FeedbackError::NoAnswers);
    }
    Ok(trimmed)
}

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Insert one feedback row and return its id.
///
/// # Errors
///
/// Returns [`FeedbackError::Database`] if the insert fails.
pub async fn record_feedback(pool: &PgPool, entry: &FeedbackEntry) -> Result<Uuid, FeedbackError> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO feedback_responses (id, request_id, client_ip, answers) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(entry.request_id.as_deref())
        .bind(&entry.client_ip)
        .bind(&entry.answers)
        .execute(pool)
        .await?;

    info!(%id, request_id = entry.request_id.as_deref().unwrap_or("-"), answers = entry.answers.len(), "feedback recorded");
    Ok(id)
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
