//! Shared quiz model for the Sakaai client and server.
//!
//! This crate owns the question and quiz representation that the browser
//! persists and that users import as JSON. Imported payloads follow the quiz
//! generator's response schema, so validation mirrors that schema's rules:
//! answers must come from the listed choices, and a stray single-string
//! answer on a select-all question is accepted as a one-element list.

pub mod sample;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Minimum run of underscores that marks the blank in a fill-in prompt.
const BLANK_MIN_RUN: usize = 3;

/// Error returned by quiz parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// The payload is not valid JSON.
    #[error("invalid quiz JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is JSON but neither a list nor an object with a list.
    #[error("expected a JSON array of questions or an object with a `quizzes` array")]
    Shape,
    /// A single question could not be decoded.
    #[error("question {}: {source}", .index + 1)]
    InvalidQuestion { index: usize, source: serde_json::Error },
    /// The payload decoded to an empty question list.
    #[error("quiz contains no questions")]
    Empty,
    /// A question has a blank prompt.
    #[error("question {}: prompt is empty", .index + 1)]
    EmptyPrompt { index: usize },
    /// A choice question lists no choices.
    #[error("question {}: no choices listed", .index + 1)]
    NoChoices { index: usize },
    /// A declared answer is missing from the question's choices.
    #[error("question {}: answer '{answer}' is not one of the choices", .index + 1)]
    AnswerNotInChoices { index: usize, answer: String },
}

// =============================================================================
// QUESTION KIND
// =============================================================================

/// The five supported question formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Mcq,
    Sata,
    Tf,
    Fitb,
    Essay,
}

impl QuestionKind {
    pub const ALL: [Self; 5] = [Self::Mcq, Self::Sata, Self::Tf, Self::Fitb, Self::Essay];

    /// Wire tag, as used in the `type` field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::Sata => "sata",
            Self::Tf => "tf",
            Self::Fitb => "fitb",
            Self::Essay => "essay",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mcq => "Multiple choice",
            Self::Sata => "Select all that apply",
            Self::Tf => "True / false",
            Self::Fitb => "Fill in the blank",
            Self::Essay => "Essay",
        }
    }
}

// =============================================================================
// QUESTION
// =============================================================================

/// A single quiz question, tagged on the wire by its `type` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    /// Multiple choice with one correct choice.
    Mcq {
        question: String,
        #[serde(default, deserialize_with = "string_or_null")]
        explanation: String,
        choices: Vec<String>,
        #[serde(default)]
        answer: Option<String>,
    },
    /// Select all that apply: any number of correct choices.
    Sata {
        question: String,
        #[serde(default, deserialize_with = "string_or_null")]
        explanation: String,
        choices: Vec<String>,
        #[serde(default, deserialize_with = "one_or_many")]
        answer: Option<Vec<String>>,
    },
    /// True or false.
    Tf {
        question: String,
        #[serde(default, deserialize_with = "string_or_null")]
        explanation: String,
        #[serde(default)]
        answer: Option<bool>,
    },
    /// Fill in the blank. The prompt marks the blank with a run of underscores.
    Fitb {
        question: String,
        #[serde(default, deserialize_with = "string_or_null")]
        explanation: String,
        #[serde(default)]
        answer: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        keywords: Option<Vec<String>>,
    },
    /// Free-form essay.
    Essay {
        question: String,
        #[serde(default, deserialize_with = "string_or_null")]
        explanation: String,
        #[serde(default)]
        keywords: Option<Vec<String>>,
    },
}

impl Question {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Mcq { .. } => QuestionKind::Mcq,
            Self::Sata { .. } => QuestionKind::Sata,
            Self::Tf { .. } => QuestionKind::Tf,
            Self::Fitb { .. } => QuestionKind::Fitb,
            Self::Essay { .. } => QuestionKind::Essay,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Self::Mcq { question, .. }
            | Self::Sata { question, .. }
            | Self::Tf { question, .. }
            | Self::Fitb { question, .. }
            | Self::Essay { question, .. } => question,
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        match self {
            Self::Mcq { explanation, .. }
            | Self::Sata { explanation, .. }
            | Self::Tf { explanation, .. }
            | Self::Fitb { explanation, .. }
            | Self::Essay { explanation, .. } => explanation,
        }
    }

    /// Listed choices; empty for question types without choices.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        match self {
            Self::Mcq { choices, .. } | Self::Sata { choices, .. } => choices,
            _ => &[],
        }
    }

    /// Whether `choice` is one of the declared correct choices.
    #[must_use]
    pub fn is_correct_choice(&self, choice: &str) -> bool {
        match self {
            Self::Mcq { answer, .. } => answer.as_deref() == Some(choice),
            Self::Sata { answer, .. } => answer
                .as_deref()
                .is_some_and(|answers| answers.iter().any(|a| a == choice)),
            _ => false,
        }
    }

    /// Display form of the correct answer, if the question declares one.
    ///
    /// Essays have no single answer; their explanation serves as the model
    /// response instead.
    #[must_use]
    pub fn answer_text(&self) -> Option<String> {
        match self {
            Self::Mcq { answer, .. } => answer.clone(),
            Self::Sata { answer, .. } => answer
                .as_ref()
                .filter(|answers| !answers.is_empty())
                .map(|answers| answers.join("; ")),
            Self::Tf { answer, .. } => answer.map(|a| if a { "True" } else { "False" }.to_owned()),
            Self::Fitb { answer, keywords, .. } => answer.clone().or_else(|| {
                keywords
                    .as_ref()
                    .filter(|k| !k.is_empty())
                    .map(|k| k.join(", "))
            }),
            Self::Essay { .. } => None,
        }
    }

    /// Check the question against the generator schema rules.
    ///
    /// `index` is the question's position, used only for error reporting.
    ///
    /// # Errors
    ///
    /// Returns the first rule the question violates.
    pub fn validate(&self, index: usize) -> Result<(), QuizError> {
        if self.prompt().trim().is_empty() {
            return Err(QuizError::EmptyPrompt { index });
        }
        match self {
            Self::Mcq { choices, answer, .. } => {
                if choices.is_empty() {
                    return Err(QuizError::NoChoices { index });
                }
                if let Some(answer) = answer {
                    if !choices.contains(answer) {
                        return Err(QuizError::AnswerNotInChoices { index, answer: answer.clone() });
                    }
                }
            }
            Self::Sata { choices, answer, .. } => {
                if choices.is_empty() {
                    return Err(QuizError::NoChoices { index });
                }
                if let Some(invalid) = answer
                    .iter()
                    .flatten()
                    .find(|a| !choices.contains(a))
                {
                    return Err(QuizError::AnswerNotInChoices { index, answer: invalid.clone() });
                }
            }
            Self::Tf { .. } | Self::Fitb { .. } | Self::Essay { .. } => {}
        }
        Ok(())
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(answer) => vec![answer],
        OneOrMany::Many(answers) => answers,
    }))
}

// =============================================================================
// QUIZ
// =============================================================================

/// A stored quiz: an ordered list of questions plus identity metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: i64, questions: Vec<Question>) -> Self {
        Self { id: id.into(), title: title.into(), created_at, questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validate every question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Empty`] for a quiz without questions, otherwise
    /// the first question-level violation.
    pub fn validate(&self) -> Result<(), QuizError> {
        validate_questions(&self.questions)
    }
}

// =============================================================================
// IMPORT
// =============================================================================

/// Parse and validate a question list pasted by the user.
///
/// Accepts a bare JSON array of questions, or an object carrying the array
/// under `quizzes` (the generator response shape) or `questions`. The JSON may
/// be wrapped in a Markdown code fence.
///
/// # Errors
///
/// Returns [`QuizError::Json`] for malformed JSON, [`QuizError::Shape`] for
/// an unexpected top-level value, [`QuizError::InvalidQuestion`] when an
/// item does not decode, and any validation error from [`Question::validate`].
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, QuizError> {
    let root: Value = serde_json::from_str(strip_code_fence(raw))?;
    let items = match root {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("quizzes").or_else(|| map.remove("questions")) {
            Some(Value::Array(items)) => items,
            _ => return Err(QuizError::Shape),
        },
        _ => return Err(QuizError::Shape),
    };

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Question>(item).map_err(|source| QuizError::InvalidQuestion { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_questions(&questions)?;
    Ok(questions)
}

fn validate_questions(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::Empty);
    }
    questions
        .iter()
        .enumerate()
        .try_for_each(|(index, q)| q.validate(index))
}

/// Return the body of the first complete Markdown code fence.
///
/// An optional `json` info string and the whitespace after it are skipped.
/// Input without both an opening and a closing fence is returned trimmed.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    const FENCE: &str = "```";
    let trimmed = raw.trim();
    let Some(start) = trimmed.find(FENCE) else {
        return trimmed;
    };
    let after_open = &trimmed[start + FENCE.len()..];
    let after_tag = after_open.strip_prefix("json").unwrap_or(after_open);
    let body = after_tag.trim_start();
    match body.find(FENCE) {
        Some(end) => body[..end].trim(),
        None => trimmed,
    }
}

// =============================================================================
// PRESENTATION HELPERS
// =============================================================================

/// Letter label for the choice at `index` (`A`, `B`, ...).
#[must_use]
pub fn choice_label(index: usize) -> String {
    u32::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .and_then(|i| char::from_u32(u32::from(b'A') + i))
        .map_or_else(|| (index + 1).to_string(), String::from)
}

/// Split a fill-in prompt around its blank.
///
/// Returns the text before the first blank and the text between the first
/// blank and the next one (or the end). A prompt without a blank yields the
/// whole prompt and an empty tail.
#[must_use]
pub fn split_blank(prompt: &str) -> (&str, &str) {
    let Some((start, end)) = find_blank(prompt) else {
        return (prompt, "");
    };
    let rest = &prompt[end..];
    let tail = find_blank(rest).map_or(rest, |(next, _)| &rest[..next]);
    (&prompt[..start], tail)
}

/// Byte range of the first run of at least [`BLANK_MIN_RUN`] underscores.
fn find_blank(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'_' {
            let start = i;
            while i < bytes.len() && bytes[i] == b'_' {
                i += 1;
            }
            if i - start >= BLANK_MIN_RUN {
                return Some((start, i));
            }
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
