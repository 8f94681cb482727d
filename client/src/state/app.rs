//! Application state: stored quizzes and the active quiz pointer.
//!
//! DESIGN
//! ======
//! State changes go through `AppState::apply` with one of four actions so
//! every transition is a synchronous, testable function. The app shell
//! persists the whole value under `APP_STATE_KEY` after each change.
//!
//! `active_id` is expected to reference a stored quiz, but `SetActive` does
//! not check it; readers go through `active_quiz`, which tolerates a
//! dangling pointer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use quiz::Quiz;
use serde::{Deserialize, Deserializer, Serialize};

/// localStorage key holding the serialized [`AppState`].
pub const APP_STATE_KEY: &str = "sakaai:appstate";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    #[serde(default)]
    pub active_id: Option<String>,
}

/// Partial state merged by [`AppAction::Load`].
///
/// Absent fields keep the current value. `activeId: null` is distinct from an
/// absent `activeId` and clears the pointer.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStatePatch {
    #[serde(default)]
    pub quizzes: Option<Vec<Quiz>>,
    #[serde(default, deserialize_with = "present")]
    pub active_id: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<AppState> for AppStatePatch {
    fn from(state: AppState) -> Self {
        Self { quizzes: Some(state.quizzes), active_id: Some(state.active_id) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Load(AppStatePatch),
    AddQuiz(Quiz),
    SetActive(Option<String>),
    UpdateQuiz(Quiz),
}

impl AppState {
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Load(patch) => {
                if let Some(quizzes) = patch.quizzes {
                    self.quizzes = quizzes;
                }
                if let Some(active_id) = patch.active_id {
                    self.active_id = active_id;
                }
            }
            AppAction::AddQuiz(quiz) => self.quizzes.insert(0, quiz),
            AppAction::SetActive(id) => self.active_id = id,
            AppAction::UpdateQuiz(quiz) => {
                if let Some(slot) = self.quizzes.iter_mut().find(|q| q.id == quiz.id) {
                    *slot = quiz;
                }
            }
        }
    }

    /// The quiz `active_id` points at, if it exists.
    #[must_use]
    pub fn active_quiz(&self) -> Option<&Quiz> {
        let id = self.active_id.as_deref()?;
        self.quizzes.iter().find(|q| q.id == id)
    }
}
