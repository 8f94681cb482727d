//! Import a quiz from pasted JSON.
//!
//! Accepts the same shapes as `quiz::parse_questions`: a bare question array
//! or a generator response with a `quizzes` array, optionally fenced.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use quiz::Quiz;

use crate::state::app::{AppAction, AppState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::time::now_epoch_ms;

const DEFAULT_IMPORT_TITLE: &str = "Imported quiz";

/// Build a quiz record from the form fields.
///
/// # Errors
///
/// Returns a user-facing message when the JSON does not parse or validate.
pub(crate) fn build_import(title: &str, raw: &str, id: String, created_at: i64) -> Result<Quiz, String> {
    if raw.trim().is_empty() {
        return Err("Paste the quiz JSON first.".to_owned());
    }
    let questions = quiz::parse_questions(raw).map_err(|e| e.to_string())?;
    let title = match title.trim() {
        "" => DEFAULT_IMPORT_TITLE,
        t => t,
    };
    Ok(Quiz::new(id, title, created_at, questions))
}

pub(crate) fn import_success_message(count: usize) -> String {
    match count {
        1 => "Imported 1 question.".to_owned(),
        n => format!("Imported {n} questions."),
    }
}

#[component]
pub fn ImportPage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let raw = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = uuid::Uuid::new_v4().to_string();
        match build_import(&title.get(), &raw.get(), id.clone(), now_epoch_ms()) {
            Ok(quiz) => {
                let message = import_success_message(quiz.len());
                app.update(|s| {
                    s.apply(AppAction::AddQuiz(quiz));
                    s.apply(AppAction::SetActive(Some(id)));
                });
                title.set(String::new());
                raw.set(String::new());
                crate::util::toast::push(toasts, ToastKind::Success, message);
                navigate("/quiz", NavigateOptions::default());
            }
            Err(e) => {
                crate::util::toast::push(toasts, ToastKind::Error, e);
            }
        }
    };

    view! {
        <div class="import-page panel">
            <h1 class="h1">"Import Quiz"</h1>
            <form class="import-form" on:submit=on_submit>
                <input
                    class="import-form__title"
                    type="text"
                    placeholder="Quiz title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="import-form__json"
                    rows="16"
                    placeholder=r#"[{"type": "mcq", "question": "...", "choices": ["..."], "answer": "..."}]"#
                    prop:value=move || raw.get()
                    on:input=move |ev| raw.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">
                    "Import"
                </button>
            </form>
        </div>
    }
}
