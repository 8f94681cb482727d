//! Quiz history list.
//!
//! Shows every stored quiz, newest first, and marks the active one. Picking a
//! quiz makes it active and opens the quiz page.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use quiz::Quiz;

use crate::state::app::{AppAction, AppState};

/// Title shown for a quiz in the history list.
pub(crate) fn quiz_display_title(quiz: &Quiz) -> String {
    let title = quiz.title.trim();
    if title.is_empty() { "Untitled quiz".to_owned() } else { title.to_owned() }
}

/// Secondary line under a quiz title.
pub(crate) fn quiz_summary(quiz: &Quiz) -> String {
    match quiz.len() {
        1 => "1 question".to_owned(),
        n => format!("{n} questions"),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    view! {
        <div class="sidebar panel">
            <h3 class="h1">"History"</h3>
            <Show
                when=move || app.with(|s| !s.quizzes.is_empty())
                fallback=|| view! { <p class="lead">"No quizzes yet. Load the sample or import one to get started."</p> }
            >
                <ul class="sidebar__list">
                    {move || {
                        let state = app.get();
                        state
                            .quizzes
                            .iter()
                            .map(|quiz| {
                                let id = quiz.id.clone();
                                let active = state.active_id.as_deref() == Some(quiz.id.as_str());
                                view! {
                                    <li>
                                        <a
                                            href="/quiz"
                                            class="sidebar__item"
                                            class:sidebar__item--active=active
                                            on:click=move |_| {
                                                let id = id.clone();
                                                app.update(|s| s.apply(AppAction::SetActive(Some(id))));
                                            }
                                        >
                                            <span class="sidebar__title">{quiz_display_title(quiz)}</span>
                                            <span class="sidebar__meta">{quiz_summary(quiz)}</span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
