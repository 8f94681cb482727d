//! Quiz runner for the active quiz.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the active quiz from `AppState`, shows one question at a time with
//! previous/next navigation, and lets the user rename the quiz. The reveal
//! toggle switches every question view into answer-display mode; nothing is
//! scored.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use leptos::prelude::*;

use quiz::Question;

use crate::components::questions::QuestionView;
use crate::state::app::{AppAction, AppState};

/// Progress line for the question at zero-based `step`.
pub(crate) fn progress_label(step: usize, total: usize) -> String {
    format!("Question {} of {total}", step.min(total.saturating_sub(1)) + 1)
}

/// Keep `step` inside a list of `len` questions.
pub(crate) fn clamp_step(step: usize, len: usize) -> usize {
    step.min(len.saturating_sub(1))
}

pub(crate) fn prev_step(step: usize) -> usize {
    step.saturating_sub(1)
}

pub(crate) fn next_step(step: usize, len: usize) -> usize {
    clamp_step(step + 1, len)
}

/// The question on screen, keyed by quiz id and position.
///
/// Only changes when one of the three parts changes, so edits elsewhere in
/// `AppState` (a rename, a re-selection) leave the mounted view alone.
pub(crate) fn current_question(state: &AppState, step: usize) -> Option<(String, usize, Question)> {
    let quiz = state.active_quiz()?;
    let index = clamp_step(step, quiz.len());
    let question = quiz.questions.get(index)?.clone();
    Some((quiz.id.clone(), index, question))
}

#[component]
pub fn QuizPage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let step = RwSignal::new(0_usize);
    let reveal = RwSignal::new(false);

    // Start from the first question whenever another quiz becomes active.
    let active_id = Memo::new(move |_| app.with(|s| s.active_id.clone()));
    Effect::new(move || {
        active_id.track();
        step.set(0);
        reveal.set(false);
    });

    let total = move || app.with(|s| s.active_quiz().map_or(0, quiz::Quiz::len));
    let current = move || clamp_step(step.get(), total());
    let shown = Memo::new(move |_| app.with(|s| current_question(s, step.get())));

    let on_rename = move |ev: leptos::ev::Event| {
        let title = event_target_value(&ev);
        app.update(|s| {
            if let Some(mut quiz) = s.active_quiz().cloned() {
                quiz.title = title;
                s.apply(AppAction::UpdateQuiz(quiz));
            }
        });
    };

    view! {
        <Show
            when=move || app.with(|s| s.active_quiz().is_some())
            fallback=|| {
                view! {
                    <div class="quiz-page panel">
                        <p class="lead">"No quiz selected."</p>
                        <p>
                            <a href="/">"Load the sample quiz"</a>
                            " or "
                            <a href="/import">"import one"</a>
                            "."
                        </p>
                    </div>
                }
            }
        >
            <div class="quiz-page panel">
                <input
                    class="quiz-page__title"
                    type="text"
                    aria-label="Quiz title"
                    prop:value=move || app.with(|s| s.active_quiz().map(|q| q.title.clone()).unwrap_or_default())
                    on:change=on_rename
                />
                <div class="quiz-page__progress">
                    <span>{move || progress_label(current(), total())}</span>
                    <span class="quiz-page__divider">" | "</span>
                    <span>"1 point(s)"</span>
                    <label class="quiz-page__reveal">
                        <input
                            type="checkbox"
                            prop:checked=move || reveal.get()
                            on:change=move |ev| reveal.set(event_target_checked(&ev))
                        />
                        " Show answers"
                    </label>
                </div>
                {move || {
                    shown
                        .get()
                        .map(|(_, index, question)| view! { <QuestionView question=question index=index reveal=reveal /> })
                }}
                <div class="quiz-page__nav">
                    <button
                        class="btn"
                        disabled=move || current() == 0
                        on:click=move |_| step.set(prev_step(current()))
                    >
                        "Previous"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || current() + 1 >= total()
                        on:click=move |_| step.set(next_step(current(), total()))
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </Show>
    }
}
