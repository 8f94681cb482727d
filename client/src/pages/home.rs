//! Landing page with entry points into a quiz.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::app::{AppAction, AppState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::time::now_epoch_ms;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_load_sample = move |_| {
        let sample = quiz::sample::sample_quiz(uuid::Uuid::new_v4().to_string(), now_epoch_ms());
        let id = sample.id.clone();
        app.update(|s| {
            s.apply(AppAction::AddQuiz(sample));
            s.apply(AppAction::SetActive(Some(id)));
        });
        crate::util::toast::push(toasts, ToastKind::Success, "Sample quiz loaded.");
        navigate("/quiz", NavigateOptions::default());
    };

    let on_open_last = move |_| {
        app.update(|s| {
            if s.active_quiz().is_none() {
                let newest = s.quizzes.first().map(|q| q.id.clone());
                s.apply(AppAction::SetActive(newest));
            }
        });
    };

    view! {
        <div class="home-page panel">
            <h1 class="h1">"Welcome to Sakaai Simulator"</h1>
            <p class="lead">
                "Practice with multiple choice, select-all, true/false, fill-in-the-blank and essay questions."
            </p>
            <div class="home-page__actions">
                <button class="btn btn--primary" on:click=on_load_sample>
                    "Load Sample Quiz"
                </button>
                <a href="/import" class="btn">
                    "Import Quiz"
                </a>
                <Show when=move || app.with(|s| !s.quizzes.is_empty())>
                    <a href="/quiz" class="btn" on:click=on_open_last>
                        "Open Last Quiz"
                    </a>
                </Show>
            </div>
        </div>
    }
}
