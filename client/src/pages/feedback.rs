//! Feedback survey page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the survey questions from the server, collects one free-text answer
//! per question, and posts them. The server rate limits submissions per
//! client; its error detail and retry hint surface as an error toast.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Trim answers and require at least one non-blank entry.
///
/// Positions are preserved so answers stay aligned with their questions.
pub(crate) fn prepare_answers(answers: &[String]) -> Result<Vec<String>, &'static str> {
    let trimmed: Vec<String> = answers.iter().map(|a| a.trim().to_owned()).collect();
    if trimmed.iter().all(String::is_empty) {
        return Err("Answer at least one question before sending.");
    }
    Ok(trimmed)
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let questions = RwSignal::new(Vec::<String>::new());
    let answers = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_feedback_questions().await {
            Ok(list) => {
                answers.set(vec![String::new(); list.len()]);
                questions.set(list);
            }
            Err(e) => {
                crate::util::toast::push(toasts, ToastKind::Error, format!("Could not load questions: {e}"));
            }
        }
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let prepared = match prepare_answers(&answers.get()) {
            Ok(prepared) => prepared,
            Err(msg) => {
                crate::util::toast::push(toasts, ToastKind::Warning, msg);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_feedback(prepared).await {
                Ok(message) => {
                    answers.update(|a| a.iter_mut().for_each(String::clear));
                    crate::util::toast::push(toasts, ToastKind::Success, message);
                }
                Err(e) => {
                    crate::util::toast::push(toasts, ToastKind::Error, e);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = prepared;
            busy.set(false);
        }
    };

    view! {
        <div class="feedback-page panel">
            <h1 class="h1">"Feedback"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="lead">"Loading questions..."</p> }
            >
                <form class="feedback-form" on:submit=on_submit>
                    {move || {
                        questions
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, question)| {
                                view! {
                                    <label class="feedback-form__item">
                                        <span class="feedback-form__question">{question}</span>
                                        <textarea
                                            class="feedback-form__answer"
                                            rows="3"
                                            maxlength="4000"
                                            prop:value=move || answers.with(|a| a.get(i).cloned().unwrap_or_default())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                answers.update(|a| {
                                                    if let Some(slot) = a.get_mut(i) {
                                                        *slot = value;
                                                    }
                                                });
                                            }
                                        ></textarea>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || busy.get() || questions.with(Vec::is_empty)
                    >
                        {move || if busy.get() { "Sending..." } else { "Send Feedback" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
