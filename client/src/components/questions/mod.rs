//! Question views, one per question type.
//!
//! DESIGN
//! ======
//! Every view takes the question value, a radio/checkbox group name, and a
//! reveal flag. Input state is local to the view instance and is dropped when
//! the view unmounts; nothing here submits, scores, or persists answers.
//!
//! In reveal mode the controls show the declared answer instead of the user's
//! selection and the footer shows the answer and explanation.


pub mod essay;
pub mod fitb;
pub mod mcq;
pub mod sata;
pub mod tf;

use leptos::prelude::*;
use quiz::{Question, QuestionKind};

use essay::EssayView;
use fitb::FitbView;
use mcq::McqView;
use sata::SataView;
use tf::TfView;

/// Render `question` with the view matching its type.
#[component]
pub fn QuestionView(question: Question, index: usize, #[prop(into)] reveal: Signal<bool>) -> impl IntoView {
    let kind = question.kind();
    let group = group_name(index, kind);
    let body = match kind {
        QuestionKind::Mcq => view! { <McqView question=question group=group reveal=reveal /> }.into_any(),
        QuestionKind::Sata => view! { <SataView question=question group=group reveal=reveal /> }.into_any(),
        QuestionKind::Tf => view! { <TfView question=question group=group reveal=reveal /> }.into_any(),
        QuestionKind::Fitb => view! { <FitbView question=question group=group reveal=reveal /> }.into_any(),
        QuestionKind::Essay => view! { <EssayView question=question group=group reveal=reveal /> }.into_any(),
    };
    view! {
        <p class="quiz-box__kind">{kind.label()}</p>
        {body}
    }
}

/// Footer under a question: reset control while answering, answer and
/// explanation while revealed.
#[component]
pub fn QuestionFooter(
    #[prop(into)] reveal: Signal<bool>,
    answer: Option<String>,
    explanation: String,
    #[prop(optional)] on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let has_explanation = !explanation.is_empty();
    view! {
        <Show
            when=move || reveal.get()
            fallback=move || {
                on_reset.map(|reset| {
                    view! {
                        <button class="quiz-box__reset" type="button" on:click=move |_| reset.run(())>
                            "Reset Selection"
                        </button>
                    }
                })
            }
        >
            <div class="quiz-box__reveal">
                {answer.clone().map(|a| view! { <p class="quiz-box__answer">"Answer: " {a}</p> })}
                {has_explanation.then(|| view! { <p class="quiz-box__explanation">{explanation.clone()}</p> })}
            </div>
        </Show>
    }
}

/// Radio/checkbox group name, unique per question position.
pub(crate) fn group_name(index: usize, kind: QuestionKind) -> String {
    format!("q{index}-{}", kind.as_str())
}

/// Whether a choice control shows as checked.
pub(crate) fn choice_checked(reveal: bool, correct: bool, selected: bool) -> bool {
    if reveal { correct } else { selected }
}

/// Display text of a choice: `"A. text"`.
pub(crate) fn choice_text(index: usize, choice: &str) -> String {
    format!("{}. {choice}", quiz::choice_label(index))
}
