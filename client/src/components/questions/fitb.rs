//! Fill-in-the-blank view: the prompt split around a text input.

use leptos::prelude::*;
use quiz::{Question, split_blank};

use super::QuestionFooter;

#[component]
pub fn FitbView(question: Question, group: String, #[prop(into)] reveal: Signal<bool>) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let (before, after) = split_blank(question.prompt());
    let (before, after) = (before.to_owned(), after.to_owned());
    let expected = question.answer_text().unwrap_or_default();

    view! {
        <div class="quiz-box quiz-box--fitb">
            <p class="quiz-box__prompt">
                <span>{before}</span>
                " "
                <input
                    type="text"
                    class="quiz-box__blank"
                    name=group
                    placeholder="| "
                    prop:value=move || if reveal.get() { expected.clone() } else { value.get() }
                    readonly=move || reveal.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                " "
                <span>{after}</span>
            </p>
            <QuestionFooter
                reveal=reveal
                answer=None
                explanation=question.explanation().to_owned()
            />
        </div>
    }
}
