//! Essay view: a free-form textarea. Reveal shows the model explanation.

use leptos::prelude::*;
use quiz::Question;

#[component]
pub fn EssayView(question: Question, group: String, #[prop(into)] reveal: Signal<bool>) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let explanation = question.explanation().to_owned();

    view! {
        <div class="quiz-box quiz-box--essay">
            <p class="quiz-box__prompt">{question.prompt().to_owned()}</p>
            <textarea
                class="quiz-box__essay"
                name=group
                placeholder="Your Answer"
                prop:value=move || if reveal.get() { explanation.clone() } else { draft.get() }
                readonly=move || reveal.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
