//! True/false view: two radios, "A. True" and "B. False".

use leptos::prelude::*;
use quiz::Question;

use super::{QuestionFooter, choice_checked, choice_text};

#[component]
pub fn TfView(question: Question, group: String, #[prop(into)] reveal: Signal<bool>) -> impl IntoView {
    let selected = RwSignal::new(None::<bool>);
    let answer = match &question {
        Question::Tf { answer, .. } => *answer,
        _ => None,
    };

    let options = [(true, "True"), (false, "False")];

    view! {
        <div class="quiz-box quiz-box--tf">
            <p class="quiz-box__prompt">{question.prompt().to_owned()}</p>
            <div class="quiz-box__choices">
                {options
                    .into_iter()
                    .enumerate()
                    .map(|(i, (value, label))| {
                        let correct = answer == Some(value);
                        view! {
                            <label
                                class="quiz-box__choice"
                                class:quiz-box__choice--correct=move || reveal.get() && correct
                            >
                                <input
                                    type="radio"
                                    name=group.clone()
                                    prop:checked=move || choice_checked(reveal.get(), correct, selected.get() == Some(value))
                                    prop:disabled=move || reveal.get()
                                    on:change=move |_| selected.set(Some(value))
                                />
                                " "
                                {choice_text(i, label)}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <QuestionFooter
                reveal=reveal
                answer=None
                explanation=question.explanation().to_owned()
                on_reset=Callback::new(move |()| selected.set(None))
            />
        </div>
    }
}
