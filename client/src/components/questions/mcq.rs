//! Multiple choice view: one radio per choice.

use leptos::prelude::*;
use quiz::Question;

use super::{QuestionFooter, choice_checked, choice_text};

#[component]
pub fn McqView(question: Question, group: String, #[prop(into)] reveal: Signal<bool>) -> impl IntoView {
    let selected = RwSignal::new(None::<usize>);
    let choices: Vec<(String, bool)> = question
        .choices()
        .iter()
        .map(|c| (c.clone(), question.is_correct_choice(c)))
        .collect();

    view! {
        <div class="quiz-box quiz-box--mcq">
            <p class="quiz-box__prompt">{question.prompt().to_owned()}</p>
            <div class="quiz-box__choices">
                {choices
                    .into_iter()
                    .enumerate()
                    .map(|(i, (choice, correct))| {
                        view! {
                            <label
                                class="quiz-box__choice"
                                class:quiz-box__choice--correct=move || reveal.get() && correct
                            >
                                <input
                                    type="radio"
                                    name=group.clone()
                                    prop:checked=move || choice_checked(reveal.get(), correct, selected.get() == Some(i))
                                    prop:disabled=move || reveal.get()
                                    on:change=move |_| selected.set(Some(i))
                                />
                                " "
                                {choice_text(i, &choice)}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <QuestionFooter
                reveal=reveal
                answer=question.answer_text()
                explanation=question.explanation().to_owned()
                on_reset=Callback::new(move |()| selected.set(None))
            />
        </div>
    }
}
