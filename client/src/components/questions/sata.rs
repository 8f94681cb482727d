//! Select-all-that-apply view: one checkbox per choice.

use leptos::prelude::*;
use quiz::Question;

use super::{QuestionFooter, choice_checked, choice_text};

#[component]
pub fn SataView(question: Question, group: String, #[prop(into)] reveal: Signal<bool>) -> impl IntoView {
    let choices: Vec<(String, bool)> = question
        .choices()
        .iter()
        .map(|c| (c.clone(), question.is_correct_choice(c)))
        .collect();
    let selected = RwSignal::new(vec![false; choices.len()]);

    view! {
        <div class="quiz-box quiz-box--sata">
            <p class="quiz-box__prompt">{question.prompt().to_owned()}</p>
            <div class="quiz-box__choices">
                {choices
                    .into_iter()
                    .enumerate()
                    .map(|(i, (choice, correct))| {
                        let is_selected = move || selected.with(|s| s.get(i).copied().unwrap_or(false));
                        view! {
                            <label
                                class="quiz-box__choice"
                                class:quiz-box__choice--correct=move || reveal.get() && correct
                            >
                                <input
                                    type="checkbox"
                                    name=group.clone()
                                    prop:checked=move || choice_checked(reveal.get(), correct, is_selected())
                                    prop:disabled=move || reveal.get()
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected.update(|s| {
                                            if let Some(slot) = s.get_mut(i) {
                                                *slot = checked;
                                            }
                                        });
                                    }
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
                on_reset=Callback::new(move |()| selected.update(|s| s.iter_mut().for_each(|slot| *slot = false)))
            />
        </div>
    }
}
