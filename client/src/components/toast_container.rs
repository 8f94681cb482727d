//! Corner stack of toast notifications with manual dismiss.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str())>
                            <div class="toast__message">{toast.message}</div>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| crate::util::toast::dismiss(toasts, id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
