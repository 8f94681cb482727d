//! Top bar with the app logo, navigation links, and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the layout above every page. The toggle writes through
//! `util::theme` and updates the shared `ThemeState`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeState};

/// Label for the theme toggle, naming the current theme.
pub(crate) fn theme_toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "🌚 Dark",
        Theme::Light => "🌞 Light",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <header class="header">
            <div class="header__left">
                <a href="/" class="header__logo">"Sakaai"</a>
                <nav class="header__nav">
                    <a href="/quiz">"Quiz"</a>
                    <a href="/import">"Import"</a>
                    <a href="/feedback">"Feedback"</a>
                </nav>
            </div>
            <div class="header__right">
                <button
                    class="btn theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| {
                        let next = crate::util::theme::toggle(theme.get().theme);
                        theme.update(|t| t.theme = next);
                    }
                >
                    {move || theme_toggle_label(theme.get().theme)}
                </button>
            </div>
        </header>
    }
}
