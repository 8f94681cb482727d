//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Providers nest theme, then app state, then toasts. Theme and app state are
//! hydrated from `localStorage` once the app mounts in the browser; the app
//! state is written back after every change that follows hydration, so the
//! empty initial value never overwrites stored data.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, sidebar::Sidebar, toast_container::ToastContainer};
use crate::pages::{feedback::FeedbackPage, home::HomePage, import::ImportPage, quiz::QuizPage};
use crate::state::app::{APP_STATE_KEY, AppAction, AppState, AppStatePatch};
use crate::state::theme::ThemeState;
use crate::state::toast::ToastState;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared stores and lays out header, sidebar, routed page body,
/// and the toast stack.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let app = RwSignal::new(AppState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(theme);
    provide_context(app);
    provide_context(toasts);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let initial = crate::util::theme::read_preference();
        crate::util::theme::apply(initial);
        theme.set(ThemeState { theme: initial, ready: true });
    });

    let hydrated = RwSignal::new(false);
    Effect::new(move || {
        if let Some(patch) = storage::load_json::<Option<AppStatePatch>>(APP_STATE_KEY, None) {
            app.update(|s| s.apply(AppAction::Load(patch)));
        }
        hydrated.set(true);
    });
    Effect::new(move || {
        let state = app.get();
        if hydrated.get() {
            storage::save_json(APP_STATE_KEY, &state);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sakaai.css"/>
        <Title text="Sakaai Simulator"/>

        <Router>
            <Show
                when=move || theme.get().ready
                fallback=|| view! { <div class="app-loading" aria-hidden="true"></div> }
            >
                <Header/>
                <div class="app-layout">
                    <aside class="app-layout__sidebar">
                        <Sidebar/>
                    </aside>
                    <main class="app-layout__main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("quiz") view=QuizPage/>
                            <Route path=StaticSegment("import") view=ImportPage/>
                            <Route path=StaticSegment("feedback") view=FeedbackPage/>
                        </Routes>
                    </main>
                </div>
            </Show>
            <ToastContainer/>
        </Router>
    }
}
