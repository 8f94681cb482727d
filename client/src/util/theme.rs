//! Theme initialization and toggle against the browser.
//!
//! Reads the stored theme from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and mirrors the active theme onto the
//! `data-theme` attribute of the `<html>` element.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so
//! server rendering stays deterministic and always renders the light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{THEME_KEY, Theme};
use crate::util::storage;

/// Whether the OS reports a dark color scheme preference.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the initial theme from storage and the OS preference.
pub fn read_preference() -> Theme {
    Theme::resolve(storage::load_raw(THEME_KEY).as_deref(), prefers_dark())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_raw(THEME_KEY, next.as_str());
    next
}
