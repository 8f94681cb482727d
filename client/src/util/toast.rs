//! Toast scheduling glue between the toast store and browser timers.
//!
//! Each timed toast arms one `Timeout`. When it fires, the store sweeps every
//! toast whose deadline has passed, so a timer that fires a little early still
//! retires the toast it was armed for.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{DEFAULT_TOAST_TTL_MS, ToastKind, ToastState};
use crate::util::time::now_ms;

/// Show a toast with the default lifetime.
pub fn push(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) -> u64 {
    push_with_ttl(toasts, kind, message, DEFAULT_TOAST_TTL_MS)
}

/// Show a toast and schedule its removal after `ttl_ms` (never when zero).
pub fn push_with_ttl(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>, ttl_ms: u32) -> u64 {
    let message = message.into();
    let added_at = now_ms();
    let id = toasts
        .try_update(|t| t.add(kind, message, ttl_ms, added_at))
        .unwrap_or_default();
    #[cfg(feature = "hydrate")]
    if ttl_ms > 0 {
        gloo_timers::callback::Timeout::new(ttl_ms, move || {
            toasts.try_update(|t| t.expire(sweep_time(added_at, ttl_ms, now_ms())));
        })
        .forget();
    }
    id
}

/// Clock value a timer sweep uses: the later of the firing time and the
/// deadline the timer was armed for.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn sweep_time(added_at_ms: f64, ttl_ms: u32, fired_at_ms: f64) -> f64 {
    fired_at_ms.max(added_at_ms + f64::from(ttl_ms))
}

/// Dismiss a toast immediately.
pub fn dismiss(toasts: RwSignal<ToastState>, id: u64) {
    toasts.update(|t| {
        t.remove(id);
    });
}
