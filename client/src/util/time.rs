//! Wall clock access for browser-only timing.

/// Milliseconds since the Unix epoch. Always `0.0` outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Whole milliseconds since the Unix epoch, as stored in `Quiz::created_at`.
#[allow(clippy::cast_possible_truncation)]
pub fn now_epoch_ms() -> i64 {
    now_ms() as i64
}
