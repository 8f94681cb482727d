//! Browser localStorage helpers with JSON encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted store (theme, app state) goes through these helpers so the
//! hydrate-only web-sys glue lives in one place. On the server they are no-ops.
//!
//! ERROR HANDLING
//! ==============
//! Failures (no window, storage disabled, quota exceeded, malformed JSON) are
//! swallowed. Loads fall back to the caller's default; saves report nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::debug!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value for `key`, or `fallback` when absent or unreadable.
pub fn load_json<T: DeserializeOwned>(key: &str, fallback: T) -> T {
    decode(load_raw(key).as_deref()).unwrap_or(fallback)
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Some(raw) = encode(value) {
        save_raw(key, &raw);
    }
}

/// Decode a stored payload. Empty strings count as absent.
fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    let raw = raw.filter(|r| !r.is_empty())?;
    serde_json::from_str(raw).ok()
}

fn encode<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}
