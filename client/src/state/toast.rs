//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! The store is a plain list plus an id counter. Each toast records its own
//! deadline so expiry can be driven either by a browser timer calling
//! `remove(id)` or by `expire(now)`. Removing an id that is already gone is a
//! no-op, so a late timer after a manual dismiss does nothing.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Default lifetime of a toast in milliseconds.
pub const DEFAULT_TOAST_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// CSS modifier for the toast element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Milliseconds since the epoch after which the toast is dropped.
    pub expires_at_ms: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id. A `ttl_ms` of zero never expires.
    pub fn add(&mut self, kind: ToastKind, message: impl Into<String>, ttl_ms: u32, now_ms: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let expires_at_ms = (ttl_ms > 0).then(|| now_ms + f64::from(ttl_ms));
        self.items.push(Toast { id, kind, message: message.into(), expires_at_ms });
        id
    }

    /// Drop the toast with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Drop every toast whose deadline is at or before `now_ms`.
    pub fn expire(&mut self, now_ms: f64) {
        self.items
            .retain(|t| t.expires_at_ms.is_none_or(|deadline| deadline > now_ms));
    }
}
