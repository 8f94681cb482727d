use super::*;

// =============================================================
// add / remove
// =============================================================

#[test]
fn add_appends_in_order_with_fresh_ids() {
    let mut state = ToastState::default();
    let a = state.add(ToastKind::Success, "saved", DEFAULT_TOAST_TTL_MS, 0.0);
    let b = state.add(ToastKind::Error, "failed", DEFAULT_TOAST_TTL_MS, 0.0);
    assert_ne!(a, b);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["saved", "failed"]);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}

#[test]
fn remove_evicts_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.add(ToastKind::Info, "a", 0, 0.0);
    let b = state.add(ToastKind::Info, "b", 0, 0.0);
    assert!(state.remove(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut state = ToastState::default();
    let a = state.add(ToastKind::Info, "a", 0, 0.0);
    assert!(state.remove(a));
    assert!(!state.remove(a));
    assert!(state.items.is_empty());
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut state = ToastState::default();
    let a = state.add(ToastKind::Info, "a", 0, 0.0);
    state.remove(a);
    let b = state.add(ToastKind::Info, "b", 0, 0.0);
    assert_ne!(a, b);
}

// =============================================================
// expiry
// =============================================================

#[test]
fn toast_expires_after_ttl() {
    let mut state = ToastState::default();
    state.add(ToastKind::Warning, "soon gone", DEFAULT_TOAST_TTL_MS, 1_000.0);
    state.expire(1_000.0);
    assert_eq!(state.items.len(), 1);
    state.expire(4_999.0);
    assert_eq!(state.items.len(), 1);
    state.expire(5_000.0);
    assert!(state.items.is_empty());
}

#[test]
fn zero_ttl_never_expires() {
    let mut state = ToastState::default();
    state.add(ToastKind::Info, "sticky", 0, 0.0);
    assert_eq!(state.items[0].expires_at_ms, None);
    state.expire(f64::MAX);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_css_names() {
    assert_eq!(ToastKind::Success.as_str(), "success");
    assert_eq!(ToastKind::Error.as_str(), "error");
    assert_eq!(ToastKind::Info.as_str(), "info");
    assert_eq!(ToastKind::Warning.as_str(), "warning");
}
