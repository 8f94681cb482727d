use super::*;
use quiz::sample::sample_quiz;

fn quiz(id: &str, title: &str) -> Quiz {
    Quiz::new(id, title, 0, quiz::sample::sample_questions())
}

fn state_with(ids: &[&str]) -> AppState {
    AppState { quizzes: ids.iter().map(|id| quiz(id, id)).collect(), active_id: None }
}

fn ids(state: &AppState) -> Vec<&str> {
    state.quizzes.iter().map(|q| q.id.as_str()).collect()
}

// =============================================================
// addQuiz / setActive
// =============================================================

#[test]
fn add_quiz_prepends() {
    let mut state = state_with(&["a"]);
    state.apply(AppAction::AddQuiz(quiz("b", "B")));
    assert_eq!(ids(&state), ["b", "a"]);
}

#[test]
fn set_active_does_not_check_existence() {
    let mut state = state_with(&["a"]);
    state.apply(AppAction::SetActive(Some("missing".to_owned())));
    assert_eq!(state.active_id.as_deref(), Some("missing"));
    assert!(state.active_quiz().is_none());
}

#[test]
fn active_quiz_follows_pointer() {
    let mut state = state_with(&["a", "b"]);
    state.apply(AppAction::SetActive(Some("b".to_owned())));
    assert_eq!(state.active_quiz().map(|q| q.id.as_str()), Some("b"));
    state.apply(AppAction::SetActive(None));
    assert!(state.active_quiz().is_none());
}

// =============================================================
// updateQuiz
// =============================================================

#[test]
fn update_quiz_replaces_matching_entry_in_place() {
    let mut state = state_with(&["a", "b", "c"]);
    state.apply(AppAction::UpdateQuiz(quiz("b", "Renamed")));
    assert_eq!(ids(&state), ["a", "b", "c"]);
    assert_eq!(state.quizzes[1].title, "Renamed");
    assert_eq!(state.quizzes[0].title, "a");
    assert_eq!(state.quizzes[2].title, "c");
}

#[test]
fn update_quiz_with_unknown_id_is_noop() {
    let mut state = state_with(&["a", "b"]);
    let before = state.clone();
    state.apply(AppAction::UpdateQuiz(quiz("z", "Z")));
    assert_eq!(state, before);
}

#[test]
fn update_quiz_touches_only_first_duplicate() {
    let mut state = state_with(&["a", "a"]);
    state.apply(AppAction::UpdateQuiz(quiz("a", "First")));
    assert_eq!(state.quizzes[0].title, "First");
    assert_eq!(state.quizzes[1].title, "a");
}

// =============================================================
// load
// =============================================================

#[test]
fn load_merges_present_fields_only() {
    let mut state = state_with(&["a"]);
    state.apply(AppAction::SetActive(Some("a".to_owned())));
    let patch: AppStatePatch = serde_json::from_str(r#"{"quizzes":[]}"#).unwrap();
    state.apply(AppAction::Load(patch));
    assert!(state.quizzes.is_empty());
    assert_eq!(state.active_id.as_deref(), Some("a"));
}

#[test]
fn load_explicit_null_clears_active_id() {
    let mut state = state_with(&["a"]);
    state.apply(AppAction::SetActive(Some("a".to_owned())));
    let patch: AppStatePatch = serde_json::from_str(r#"{"activeId":null}"#).unwrap();
    assert_eq!(patch.active_id, Some(None));
    state.apply(AppAction::Load(patch));
    assert_eq!(state.active_id, None);
    assert_eq!(ids(&state), ["a"]);
}

#[test]
fn load_of_full_state_replaces_everything() {
    let mut state = state_with(&["old"]);
    let stored = AppState { quizzes: vec![sample_quiz("s", 1)], active_id: Some("s".to_owned()) };
    state.apply(AppAction::Load(stored.clone().into()));
    assert_eq!(state, stored);
}

// =============================================================
// persistence shape
// =============================================================

#[test]
fn saved_state_loads_back_equal() {
    let original = AppState { quizzes: vec![sample_quiz("s", 5)], active_id: Some("s".to_owned()) };
    let raw = serde_json::to_string(&original).unwrap();
    let patch: AppStatePatch = serde_json::from_str(&raw).unwrap();
    let mut loaded = AppState::default();
    loaded.apply(AppAction::Load(patch));
    assert_eq!(loaded, original);
}

#[test]
fn state_uses_camel_case_keys() {
    let state = AppState { quizzes: vec![], active_id: Some("x".to_owned()) };
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["activeId"], "x");
    assert!(json["quizzes"].as_array().unwrap().is_empty());
}
