use super::*;

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn toggle_twice_returns_original() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn resolve_prefers_stored_value() {
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
}

#[test]
fn resolve_falls_back_to_os_preference() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn resolve_unknown_stored_value_is_light() {
    assert_eq!(Theme::resolve(Some("purple"), true), Theme::Light);
}

#[test]
fn theme_state_starts_not_ready() {
    let state = ThemeState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.ready);
}
