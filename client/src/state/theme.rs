//! Color theme value and its resolution order.
//!
//! DESIGN
//! ======
//! Pure value type; browser reads and writes live in `util::theme`. Initial
//! resolution prefers the stored value, then the OS preference, then light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "sakaai:theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Pick the initial theme.
    ///
    /// A stored value wins even when unrecognized (it resolves to light).
    /// Only an absent or empty value defers to the OS preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.filter(|s| !s.is_empty()) {
            Some(value) => Self::parse(value).unwrap_or(Self::Light),
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

/// Theme store provided through context.
///
/// `ready` stays false until the initial theme has been applied to the
/// document root; the layout hides its children until then.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub ready: bool,
}
