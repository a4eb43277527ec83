//! Local presentation state (theme).
//!
//! DESIGN
//! ======
//! Keeps visual preferences out of `JobBoardState` so theme changes never
//! touch job data or trigger a re-filter.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Two-valued visual theme, persisted as `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized reads as the default.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
