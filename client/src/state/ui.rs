//! Local UI chrome state (theme, header transitions).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the session state so the header can
//! restyle itself without touching login data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme applied through the `data-theme` attribute.
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

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Header background transitions stay off until the first manual toggle
    /// so the initial theme restore does not animate.
    pub transition_enabled: bool,
}
