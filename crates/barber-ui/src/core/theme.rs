//! Light/dark theme state and the utility classes that express it.
//!
//! # Design
//! - The dark background class is the single marker read from markup.
//! - A swap always replaces both the background and the text-color class.

use serde::{Deserialize, Serialize};

/// Light or dark theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Read the mode from presence of the dark marker class.
    #[must_use]
    pub const fn from_dark_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Background and text-color classes applied together for one mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeClassSet {
    /// Background utility class.
    pub background: String,
    /// Text-color utility class.
    pub text: String,
}

impl ThemeClassSet {
    fn new(background: &str, text: &str) -> Self {
        Self {
            background: background.to_string(),
            text: text.to_string(),
        }
    }

    /// Both classes in application order.
    #[must_use]
    pub fn classes(&self) -> [&str; 2] {
        [self.background.as_str(), self.text.as_str()]
    }
}

/// Class sets for both modes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemePalette {
    /// Classes carried while dark.
    pub dark: ThemeClassSet,
    /// Classes carried while light.
    pub light: ThemeClassSet,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            dark: ThemeClassSet::new("bg-zinc-900", "text-white"),
            light: ThemeClassSet::new("bg-gray-100", "text-black"),
        }
    }
}

impl ThemePalette {
    /// Class whose presence marks the dark theme.
    #[must_use]
    pub fn dark_marker(&self) -> &str {
        &self.dark.background
    }

    /// Classes to carry for `mode`.
    #[must_use]
    pub const fn for_mode(&self, mode: ThemeMode) -> &ThemeClassSet {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Classes to strip when entering `mode`.
    #[must_use]
    pub const fn opposite_of(&self, mode: ThemeMode) -> &ThemeClassSet {
        self.for_mode(mode.toggled())
    }
}
