//! Live preference state
//!
//! The in-memory model the engine mutates. Starts from hard-coded defaults
//! and is overwritten field-by-field during hydration.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::config::profile::{ProfileSnapshot, Profiles};
use crate::constants::defaults;
use crate::i18n::Language;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.code() == s)
            .ok_or_else(|| anyhow!("Unknown theme '{}'", s))
    }
}

/// Current settings plus saved profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceState {
    pub theme: Theme,
    /// Not range-checked; any integer the caller supplies is kept
    pub font_size: i32,
    /// Opaque unit token, compared by equality only
    pub font_unit: String,
    pub language: Language,
    pub profiles: Profiles,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_size: defaults::FONT_SIZE,
            font_unit: defaults::FONT_UNIT.to_string(),
            language: Language::default(),
            profiles: Profiles::new(),
        }
    }
}

impl PreferenceState {
    /// Copy of the four scalar settings
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            theme: self.theme,
            font_size: self.font_size,
            font_unit: self.font_unit.clone(),
            language: self.language,
        }
    }

    /// Overwrite the scalar settings from a snapshot, profiles untouched
    pub fn apply(&mut self, snapshot: &ProfileSnapshot) {
        self.theme = snapshot.theme;
        self.font_size = snapshot.font_size;
        self.font_unit = snapshot.font_unit.clone();
        self.language = snapshot.language;
    }

    /// Font size with its unit, e.g. "16px"
    pub fn font_display(&self) -> String {
        format!("{}{}", self.font_size, self.font_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = PreferenceState::default();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.font_size, 16);
        assert_eq!(state.font_unit, "px");
        assert_eq!(state.language, Language::En);
        assert!(state.profiles.is_empty());
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_snapshot_apply_leaves_profiles() {
        let mut state = PreferenceState::default();
        state.profiles.insert("keep".to_string(), state.snapshot());

        let snapshot = ProfileSnapshot {
            theme: Theme::Dark,
            font_size: 22,
            font_unit: "em".to_string(),
            language: Language::Es,
        };
        state.apply(&snapshot);

        assert_eq!(state.snapshot(), snapshot);
        assert!(state.profiles.contains_key("keep"));
    }

    #[test]
    fn test_font_display() {
        let mut state = PreferenceState::default();
        assert_eq!(state.font_display(), "16px");
        state.font_size = -3;
        state.font_unit = "rem".to_string();
        assert_eq!(state.font_display(), "-3rem");
    }
}
