//! Preference engine
//!
//! Owns the live [`PreferenceState`] and a [`PreferenceStore`]. Startup
//! hydrates the state from the store; every mutation writes the complete
//! next state through the store and only then makes it current, so callers
//! never observe settings that were not saved.

use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::config::profile::{normalize_name, profiles_from_json, profiles_to_json};
use crate::config::{PreferenceState, Theme};
use crate::constants::keys;
use crate::export::ExportArtifact;
use crate::i18n::{Language, Translations};
use crate::persistence::PreferenceStore;

/// Result of a profile save or load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    Saved { name: String, message: &'static str },
    Loaded { name: String, message: &'static str },
    /// Blank name, or no profile under that name
    NothingToDo,
}

impl ProfileOutcome {
    /// Localized confirmation to show the user, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ProfileOutcome::Saved { message, .. } | ProfileOutcome::Loaded { message, .. } => {
                Some(*message)
            }
            ProfileOutcome::NothingToDo => None,
        }
    }
}

/// Everything a rendering layer needs after an operation
#[derive(Debug, Clone, Copy)]
pub struct PreferenceView<'a> {
    pub state: &'a PreferenceState,
    pub strings: &'static Translations,
}

pub struct PreferenceEngine<S: PreferenceStore> {
    store: S,
    state: PreferenceState,
}

impl<S: PreferenceStore> PreferenceEngine<S> {
    /// Hydrate state from `store`
    ///
    /// Absent keys keep their defaults. Malformed values are logged and
    /// ignored; only a failing store read is an error.
    pub fn initialize(store: S) -> Result<Self> {
        let state = hydrate(&store)?;
        info!(
            theme = %state.theme,
            font = %state.font_display(),
            language = %state.language,
            profiles = state.profiles.len(),
            "Loaded preferences"
        );
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn view(&self) -> PreferenceView<'_> {
        PreferenceView {
            state: &self.state,
            strings: self.state.language.strings(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Saved profile names in sorted order
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.state.profiles.keys().map(String::as_str)
    }

    /// Write all five fields of the current state
    pub fn persist(&mut self) -> Result<()> {
        write_state(&mut self.store, &self.state)
    }

    /// Persist `next`, then make it the live state
    fn commit(&mut self, next: PreferenceState) -> Result<&PreferenceState> {
        write_state(&mut self.store, &next)?;
        self.state = next;
        Ok(&self.state)
    }

    fn update(&mut self, f: impl FnOnce(&mut PreferenceState)) -> Result<&PreferenceState> {
        let mut next = self.state.clone();
        f(&mut next);
        self.commit(next)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<&PreferenceState> {
        info!(%theme, "Setting theme");
        self.update(|s| s.theme = theme)
    }

    pub fn toggle_theme(&mut self) -> Result<&PreferenceState> {
        self.set_theme(self.state.theme.toggled())
    }

    pub fn set_font_size(&mut self, size: i32) -> Result<&PreferenceState> {
        info!(size, "Setting font size");
        self.update(|s| s.font_size = size)
    }

    pub fn set_font_unit(&mut self, unit: &str) -> Result<&PreferenceState> {
        info!(unit, "Setting font unit");
        self.update(|s| s.font_unit = unit.to_string())
    }

    pub fn set_language(&mut self, language: Language) -> Result<&PreferenceState> {
        info!(%language, "Setting language");
        self.update(|s| s.language = language)
    }

    pub fn toggle_language(&mut self) -> Result<&PreferenceState> {
        self.set_language(self.state.language.toggled())
    }

    /// Snapshot the current settings under `name`, replacing any profile
    /// already saved under it
    pub fn save_profile(&mut self, name: &str) -> Result<ProfileOutcome> {
        let Some(name) = normalize_name(name) else {
            debug!("Ignoring save with blank profile name");
            return Ok(ProfileOutcome::NothingToDo);
        };

        let snapshot = self.state.snapshot();
        let replaced = self.state.profiles.contains_key(name);
        self.update(|s| {
            s.profiles.insert(name.to_string(), snapshot);
        })
        .with_context(|| format!("Failed to save profile '{}'", name))?;

        info!(profile = %name, replaced, "Saved profile");
        Ok(ProfileOutcome::Saved {
            name: name.to_string(),
            message: self.state.language.strings().profile_saved,
        })
    }

    /// Restore the settings saved under `name`
    ///
    /// The profile's language replaces the active one, so the returned
    /// message is in the loaded language.
    pub fn load_profile(&mut self, name: &str) -> Result<ProfileOutcome> {
        let Some(name) = normalize_name(name) else {
            debug!("Ignoring load with blank profile name");
            return Ok(ProfileOutcome::NothingToDo);
        };
        let Some(snapshot) = self.state.profiles.get(name).cloned() else {
            warn!(profile = %name, "No saved profile with that name");
            return Ok(ProfileOutcome::NothingToDo);
        };

        self.update(|s| s.apply(&snapshot))
            .with_context(|| format!("Failed to load profile '{}'", name))?;

        info!(profile = %name, language = %snapshot.language, "Loaded profile");
        Ok(ProfileOutcome::Loaded {
            name: name.to_string(),
            message: self.state.language.strings().profile_loaded,
        })
    }

    /// First export phase: the question to put to the user
    pub fn prepare_export(&self) -> &'static str {
        self.state.language.strings().export_confirmation
    }

    /// Second export phase: build the artifact if the user said yes
    pub fn complete_export(&self, confirmed: bool) -> Result<Option<ExportArtifact>> {
        if !confirmed {
            debug!("Export declined");
            return Ok(None);
        }
        ExportArtifact::from_snapshot(&self.state.snapshot()).map(Some)
    }
}

fn write_state<S: PreferenceStore>(store: &mut S, state: &PreferenceState) -> Result<()> {
    let entries = [
        (keys::THEME, state.theme.code().to_string()),
        (keys::FONT_SIZE, state.font_size.to_string()),
        (keys::FONT_UNIT, state.font_unit.clone()),
        (keys::LANGUAGE, state.language.code().to_string()),
        (keys::PROFILES, profiles_to_json(&state.profiles)?),
    ];
    store.set_all(&entries).context("Failed to persist preferences")
}

fn hydrate<S: PreferenceStore>(store: &S) -> Result<PreferenceState> {
    let mut state = PreferenceState::default();

    if let Some(theme) = read_parsed::<S, Theme>(store, keys::THEME)? {
        state.theme = theme;
    }
    if let Some(size) = read_parsed::<S, i32>(store, keys::FONT_SIZE)? {
        state.font_size = size;
    }
    if let Some(unit) = read_key(store, keys::FONT_UNIT)? {
        state.font_unit = unit;
    }
    if let Some(language) = read_parsed::<S, Language>(store, keys::LANGUAGE)? {
        state.language = language;
    }
    if let Some(raw) = read_key(store, keys::PROFILES)? {
        match profiles_from_json(&raw) {
            Ok(profiles) => state.profiles = profiles,
            Err(e) => warn!(error = ?e, "Stored profiles unreadable, starting with none"),
        }
    }

    Ok(state)
}

fn read_key<S: PreferenceStore>(store: &S, key: &str) -> Result<Option<String>> {
    store
        .get(key)
        .with_context(|| format!("Failed to read '{}' from preference store", key))
}

/// Parse a stored value, treating a malformed one as absent
fn read_parsed<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: PreferenceStore,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = read_key(store, key)? else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "Ignoring malformed stored value");
            Ok(None)
        }
    }
}
