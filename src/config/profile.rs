//! Saved profiles
//!
//! A profile is a named copy of the four scalar settings. The whole map is
//! stored as a single JSON object under the `profiles` key.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::config::state::Theme;
use crate::i18n::Language;

/// Profile name → snapshot, ordered by name
pub type Profiles = BTreeMap<String, ProfileSnapshot>;

/// Settings captured by `save_profile`, replaced wholesale on re-save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub theme: Theme,
    pub font_size: i32,
    pub font_unit: String,
    pub language: Language,
}

/// Trimmed profile name, or None when nothing is left
pub fn normalize_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn profiles_to_json(profiles: &Profiles) -> Result<String> {
    serde_json::to_string(profiles).context("Failed to serialize profiles to JSON")
}

/// Parse the stored profile map
///
/// Names are re-keyed the way `save_profile` stores them: trimmed, and
/// blank ones dropped. Untrimmed or blank names only come from a
/// hand-edited store.
pub fn profiles_from_json(json: &str) -> Result<Profiles> {
    let stored: Profiles = serde_json::from_str(json).context("Failed to parse profiles JSON")?;

    let mut profiles = Profiles::new();
    for (name, snapshot) in stored {
        let Some(trimmed) = normalize_name(&name) else {
            warn!(profile = ?name, "Dropping stored profile with blank name");
            continue;
        };
        if trimmed != name {
            warn!(profile = ?name, trimmed, "Trimming stored profile name");
        }
        if profiles.insert(trimmed.to_string(), snapshot).is_some() {
            warn!(profile = %trimmed, "Stored profile names collide after trimming");
        }
    }

    Ok(profiles)
}
