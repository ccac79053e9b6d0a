#![forbid(unsafe_code)]
//! Preference state engine
//!
//! Tracks theme, font size/unit and UI language, persists them through a
//! string-keyed store, and manages named profiles that can be saved,
//! reloaded and exported.

pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod export;
pub mod i18n;
pub mod persistence;

pub use config::{PreferenceState, ProfileSnapshot, Theme};
pub use engine::{PreferenceEngine, PreferenceView, ProfileOutcome};
pub use export::ExportArtifact;
pub use i18n::{Language, Translations};
pub use persistence::{FileStore, MemoryStore, PreferenceStore};
