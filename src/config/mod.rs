//! Preference model and runtime configuration
//!
//! - **state**: PreferenceState, the live settings the engine mutates
//! - **profile**: ProfileSnapshot and the saved profile map
//! - **app**: AppConfig, store location and log level for the CLI

pub mod app;
pub mod profile;
pub mod state;

// Re-export commonly used types
pub use app::AppConfig;
pub use profile::{ProfileSnapshot, Profiles};
pub use state::{PreferenceState, Theme};
