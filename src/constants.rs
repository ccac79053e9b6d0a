//! Application-wide constants
//!
//! Storage keys, defaults and file names used across the engine,
//! kept in one place so the persisted format has a single source of truth.

/// Keys written to the preference store
pub mod keys {
    pub const THEME: &str = "theme";
    pub const FONT_SIZE: &str = "fontSize";
    pub const FONT_UNIT: &str = "fontUnit";
    pub const LANGUAGE: &str = "language";
    pub const PROFILES: &str = "profiles";
}

/// Values a fresh state starts from before hydration
pub mod defaults {
    /// Font size in `FONT_UNIT`s
    pub const FONT_SIZE: i32 = 16;

    pub const FONT_UNIT: &str = "px";
}

/// Export artifact constants
pub mod export {
    /// Logical file name of the exported preferences
    pub const FILENAME: &str = "user_preferences.json";
}

/// On-disk store location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "user-preferences";

    /// Store file inside `APP_DIR`
    pub const FILENAME: &str = "preferences.json";

    /// Environment variable overriding the store path
    pub const STORE_ENV: &str = "USER_PREFS_STORE";

    /// Environment variable selecting the log level
    pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
}
