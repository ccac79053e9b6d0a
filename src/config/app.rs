//! Runtime configuration for the CLI
//!
//! Resolves where the preference store lives and how verbose logging is.
//! Explicit flags win over environment variables, which win over defaults.

use std::env;
use std::path::PathBuf;
use tracing::Level;

use crate::constants::config::{APP_DIR, FILENAME, LOG_LEVEL_ENV, STORE_ENV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub log_level: Level,
}

impl AppConfig {
    /// Build from an optional `--store` flag and the process environment
    pub fn resolve(store_flag: Option<PathBuf>) -> Self {
        Self::resolve_with(
            store_flag,
            env::var_os(STORE_ENV).map(PathBuf::from),
            env::var(LOG_LEVEL_ENV).ok(),
        )
    }

    fn resolve_with(
        store_flag: Option<PathBuf>,
        store_env: Option<PathBuf>,
        log_level_env: Option<String>,
    ) -> Self {
        let store_path = store_flag
            .or_else(|| store_env.filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or_else(default_store_path);

        Self {
            store_path,
            log_level: parse_log_level(log_level_env.as_deref().unwrap_or("info")),
        }
    }
}

/// `<config dir>/user-preferences/preferences.json`
pub fn default_store_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(FILENAME);
    path
}

/// Unknown names fall back to INFO
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
