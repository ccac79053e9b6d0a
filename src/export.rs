//! Export artifact
//!
//! The exported file holds the four scalar settings as pretty-printed JSON.
//! Building the bytes and saving them are separate steps so the engine
//! never touches the filesystem itself.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ProfileSnapshot;
use crate::constants::export::FILENAME;

/// Named byte stream ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_snapshot(snapshot: &ProfileSnapshot) -> Result<Self> {
        let bytes = serde_json::to_vec_pretty(snapshot)
            .context("Failed to serialize export to JSON")?;
        Ok(Self { file_name: FILENAME, bytes })
    }

    /// Write the artifact into `dir` under its file name
    pub fn deliver(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

        let path = dir.join(self.file_name);
        fs::write(&path, &self.bytes)
            .with_context(|| format!("Failed to write export to {}", path.display()))?;

        info!(path = %path.display(), bytes = self.bytes.len(), "Exported preferences");
        Ok(path)
    }
}
