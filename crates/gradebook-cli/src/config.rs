//! CLI configuration.
//!
//! Resolved in layers: built-in defaults, then an optional `gradebook.toml`,
//! then environment variables, then command-line flags.
//!
//! Environment variables:
//! - GRADEBOOK_STORE (path to the JSON store)
//! - GRADEBOOK_ADMISSION_MODE (standard or advanced)
//! - GRADEBOOK_DIGEST_ROUNDS (password digest rounds for new accounts)

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use gradebook_core::AdmissionMode;
use gradebook_state::DEFAULT_DIGEST_ROUNDS;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gradebook.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradebookConfig {
    /// JSON store location
    pub store_path: PathBuf,
    /// Admission mode used when a command does not name one
    pub admission_mode: AdmissionMode,
    /// Password digest rounds for new accounts
    pub digest_rounds: u32,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".gradebook/store.json"),
            admission_mode: AdmissionMode::StandardEntry,
            digest_rounds: DEFAULT_DIGEST_ROUNDS,
        }
    }
}

impl GradebookConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Invalid gradebook config")
    }

    /// Load `path`. With `required == false` a missing file yields defaults.
    pub fn from_file(path: &Path, required: bool) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Apply overrides from a variable lookup.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store) = lookup("GRADEBOOK_STORE").filter(|s| !s.trim().is_empty()) {
            self.store_path = PathBuf::from(store);
        }
        if let Some(mode) = lookup("GRADEBOOK_ADMISSION_MODE") {
            self.admission_mode = mode
                .parse()
                .map_err(|e: String| anyhow!("GRADEBOOK_ADMISSION_MODE: {e}"))?;
        }
        if let Some(rounds) = lookup("GRADEBOOK_DIGEST_ROUNDS") {
            self.digest_rounds = rounds
                .trim()
                .parse()
                .with_context(|| format!("GRADEBOOK_DIGEST_ROUNDS='{rounds}' is not a number"))?;
        }
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults, then the config file, then the environment.
    ///
    /// An explicit `path` must exist; the default `gradebook.toml` may not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p, true)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };
        base.apply_env()
    }

    /// Set the store path from `--store`.
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.store_path = p;
        }
        self
    }
}
