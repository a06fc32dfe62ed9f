//! Runtime configuration: an optional JSON file overlaid by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::GRAVITY_MS;

/// Every field is optional so a file or the command line can set any subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub seed: Option<u32>,
    pub gravity_ms: Option<u32>,
    pub log_file: Option<PathBuf>,
    pub verbose: Option<u8>,
}

/// Fully resolved settings used to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u32,
    pub gravity_ms: u32,
    pub log_file: Option<PathBuf>,
    pub verbose: u8,
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Fields set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            seed: overrides.seed.or(self.seed),
            gravity_ms: overrides.gravity_ms.or(self.gravity_ms),
            log_file: overrides.log_file.or(self.log_file),
            verbose: overrides.verbose.or(self.verbose),
        }
    }

    /// Fill the gaps with defaults. A missing seed is drawn at random.
    pub fn resolve(self) -> Settings {
        Settings {
            seed: self.seed.unwrap_or_else(rand::random),
            gravity_ms: self.gravity_ms.unwrap_or(GRAVITY_MS).max(1),
            log_file: self.log_file,
            verbose: self.verbose.unwrap_or(0),
        }
    }
}
