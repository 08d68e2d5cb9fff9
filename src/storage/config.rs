//! Configuration handling for tally
//!
//! Configuration is stored in `~/.config/tally/config.toml` (or the
//! platform equivalent). Every field has a default, so a missing file is
//! equivalent to an empty one; CLI flags override config values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned when `tally scan` is given no path
    pub notes_dir: Option<PathBuf>,

    /// Year whose tag dates are accepted (defaults to the current year)
    pub year: Option<String>,

    /// File extensions treated as notes, without dots
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: None,
            year: None,
            extensions: vec!["md".to_string(), "txt".to_string()],
        }
    }
}

impl Config {
    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        let config_dir = match Self::config_dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        Self::load_from(&config_dir.join("config.toml"))
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }

    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tally", "tally-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Resolves the directory to scan: flag, then config, then cwd
    pub fn effective_dir(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.notes_dir {
            return Ok(dir.clone());
        }
        std::env::current_dir().context("Could not determine current directory")
    }

    /// Resolves the year under analysis: flag, then config, then today
    pub fn effective_year(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.year.clone())
            .unwrap_or_else(|| Local::now().year().to_string())
    }

    /// Resolves the note extensions: flag values, then config
    pub fn effective_extensions(&self, flag: &[String]) -> Vec<String> {
        if flag.is_empty() {
            self.extensions.clone()
        } else {
            flag.to_vec()
        }
    }
}
