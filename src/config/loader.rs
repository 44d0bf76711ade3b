//! Configuration file loading
//!
//! Handles locating and loading the bridge configuration file from the
//! usual places, with environment overrides applied on top and a fallback
//! to defaults when no file exists.

use super::ProcessConfig;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the configuration file, without extension
const CONFIG_BASENAME: &str = "jts-bridge";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigLoader {
    /// Create a loader with the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Create a loader searching only the given directory (used by tests)
    pub fn with_search_path(dir: &Path) -> Self {
        Self {
            search_paths: vec![dir.to_path_buf()],
        }
    }

    /// Load configuration: file if found, defaults otherwise, environment
    /// overrides always applied last
    pub fn load(&self) -> Result<ProcessConfig> {
        let mut config = match self.find_config_file() {
            Some(path) => {
                info!("Loading configuration from '{}'", path.display());
                self.load_from_path(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                ProcessConfig::default()
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific file, format per extension
    pub fn load_from_path(&self, path: &Path) -> Result<ProcessConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match Self::format_for(path) {
            ConfigFormat::Json => {
                serde_json::from_str(&contents).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| Error::ConfigParseFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// First existing configuration file on the search path
    fn find_config_file(&self) -> Option<PathBuf> {
        for dir in &self.search_paths {
            for ext in ["toml", "json"] {
                let candidate = dir.join(format!("{}.{}", CONFIG_BASENAME, ext));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn format_for(path: &Path) -> ConfigFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    /// Directories searched for a configuration file, in order: beside the
    /// executable, the working directory, the user config directory.
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                paths.push(dir.to_path_buf());
            }
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd);
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_BASENAME));
        }

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
