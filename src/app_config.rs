use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Component, Path, PathBuf};

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Ordered list of directories to compact, relative to both roots
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// Root directory the source files are read from
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Root directory the compacted files are written to
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            anyhow!(
                "Failed to read config file {:?}: {}",
                path.as_ref(),
                e
            )
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            anyhow!(
                "Failed to parse config file {:?}: {}",
                path.as_ref(),
                e
            )
        })?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.directories.is_empty() {
            return Err(anyhow!("At least one directory must be configured"));
        }

        for dir in &self.directories {
            let path = Path::new(dir);
            if path.is_absolute() {
                return Err(anyhow!("Configured directory must be relative: {}", dir));
            }
            if path.components().any(|c| c == Component::ParentDir) {
                return Err(anyhow!(
                    "Configured directory must not escape the roots: {}",
                    dir
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            directories: default_directories(),
            source_root: default_source_root(),
            output_root: default_output_root(),
            log_level: LogLevel::default(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_directories() -> Vec<String> {
    vec!["res/data".to_string(), "res/i18n".to_string()]
}

fn default_source_root() -> PathBuf {
    PathBuf::from("..")
}

fn default_output_root() -> PathBuf {
    PathBuf::from(".")
}
