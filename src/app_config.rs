use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory that receives one JSON file per converted quiz
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Path of the batch summary index
    #[serde(default = "default_index_path")]
    pub index_path: String,

    /// Prefix for the `file` field of index entries
    #[serde(default = "default_index_url_prefix")]
    pub index_url_prefix: String,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Leave existing JSON files alone in batch mode
    #[serde(default)]
    pub skip_existing: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
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

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> String {
    "./data/quizzes".to_string()
}

fn default_index_path() -> String {
    "./data/quiz-index.json".to_string()
}

fn default_index_url_prefix() -> String {
    "/data/quizzes".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if self.index_path.trim().is_empty() {
            return Err(anyhow!("Index path must not be empty"));
        }

        if !self.index_url_prefix.starts_with('/') {
            return Err(anyhow!(
                "Index URL prefix must start with '/': {}",
                self.index_url_prefix
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            index_path: default_index_path(),
            index_url_prefix: default_index_url_prefix(),
            pretty_json: default_true(),
            skip_existing: false,
            log_level: LogLevel::default(),
        }
    }
}
