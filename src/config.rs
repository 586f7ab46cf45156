//! Centralized configuration management for nihongo-pocket

use std::path::PathBuf;

use crate::errors::ConfigError;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the log file is written to
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`
    pub log_file: String,
    /// Start each session with the starter vocabulary
    pub starter_words: bool,
    /// Fixed seed for phrase and quiz draws
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            log_file: "nihongo-pocket.log".to_string(),
            starter_words: true,
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let log_dir = lookup("NIHONGO_POCKET_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let log_file = lookup("NIHONGO_POCKET_LOG_FILE").unwrap_or(defaults.log_file);

        let starter_words = match lookup("NIHONGO_POCKET_STARTER_WORDS") {
            Some(value) => parse_bool("NIHONGO_POCKET_STARTER_WORDS", &value)?,
            None => defaults.starter_words,
        };

        let seed = parse_var(&lookup, "NIHONGO_POCKET_SEED")?;

        Ok(Config {
            log_dir,
            log_file,
            starter_words,
            seed,
        })
    }

    /// Apply the `--seed` command line override
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Full path of the log file
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.log_dir.is_dir() {
            return Err(ConfigError::MissingLogDir(self.log_dir.display().to_string()));
        }
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

/// Helper function to parse an environment variable as a specific type
fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}
