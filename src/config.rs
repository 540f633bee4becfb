//! Runtime configuration for the task list and the store.

use std::path::PathBuf;

/// Default minimum character length for new task text.
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Default store file path, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".tally/tasks.json";

/// Configuration consumed by the task list and the store.
///
/// Built once per invocation and passed by reference into the command
/// handlers, so independent lists in one process (tests included) never
/// share state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum accepted character length for new task text.
    pub min_length: usize,
    /// Path of the flat file holding persisted tasks.
    pub store_path: PathBuf,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `TALLY_STORE` overrides the store path and `TALLY_MIN_LENGTH` the
    /// minimum text length; unset or unparsable values fall back to the
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let min_length = std::env::var("TALLY_MIN_LENGTH")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_MIN_LENGTH);
        let store_path = std::env::var("TALLY_STORE")
            .map_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);
        Self { min_length, store_path }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { min_length: DEFAULT_MIN_LENGTH, store_path: PathBuf::from(DEFAULT_STORE_PATH) }
    }
}
