#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::views::DEFAULT_INDEX_LIMIT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::{DateTime, Utc};
use toml_config::PollsConfig;

pub const DEFAULT_DATA_FILE: &str = "./polls.json";

/// Effective settings after TOML values and command line flags are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: String,
    pub index_limit: usize,
    /// Pinned "current time"; `None` means the system clock.
    pub now: Option<DateTime<Utc>>,
    pub verbose: bool,
    pub log_json: bool,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            index_limit: DEFAULT_INDEX_LIMIT,
            now: None,
            verbose: false,
            log_json: false,
            log_level: None,
        }
    }
}

impl Settings {
    pub fn with_file_config(mut self, file: &PollsConfig) -> Self {
        if let Some(data_file) = file.data_file() {
            self.data_file = data_file.to_string();
        }
        if let Some(limit) = file.index_limit() {
            self.index_limit = limit;
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_string());
        }
        self.log_json = file.log_json();
        self
    }
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn index_limit(&self) -> usize {
        self.index_limit
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_file", &self.data_file)?;
        validation::validate_file_extension("data_file", &self.data_file, &["json"])?;
        validation::validate_positive_number("index_limit", self.index_limit, 1)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}
