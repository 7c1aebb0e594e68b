//! Render configuration.
//!
//! Loads output and sampling settings from TOML text with environment
//! variable override support. Reading the text from disk is left to the
//! caller.

use crate::rng::EquilRng;
use crate::types::ConfigError;
use equil_deck::DeckFormat;
use serde::Deserialize;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MAX_FLOAT_PRECISION: usize = 17;
const MAX_VALUES_PER_LINE: usize = 1000;

/// Sampling and output configuration for an equilibration parameter set.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EquilConfig {
    /// Seed for the owned random source; `None` draws one from entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Decimals for float values in rendered decks
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,

    /// Region numbers per line in the grid include
    #[serde(default = "default_values_per_line")]
    pub values_per_line: usize,

    /// Comment each EQUIL record with its region's named values
    #[serde(default = "default_region_comments")]
    pub region_comments: bool,

    /// Log level, applied by the caller's subscriber through [`log_filter`](Self::log_filter)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_float_precision() -> usize {
    6
}

fn default_values_per_line() -> usize {
    1
}

fn default_region_comments() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EquilConfig {
    fn default() -> Self {
        Self {
            seed: None,
            float_precision: default_float_precision(),
            values_per_line: default_values_per_line(),
            region_comments: default_region_comments(),
            log_level: default_log_level(),
        }
    }
}

impl EquilConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("EQUIL_SEED") {
            if let Ok(seed) = seed.parse() {
                self.seed = Some(seed);
            }
        }

        if let Ok(precision) = std::env::var("EQUIL_FLOAT_PRECISION") {
            if let Ok(precision) = precision.parse() {
                self.float_precision = precision;
            }
        }

        if let Ok(log_level) = std::env::var("EQUIL_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.float_precision > MAX_FLOAT_PRECISION {
            errors.push(format!(
                "float_precision {} exceeds maximum allowed ({})",
                self.float_precision, MAX_FLOAT_PRECISION
            ));
        }

        if self.values_per_line == 0 {
            errors.push("values_per_line must be greater than 0".to_string());
        } else if self.values_per_line > MAX_VALUES_PER_LINE {
            errors.push(format!(
                "values_per_line {} exceeds maximum allowed ({})",
                self.values_per_line, MAX_VALUES_PER_LINE
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Parse, apply environment overrides and validate.
    pub fn load_with_env_and_validate(content: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(content)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Deck layout described by this configuration.
    pub fn deck_format(&self) -> DeckFormat {
        DeckFormat {
            float_precision: self.float_precision,
            values_per_line: self.values_per_line,
            region_comments: self.region_comments,
        }
    }

    /// Filter directive for a `tracing` subscriber, e.g. `equil_core=debug`.
    pub fn log_filter(&self) -> String {
        format!("equil_core={}", self.log_level.to_lowercase())
    }

    /// Random source described by this configuration.
    pub fn rng(&self) -> EquilRng {
        self.seed
            .map_or_else(EquilRng::from_entropy, EquilRng::from_seed)
    }
}
