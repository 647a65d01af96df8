//! Configuration system for MapColor.
//!
//! Load solver configuration from TOML or YAML files to control the default
//! strategy, variable ordering, palette synthesis and search budgets without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use mapcolor_config::SolverConfig;
//! use mapcolor_core::{RegionOrder, StrategyKind};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     default_strategy = "forward_checking"
//!     region_order = "degree_descending"
//!
//!     [palette]
//!     default_max_colors = 4
//!
//!     [termination]
//!     step_count_limit = 50000
//!     seconds_spent_limit = 2
//! "#).unwrap();
//!
//! assert_eq!(config.default_strategy, StrategyKind::ForwardChecking);
//! assert_eq!(config.region_order, RegionOrder::DegreeDescending);
//! assert_eq!(config.palette.default_max_colors, 4);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(2)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use mapcolor_config::SolverConfig;
//!
//! let config = SolverConfig::load("mapcolor.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use mapcolor_core::{
    Color, Palette, RegionOrder, StrategyKind, DEFAULT_LABEL_PREFIX, DEFAULT_MAX_COLORS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Strategy used when the caller names none.
    #[serde(default)]
    pub default_strategy: StrategyKind,

    /// Variable ordering for backtracking and forward checking.
    #[serde(default)]
    pub region_order: RegionOrder,

    /// Palette synthesis settings.
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Search budget.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.step_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "step_count_limit must be greater than zero".to_string(),
                ));
            }
        }
        if self.palette.default_max_colors > self.palette.max_colors_limit {
            return Err(ConfigError::Invalid(format!(
                "palette default_max_colors {} exceeds max_colors_limit {}",
                self.palette.default_max_colors, self.palette.max_colors_limit
            )));
        }
        if self.palette.label_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "palette label_prefix '{}' contains whitespace",
                self.palette.label_prefix
            )));
        }
        Ok(())
    }

    /// Sets the default strategy.
    pub fn with_default_strategy(mut self, strategy: StrategyKind) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Sets the variable ordering.
    pub fn with_region_order(mut self, order: RegionOrder) -> Self {
        self.region_order = order;
        self
    }

    /// Sets the step budget.
    pub fn with_step_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_termination_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the step budget, if configured.
    pub fn step_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }

    /// Resolves a request palette with the configured defaults.
    ///
    /// ```
    /// use mapcolor_config::SolverConfig;
    ///
    /// let config = SolverConfig::default();
    /// assert_eq!(config.resolve_palette(None, None).colors(), ["color0", "color1", "color2"]);
    /// ```
    pub fn resolve_palette(&self, colors: Option<Vec<Color>>, max_colors: Option<usize>) -> Palette {
        Palette::resolve(
            colors,
            max_colors,
            self.palette.default_max_colors,
            &self.palette.label_prefix,
        )
    }
}

/// Default cap on synthesized palette sizes.
pub const DEFAULT_MAX_COLORS_LIMIT: usize = 1024;

/// Palette synthesis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PaletteConfig {
    /// Colors synthesized when a request carries neither colors nor a count.
    pub default_max_colors: usize,

    /// Largest `max_colors` a request may ask to synthesize.
    pub max_colors_limit: usize,

    /// Prefix of synthesized labels.
    pub label_prefix: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_max_colors: DEFAULT_MAX_COLORS,
            max_colors_limit: DEFAULT_MAX_COLORS_LIMIT,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of recorded steps.
    pub step_count_limit: Option<u64>,

    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Additional milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        if limit.is_zero() {
            None
        } else {
            Some(limit)
        }
    }
}

#[cfg(test)]
mod tests;
