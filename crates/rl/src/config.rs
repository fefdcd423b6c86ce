//! Typed configuration for an external PPO agent.
//!
//! External training libraries take a flat mapping of option names to values.
//! [`PpoConfig`] names and types those options, checks their ranges and
//! renders the mapping with [`PpoConfig::to_options`]. Rollouts never read it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1, got {value}")]
    NotPositive {
        field: &'static str,
        value: usize,
    },
    #[error("hidden_layers must name at least one layer")]
    NoHiddenLayers,
    #[error("hidden layer {index} must have at least 1 unit")]
    EmptyHiddenLayer { index: usize },
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// PPO agent options. Fields missing from a JSON document take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PpoConfig {
    /// Parallel rollout workers. Default 2.
    pub num_workers: usize,
    /// Optimization epochs per training batch. Default 30.
    pub num_epochs: usize,
    /// Environment steps collected per training batch. Default 4000.
    pub batch_size: usize,
    /// Hidden-layer widths of the policy network, input side first.
    /// Default `[256, 256]`.
    pub hidden_layers: Vec<usize>,
}

impl Default for PpoConfig {
    fn default() -> Self {
        Self {
            num_workers: 2,
            num_epochs: 30,
            batch_size: 4000,
            hidden_layers: vec![256, 256],
        }
    }
}

impl PpoConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// a range error for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    ///
    /// As [`PpoConfig::from_json`], plus [`ConfigError::Io`] when the file
    /// cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("loading agent config from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Check every option against its documented range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("num_workers", self.num_workers),
            ("num_epochs", self.num_epochs),
            ("batch_size", self.batch_size),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.hidden_layers.is_empty() {
            return Err(ConfigError::NoHiddenLayers);
        }
        if let Some(index) = self.hidden_layers.iter().position(|&units| units == 0) {
            return Err(ConfigError::EmptyHiddenLayer { index });
        }
        Ok(())
    }

    /// The flat option mapping handed to the training library.
    #[must_use]
    pub fn to_options(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut options = serde_json::Map::new();
        options.insert("num_workers".into(), self.num_workers.into());
        options.insert("num_epochs".into(), self.num_epochs.into());
        options.insert("batch_size".into(), self.batch_size.into());
        options.insert("hidden_layers".into(), self.hidden_layers.clone().into());
        options
    }
}
