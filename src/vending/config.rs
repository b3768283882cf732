//! Configuration for the candy machine.
//!
//! Loaded from JSON; every field has a default so a partial file (or `{}`)
//! is valid. Validation accumulates all problems before reporting.

use crate::builder::{BuildError, DEFAULT_MAX_SETTLE_STEPS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Coins accepted by default, in cents.
pub const DEFAULT_DENOMINATIONS: [u32; 5] = [5, 10, 25, 50, 100];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendingConfig {
    /// Coin values, in cents, that count as valid
    pub valid_denominations: Vec<u32>,
    /// Cap on automatic transitions fired per event
    pub max_settle_steps: usize,
}

impl Default for VendingConfig {
    fn default() -> Self {
        Self {
            valid_denominations: DEFAULT_DENOMINATIONS.to_vec(),
            max_settle_steps: DEFAULT_MAX_SETTLE_STEPS,
        }
    }
}

/// Problems found in a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("at least one valid denomination is required")]
    NoDenominations,

    #[error("a denomination of 0 cents cannot be told apart from an empty slot")]
    ZeroDenomination,

    #[error("denomination {value} is listed more than once")]
    DuplicateDenomination { value: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {}", describe(.violations))]
    Invalid { violations: Vec<ConfigViolation> },
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from turning a configuration into a running machine.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl VendingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if self.valid_denominations.is_empty() {
            checks.push(Validation::fail(ConfigViolation::NoDenominations));
        }

        if self.valid_denominations.contains(&0) {
            checks.push(Validation::fail(ConfigViolation::ZeroDenomination));
        }

        let mut seen = BTreeSet::new();
        let mut reported = BTreeSet::new();
        for value in &self.valid_denominations {
            if !seen.insert(*value) && reported.insert(*value) {
                checks.push(Validation::fail(ConfigViolation::DuplicateDenomination {
                    value: *value,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// The validated set of accepted coins.
    pub fn denominations(&self) -> Result<Denominations, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(Denominations(
                self.valid_denominations.iter().copied().collect(),
            )),
            Validation::Failure(errors) => Err(ConfigError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

/// Fixed set of valid coin values, in cents. Never contains 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Denominations(BTreeSet<u32>);

impl Denominations {
    pub fn contains(&self, cents: u32) -> bool {
        self.0.contains(&cents)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Self(DEFAULT_DENOMINATIONS.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(config: &VendingConfig) -> Vec<ConfigViolation> {
        match config.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = VendingConfig::default();

        assert!(config.validate().is_success());
        assert_eq!(config.max_settle_steps, DEFAULT_MAX_SETTLE_STEPS);
        assert_eq!(config.denominations().unwrap(), Denominations::default());
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config = VendingConfig::from_json("{}").unwrap();
        assert_eq!(config, VendingConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = VendingConfig::from_json(r#"{"valid_denominations": [25, 100]}"#).unwrap();

        let coins = config.denominations().unwrap();
        assert_eq!(coins.iter().collect::<Vec<_>>(), vec![25, 100]);
        assert!(coins.contains(25));
        assert!(!coins.contains(5));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = VendingConfig::from_json(r#"{"valid_denominations": "lots"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = VendingConfig::load("/nonexistent/vendchart.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn empty_denominations_are_rejected() {
        let config = VendingConfig {
            valid_denominations: Vec::new(),
            ..VendingConfig::default()
        };

        assert_eq!(violations(&config), vec![ConfigViolation::NoDenominations]);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = VendingConfig {
            valid_denominations: vec![0, 25, 25, 25, 10, 10],
            ..VendingConfig::default()
        };

        let found = violations(&config);

        assert_eq!(found.len(), 3);
        assert!(found.contains(&ConfigViolation::ZeroDenomination));
        assert!(found.contains(&ConfigViolation::DuplicateDenomination { value: 25 }));
        assert!(found.contains(&ConfigViolation::DuplicateDenomination { value: 10 }));
    }

    #[test]
    fn invalid_config_yields_no_denominations() {
        let config = VendingConfig {
            valid_denominations: vec![0],
            ..VendingConfig::default()
        };

        let err = config.denominations().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("0 cents"));
    }
}
