//! Configuration for the clockface service module

use serde::Deserialize;
use std::path::Path;

/// Clockface service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Accept bare-identifier values predating the envelope format
    #[serde(default = "default_true")]
    pub legacy_fallback: bool,

    /// Enforce the clockface identifier character set
    #[serde(default = "default_true")]
    pub strict_id_validation: bool,

    /// Maximum clockface identifier length in characters
    #[serde(default = "default_max_id_length")]
    pub max_clockface_id_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legacy_fallback: true,
            strict_id_validation: true,
            max_clockface_id_length: default_max_id_length(),
        }
    }
}

impl Config {
    /// Parse a configuration document from YAML
    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Load a configuration file from disk
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}

fn default_true() -> bool {
    true
}

fn default_max_id_length() -> usize {
    256
}
