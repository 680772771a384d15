//! Configuration: rule constants and the ruleset bundle

mod constants;
mod ruleset;

pub use constants::{
    BattleConstants, CheckConstants, EquipmentConstants, GameConstants, InventoryConstants,
};
pub use ruleset::{Ruleset, RULES_FILE};

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Error loading rules configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error(transparent)]
    Tables(#[from] tables_core::ConfigError),
}

pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

pub(crate) fn parse_toml<T: DeserializeOwned>(toml: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(toml)?)
}
