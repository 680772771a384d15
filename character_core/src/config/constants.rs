//! Game rule constants

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Tunable rule constants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub battle: BattleConstants,
    #[serde(default)]
    pub inventory: InventoryConstants,
    #[serde(default)]
    pub equipment: EquipmentConstants,
    #[serde(default)]
    pub checks: CheckConstants,
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.checks.min_dice < 1 {
            return Err(ConfigError::ValidationError(
                "checks.min_dice must be at least 1".to_string(),
            ));
        }
        if self.checks.max_dice < self.checks.min_dice {
            return Err(ConfigError::ValidationError(
                "checks.max_dice must not be below checks.min_dice".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConstants {
    /// Movement speed before modifiers
    #[serde(default = "default_base_speed")]
    pub base_speed: i32,
}

impl Default for BattleConstants {
    fn default() -> Self {
        BattleConstants {
            base_speed: default_base_speed(),
        }
    }
}

fn default_base_speed() -> i32 {
    2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConstants {
    /// Carrying slots before modifiers and bags
    #[serde(default = "default_base_space")]
    pub base_space: i32,
}

impl Default for InventoryConstants {
    fn default() -> Self {
        InventoryConstants {
            base_space: default_base_space(),
        }
    }
}

fn default_base_space() -> i32 {
    2
}

/// Equip gates: bonuses of a type only apply while no more than this many
/// items of that type are equipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentConstants {
    #[serde(default = "default_max_weapons")]
    pub max_weapons: usize,
    #[serde(default = "default_max_accessories")]
    pub max_accessories: usize,
}

impl Default for EquipmentConstants {
    fn default() -> Self {
        EquipmentConstants {
            max_weapons: default_max_weapons(),
            max_accessories: default_max_accessories(),
        }
    }
}

fn default_max_weapons() -> usize {
    2
}
fn default_max_accessories() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConstants {
    /// d6 rolled for a check before bonus dice
    #[serde(default = "default_base_dice")]
    pub base_dice: i32,
    /// Fewest dice any check may roll or display
    #[serde(default = "default_min_dice")]
    pub min_dice: i32,
    /// Most dice a single roll may throw, whatever the bonus
    #[serde(default = "default_max_dice")]
    pub max_dice: i32,
}

impl Default for CheckConstants {
    fn default() -> Self {
        CheckConstants {
            base_dice: default_base_dice(),
            min_dice: default_min_dice(),
            max_dice: default_max_dice(),
        }
    }
}

fn default_base_dice() -> i32 {
    2
}
fn default_min_dice() -> i32 {
    1
}
fn default_max_dice() -> i32 {
    100
}
