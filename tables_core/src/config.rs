use crate::seed::{ClassSeed, RaceSeed};
use serde::Deserialize;
use std::collections::BTreeMap;

/// TOML layout of `races.toml`: one table per race key
///
/// ```toml
/// [human]
/// phy = 7
/// agi = 7
/// wil = 7
/// int = 7
/// max_hp = 8
/// max_mp = 8
/// init_fate = 1
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RaceFileConfig {
    pub races: BTreeMap<String, RaceSeed>,
}

/// TOML layout of `classes.toml`: one table per class key
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ClassFileConfig {
    pub classes: BTreeMap<String, ClassSeed>,
}
