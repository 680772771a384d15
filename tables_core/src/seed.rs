use serde::{Deserialize, Serialize};

/// Starting values granted by a race
///
/// The default (all zeros) stands in for a race missing from the tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSeed {
    pub phy: i32,
    pub agi: i32,
    pub wil: i32,
    pub int: i32,
    pub max_hp: i32,
    pub max_mp: i32,
    pub init_fate: i32,
}

/// Starting values and per-rank growth granted by a main class
///
/// The default (all zeros) stands in for a class missing from the tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSeed {
    pub str: i32,
    pub end: i32,
    pub qik: i32,
    pub dex: i32,
    pub min: i32,
    pub pre: i32,
    pub dis: i32,
    pub wis: i32,
    pub max_hp: i32,
    pub max_mp: i32,
    /// HP gained per rank above 1
    pub hp_growth: i32,
    /// MP gained per rank above 1
    pub mp_growth: i32,
}
