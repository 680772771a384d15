//! Character data model
//!
//! Mirrors the host's stored character document. Fields documented as
//! "derived" are overwritten by every derive pass; everything else is
//! persisted and edited by the player.

use serde::{Deserialize, Serialize};
use tables_core::{KeyError, MainClass, Race};

/// An attribute: derived `value` plus a persisted player modifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValue {
    /// Derived
    pub value: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
}

/// The four race-seeded attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseAttribute {
    Phy,
    Agi,
    Wil,
    Int,
}

impl BaseAttribute {
    pub fn all() -> &'static [BaseAttribute] {
        &[
            BaseAttribute::Phy,
            BaseAttribute::Agi,
            BaseAttribute::Wil,
            BaseAttribute::Int,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            BaseAttribute::Phy => "phy",
            BaseAttribute::Agi => "agi",
            BaseAttribute::Wil => "wil",
            BaseAttribute::Int => "int",
        }
    }
}

/// The eight class-seeded attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedAttribute {
    Str,
    End,
    Qik,
    Dex,
    Min,
    Pre,
    Dis,
    Wis,
}

impl DerivedAttribute {
    pub fn all() -> &'static [DerivedAttribute] {
        &[
            DerivedAttribute::Str,
            DerivedAttribute::End,
            DerivedAttribute::Qik,
            DerivedAttribute::Dex,
            DerivedAttribute::Min,
            DerivedAttribute::Pre,
            DerivedAttribute::Dis,
            DerivedAttribute::Wis,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            DerivedAttribute::Str => "str",
            DerivedAttribute::End => "end",
            DerivedAttribute::Qik => "qik",
            DerivedAttribute::Dex => "dex",
            DerivedAttribute::Min => "min",
            DerivedAttribute::Pre => "pre",
            DerivedAttribute::Dis => "dis",
            DerivedAttribute::Wis => "wis",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseAttributes {
    pub phy: AttributeValue,
    pub agi: AttributeValue,
    pub wil: AttributeValue,
    pub int: AttributeValue,
}

impl BaseAttributes {
    pub fn get(&self, attr: BaseAttribute) -> &AttributeValue {
        match attr {
            BaseAttribute::Phy => &self.phy,
            BaseAttribute::Agi => &self.agi,
            BaseAttribute::Wil => &self.wil,
            BaseAttribute::Int => &self.int,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivedAttributes {
    pub str: AttributeValue,
    pub end: AttributeValue,
    pub qik: AttributeValue,
    pub dex: AttributeValue,
    pub min: AttributeValue,
    pub pre: AttributeValue,
    pub dis: AttributeValue,
    pub wis: AttributeValue,
}

impl DerivedAttributes {
    pub fn get(&self, attr: DerivedAttribute) -> &AttributeValue {
        match attr {
            DerivedAttribute::Str => &self.str,
            DerivedAttribute::End => &self.end,
            DerivedAttribute::Qik => &self.qik,
            DerivedAttribute::Dex => &self.dex,
            DerivedAttribute::Min => &self.min,
            DerivedAttribute::Pre => &self.pre,
            DerivedAttribute::Dis => &self.dis,
            DerivedAttribute::Wis => &self.wis,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub base: BaseAttributes,
    pub derived: DerivedAttributes,
}

/// Accumulated wear that lowers maximum HP (fatigue) and MP (stress)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeStatus {
    pub fatigue: i32,
    pub stress: i32,
}

/// A pooled resource with a derived maximum, never below 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(rename = "mod")]
    pub modifier: i32,
    /// Derived
    pub max: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub health: Resource,
    pub mana: Resource,
    pub fate: Resource,
}

/// An ability check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Check {
    /// Derived
    pub base: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
    /// Skill rank invested by the player
    pub rank: i32,
    /// Derived
    pub total: i32,
    /// Dice shown for this check, normalised to at least 1 by the derive pass
    pub dice: i32,
}

/// Names of every check on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckName {
    Athletics,
    Endurance,
    Overcome,
    Operation,
    Perception,
    Negotiation,
    Knowledge,
    Analysis,
    Accuracy,
    MagicAccuracy,
    Evasion,
    Resistance,
}

impl CheckName {
    pub fn all() -> &'static [CheckName] {
        &[
            CheckName::Athletics,
            CheckName::Endurance,
            CheckName::Overcome,
            CheckName::Operation,
            CheckName::Perception,
            CheckName::Negotiation,
            CheckName::Knowledge,
            CheckName::Analysis,
            CheckName::Accuracy,
            CheckName::MagicAccuracy,
            CheckName::Evasion,
            CheckName::Resistance,
        ]
    }

    /// Attribute pair summed by the eight ability checks
    ///
    /// `None` for the combat checks, which have their own formulas.
    pub fn pair(&self) -> Option<(BaseAttribute, DerivedAttribute)> {
        use BaseAttribute::*;
        use DerivedAttribute::*;
        match self {
            CheckName::Athletics => Some((Phy, Str)),
            CheckName::Endurance => Some((Phy, End)),
            CheckName::Overcome => Some((Agi, Qik)),
            CheckName::Operation => Some((Agi, Dex)),
            CheckName::Perception => Some((Wil, Min)),
            CheckName::Negotiation => Some((Wil, Pre)),
            CheckName::Knowledge => Some((Int, Dis)),
            CheckName::Analysis => Some((Int, Wis)),
            CheckName::Accuracy
            | CheckName::MagicAccuracy
            | CheckName::Evasion
            | CheckName::Resistance => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Checks {
    pub athletics: Check,
    pub endurance: Check,
    pub overcome: Check,
    pub operation: Check,
    pub perception: Check,
    pub negotiation: Check,
    pub knowledge: Check,
    pub analysis: Check,
    pub accuracy: Check,
    pub magic_accuracy: Check,
    pub evasion: Check,
    pub resistance: Check,
}

impl Checks {
    pub fn get(&self, name: CheckName) -> &Check {
        match name {
            CheckName::Athletics => &self.athletics,
            CheckName::Endurance => &self.endurance,
            CheckName::Overcome => &self.overcome,
            CheckName::Operation => &self.operation,
            CheckName::Perception => &self.perception,
            CheckName::Negotiation => &self.negotiation,
            CheckName::Knowledge => &self.knowledge,
            CheckName::Analysis => &self.analysis,
            CheckName::Accuracy => &self.accuracy,
            CheckName::MagicAccuracy => &self.magic_accuracy,
            CheckName::Evasion => &self.evasion,
            CheckName::Resistance => &self.resistance,
        }
    }

    pub fn get_mut(&mut self, name: CheckName) -> &mut Check {
        match name {
            CheckName::Athletics => &mut self.athletics,
            CheckName::Endurance => &mut self.endurance,
            CheckName::Overcome => &mut self.overcome,
            CheckName::Operation => &mut self.operation,
            CheckName::Perception => &mut self.perception,
            CheckName::Negotiation => &mut self.negotiation,
            CheckName::Knowledge => &mut self.knowledge,
            CheckName::Analysis => &mut self.analysis,
            CheckName::Accuracy => &mut self.accuracy,
            CheckName::MagicAccuracy => &mut self.magic_accuracy,
            CheckName::Evasion => &mut self.evasion,
            CheckName::Resistance => &mut self.resistance,
        }
    }
}

/// A battle statistic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    /// Derived
    pub base: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
    /// Derived
    pub total: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Power {
    pub attack: Status,
    pub magic: Status,
    pub restoration: Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defense {
    pub phys: Status,
    pub magic: Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleStatus {
    pub power: Power,
    pub defense: Defense,
    pub speed: Status,
    pub initiative: Status,
}

/// Carrying capacity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inventory {
    /// Derived
    pub base: i32,
    #[serde(rename = "mod")]
    pub modifier: i32,
    /// Derived: slots taken by items carried but not equipped
    pub space: i32,
    /// Derived
    pub max_space: i32,
}

/// A player character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_rank")]
    pub rank: i32,
    /// Stored race key; empty until the player picks one
    #[serde(default)]
    pub race: String,
    /// Stored main-class key; empty until the player picks one
    #[serde(default)]
    pub main_class: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub life_status: LifeStatus,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub checks: Checks,
    #[serde(default, rename = "battle-status")]
    pub battle_status: BattleStatus,
    #[serde(default)]
    pub inventory: Inventory,
}

fn default_rank() -> i32 {
    1
}

impl Character {
    /// A rank 1 character with every modifier at 0
    pub fn new(name: impl Into<String>, race: Race, main_class: MainClass) -> Self {
        Character {
            name: name.into(),
            rank: default_rank(),
            race: race.as_str().to_string(),
            main_class: main_class.as_str().to_string(),
            attributes: Attributes::default(),
            life_status: LifeStatus::default(),
            resources: Resources::default(),
            checks: Checks::default(),
            battle_status: BattleStatus::default(),
            inventory: Inventory::default(),
        }
    }

    /// The stored race key, resolved
    pub fn race(&self) -> Result<Race, KeyError> {
        self.race.parse()
    }

    /// The stored main-class key, resolved
    pub fn main_class(&self) -> Result<MainClass, KeyError> {
        self.main_class.parse()
    }

    /// Parse a stored character document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
