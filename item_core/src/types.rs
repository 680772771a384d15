use crate::stored;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Item type tag, as stored in the item document's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Weapon,
    Armor,
    Shield,
    Accessory,
    Bag,
    Gear,
    Skill,
    Creed,
    Connection,
    Union,
}

impl ItemType {
    /// Get all item types
    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Weapon,
            ItemType::Armor,
            ItemType::Shield,
            ItemType::Accessory,
            ItemType::Bag,
            ItemType::Gear,
            ItemType::Skill,
            ItemType::Creed,
            ItemType::Connection,
            ItemType::Union,
        ]
    }

    /// Whether items of this type carry an `equipped` flag
    pub fn is_equippable(&self) -> bool {
        matches!(
            self,
            ItemType::Weapon
                | ItemType::Armor
                | ItemType::Shield
                | ItemType::Accessory
                | ItemType::Bag
                | ItemType::Gear
        )
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Weapon => write!(f, "Weapon"),
            ItemType::Armor => write!(f, "Armor"),
            ItemType::Shield => write!(f, "Shield"),
            ItemType::Accessory => write!(f, "Accessory"),
            ItemType::Bag => write!(f, "Bag"),
            ItemType::Gear => write!(f, "Gear"),
            ItemType::Skill => write!(f, "Skill"),
            ItemType::Creed => write!(f, "Creed"),
            ItemType::Connection => write!(f, "Connection"),
            ItemType::Union => write!(f, "Union"),
        }
    }
}

/// Skill category, shown on separate sheet tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillSubtype {
    #[default]
    Basic,
    Combat,
    General,
}

// ============================================================================
// Per-variant field schemas
// ============================================================================
//
// Numeric fields read as 0 when absent, `null` or unreadable. `equipped` keeps
// whether the document carries the flag at all: only an explicit `false`
// counts toward inventory space.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeaponData {
    #[serde(deserialize_with = "stored::number")]
    pub accuracy: i32,
    #[serde(deserialize_with = "stored::number")]
    pub m_accuracy: i32,
    #[serde(deserialize_with = "stored::number")]
    pub attack: i32,
    #[serde(deserialize_with = "stored::number")]
    pub magic: i32,
    #[serde(deserialize_with = "stored::number")]
    pub restoration: i32,
    #[serde(deserialize_with = "stored::number")]
    pub initiative: i32,
    #[serde(
        deserialize_with = "stored::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
    /// Preferred weapon for power calculations when several are equipped
    #[serde(deserialize_with = "stored::flag")]
    pub main: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArmorData {
    #[serde(deserialize_with = "stored::number")]
    pub pdef: i32,
    #[serde(deserialize_with = "stored::number")]
    pub mdef: i32,
    #[serde(deserialize_with = "stored::number")]
    pub initiative: i32,
    #[serde(
        deserialize_with = "stored::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShieldData {
    #[serde(deserialize_with = "stored::number")]
    pub pdef: i32,
    #[serde(deserialize_with = "stored::number")]
    pub mdef: i32,
    #[serde(
        deserialize_with = "stored::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessoryData {
    #[serde(deserialize_with = "stored::number")]
    pub magic: i32,
    #[serde(deserialize_with = "stored::number")]
    pub pdef: i32,
    #[serde(deserialize_with = "stored::number")]
    pub mdef: i32,
    #[serde(deserialize_with = "stored::number")]
    pub initiative: i32,
    #[serde(
        deserialize_with = "stored::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BagData {
    #[serde(deserialize_with = "stored::number")]
    pub bag_space: i32,
    #[serde(
        deserialize_with = "stored::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GearData {
    #[serde(
        deserialize_with = "stored::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub equipped: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillData {
    pub subtype: SkillSubtype,
    #[serde(deserialize_with = "stored::number")]
    pub rank: i32,
    #[serde(deserialize_with = "stored::text")]
    pub description: String,
}

/// Shared schema of creeds, connections and unions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteData {
    #[serde(deserialize_with = "stored::text")]
    pub description: String,
}

/// Uniform view over every combat-relevant item field
///
/// Fields a variant does not carry read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub accuracy: i32,
    pub m_accuracy: i32,
    pub attack: i32,
    pub magic: i32,
    pub restoration: i32,
    pub pdef: i32,
    pub mdef: i32,
    pub initiative: i32,
    pub bag_space: i32,
}
