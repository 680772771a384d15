use crate::types::*;
use crate::ItemError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An item owned by a character
///
/// Serialized in the host document shape:
/// `{ "_id": ..., "name": ..., "type": "weapon", "system": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// Item variant with its type-specific field schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "system", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon(WeaponData),
    Armor(ArmorData),
    Shield(ShieldData),
    Accessory(AccessoryData),
    Bag(BagData),
    Gear(GearData),
    Skill(SkillData),
    Creed(NoteData),
    Connection(NoteData),
    Union(NoteData),
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Parse a single item document
    pub fn from_json(json: &str) -> Result<Self, ItemError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an ordered array of item documents
    pub fn collection_from_json(json: &str) -> Result<Vec<Self>, ItemError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the host document shape
    pub fn to_json(&self) -> Result<String, ItemError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn item_type(&self) -> ItemType {
        match &self.kind {
            ItemKind::Weapon(_) => ItemType::Weapon,
            ItemKind::Armor(_) => ItemType::Armor,
            ItemKind::Shield(_) => ItemType::Shield,
            ItemKind::Accessory(_) => ItemType::Accessory,
            ItemKind::Bag(_) => ItemType::Bag,
            ItemKind::Gear(_) => ItemType::Gear,
            ItemKind::Skill(_) => ItemType::Skill,
            ItemKind::Creed(_) => ItemType::Creed,
            ItemKind::Connection(_) => ItemType::Connection,
            ItemKind::Union(_) => ItemType::Union,
        }
    }

    /// The stored `equipped` flag
    ///
    /// `None` when the document carries no flag, which is always the case for
    /// skills, creeds, connections and unions.
    pub fn equipped(&self) -> Option<bool> {
        match &self.kind {
            ItemKind::Weapon(d) => d.equipped,
            ItemKind::Armor(d) => d.equipped,
            ItemKind::Shield(d) => d.equipped,
            ItemKind::Accessory(d) => d.equipped,
            ItemKind::Bag(d) => d.equipped,
            ItemKind::Gear(d) => d.equipped,
            ItemKind::Skill(_) | ItemKind::Creed(_) | ItemKind::Connection(_) | ItemKind::Union(_) => {
                None
            }
        }
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped() == Some(true)
    }

    /// Carried in the bag rather than worn
    pub fn is_stowed(&self) -> bool {
        self.equipped() == Some(false)
    }

    /// Set the `equipped` flag
    ///
    /// Returns `false` without changing anything if the item cannot be equipped.
    pub fn set_equipped(&mut self, equipped: bool) -> bool {
        let flag = match &mut self.kind {
            ItemKind::Weapon(d) => &mut d.equipped,
            ItemKind::Armor(d) => &mut d.equipped,
            ItemKind::Shield(d) => &mut d.equipped,
            ItemKind::Accessory(d) => &mut d.equipped,
            ItemKind::Bag(d) => &mut d.equipped,
            ItemKind::Gear(d) => &mut d.equipped,
            _ => return false,
        };
        *flag = Some(equipped);
        true
    }

    /// Flip the `equipped` flag; an item without a flag becomes equipped
    ///
    /// Returns `false` without changing anything if the item cannot be equipped.
    pub fn toggle_equipped(&mut self) -> bool {
        if !self.item_type().is_equippable() {
            return false;
        }
        let equipped = !self.is_equipped();
        self.set_equipped(equipped)
    }

    /// Whether this is a weapon flagged as the main weapon
    pub fn is_main_weapon(&self) -> bool {
        matches!(&self.kind, ItemKind::Weapon(d) if d.main)
    }

    pub fn skill_subtype(&self) -> Option<SkillSubtype> {
        match &self.kind {
            ItemKind::Skill(d) => Some(d.subtype),
            _ => None,
        }
    }

    /// Combat fields of this item, with 0 for fields the variant lacks
    pub fn stats(&self) -> ItemStats {
        match &self.kind {
            ItemKind::Weapon(d) => ItemStats {
                accuracy: d.accuracy,
                m_accuracy: d.m_accuracy,
                attack: d.attack,
                magic: d.magic,
                restoration: d.restoration,
                initiative: d.initiative,
                ..ItemStats::default()
            },
            ItemKind::Armor(d) => ItemStats {
                pdef: d.pdef,
                mdef: d.mdef,
                initiative: d.initiative,
                ..ItemStats::default()
            },
            ItemKind::Shield(d) => ItemStats {
                pdef: d.pdef,
                mdef: d.mdef,
                ..ItemStats::default()
            },
            ItemKind::Accessory(d) => ItemStats {
                magic: d.magic,
                pdef: d.pdef,
                mdef: d.mdef,
                initiative: d.initiative,
                ..ItemStats::default()
            },
            ItemKind::Bag(d) => ItemStats {
                bag_space: d.bag_space,
                ..ItemStats::default()
            },
            _ => ItemStats::default(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.item_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weapon_document() {
        let json = r#"{
            "_id": "abc123",
            "name": "Longsword",
            "type": "weapon",
            "system": { "accuracy": 1, "mAccuracy": 2, "attack": 8, "equipped": true, "main": true }
        }"#;

        let item = Item::from_json(json).unwrap();
        assert_eq!(item.id, "abc123");
        assert_eq!(item.item_type(), ItemType::Weapon);
        assert!(item.is_equipped());
        assert!(item.is_main_weapon());

        let stats = item.stats();
        assert_eq!(stats.accuracy, 1);
        assert_eq!(stats.m_accuracy, 2);
        assert_eq!(stats.attack, 8);
        assert_eq!(stats.restoration, 0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let json = r#"{ "_id": "b1", "name": "Pouch", "type": "bag", "system": {} }"#;
        let item = Item::from_json(json).unwrap();
        assert_eq!(item.stats(), ItemStats::default());
        // No flag at all: neither equipped nor stowed
        assert_eq!(item.equipped(), None);
        assert!(!item.is_equipped());
        assert!(!item.is_stowed());
    }

    #[test]
    fn test_explicit_false_is_stowed() {
        let json = r#"{ "_id": "g1", "name": "Rope", "type": "gear", "system": { "equipped": false } }"#;
        let item = Item::from_json(json).unwrap();
        assert_eq!(item.equipped(), Some(false));
        assert!(item.is_stowed());
    }

    #[test]
    fn test_absent_flag_is_not_written_back() {
        let item = Item::new("g1", "Rope", ItemKind::Gear(GearData::default()));
        let value: serde_json::Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
        assert!(value["system"].get("equipped").is_none());
    }

    #[test]
    fn test_null_numbers_read_as_zero() {
        let json = r#"{
            "_id": "w9",
            "name": "Club",
            "type": "weapon",
            "system": { "attack": null, "accuracy": "2", "magic": 1.5, "main": null, "equipped": true }
        }"#;
        let item = Item::from_json(json).unwrap();
        let stats = item.stats();
        assert_eq!(stats.attack, 0);
        assert_eq!(stats.accuracy, 2);
        assert_eq!(stats.magic, 1);
        assert!(!item.is_main_weapon());
        assert!(item.is_equipped());
    }

    #[test]
    fn test_null_field_does_not_reject_collection() {
        let json = r#"[
            { "_id": "w1", "name": "Club", "type": "weapon", "system": { "attack": null, "equipped": true } },
            { "_id": "c1", "name": "Protect", "type": "creed", "system": { "description": null } },
            { "_id": "b1", "name": "Pouch", "type": "bag", "system": { "bagSpace": 3, "equipped": null } }
        ]"#;
        let items = Item::collection_from_json(json).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].stats().bag_space, 3);
        assert_eq!(items[2].equipped(), None);
    }

    #[test]
    fn test_skill_has_no_equipped_flag() {
        let json = r#"{
            "_id": "s1",
            "name": "Anchor Howl",
            "type": "skill",
            "system": { "subtype": "Combat", "rank": 2 }
        }"#;
        let item = Item::from_json(json).unwrap();
        assert_eq!(item.equipped(), None);
        assert!(!item.is_stowed());
        assert_eq!(item.skill_subtype(), Some(SkillSubtype::Combat));
    }

    #[test]
    fn test_unknown_type_is_error() {
        let json = r#"{ "_id": "x", "name": "?", "type": "spell", "system": {} }"#;
        assert!(matches!(Item::from_json(json), Err(ItemError::Json(_))));
    }

    #[test]
    fn test_document_shape_roundtrip() {
        let item = Item::new(
            "a1",
            "Leather Armor",
            ItemKind::Armor(ArmorData {
                pdef: 4,
                mdef: 1,
                initiative: -1,
                equipped: Some(true),
            }),
        );
        let json = item.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "armor");
        assert_eq!(value["system"]["pdef"], 4);
        assert_eq!(Item::from_json(&json).unwrap(), item);
    }

    #[test]
    fn test_toggle_equipped() {
        let mut shield = Item::new("sh", "Buckler", ItemKind::Shield(ShieldData::default()));
        assert!(shield.toggle_equipped());
        assert!(shield.is_equipped());
        assert!(shield.toggle_equipped());
        assert!(shield.is_stowed());

        let mut gear = Item::new("g", "Rope", ItemKind::Gear(GearData::default()));
        assert_eq!(gear.equipped(), None);
        assert!(gear.toggle_equipped());
        assert_eq!(gear.equipped(), Some(true));

        let mut creed = Item::new("c", "Protect", ItemKind::Creed(NoteData::default()));
        assert!(!creed.toggle_equipped());
        assert_eq!(creed.equipped(), None);
    }

    #[test]
    fn test_stats_for_accessory() {
        let ring = Item::new(
            "r",
            "Magic Stone",
            ItemKind::Accessory(AccessoryData {
                magic: 3,
                pdef: 1,
                mdef: 2,
                initiative: 1,
                equipped: Some(true),
            }),
        );
        let stats = ring.stats();
        assert_eq!(stats.magic, 3);
        assert_eq!(stats.pdef, 1);
        assert_eq!(stats.mdef, 2);
        assert_eq!(stats.initiative, 1);
        assert_eq!(stats.attack, 0);
    }
}
