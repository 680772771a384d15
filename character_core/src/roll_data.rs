//! Roll data - the flat lookup object dice formulas are evaluated against
//!
//! Starts from the serialized character, then hoists the attribute groups
//! (`base`, `derived`) so formulas read `@base.phy.value`. Each attribute
//! (`phy`, `str`, ...) and each power (`attack`, `magic`, `restoration`) is
//! also available on its own, and `itemData` / `skillData` map item ids to
//! their stored data.

use crate::character::{BaseAttribute, Character, DerivedAttribute};
use item_core::{Item, ItemType};
use serde_json::{Map, Value};

pub fn roll_data(character: &Character, items: &[Item]) -> Result<Value, serde_json::Error> {
    let mut data = match serde_json::to_value(character)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let attributes = &character.attributes;
    data.insert("base".to_string(), serde_json::to_value(attributes.base)?);
    data.insert("derived".to_string(), serde_json::to_value(attributes.derived)?);
    for attr in BaseAttribute::all() {
        data.insert(
            attr.key().to_string(),
            serde_json::to_value(attributes.base.get(*attr))?,
        );
    }
    for attr in DerivedAttribute::all() {
        data.insert(
            attr.key().to_string(),
            serde_json::to_value(attributes.derived.get(*attr))?,
        );
    }

    let power = &character.battle_status.power;
    data.insert("attack".to_string(), serde_json::to_value(power.attack)?);
    data.insert("magic".to_string(), serde_json::to_value(power.magic)?);
    data.insert(
        "restoration".to_string(),
        serde_json::to_value(power.restoration)?,
    );

    let mut item_data = Map::new();
    let mut skill_data = Map::new();
    for item in items {
        let system = match serde_json::to_value(item)? {
            Value::Object(mut doc) => doc.remove("system").unwrap_or(Value::Null),
            _ => Value::Null,
        };
        if item.item_type() == ItemType::Skill {
            skill_data.insert(item.id.clone(), system);
        } else {
            item_data.insert(item.id.clone(), system);
        }
    }
    data.insert("itemData".to_string(), Value::Object(item_data));
    data.insert("skillData".to_string(), Value::Object(skill_data));

    Ok(Value::Object(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ruleset;
    use item_core::types::*;
    use item_core::ItemKind;
    use tables_core::{MainClass, Race, RaceSeed, ReferenceTables};

    #[test]
    fn test_roll_data_shape() {
        let rules = Ruleset::new(ReferenceTables::new().with_race(
            Race::Elf,
            RaceSeed {
                agi: 8,
                ..Default::default()
            },
        ));
        let items = vec![
            Item::new(
                "w1",
                "Bow",
                ItemKind::Weapon(WeaponData {
                    attack: 6,
                    equipped: Some(true),
                    ..Default::default()
                }),
            ),
            Item::new(
                "s1",
                "Sniping",
                ItemKind::Skill(SkillData {
                    rank: 3,
                    ..Default::default()
                }),
            ),
        ];
        let mut character = Character::new("Minori", Race::Elf, MainClass::Kannagi);
        character.prepare_derived(&items, &rules);

        let data = roll_data(&character, &items).unwrap();

        assert_eq!(data["base"]["agi"]["value"], 8);
        assert_eq!(data["base"]["phy"]["mod"], 0);
        assert!(data["derived"]["wis"]["value"].is_number());
        assert_eq!(data["agi"]["value"], 8);
        assert_eq!(data["agi"]["mod"], 0);
        assert!(data["wis"].is_object());
        assert_eq!(data["attack"]["total"], 6);
        assert!(data["restoration"]["total"].is_number());
        assert_eq!(data["itemData"]["w1"]["attack"], 6);
        assert_eq!(data["skillData"]["s1"]["rank"], 3);
        assert!(data["itemData"].get("s1").is_none());
        // The full system data is still present
        assert_eq!(data["mainClass"], "kannagi");
        assert!(data["checks"]["athletics"].is_object());
    }
}
