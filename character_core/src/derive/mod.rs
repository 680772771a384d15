//! Derive pass - recomputes every derived field of a character
//!
//! The pass is a pure function of `(character, items, ruleset)`:
//!
//! 1. Collect equipment bonuses (equip gates, main weapon, first armor)
//! 2. Seed attributes from the race and class tables
//! 3. Maximum HP / MP / fate
//! 4. Checks
//! 5. Battle status
//! 6. Inventory
//!
//! Results are gathered into a `DerivedStats` and only written back to the
//! character once every step has run.

mod attributes;
mod battle;
mod checks;
mod equipment;
mod inventory;

pub use equipment::{main_weapon, EquipmentBonuses};

use crate::character::{Attributes, BattleStatus, Character, Checks, Inventory, Resources};
use crate::config::Ruleset;
use item_core::Item;
use tables_core::{ClassSeed, MainClass, Race, RaceSeed};
use thiserror::Error;

/// A non-fatal problem found during a derive pass
///
/// The pass still completes; the affected seed values read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveIssue {
    #[error("race '{0}' is not a known race")]
    UnknownRace(String),
    #[error("main class '{0}' is not a known main class")]
    UnknownClass(String),
    #[error("race '{0}' is missing from the reference tables")]
    MissingRace(Race),
    #[error("main class '{0}' is missing from the reference tables")]
    MissingClass(MainClass),
}

/// Every derived section of a character, computed but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStats {
    pub attributes: Attributes,
    pub resources: Resources,
    pub checks: Checks,
    pub battle_status: BattleStatus,
    pub inventory: Inventory,
}

impl DerivedStats {
    /// Write all derived sections into the character at once
    pub fn apply_to(self, character: &mut Character) {
        character.attributes = self.attributes;
        character.resources = self.resources;
        character.checks = self.checks;
        character.battle_status = self.battle_status;
        character.inventory = self.inventory;
    }
}

/// Output of a derive pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub stats: DerivedStats,
    pub issues: Vec<DeriveIssue>,
}

impl Derivation {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Compute every derived field from persisted state
pub fn derive(character: &Character, items: &[Item], rules: &Ruleset) -> Derivation {
    let mut issues = Vec::new();

    let race = match character.race() {
        Ok(race) => match rules.tables.race(race) {
            Some(seed) => *seed,
            None => {
                issues.push(DeriveIssue::MissingRace(race));
                RaceSeed::default()
            }
        },
        Err(_) => {
            issues.push(DeriveIssue::UnknownRace(character.race.clone()));
            RaceSeed::default()
        }
    };
    let class = match character.main_class() {
        Ok(class) => match rules.tables.class(class) {
            Some(seed) => *seed,
            None => {
                issues.push(DeriveIssue::MissingClass(class));
                ClassSeed::default()
            }
        },
        Err(_) => {
            issues.push(DeriveIssue::UnknownClass(character.main_class.clone()));
            ClassSeed::default()
        }
    };

    for issue in &issues {
        tracing::warn!(character = %character.name, "{}", issue);
    }

    let constants = &rules.constants;
    let bonuses = EquipmentBonuses::collect(items, &constants.equipment);

    let attributes = attributes::derive_attributes(&character.attributes, &race, &class);
    let resources = attributes::derive_resources(character, &attributes, &race, &class);
    let checks = checks::derive_checks(&character.checks, &attributes, &bonuses, &constants.checks);
    let battle_status = battle::derive_battle_status(
        &character.battle_status,
        &attributes,
        &bonuses,
        &constants.battle,
    );
    let inventory = inventory::derive_inventory(&character.inventory, &bonuses, &constants.inventory);

    tracing::debug!(
        character = %character.name,
        items = items.len(),
        issues = issues.len(),
        "derived character stats"
    );

    Derivation {
        stats: DerivedStats {
            attributes,
            resources,
            checks,
            battle_status,
            inventory,
        },
        issues,
    }
}

impl Character {
    /// Recompute and store every derived field
    ///
    /// Returns the non-fatal issues found along the way.
    pub fn prepare_derived(&mut self, items: &[Item], rules: &Ruleset) -> Vec<DeriveIssue> {
        let Derivation { stats, issues } = derive(self, items, rules);
        stats.apply_to(self);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use item_core::types::*;
    use item_core::ItemKind;
    use proptest::prelude::*;
    use tables_core::ReferenceTables;

    fn human() -> RaceSeed {
        RaceSeed {
            phy: 7,
            agi: 7,
            wil: 7,
            int: 7,
            max_hp: 8,
            max_mp: 8,
            init_fate: 1,
        }
    }

    fn guardian() -> ClassSeed {
        ClassSeed {
            str: 2,
            end: 4,
            qik: 1,
            dex: 1,
            min: 2,
            pre: 1,
            dis: 0,
            wis: 1,
            max_hp: 50,
            max_mp: 30,
            hp_growth: 7,
            mp_growth: 1,
        }
    }

    fn rules() -> Ruleset {
        Ruleset::new(
            ReferenceTables::new()
                .with_race(Race::Human, human())
                .with_class(MainClass::Guardian, guardian()),
        )
    }

    fn character() -> Character {
        Character::new("Naotsugu", Race::Human, MainClass::Guardian)
    }

    fn weapon(id: &str, accuracy: i32) -> Item {
        Item::new(
            id,
            "Sword",
            ItemKind::Weapon(WeaponData {
                accuracy,
                attack: 4,
                equipped: Some(true),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn test_scenario_rank_one_no_equipment() {
        let mut character = character();
        let issues = character.prepare_derived(&[], &rules());

        assert!(issues.is_empty());
        assert_eq!(character.resources.health.max, 65);
        assert_eq!(character.resources.mana.max, 45);
        assert_eq!(character.resources.fate.max, 1);
        assert_eq!(character.inventory.max_space, 2);
        assert_eq!(character.inventory.space, 0);
        assert_eq!(character.battle_status.speed.total, 2);
        assert_eq!(character.checks.athletics.total, 9);
        assert_eq!(character.checks.accuracy.total, 8);
    }

    #[test]
    fn test_scenario_weapon_accuracy() {
        let rules = rules();
        let mut character = character();

        let two = vec![weapon("a", 2), weapon("b", 3)];
        character.prepare_derived(&two, &rules);
        assert_eq!(character.checks.accuracy.total, 8 + 5);

        let mut three = two.clone();
        three.push(weapon("c", 4));
        character.prepare_derived(&three, &rules);
        assert_eq!(character.checks.accuracy.total, 8);
    }

    #[test]
    fn test_scenario_inventory_space() {
        let items = vec![
            Item::new("g1", "Rope", ItemKind::Gear(GearData { equipped: Some(false) })),
            Item::new("g2", "Torch", ItemKind::Gear(GearData { equipped: Some(false) })),
            Item::new("s1", "Skill", ItemKind::Skill(SkillData::default())),
            Item::new("c1", "Creed", ItemKind::Creed(NoteData::default())),
            weapon("w1", 0),
        ];
        let mut character = character();
        character.prepare_derived(&items, &rules());

        assert_eq!(character.inventory.max_space, 2);
        assert_eq!(character.inventory.space, 2);
    }

    #[test]
    fn test_missing_reference_data_is_reported() {
        let mut character = Character::new("Shiroe", Race::HalfAlv, MainClass::Enchanter);
        character.attributes.base.int.modifier = 2;
        character.resources.health.modifier = 5;

        let issues = character.prepare_derived(&[], &rules());

        assert_eq!(
            issues,
            vec![
                DeriveIssue::MissingRace(Race::HalfAlv),
                DeriveIssue::MissingClass(MainClass::Enchanter),
            ]
        );
        // Everything still resolves to defined values
        assert_eq!(character.attributes.base.int.value, 2);
        assert_eq!(character.attributes.derived.str.value, 0);
        assert_eq!(character.resources.health.max, 5);
        assert_eq!(character.resources.mana.max, 0);
        assert_eq!(character.battle_status.speed.total, 2);
    }

    #[test]
    fn test_missing_class_only() {
        let character = Character::new("Akatsuki", Race::Human, MainClass::Assassin);
        let derivation = derive(&character, &[], &rules());
        assert!(!derivation.is_clean());
        assert_eq!(
            derivation.issues,
            vec![DeriveIssue::MissingClass(MainClass::Assassin)]
        );
        assert_eq!(derivation.stats.attributes.base.phy.value, 7);
    }

    #[test]
    fn test_unknown_keys_are_reported() {
        let mut character =
            Character::from_json(r#"{ "name": "Nyanta", "race": "", "mainClass": "guardian" }"#)
                .unwrap();
        let issues = character.prepare_derived(&[], &rules());
        assert_eq!(issues, vec![DeriveIssue::UnknownRace(String::new())]);
        assert_eq!(character.attributes.base.phy.value, 0);
        // 0 + 50 + 0 + 0
        assert_eq!(character.resources.health.max, 50);
        assert_eq!(character.attributes.derived.end.value, 4);

        let mut character =
            Character::from_json(r#"{ "race": "orc", "mainClass": "pirate" }"#).unwrap();
        let issues = character.prepare_derived(&[], &rules());
        assert_eq!(
            issues,
            vec![
                DeriveIssue::UnknownRace("orc".to_string()),
                DeriveIssue::UnknownClass("pirate".to_string()),
            ]
        );
        assert_eq!(character.resources.health.max, 0);
        assert_eq!(character.resources.fate.max, 0);
        assert_eq!(character.inventory.max_space, 2);
        // The stored keys are kept as they were
        assert_eq!(character.race, "orc");
    }

    #[test]
    fn test_unflagged_gear_takes_no_space() {
        let items = vec![
            Item::new("g1", "Rope", ItemKind::Gear(GearData::default())),
            Item::from_json(r#"{ "_id": "g2", "name": "Torch", "type": "gear", "system": {} }"#)
                .unwrap(),
            Item::new("g3", "Tent", ItemKind::Gear(GearData { equipped: Some(false) })),
        ];
        let mut character = character();
        character.prepare_derived(&items, &rules());
        assert_eq!(character.inventory.space, 1);
    }

    #[test]
    fn test_null_item_numbers_contribute_nothing() {
        let items = Item::collection_from_json(
            r#"[{ "_id": "w1", "name": "Club", "type": "weapon",
                  "system": { "attack": null, "accuracy": null, "equipped": true } }]"#,
        )
        .unwrap();
        let mut character = character();
        character.prepare_derived(&items, &rules());
        assert_eq!(character.battle_status.power.attack.total, 2);
        assert_eq!(character.checks.accuracy.total, 8);
    }

    #[test]
    fn test_custom_equipment_limits() {
        let mut constants = GameConstants::default();
        constants.equipment.max_weapons = 3;
        constants.battle.base_speed = 3;
        let rules = rules().with_constants(constants);

        let items = vec![weapon("a", 1), weapon("b", 1), weapon("c", 1)];
        let derivation = derive(&character(), &items, &rules);
        assert_eq!(derivation.stats.checks.accuracy.total, 8 + 3);
        assert_eq!(derivation.stats.battle_status.speed.total, 3);
    }

    #[test]
    fn test_derive_does_not_touch_input() {
        let character = character();
        let before = character.clone();
        let derivation = derive(&character, &[weapon("a", 1)], &rules());
        assert_eq!(character, before);
        assert_eq!(derivation.stats.checks.accuracy.total, 9);
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            DeriveIssue::MissingRace(Race::FoxTail).to_string(),
            "race 'foxTail' is missing from the reference tables"
        );
        assert_eq!(
            DeriveIssue::UnknownClass("pirate".to_string()).to_string(),
            "main class 'pirate' is not a known main class"
        );
    }

    #[test]
    fn test_shipped_ruleset_covers_every_pair() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../config");
        let rules = Ruleset::load(&dir).unwrap();
        for race in Race::all() {
            for class in MainClass::all() {
                let mut character = Character::new("test", *race, *class);
                assert!(character.prepare_derived(&[], &rules).is_empty());
                assert!(character.resources.health.max > 0);
                assert!(character.resources.mana.max > 0);
            }
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    fn arb_item() -> impl Strategy<Value = Item> {
        let stat = -5i32..10;
        (0u8..6, proptest::option::of(any::<bool>()), any::<bool>(), stat.clone(), stat.clone(), stat)
            .prop_map(|(kind, equipped, main, a, b, c)| {
                let kind = match kind {
                    0 => ItemKind::Weapon(WeaponData {
                        accuracy: a,
                        m_accuracy: b,
                        attack: c,
                        initiative: a - b,
                        equipped,
                        main,
                        ..Default::default()
                    }),
                    1 => ItemKind::Armor(ArmorData {
                        pdef: a,
                        mdef: b,
                        initiative: c,
                        equipped,
                    }),
                    2 => ItemKind::Shield(ShieldData {
                        pdef: a,
                        mdef: b,
                        equipped,
                    }),
                    3 => ItemKind::Accessory(AccessoryData {
                        magic: a,
                        pdef: b,
                        mdef: c,
                        initiative: a,
                        equipped,
                    }),
                    4 => ItemKind::Bag(BagData {
                        bag_space: a,
                        equipped,
                    }),
                    _ => ItemKind::Skill(SkillData::default()),
                };
                Item::new("item", "Item", kind)
            })
    }

    fn arb_character() -> impl Strategy<Value = Character> {
        (
            1i32..20,
            0i32..1_000_000,
            0i32..1_000_000,
            -50i32..50,
            -1_000i32..1_000,
            -50i32..50,
        )
            .prop_map(|(rank, fatigue, stress, res_mod, init_mod, attr_mod)| {
                let mut character = character();
                character.rank = rank;
                character.life_status.fatigue = fatigue;
                character.life_status.stress = stress;
                character.resources.health.modifier = res_mod;
                character.resources.mana.modifier = res_mod;
                character.battle_status.initiative.modifier = init_mod;
                character.attributes.derived.qik.modifier = attr_mod;
                character
            })
    }

    /// Any stored values at all, including the extremes of the integer range
    fn arb_extreme_character() -> impl Strategy<Value = Character> {
        (
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
            any::<i32>(),
        )
            .prop_map(|(rank, fatigue, stress, hp_mod, mp_mod, attr_mod, check_mod, status_mod)| {
                let mut character = character();
                character.rank = rank;
                character.life_status.fatigue = fatigue;
                character.life_status.stress = stress;
                character.resources.health.modifier = hp_mod;
                character.resources.mana.modifier = mp_mod;
                character.resources.fate.modifier = hp_mod;
                character.attributes.base.phy.modifier = attr_mod;
                character.attributes.base.wil.modifier = attr_mod;
                character.attributes.derived.qik.modifier = attr_mod;
                character.checks.athletics.modifier = check_mod;
                character.checks.athletics.rank = rank;
                character.checks.accuracy.modifier = check_mod;
                character.battle_status.initiative.modifier = status_mod;
                character.battle_status.power.attack.modifier = status_mod;
                character.inventory.modifier = status_mod;
                character
            })
    }

    fn arb_extreme_item() -> impl Strategy<Value = Item> {
        (0u8..5, any::<i32>(), any::<i32>()).prop_map(|(kind, a, b)| {
            let equipped = Some(true);
            let kind = match kind {
                0 => ItemKind::Weapon(WeaponData {
                    accuracy: a,
                    attack: b,
                    initiative: a,
                    equipped,
                    ..Default::default()
                }),
                1 => ItemKind::Armor(ArmorData {
                    pdef: a,
                    mdef: b,
                    initiative: b,
                    equipped,
                }),
                2 => ItemKind::Shield(ShieldData { pdef: a, mdef: b, equipped }),
                3 => ItemKind::Accessory(AccessoryData {
                    magic: a,
                    pdef: b,
                    mdef: a,
                    initiative: b,
                    equipped,
                }),
                _ => ItemKind::Bag(BagData { bag_space: a, equipped }),
            };
            Item::new("item", "Item", kind)
        })
    }

    proptest! {
        #[test]
        fn prop_extreme_values_keep_floors(
            character in arb_extreme_character(),
            items in prop::collection::vec(arb_extreme_item(), 0..6),
        ) {
            let derivation = derive(&character, &items, &rules());
            let stats = &derivation.stats;
            prop_assert!(stats.resources.health.max >= 0);
            prop_assert!(stats.resources.mana.max >= 0);
            prop_assert!(stats.resources.fate.max >= 0);
            prop_assert!(stats.battle_status.initiative.total >= 0);
            prop_assert!(stats.checks.athletics.dice >= 1);
        }

        #[test]
        fn prop_resource_maxima_never_negative(
            character in arb_character(),
            items in prop::collection::vec(arb_item(), 0..8),
        ) {
            let derivation = derive(&character, &items, &rules());
            prop_assert!(derivation.stats.resources.health.max >= 0);
            prop_assert!(derivation.stats.resources.mana.max >= 0);
            prop_assert!(derivation.stats.resources.fate.max >= 0);
        }

        #[test]
        fn prop_initiative_never_negative(
            character in arb_character(),
            items in prop::collection::vec(arb_item(), 0..8),
        ) {
            let derivation = derive(&character, &items, &rules());
            prop_assert!(derivation.stats.battle_status.initiative.total >= 0);
        }

        #[test]
        fn prop_weapon_accuracy_gate(count in 0usize..6, accuracy in 1i32..5) {
            let items: Vec<Item> = (0..count).map(|i| weapon(&i.to_string(), accuracy)).collect();
            let derivation = derive(&character(), &items, &rules());
            let bonus = derivation.stats.checks.accuracy.total - 8;
            if (1..=2).contains(&count) {
                prop_assert_eq!(bonus, accuracy * count as i32);
            } else {
                prop_assert_eq!(bonus, 0);
            }
        }

        #[test]
        fn prop_accessory_gate(count in 0usize..7, magic in 1i32..5) {
            let items: Vec<Item> = (0..count)
                .map(|i| Item::new(
                    i.to_string(),
                    "Magic Stone",
                    ItemKind::Accessory(AccessoryData { magic, equipped: Some(true), ..Default::default() }),
                ))
                .collect();
            let derivation = derive(&character(), &items, &rules());
            let bonus = derivation.stats.battle_status.power.magic.total;
            if count <= 3 {
                prop_assert_eq!(bonus, magic * count as i32);
            } else {
                prop_assert_eq!(bonus, 0);
            }
        }

        #[test]
        fn prop_only_first_armor_counts(pdefs in prop::collection::vec(0i32..20, 1..5)) {
            let items: Vec<Item> = pdefs
                .iter()
                .map(|&pdef| Item::new(
                    "armor",
                    "Armor",
                    ItemKind::Armor(ArmorData { pdef, equipped: Some(true), ..Default::default() }),
                ))
                .collect();
            let derivation = derive(&character(), &items, &rules());
            prop_assert_eq!(derivation.stats.battle_status.defense.phys.total, 4 + pdefs[0]);
        }

        #[test]
        fn prop_derive_is_idempotent(
            character in arb_character(),
            items in prop::collection::vec(arb_item(), 0..8),
        ) {
            let rules = rules();
            let mut once = character.clone();
            once.prepare_derived(&items, &rules);
            let mut twice = once.clone();
            twice.prepare_derived(&items, &rules);
            prop_assert_eq!(once, twice);
        }
    }
}
