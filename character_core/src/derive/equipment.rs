//! EquipmentBonuses - Collects item contributions before a derive pass applies them

use crate::config::EquipmentConstants;
use item_core::selector::{count_stowed, equipped, first_equipped};
use item_core::{Item, ItemStats, ItemType};

/// Item contributions to a character's derived stats
///
/// Equip gates and the first-armor rule are already applied, so every field
/// can be added to its stat as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentBonuses {
    // === Weapons (gated by max_weapons) ===
    pub accuracy: i32,
    pub m_accuracy: i32,
    pub weapon_initiative: i32,

    // === Main weapon ===
    /// Stats of the main weapon, or zeros when no weapon is equipped
    pub main_weapon: ItemStats,

    // === Armor ===
    /// Stats of the first equipped armor; any other equipped armor is ignored
    pub armor: ItemStats,

    // === Shields ===
    pub shield_pdef: i32,
    pub shield_mdef: i32,

    // === Accessories (gated by max_accessories) ===
    pub accessory_magic: i32,
    pub accessory_pdef: i32,
    pub accessory_mdef: i32,
    pub accessory_initiative: i32,

    // === Inventory ===
    pub bag_space: i32,
    /// Owned items explicitly flagged as not equipped
    pub stowed: i32,
}

impl EquipmentBonuses {
    /// Collect bonuses from an item collection
    pub fn collect(items: &[Item], constants: &EquipmentConstants) -> Self {
        let weapons = equipped(items, ItemType::Weapon);
        let shields = equipped(items, ItemType::Shield);
        let accessories = equipped(items, ItemType::Accessory);
        let bags = equipped(items, ItemType::Bag);

        let gated_weapons = gate(&weapons, constants.max_weapons);
        let gated_accessories = gate(&accessories, constants.max_accessories);

        EquipmentBonuses {
            accuracy: sum(gated_weapons, |s| s.accuracy),
            m_accuracy: sum(gated_weapons, |s| s.m_accuracy),
            weapon_initiative: sum(gated_weapons, |s| s.initiative),

            main_weapon: main_weapon(&weapons)
                .map(Item::stats)
                .unwrap_or_default(),

            armor: first_equipped(items, ItemType::Armor)
                .map(Item::stats)
                .unwrap_or_default(),

            shield_pdef: sum(&shields, |s| s.pdef),
            shield_mdef: sum(&shields, |s| s.mdef),

            accessory_magic: sum(gated_accessories, |s| s.magic),
            accessory_pdef: sum(gated_accessories, |s| s.pdef),
            accessory_mdef: sum(gated_accessories, |s| s.mdef),
            accessory_initiative: sum(gated_accessories, |s| s.initiative),

            bag_space: sum(&bags, |s| s.bag_space),
            stowed: i32::try_from(count_stowed(items)).unwrap_or(i32::MAX),
        }
    }
}

/// First equipped weapon flagged main, else the first equipped weapon
pub fn main_weapon<'a>(weapons: &[&'a Item]) -> Option<&'a Item> {
    weapons
        .iter()
        .find(|w| w.is_main_weapon())
        .or_else(|| weapons.first())
        .copied()
}

/// Items whose bonuses count: all of them, or none once over the limit
fn gate<'s, 'a>(items: &'s [&'a Item], limit: usize) -> &'s [&'a Item] {
    if items.len() > limit {
        &[]
    } else {
        items
    }
}

fn sum(items: &[&Item], field: impl Fn(&ItemStats) -> i32) -> i32 {
    items
        .iter()
        .fold(0i32, |total, item| total.saturating_add(field(&item.stats())))
}
