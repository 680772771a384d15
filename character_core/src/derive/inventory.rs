//! Inventory capacity and usage

use super::equipment::EquipmentBonuses;
use crate::character::Inventory;
use crate::config::InventoryConstants;

pub(crate) fn derive_inventory(
    inventory: &Inventory,
    bonuses: &EquipmentBonuses,
    constants: &InventoryConstants,
) -> Inventory {
    let base = constants.base_space;
    Inventory {
        base,
        modifier: inventory.modifier,
        space: bonuses.stowed,
        max_space: base
            .saturating_add(inventory.modifier)
            .saturating_add(bonuses.bag_space),
    }
}
