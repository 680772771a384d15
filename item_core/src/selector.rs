//! Equipment selection - which owned items are currently equipped

use crate::item::Item;
use crate::types::ItemType;

/// Equipped items of one type, in collection order
pub fn equipped(items: &[Item], item_type: ItemType) -> Vec<&Item> {
    items
        .iter()
        .filter(|item| item.item_type() == item_type && item.is_equipped())
        .collect()
}

/// Number of equipped items of one type
pub fn count_equipped(items: &[Item], item_type: ItemType) -> usize {
    items
        .iter()
        .filter(|item| item.item_type() == item_type && item.is_equipped())
        .count()
}

/// First equipped item of one type in collection order
pub fn first_equipped(items: &[Item], item_type: ItemType) -> Option<&Item> {
    items
        .iter()
        .find(|item| item.item_type() == item_type && item.is_equipped())
}

/// Number of owned items explicitly flagged as not equipped
///
/// Items without an `equipped` field are not counted, whatever their type.
pub fn count_stowed(items: &[Item]) -> usize {
    items.iter().filter(|item| item.is_stowed()).count()
}
