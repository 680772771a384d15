//! Grouping an item collection the way the character sheet lists it

use crate::item::{Item, ItemKind};
use crate::types::SkillSubtype;

/// Items of each equippable type
#[derive(Debug, Clone, Default)]
pub struct GearGroups<'a> {
    pub weapons: Vec<&'a Item>,
    pub armors: Vec<&'a Item>,
    pub shields: Vec<&'a Item>,
    pub accessories: Vec<&'a Item>,
    pub bags: Vec<&'a Item>,
    pub gear: Vec<&'a Item>,
}

impl<'a> GearGroups<'a> {
    fn push(&mut self, item: &'a Item) {
        match &item.kind {
            ItemKind::Weapon(_) => self.weapons.push(item),
            ItemKind::Armor(_) => self.armors.push(item),
            ItemKind::Shield(_) => self.shields.push(item),
            ItemKind::Accessory(_) => self.accessories.push(item),
            ItemKind::Bag(_) => self.bags.push(item),
            ItemKind::Gear(_) => self.gear.push(item),
            _ => {}
        }
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
            + self.armors.len()
            + self.shields.len()
            + self.accessories.len()
            + self.bags.len()
            + self.gear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Skills split by subtype
#[derive(Debug, Clone, Default)]
pub struct SkillGroups<'a> {
    pub basic: Vec<&'a Item>,
    pub combat: Vec<&'a Item>,
    pub general: Vec<&'a Item>,
}

/// A collection sorted into sheet sections, collection order preserved
#[derive(Debug, Clone, Default)]
pub struct OrganizedItems<'a> {
    pub skills: SkillGroups<'a>,
    pub equipped: GearGroups<'a>,
    pub stowed: GearGroups<'a>,
    pub creeds: Vec<&'a Item>,
    pub connections: Vec<&'a Item>,
    pub unions: Vec<&'a Item>,
}

/// Sort items into sheet sections
pub fn organize(items: &[Item]) -> OrganizedItems<'_> {
    let mut organized = OrganizedItems::default();

    for item in items {
        match &item.kind {
            ItemKind::Skill(skill) => match skill.subtype {
                SkillSubtype::Basic => organized.skills.basic.push(item),
                SkillSubtype::Combat => organized.skills.combat.push(item),
                SkillSubtype::General => organized.skills.general.push(item),
            },
            ItemKind::Creed(_) => organized.creeds.push(item),
            ItemKind::Connection(_) => organized.connections.push(item),
            ItemKind::Union(_) => organized.unions.push(item),
            _ if item.is_equipped() => organized.equipped.push(item),
            _ => organized.stowed.push(item),
        }
    }

    organized
}
