//! Attribute and resource derivation from race and class seeds

use crate::character::{
    AttributeValue, Attributes, BaseAttributes, Character, DerivedAttributes, Resource, Resources,
};
use tables_core::{ClassSeed, RaceSeed};

/// Seed each attribute from the tables and add the character's own modifier
pub(crate) fn derive_attributes(
    attributes: &Attributes,
    race: &RaceSeed,
    class: &ClassSeed,
) -> Attributes {
    let base = &attributes.base;
    let derived = &attributes.derived;

    Attributes {
        base: BaseAttributes {
            phy: seeded(race.phy, base.phy),
            agi: seeded(race.agi, base.agi),
            wil: seeded(race.wil, base.wil),
            int: seeded(race.int, base.int),
        },
        derived: DerivedAttributes {
            str: seeded(class.str, derived.str),
            end: seeded(class.end, derived.end),
            qik: seeded(class.qik, derived.qik),
            dex: seeded(class.dex, derived.dex),
            min: seeded(class.min, derived.min),
            pre: seeded(class.pre, derived.pre),
            dis: seeded(class.dis, derived.dis),
            wis: seeded(class.wis, derived.wis),
        },
    }
}

fn seeded(seed: i32, attr: AttributeValue) -> AttributeValue {
    AttributeValue {
        value: seed.saturating_add(attr.modifier),
        modifier: attr.modifier,
    }
}

/// Maximum HP, MP and fate
///
/// `attributes` must already be derived for this pass.
pub(crate) fn derive_resources(
    character: &Character,
    attributes: &Attributes,
    race: &RaceSeed,
    class: &ClassSeed,
) -> Resources {
    let resources = &character.resources;
    let life = &character.life_status;
    // Growth starts at rank 2; ranks below 1 grant nothing
    let ranks_gained = i64::from(character.rank).saturating_sub(1).max(0);

    // Summed in i64: stored values are unbounded player input
    let health_max = i64::from(race.max_hp)
        + i64::from(class.max_hp)
        + i64::from(attributes.base.phy.value)
        + i64::from(resources.health.modifier)
        + i64::from(class.hp_growth) * ranks_gained
        - i64::from(life.fatigue);

    let mana_max = i64::from(race.max_mp)
        + i64::from(class.max_mp)
        + i64::from(attributes.base.wil.value)
        + i64::from(resources.mana.modifier)
        + i64::from(class.mp_growth) * ranks_gained
        - i64::from(life.stress);

    let fate_max = i64::from(race.init_fate) + i64::from(resources.fate.modifier);

    Resources {
        health: floored(resources.health, health_max),
        mana: floored(resources.mana, mana_max),
        fate: floored(resources.fate, fate_max),
    }
}

fn floored(resource: Resource, max: i64) -> Resource {
    Resource {
        modifier: resource.modifier,
        max: max.clamp(0, i64::from(i32::MAX)) as i32,
    }
}
