//! Battle status derivation - power, defense, speed and initiative

use super::equipment::EquipmentBonuses;
use crate::character::{Attributes, BattleStatus, Status};
use crate::config::BattleConstants;

pub(crate) fn derive_battle_status(
    status: &BattleStatus,
    attributes: &Attributes,
    bonuses: &EquipmentBonuses,
    constants: &BattleConstants,
) -> BattleStatus {
    let derived = &attributes.derived;
    let main = &bonuses.main_weapon;
    let armor = &bonuses.armor;
    let mut out = *status;

    // Power
    set_total(&mut out.power.attack, derived.str.value.saturating_add(main.attack), 0);
    set_total(
        &mut out.power.restoration,
        derived.pre.value.saturating_add(main.restoration),
        0,
    );
    set_total(
        &mut out.power.magic,
        derived.dis.value.saturating_add(main.magic),
        bonuses.accessory_magic,
    );

    // Defenses
    set_total(
        &mut out.defense.phys,
        derived.end.value,
        armor
            .pdef
            .saturating_add(bonuses.shield_pdef)
            .saturating_add(bonuses.accessory_pdef),
    );
    set_total(
        &mut out.defense.magic,
        derived.min.value,
        armor
            .mdef
            .saturating_add(bonuses.shield_mdef)
            .saturating_add(bonuses.accessory_mdef),
    );

    // Speed
    set_total(&mut out.speed, constants.base_speed, 0);

    // Initiative
    set_total(
        &mut out.initiative,
        derived.qik.value,
        bonuses
            .weapon_initiative
            .saturating_add(armor.initiative)
            .saturating_add(bonuses.accessory_initiative),
    );
    out.initiative.total = out.initiative.total.max(0);

    out
}

fn set_total(status: &mut Status, base: i32, bonus: i32) {
    status.base = base;
    status.total = base.saturating_add(bonus).saturating_add(status.modifier);
}
