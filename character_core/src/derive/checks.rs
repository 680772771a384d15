//! Check derivation
//!
//! Ability checks: `base = primary + secondary`, `total = base + rank + mod`.
//! Combat checks have no rank: accuracy and magic accuracy add weapon
//! bonuses, evasion and resistance read a single attribute.

use super::equipment::EquipmentBonuses;
use crate::character::{Attributes, CheckName, Checks};
use crate::config::CheckConstants;

pub(crate) fn derive_checks(
    checks: &Checks,
    attributes: &Attributes,
    bonuses: &EquipmentBonuses,
    constants: &CheckConstants,
) -> Checks {
    let mut derived = *checks;

    for &name in CheckName::all() {
        let check = derived.get_mut(name);

        match name.pair() {
            Some((primary, secondary)) => {
                check.base = attributes
                    .base
                    .get(primary)
                    .value
                    .saturating_add(attributes.derived.get(secondary).value);
                check.total = check
                    .base
                    .saturating_add(check.rank)
                    .saturating_add(check.modifier);
            }
            None => {
                let (base, bonus) = combat_check(name, attributes, bonuses);
                check.base = base;
                check.total = base.saturating_add(bonus).saturating_add(check.modifier);
            }
        }

        check.dice = check.dice.max(constants.min_dice);
    }

    derived
}

/// Base value and item bonus of a combat check
fn combat_check(name: CheckName, attributes: &Attributes, bonuses: &EquipmentBonuses) -> (i32, i32) {
    let base = &attributes.base;
    let derived = &attributes.derived;

    match name {
        CheckName::Accuracy => (
            base.agi.value.saturating_add(derived.dex.value),
            bonuses.accuracy,
        ),
        CheckName::MagicAccuracy => (
            base.wil.value.saturating_add(derived.wis.value),
            bonuses.m_accuracy,
        ),
        CheckName::Evasion => (base.agi.value, 0),
        CheckName::Resistance => (base.wil.value, 0),
        // Ability checks are summed from their attribute pair
        _ => (0, 0),
    }
}
