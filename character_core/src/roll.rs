//! Check rolls
//!
//! A check rolls `base_dice + bonus` d6, never fewer than `min_dice` and
//! never more than `max_dice`. Success is roll-under: the dice sum must not
//! exceed the target.
//!
//! A check's stored `dice` is the count the sheet shows next to it. Rolls
//! take their bonus dice from the roll request instead, as the player sets
//! them in the roll dialog.

use crate::character::Check;
use crate::config::CheckConstants;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of a plain dice roll against a difficulty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub difficulty: i32,
    /// Individual die faces, in roll order
    pub dice: Vec<u32>,
    /// Sum of the dice
    pub value: i32,
    pub success: bool,
    /// Achievement value: the sum plus any attain bonus
    pub attain: i32,
}

/// Outcome of rolling one of a character's checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRoll {
    /// Highest sum that still succeeds: `total - difficulty + rank`
    pub target: i32,
    pub dice: Vec<u32>,
    pub value: i32,
    pub success: bool,
    /// `value + rank + attain bonus`
    pub attain: i32,
}

/// Number of d6 rolled for a given bonus
pub fn dice_count(dice_bonus: i32, constants: &CheckConstants) -> usize {
    let floor = constants.min_dice.max(1);
    let count = constants
        .base_dice
        .saturating_add(dice_bonus)
        .clamp(floor, constants.max_dice.max(floor));
    usize::try_from(count).unwrap_or(1)
}

fn roll_d6s(count: usize, rng: &mut impl Rng) -> (Vec<u32>, i32) {
    let dice: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=6)).collect();
    let value = dice
        .iter()
        .fold(0i32, |total, &d| total.saturating_add(d as i32));
    (dice, value)
}

/// Roll against a bare difficulty
pub fn roll_dice(
    difficulty: i32,
    dice_bonus: i32,
    attain_bonus: i32,
    constants: &CheckConstants,
    rng: &mut impl Rng,
) -> DiceRoll {
    let (dice, value) = roll_d6s(dice_count(dice_bonus, constants), rng);
    DiceRoll {
        difficulty,
        dice,
        value,
        success: value <= difficulty,
        attain: value.saturating_add(attain_bonus),
    }
}

/// Roll one of a character's derived checks against a difficulty
pub fn roll_check(
    check: &Check,
    difficulty: i32,
    dice_bonus: i32,
    attain_bonus: i32,
    constants: &CheckConstants,
    rng: &mut impl Rng,
) -> CheckRoll {
    let target = check
        .total
        .saturating_sub(difficulty)
        .saturating_add(check.rank);
    let (dice, value) = roll_d6s(dice_count(dice_bonus, constants), rng);
    CheckRoll {
        target,
        dice,
        value,
        success: value <= target,
        attain: value.saturating_add(check.rank).saturating_add(attain_bonus),
    }
}
