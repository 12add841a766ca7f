//! Catch odds
//!
//! Stronger pokemon (higher base experience) are harder to catch, and no
//! throw is better than 90%.

use rand::Rng;

/// Upper bound on the catch chance, in percent
pub const MAX_CATCH_CHANCE: u32 = 90;

/// Highest value a throw can roll
pub const MAX_ROLL: u32 = 100;

/// Chance, in percent, of catching a pokemon with the given base experience.
pub fn catch_chance(base_experience: Option<u32>) -> u32 {
    let base = base_experience.unwrap_or(0);
    100u32.saturating_sub(base / 4).min(MAX_CATCH_CHANCE)
}

/// Whether a roll in `0..=MAX_ROLL` lands within `chance`.
pub fn is_caught(roll: u32, chance: u32) -> bool {
    roll <= chance
}

/// Rolls a throw and reports whether the pokemon was caught.
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: Option<u32>) -> bool {
    let roll = rng.gen_range(0..=MAX_ROLL);
    is_caught(roll, catch_chance(base_experience))
}
