//! The damage formula and related pure helpers.
//!
//! Everything here is free of side effects: rolls come from the injected
//! generator (or an override) and the result is returned, never applied.
//! Critical doubling, passives, armor, and the defend stance are layered on
//! by the callers that know about them.

use crate::consts::{
    ATTACK_DIE, CRIT_THRESHOLD, FLEE_AGILITY_STEP, FLEE_BASE, FLEE_ENEMY_PENALTY, FLEE_MAX,
    FLEE_MIN,
};
use crate::rng::GameRng;

/// Offensive half of the damage formula. Enemies leave `strength` and
/// `magic` at zero; the player's melee profile leaves `magic` at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackStats {
    pub attack: i32,
    pub strength: i32,
    pub magic: i32,
}

/// A resolved hit: the damage dealt and the die roll that drove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub damage: i32,
    pub roll: i32,
}

/// Resolve one attack against a defender's agility.
///
/// The d20 comes from `rng` unless `roll` supplies an override, so a caller
/// that animates the roll can resolve with the exact number it displayed.
pub fn resolve(
    attacker: AttackStats,
    defender_agility: i32,
    roll: Option<i32>,
    rng: &mut GameRng,
) -> Hit {
    let roll = roll.unwrap_or_else(|| rng.rnd(ATTACK_DIE));
    let damage = (roll / 2 + attacker.attack + attacker.strength / 2 + attacker.magic / 2
        - defender_agility / 2)
        .max(0);
    Hit { damage, roll }
}

/// Player-only rule: a roll above the threshold doubles the final damage.
pub const fn is_critical(roll: i32) -> bool {
    roll > CRIT_THRESHOLD
}

/// Percent chance that fleeing succeeds, given the player's agility and the
/// number of enemies still standing.
pub fn flee_chance(agility: i32, living_enemies: i32) -> i32 {
    (FLEE_BASE + agility * FLEE_AGILITY_STEP - living_enemies * FLEE_ENEMY_PENALTY)
        .clamp(FLEE_MIN, FLEE_MAX)
}
