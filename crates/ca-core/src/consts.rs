//! Engine-wide tuning constants.
//!
//! Balance values that several modules share live here; values used by a
//! single table stay with that table in `ca-data`.

/// Battlefield dimensions
pub const GRID_ROWS: i32 = 7;
pub const GRID_COLS: i32 = 11;

/// Where the champion stands when an encounter opens
pub const PLAYER_START_ROW: i32 = 3;
pub const PLAYER_START_COL: i32 = 1;

/// Shared placement-attempt budget for one spawn wave
pub const SPAWN_ATTEMPTS: u32 = 400;

/// Chance (percent) that a lone non-dragon wave gains an extra elite pick
pub const ELITE_EXTRA_CHANCE: i32 = 30;

/// Attack roll die and the critical threshold (roll must exceed it)
pub const ATTACK_DIE: i32 = 20;
pub const CRIT_THRESHOLD: i32 = 18;

/// Bonus damage from an enraged swarm
pub const SWARM_RAGE_BONUS: i32 = 3;

/// Attack bonus for a wielded item with no weapon power of its own
pub const IMPROVISED_WEAPON_BONUS: i32 = 2;

/// Firebolt spell
pub const FIREBOLT_COST: i32 = 3;
pub const FIREBOLT_RANGE: i32 = 3;
pub const FIREBOLT_POWER: i32 = 3;

/// Heal spell
pub const HEAL_COST: i32 = 2;
pub const HEAL_BASE: i32 = 6;

/// Flee chance: base + 3 per agility point, -5 per living enemy, clamped
pub const FLEE_BASE: i32 = 30;
pub const FLEE_AGILITY_STEP: i32 = 3;
pub const FLEE_ENEMY_PENALTY: i32 = 5;
pub const FLEE_MIN: i32 = 10;
pub const FLEE_MAX: i32 = 95;

/// Enemy turn chances (percent)
pub const TAUNT_CHANCE: i32 = 8;
pub const PHASE_CHANCE: i32 = 20;
pub const SWARM_RAGE_CHANCE: i32 = 20;
pub const RETREAT_CHANCE: i32 = 40;
pub const RANGED_HOLD_CHANCE: i32 = 50;

/// Victory spoils
pub const GOLD_MIN: i32 = 8;
pub const GOLD_MAX: i32 = 30;
pub const XP_MIN: i32 = 8;
pub const XP_MAX: i32 = 20;

/// Leveling: next level costs `LEVEL_EXP_STEP * level` experience
pub const LEVEL_EXP_STEP: i32 = 20;
pub const LEVEL_HP_GAIN: i32 = 6;

/// Mana pool cap relative to the magic stat
pub const MANA_PER_MAGIC: i32 = 2;

/// Sparing a downed dragon
pub const SPARE_BASE: i32 = 35;
pub const SPARE_MAGIC_MIN: i32 = 10;
pub const SPARE_MAGIC_BONUS: i32 = 25;
pub const SPARE_SCALE_BONUS: i32 = 25;
pub const SPARE_CAP: i32 = 90;

/// Fallback sale value for items missing a shop price
pub const DEFAULT_ITEM_VALUE: i32 = 10;
