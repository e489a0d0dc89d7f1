//! Data shapes for the static reference tables.
//!
//! The engine never owns game data. Classes, items, enemies, and arenas are
//! defined as const tables in a data crate and handed in as slices; this
//! module defines the types those tables are made of, plus the id enums and
//! lookup helpers. A failed lookup is a [`DataError`], not a play mistake.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::DEFAULT_ITEM_VALUE;
use crate::error::DataError;

// ---------------------------------------------------------------------------
// Classes

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ClassId {
    Knight,
    Wizard,
    Bandit,
}

/// Class passive traits. `Armor` shaves 1 off every hit taken, `Arcane`
/// regenerates 1 mana per round, `Swift` adds 1 to melee damage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Passive {
    Armor,
    Arcane,
    Swift,
}

/// Base stats for a character class, before creation bonuses.
#[derive(Debug, Clone, Copy)]
pub struct ClassDef {
    pub id: ClassId,
    pub name: &'static str,
    pub strength: i32,
    pub agility: i32,
    pub magic: i32,
    pub max_hp: i32,
    pub passive: Passive,
}

impl ClassId {
    /// Items a freshly created character of this class starts with.
    pub const fn starter_kit(self) -> &'static [ItemId] {
        match self {
            ClassId::Knight => &[ItemId::SmallPotion, ItemId::ElixirBottle, ItemId::RoyalSword],
            ClassId::Wizard => &[ItemId::SmallPotion, ItemId::ElixirBottle, ItemId::MagicTome],
            ClassId::Bandit => &[
                ItemId::SmallPotion,
                ItemId::ElixirBottle,
                ItemId::TreasureMap,
                ItemId::CrownKey,
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Items

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ItemId {
    SmallPotion,
    LargePotion,
    ElixirBottle,
    ElixirFlask,
    MagicTome,
    RoyalSword,
    IronSword,
    RoyalBlade,
    LeatherArmor,
    SteelArmor,
    CrownKey,
    TreasureMap,
    DragonScale,
}

/// What using an item does. Heal amounts are scaled by the arena the fight
/// takes place in; mana is never capped by use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    Heal(i32),
    Mana(i32),
    Weapon(i32),
    Armor(i32),
    Key,
    Map,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: &'static str,
    pub effect: ItemEffect,
    /// Shop price; `None` for items the shop never stocks.
    pub price: Option<i32>,
}

impl ItemDef {
    /// Trade value: the shop price, or a flat default for unpriced items.
    pub fn value(&self) -> i32 {
        self.price.unwrap_or(DEFAULT_ITEM_VALUE)
    }

    /// What the shop pays when the player sells this item.
    pub fn sell_price(&self) -> i32 {
        (self.value() / 2).max(1)
    }
}

// ---------------------------------------------------------------------------
// Enemies

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EnemyId {
    SpearGoblin,
    Ghost,
    SkeletonArmy,
    MiniPekka,
    MegaMinion,
    Valkyrie,
    Bandit,
    SpikeTrap,
    BabyDragon,
    Prince,
    DarkPrince,
    Pekka,
    ElectroWizard,
    Witch,
    Golem,
    Bowler,
    Lumberjack,
    ArcherQueen,
    MegaKnight,
    RoyalGhost,
    AdultDragon,
}

/// Enemy special ability tag. Only `Phase` and `Swarm` change combat
/// mechanics directly; the rest are identity tags the tables carry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum SpecialAbility {
    #[default]
    None,
    Phase,
    Swarm,
    Sturdy,
    Charge,
    Invis,
    Stun,
    Summon,
    Explode,
    Knockback,
    Rage,
    Dash,
    Ambush,
    FireBreath,
    Slam,
}

/// Immutable enemy archetype. Encounters clone these into instances and
/// never write back.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: &'static str,
    pub hp: i32,
    pub attack: i32,
    pub agility: i32,
    pub special: SpecialAbility,
    /// Attack reach in tiles; 1 is melee.
    pub range: i32,
    pub taunts: [&'static str; 2],
}

// ---------------------------------------------------------------------------
// Arenas

/// Arena identities, in progression order. The Hidden Throne comes last and
/// is only reachable through the secret route.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ArenaId {
    GoblinForest,
    RoyalArena,
    DarkValley,
    DesertArena,
    DragonsPeak,
    DragonArena,
    HiddenThrone,
}

impl ArenaId {
    /// Healing-item multiplier for fights here, in integer percent.
    pub const fn heal_scale_pct(self) -> i32 {
        match self {
            ArenaId::GoblinForest => 100,
            ArenaId::RoyalArena => 120,
            ArenaId::DarkValley => 140,
            ArenaId::DesertArena => 160,
            ArenaId::HiddenThrone => 200,
            ArenaId::DragonsPeak | ArenaId::DragonArena => 100,
        }
    }

    /// Elite-tier stat multiplier, in integer percent. Applied to both HP
    /// and attack when a wave spawns 1 or 4 enemies.
    pub const fn elite_scale_pct(self) -> i32 {
        match self {
            ArenaId::GoblinForest => 75,
            ArenaId::RoyalArena => 75,
            ArenaId::DarkValley => 100,
            ArenaId::DesertArena => 125,
            ArenaId::HiddenThrone => 200,
            ArenaId::DragonsPeak | ArenaId::DragonArena => 100,
        }
    }

    /// Dragon arenas always stage a single boss and never swap in the
    /// elite pool.
    pub const fn is_dragon(self) -> bool {
        matches!(self, ArenaId::DragonsPeak | ArenaId::DragonArena)
    }

    pub const fn is_secret(self) -> bool {
        matches!(self, ArenaId::HiddenThrone)
    }
}

/// One themed combat zone: who can spawn there and what it drops.
#[derive(Debug, Clone, Copy)]
pub struct ArenaDef {
    pub id: ArenaId,
    pub name: &'static str,
    pub description: &'static str,
    pub encounters: &'static [EnemyId],
    pub loot: &'static [ItemId],
}

// ---------------------------------------------------------------------------
// Table access

/// The full set of static reference tables, borrowed for the duration of a
/// call. Copyable so it can be passed around freely.
#[derive(Debug, Clone, Copy)]
pub struct GameTables<'a> {
    pub classes: &'a [ClassDef],
    pub items: &'a [ItemDef],
    pub enemies: &'a [EnemyTemplate],
    pub arenas: &'a [ArenaDef],
}

pub fn class_def(classes: &[ClassDef], id: ClassId) -> Result<&ClassDef, DataError> {
    classes
        .iter()
        .find(|c| c.id == id)
        .ok_or(DataError::UnknownClass { id })
}

pub fn item_def(items: &[ItemDef], id: ItemId) -> Result<&ItemDef, DataError> {
    items
        .iter()
        .find(|i| i.id == id)
        .ok_or(DataError::UnknownItem { id })
}

pub fn enemy_template(templates: &[EnemyTemplate], id: EnemyId) -> Result<&EnemyTemplate, DataError> {
    templates
        .iter()
        .find(|t| t.id == id)
        .ok_or(DataError::UnknownEnemy { id })
}

pub fn arena_def(arenas: &[ArenaDef], id: ArenaId) -> Result<&ArenaDef, DataError> {
    arenas
        .iter()
        .find(|a| a.id == id)
        .ok_or(DataError::UnknownArena { id })
}
