//! ca-core: Core combat engine for Crown Arena
//!
//! This crate contains the full encounter logic with no I/O dependencies.
//! It is designed to be pure and testable: every random number flows
//! through an injected generator, and all game data (classes, items,
//! enemies, arenas) arrives as read-only tables owned by the caller.

pub mod combat;
pub mod data;
pub mod encounter;
pub mod enemy;
pub mod grid;
pub mod player;

mod consts;
mod error;
mod pathfind;
mod rng;

pub use combat::{flee_chance, is_critical, resolve, AttackStats, Hit};
pub use consts::*;
pub use data::{
    arena_def, class_def, enemy_template, item_def, ArenaDef, ArenaId, ClassDef, ClassId, EnemyId,
    EnemyTemplate, GameTables, ItemDef, ItemEffect, ItemId, Passive, SpecialAbility,
};
pub use encounter::{
    ActionChoice, CombatSession, EncounterOutcome, RoundInput, RoundResult, Spell,
};
pub use enemy::{spawn_wave, take_enemy_turn, EnemyAction, EnemyInstance};
pub use error::DataError;
pub use grid::{Direction, Position};
pub use pathfind::next_step;
pub use player::{Equipment, PlayerState, StoryFlags};
pub use rng::GameRng;
