//! Fatal configuration errors.
//!
//! Play mistakes (bad target, empty inventory, not enough mana) never
//! surface here; they become log lines and the round carries on. An error
//! from this module means the static tables handed to the engine are
//! incomplete, which is an integration defect.

use thiserror::Error;

use crate::data::{ArenaId, ClassId, EnemyId, ItemId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("no class definition for {id}")]
    UnknownClass { id: ClassId },

    #[error("no item definition for {id}")]
    UnknownItem { id: ItemId },

    #[error("no enemy template for {id}")]
    UnknownEnemy { id: EnemyId },

    #[error("no arena definition for {id}")]
    UnknownArena { id: ArenaId },

    #[error("arena {arena} has an empty encounter pool")]
    EmptyEncounterPool { arena: ArenaId },
}
