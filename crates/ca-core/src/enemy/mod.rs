//! Enemy system
//!
//! Contains enemy instances plus the wave spawner and per-turn AI.

pub mod ai;
pub mod spawn;

pub use ai::{take_enemy_turn, EnemyAction};
pub use spawn::spawn_wave;

use serde::{Deserialize, Serialize};

use crate::data::{EnemyId, EnemyTemplate, SpecialAbility};
use crate::grid::Position;

/// One live combatant, cloned from a template at spawn time. Templates stay
/// immutable; every stat here is owned and free to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyInstance {
    pub id: EnemyId,
    pub name: String,

    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub agility: i32,
    pub special: SpecialAbility,

    /// Attack reach in tiles. 1 is melee.
    pub range: i32,

    pub pos: Position,

    /// Evades the next hit taken, then clears.
    pub phased: bool,

    /// Bonus damage armed for this unit's next attack.
    pub swarm_rage: bool,

    /// True until the unit has acted once.
    pub first_turn: bool,
}

impl EnemyInstance {
    pub fn from_template(template: &EnemyTemplate, pos: Position) -> Self {
        Self {
            id: template.id,
            name: template.name.to_string(),
            hp: template.hp,
            max_hp: template.hp,
            attack: template.attack,
            agility: template.agility,
            special: template.special,
            range: template.range,
            pos,
            phased: false,
            swarm_rage: false,
            first_turn: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_ranged(&self) -> bool {
        self.range > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn ghost_template() -> EnemyTemplate {
        EnemyTemplate {
            id: EnemyId::Ghost,
            name: "Ghost",
            hp: 12,
            attack: 4,
            agility: 4,
            special: SpecialAbility::Phase,
            range: 1,
            taunts: ["...fades...", "Whooo..."],
        }
    }

    #[test]
    fn instances_copy_the_template() {
        let t = ghost_template();
        let e = EnemyInstance::from_template(&t, Position::new(2, 7));
        assert_eq!(e.id, EnemyId::Ghost);
        assert_eq!(e.name, "Ghost");
        assert_eq!(e.hp, 12);
        assert_eq!(e.max_hp, 12);
        assert_eq!(e.pos, Position::new(2, 7));
        assert!(e.is_alive());
        assert!(!e.is_ranged());
        assert!(e.first_turn);
        assert!(!e.phased);
    }

    #[test]
    fn template_is_untouched_by_instance_edits() {
        let t = ghost_template();
        let mut e = EnemyInstance::from_template(&t, Position::new(0, 0));
        e.hp = 0;
        assert_eq!(t.hp, 12);
        assert!(!e.is_alive());
    }
}
