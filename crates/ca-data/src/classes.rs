//! Character class definitions
//!
//! Base stats before the creation bonus (+2 to every stat, +8 max HP)
//! that `PlayerState::new` applies on top.

use ca_core::{ClassDef, ClassId, Passive};

// ==================== CLASS DEFINITIONS ====================

/// All playable classes.
pub static CLASSES: &[ClassDef] = &[
    // Knight: heavy melee, shrugs off chip damage
    ClassDef {
        id: ClassId::Knight,
        name: "Knight",
        strength: 10,
        agility: 6,
        magic: 2,
        max_hp: 48,
        passive: Passive::Armor,
    },
    // Wizard: frail, deep mana pool, regenerates 1 mana per round
    ClassDef {
        id: ClassId::Wizard,
        name: "Wizard",
        strength: 4,
        agility: 6,
        magic: 12,
        max_hp: 34,
        passive: Passive::Arcane,
    },
    // Bandit: fast, +1 melee damage, starts holding the secret-route items
    ClassDef {
        id: ClassId::Bandit,
        name: "Bandit",
        strength: 7,
        agility: 10,
        magic: 3,
        max_hp: 36,
        passive: Passive::Swift,
    },
];

/// Number of classes
pub fn num_classes() -> usize {
    CLASSES.len()
}

/// Get a class by id
pub fn get_class(id: ClassId) -> Option<&'static ClassDef> {
    CLASSES.iter().find(|c| c.id == id)
}

/// Find a class by display name
pub fn find_class(name: &str) -> Option<&'static ClassDef> {
    CLASSES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
