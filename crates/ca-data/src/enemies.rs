//! Enemy template definitions
//!
//! The immutable archetypes waves are cloned from. Range 1 is melee;
//! anything above fights from a distance and kites. Taunt lines feed the
//! cosmetic taunt turn.

use ca_core::{EnemyId, EnemyTemplate, SpecialAbility};

// ==================== ENEMY DEFINITIONS ====================

/// All enemy templates.
pub static ENEMIES: &[EnemyTemplate] = &[
    EnemyTemplate {
        id: EnemyId::SpearGoblin,
        name: "Spear Goblin",
        hp: 10,
        attack: 3,
        agility: 8,
        special: SpecialAbility::None,
        range: 3,
        taunts: ["Take this!", "Speeeear!"],
    },
    EnemyTemplate {
        id: EnemyId::Ghost,
        name: "Ghost",
        hp: 12,
        attack: 4,
        agility: 4,
        special: SpecialAbility::Phase,
        range: 1,
        taunts: ["...fades...", "Whooo..."],
    },
    EnemyTemplate {
        id: EnemyId::SkeletonArmy,
        name: "Skeletons",
        hp: 18,
        attack: 5,
        agility: 6,
        special: SpecialAbility::Swarm,
        range: 1,
        taunts: ["Bones!", "Rattle!"],
    },
    EnemyTemplate {
        id: EnemyId::MiniPekka,
        name: "Mini P.E.K.K.A.",
        hp: 34,
        attack: 10,
        agility: 3,
        special: SpecialAbility::Sturdy,
        range: 1,
        taunts: ["CLANG!", "Charge!"],
    },
    EnemyTemplate {
        id: EnemyId::MegaMinion,
        name: "Mega Minion",
        hp: 26,
        attack: 8,
        agility: 5,
        special: SpecialAbility::None,
        range: 1,
        taunts: ["Screee!", "Wing flap!"],
    },
    EnemyTemplate {
        id: EnemyId::Valkyrie,
        name: "Valkyrie",
        hp: 28,
        attack: 8,
        agility: 4,
        special: SpecialAbility::None,
        range: 1,
        taunts: ["Spin!", "For glory!"],
    },
    EnemyTemplate {
        id: EnemyId::Bandit,
        name: "Bandit",
        hp: 24,
        attack: 9,
        agility: 10,
        special: SpecialAbility::Dash,
        range: 1,
        taunts: ["Dash!", "Gotcha!"],
    },
    EnemyTemplate {
        id: EnemyId::SpikeTrap,
        name: "Spike Trap",
        hp: 8,
        attack: 11,
        agility: 2,
        special: SpecialAbility::Ambush,
        range: 1,
        taunts: ["Snap!", "Trap!"],
    },
    EnemyTemplate {
        id: EnemyId::BabyDragon,
        name: "Baby Dragon",
        hp: 80,
        attack: 12,
        agility: 5,
        special: SpecialAbility::FireBreath,
        range: 1,
        taunts: ["ROAR!", "Flame!"],
    },
    EnemyTemplate {
        id: EnemyId::Prince,
        name: "Prince",
        hp: 48,
        attack: 14,
        agility: 6,
        special: SpecialAbility::Charge,
        range: 1,
        taunts: ["Charge!", "For the King!"],
    },
    EnemyTemplate {
        id: EnemyId::DarkPrince,
        name: "Dark Prince",
        hp: 32,
        attack: 10,
        agility: 7,
        special: SpecialAbility::Charge,
        range: 1,
        taunts: ["Small charge!", "Mini charge!"],
    },
    EnemyTemplate {
        id: EnemyId::Pekka,
        name: "P.E.K.K.A.",
        hp: 60,
        attack: 18,
        agility: 3,
        special: SpecialAbility::Sturdy,
        range: 1,
        taunts: ["DESTROY!", "P.E.K.K.A. POWER!"],
    },
    EnemyTemplate {
        id: EnemyId::ElectroWizard,
        name: "Electro Wizard",
        hp: 40,
        attack: 7,
        agility: 8,
        special: SpecialAbility::Stun,
        range: 3,
        taunts: ["Zap zap!", "Don't blink!"],
    },
    EnemyTemplate {
        id: EnemyId::Witch,
        name: "Witch",
        hp: 18,
        attack: 4,
        agility: 5,
        special: SpecialAbility::Summon,
        range: 3,
        taunts: ["Rise, my minions!", "Heh heh!"],
    },
    EnemyTemplate {
        id: EnemyId::Golem,
        name: "Golem",
        hp: 80,
        attack: 16,
        agility: 2,
        special: SpecialAbility::Explode,
        range: 1,
        taunts: ["Grrr!", "Crush!"],
    },
    EnemyTemplate {
        id: EnemyId::Bowler,
        name: "Bowler",
        hp: 22,
        attack: 6,
        agility: 4,
        special: SpecialAbility::Knockback,
        range: 3,
        taunts: ["Strike!", "Rock and roll!"],
    },
    EnemyTemplate {
        id: EnemyId::Lumberjack,
        name: "Lumberjack",
        hp: 38,
        attack: 12,
        agility: 8,
        special: SpecialAbility::Rage,
        range: 1,
        taunts: ["Raaagh!", "Chop chop!"],
    },
    EnemyTemplate {
        id: EnemyId::ArcherQueen,
        name: "Archer Queen",
        hp: 40,
        attack: 9,
        agility: 9,
        special: SpecialAbility::Invis,
        range: 4,
        taunts: ["Silent shot!", "Can't see me!"],
    },
    EnemyTemplate {
        id: EnemyId::MegaKnight,
        name: "Mega Knight",
        hp: 70,
        attack: 17,
        agility: 5,
        special: SpecialAbility::Slam,
        range: 1,
        taunts: ["Mega slam!", "Boom!"],
    },
    EnemyTemplate {
        id: EnemyId::RoyalGhost,
        name: "Royal Ghost",
        hp: 25,
        attack: 8,
        agility: 8,
        special: SpecialAbility::Phase,
        range: 1,
        taunts: ["Boo!", "Invisible strike!"],
    },
    EnemyTemplate {
        id: EnemyId::AdultDragon,
        name: "Adult Dragon",
        hp: 200,
        attack: 11,
        agility: 6,
        special: SpecialAbility::FireBreath,
        range: 3,
        taunts: ["Roooar!", "Flames rise."],
    },
];

/// Number of enemy templates
pub fn num_enemies() -> usize {
    ENEMIES.len()
}

/// Get a template by id
pub fn get_enemy(id: EnemyId) -> Option<&'static EnemyTemplate> {
    ENEMIES.iter().find(|e| e.id == id)
}

/// Find a template by display name
pub fn find_enemy(name: &str) -> Option<&'static EnemyTemplate> {
    ENEMIES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
