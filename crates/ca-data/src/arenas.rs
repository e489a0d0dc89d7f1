//! Arena definitions
//!
//! Seven zones in progression order; the Hidden Throne sits last and is
//! only reachable through the secret route. Spawn counts, elite scaling,
//! and heal scaling key off `ArenaId`, not off anything stored here.

use ca_core::{ArenaDef, ArenaId, EnemyId, ItemId};

// ==================== ARENA DEFINITIONS ====================

/// All arenas, in progression order.
pub static ARENAS: &[ArenaDef] = &[
    ArenaDef {
        id: ArenaId::GoblinForest,
        name: "Goblin Forest",
        description: "A tangled wood where Spear Goblins and Ghosts lurk.",
        encounters: &[
            EnemyId::SpearGoblin,
            EnemyId::Ghost,
            EnemyId::SkeletonArmy,
            EnemyId::Witch,
        ],
        loot: &[ItemId::ElixirBottle, ItemId::RoyalSword, ItemId::LeatherArmor],
    },
    ArenaDef {
        id: ArenaId::RoyalArena,
        name: "Royal Arena",
        description: "Gladiatorial pits with Mini P.E.K.K.A. and Mega Minions.",
        encounters: &[
            EnemyId::MiniPekka,
            EnemyId::MegaMinion,
            EnemyId::Valkyrie,
            EnemyId::Prince,
            EnemyId::Bowler,
            EnemyId::DarkPrince,
        ],
        loot: &[ItemId::MagicTome, ItemId::CrownKey, ItemId::IronSword],
    },
    ArenaDef {
        id: ArenaId::DarkValley,
        name: "Dark Valley",
        description: "Trap-filled valley: Bandit leaders and ambushes roam.",
        encounters: &[
            EnemyId::Bandit,
            EnemyId::SpikeTrap,
            EnemyId::Lumberjack,
            EnemyId::RoyalGhost,
            EnemyId::ArcherQueen,
        ],
        loot: &[ItemId::ElixirFlask, ItemId::TreasureMap, ItemId::SteelArmor],
    },
    ArenaDef {
        id: ArenaId::DesertArena,
        name: "Desert Arena",
        description: "Scorching dunes where only the strongest warriors battle beneath the burning sun.",
        encounters: &[
            EnemyId::Pekka,
            EnemyId::MegaKnight,
            EnemyId::Prince,
            EnemyId::DarkPrince,
            EnemyId::ArcherQueen,
            EnemyId::RoyalGhost,
            EnemyId::ElectroWizard,
        ],
        loot: &[ItemId::RoyalBlade, ItemId::SteelArmor, ItemId::MagicTome],
    },
    ArenaDef {
        id: ArenaId::DragonsPeak,
        name: "Dragon's Peak",
        description: "Crimson heights where the Baby Dragon sleeps upon treasure.",
        encounters: &[EnemyId::BabyDragon],
        loot: &[ItemId::MagicTome],
    },
    ArenaDef {
        id: ArenaId::DragonArena,
        name: "Dragon Arena",
        description: "A silent crater where the air vibrates with ancient power.",
        encounters: &[EnemyId::AdultDragon],
        loot: &[ItemId::DragonScale],
    },
    ArenaDef {
        id: ArenaId::HiddenThrone,
        name: "Hidden Throne",
        description: "A forgotten arena sealed behind royal magic.",
        encounters: &[EnemyId::ArcherQueen, EnemyId::MegaKnight, EnemyId::Golem],
        loot: &[ItemId::MagicTome],
    },
];

/// Number of arenas
pub fn num_arenas() -> usize {
    ARENAS.len()
}

/// Get an arena by id
pub fn get_arena(id: ArenaId) -> Option<&'static ArenaDef> {
    ARENAS.iter().find(|a| a.id == id)
}

/// Find an arena by display name
pub fn find_arena(name: &str) -> Option<&'static ArenaDef> {
    ARENAS.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}
