//! Wave spawning: how many enemies, which ones, where, and at what strength.

use crate::consts::{ELITE_EXTRA_CHANCE, GRID_COLS, GRID_ROWS, SPAWN_ATTEMPTS};
use crate::data::{enemy_template, ArenaDef, ArenaId, EnemyId, EnemyTemplate};
use crate::enemy::EnemyInstance;
use crate::error::DataError;
use crate::grid::Position;
use crate::rng::GameRng;

/// Units strong enough to headline a solo duel.
const ELITE_POOL: [EnemyId; 6] = [
    EnemyId::Pekka,
    EnemyId::MegaKnight,
    EnemyId::Prince,
    EnemyId::Golem,
    EnemyId::ArcherQueen,
    EnemyId::RoyalGhost,
];

/// Occasionally mixed into the elite pool for variety.
const ELITE_EXTRAS: [EnemyId; 2] = [EnemyId::ElectroWizard, EnemyId::Lumberjack];

/// How many enemies an arena stages per wave.
fn wave_size(arena: ArenaId, rng: &mut GameRng) -> i32 {
    match arena {
        ArenaId::HiddenThrone => 4,
        ArenaId::DesertArena => 1,
        ArenaId::GoblinForest => rng.between(2, 3),
        ArenaId::DragonsPeak | ArenaId::DragonArena => 1,
        _ => {
            if rng.percent(50) {
                1
            } else {
                rng.between(2, 3)
            }
        }
    }
}

/// Clone a template into an instance and apply the wave's scaling: solo
/// units get a 25% HP bump, groups lose 10% HP per extra member, and waves
/// of exactly 1 or 4 take the arena's elite multiplier on HP and attack.
fn scaled_instance(
    template: &EnemyTemplate,
    pos: Position,
    count: i32,
    arena: ArenaId,
) -> EnemyInstance {
    let mut enemy = EnemyInstance::from_template(template, pos);
    if count == 1 {
        enemy.hp = enemy.hp * 5 / 4;
    } else {
        enemy.hp = enemy.hp * (11 - count) / 10;
    }
    if count == 1 || count == 4 {
        let pct = arena.elite_scale_pct();
        enemy.hp = enemy.hp * pct / 100;
        enemy.attack = enemy.attack * pct / 100;
    }
    enemy.max_hp = enemy.hp;
    enemy
}

/// Spawn a fresh wave for `arena`, placed on the right half of the grid,
/// never on the player or on each other. Solo waves outside the dragon
/// arenas draw from the elite pool instead of the arena's own.
///
/// Placement retries share one attempt budget across the wave; a unit that
/// exhausts it takes a reserved slot on the top row, scaled like the rest.
pub fn spawn_wave(
    arena: &ArenaDef,
    player_pos: Position,
    templates: &[EnemyTemplate],
    rng: &mut GameRng,
) -> Result<Vec<EnemyInstance>, DataError> {
    if arena.encounters.is_empty() {
        return Err(DataError::EmptyEncounterPool { arena: arena.id });
    }

    let count = wave_size(arena.id, rng);

    let pool: Vec<EnemyId> = if count == 1 && !arena.id.is_dragon() {
        let mut pool = ELITE_POOL.to_vec();
        if rng.percent(ELITE_EXTRA_CHANCE) {
            pool.extend(ELITE_EXTRAS);
        }
        pool
    } else {
        arena.encounters.to_vec()
    };

    let mut wave = Vec::with_capacity(count as usize);
    let mut attempts = 0u32;
    for i in 0..count {
        let id = match rng.choose(&pool) {
            Some(&id) => id,
            None => return Err(DataError::EmptyEncounterPool { arena: arena.id }),
        };
        let template = enemy_template(templates, id)?;

        let mut placed = None;
        while placed.is_none() && attempts < SPAWN_ATTEMPTS {
            attempts += 1;
            let candidate = Position::new(rng.rn2(GRID_ROWS), rng.between(GRID_COLS / 2, GRID_COLS - 1));
            let taken =
                candidate == player_pos || wave.iter().any(|e: &EnemyInstance| e.pos == candidate);
            if !taken {
                placed = Some(candidate);
            }
        }
        let pos = placed.unwrap_or_else(|| Position::new(0, GRID_COLS - 1 - i));

        wave.push(scaled_instance(template, pos, count, arena.id));
    }
    Ok(wave)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SpecialAbility;

    fn template(id: EnemyId, name: &'static str, hp: i32, attack: i32) -> EnemyTemplate {
        EnemyTemplate {
            id,
            name,
            hp,
            attack,
            agility: 5,
            special: SpecialAbility::None,
            range: 1,
            taunts: ["...", "..."],
        }
    }

    fn templates() -> Vec<EnemyTemplate> {
        vec![
            template(EnemyId::SpearGoblin, "Spear Goblin", 10, 3),
            template(EnemyId::Ghost, "Ghost", 12, 4),
            template(EnemyId::Pekka, "P.E.K.K.A.", 60, 18),
            template(EnemyId::MegaKnight, "Mega Knight", 70, 17),
            template(EnemyId::Prince, "Prince", 48, 14),
            template(EnemyId::Golem, "Golem", 80, 16),
            template(EnemyId::ArcherQueen, "Archer Queen", 40, 9),
            template(EnemyId::RoyalGhost, "Royal Ghost", 25, 8),
            template(EnemyId::ElectroWizard, "Electro Wizard", 40, 7),
            template(EnemyId::Lumberjack, "Lumberjack", 38, 12),
        ]
    }

    fn forest() -> ArenaDef {
        ArenaDef {
            id: ArenaId::GoblinForest,
            name: "Goblin Forest",
            description: "",
            encounters: &[EnemyId::SpearGoblin, EnemyId::Ghost],
            loot: &[],
        }
    }

    fn desert() -> ArenaDef {
        ArenaDef {
            id: ArenaId::DesertArena,
            name: "Desert Arena",
            description: "",
            encounters: &[EnemyId::Pekka],
            loot: &[],
        }
    }

    fn throne() -> ArenaDef {
        ArenaDef {
            id: ArenaId::HiddenThrone,
            name: "Hidden Throne",
            description: "",
            encounters: &[EnemyId::ArcherQueen, EnemyId::MegaKnight, EnemyId::Golem],
            loot: &[],
        }
    }

    fn player_start() -> Position {
        Position::new(GRID_ROWS / 2, 1)
    }

    #[test]
    fn wave_sizes_follow_arena_rules() {
        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            assert_eq!(wave_size(ArenaId::HiddenThrone, &mut rng), 4);
            assert_eq!(wave_size(ArenaId::DesertArena, &mut rng), 1);
            assert_eq!(wave_size(ArenaId::DragonsPeak, &mut rng), 1);
            assert_eq!(wave_size(ArenaId::DragonArena, &mut rng), 1);
            let forest = wave_size(ArenaId::GoblinForest, &mut rng);
            assert!((2..=3).contains(&forest));
            let royal = wave_size(ArenaId::RoyalArena, &mut rng);
            assert!((1..=3).contains(&royal));
        }
    }

    #[test]
    fn spawns_sit_on_the_right_half_without_overlap() {
        let templates = templates();
        for seed in 0..100 {
            let mut rng = GameRng::new(seed);
            let wave = spawn_wave(&forest(), player_start(), &templates, &mut rng).unwrap();
            assert!(!wave.is_empty());
            for (i, e) in wave.iter().enumerate() {
                assert!(e.pos.in_bounds());
                assert!(e.pos.col >= GRID_COLS / 2);
                assert_ne!(e.pos, player_start());
                for other in &wave[i + 1..] {
                    assert_ne!(e.pos, other.pos);
                }
            }
        }
    }

    #[test]
    fn group_waves_shed_hp_per_member() {
        let templates = templates();
        let mut rng = GameRng::new(7);
        let wave = spawn_wave(&forest(), player_start(), &templates, &mut rng).unwrap();
        let expected_pct = match wave.len() {
            2 => 90,
            3 => 80,
            n => panic!("forest wave of {n}"),
        };
        for e in &wave {
            let base = match e.id {
                EnemyId::SpearGoblin => 10,
                EnemyId::Ghost => 12,
                other => panic!("{other} is not in the forest pool"),
            };
            assert_eq!(e.hp, base * expected_pct / 100);
            assert_eq!(e.max_hp, e.hp);
            // attack is only rescaled for waves of 1 or 4
            assert!(e.attack == 3 || e.attack == 4);
        }
    }

    #[test]
    fn desert_duels_pull_scaled_elites() {
        let templates = templates();
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let wave = spawn_wave(&desert(), player_start(), &templates, &mut rng).unwrap();
            assert_eq!(wave.len(), 1);
            let e = &wave[0];
            assert!(
                ELITE_POOL.contains(&e.id) || ELITE_EXTRAS.contains(&e.id),
                "{} is not an elite",
                e.id
            );
            let base = enemy_template(&templates, e.id).unwrap();
            // solo bump then the desert's 125% elite tier
            assert_eq!(e.hp, base.hp * 5 / 4 * 125 / 100);
            assert_eq!(e.attack, base.attack * 125 / 100);
        }
    }

    #[test]
    fn throne_waves_are_four_doubled_guards() {
        let templates = templates();
        let mut rng = GameRng::new(3);
        let wave = spawn_wave(&throne(), player_start(), &templates, &mut rng).unwrap();
        assert_eq!(wave.len(), 4);
        for e in &wave {
            assert!(throne().encounters.contains(&e.id));
            let base = enemy_template(&templates, e.id).unwrap();
            // 70% group size cut, then the throne's 200% elite tier
            assert_eq!(e.hp, base.hp * 7 / 10 * 2);
            assert_eq!(e.attack, base.attack * 2);
        }
    }

    #[test]
    fn empty_pool_is_a_data_error() {
        let templates = templates();
        let broken = ArenaDef {
            encounters: &[],
            ..forest()
        };
        let mut rng = GameRng::new(0);
        let err = spawn_wave(&broken, player_start(), &templates, &mut rng);
        assert_eq!(
            err,
            Err(DataError::EmptyEncounterPool {
                arena: ArenaId::GoblinForest
            })
        );
    }
}
