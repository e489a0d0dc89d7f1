//! Per-enemy turn logic.
//!
//! Each live enemy activates once per round, in roster order:
//! 1. maybe taunt
//! 2. roll pre-turn special state (phase fade, swarm rage)
//! 3. move: ranged units kite away when crowded, everyone else closes in
//! 4. attack if the player is in reach, unless a wounded melee unit slips
//!    away or a ranged unit holds fire after moving

use crate::combat::{resolve, AttackStats};
use crate::consts::{
    PHASE_CHANCE, RANGED_HOLD_CHANCE, RETREAT_CHANCE, SWARM_RAGE_BONUS, SWARM_RAGE_CHANCE,
    TAUNT_CHANCE,
};
use crate::data::{enemy_template, GameTables, SpecialAbility};
use crate::enemy::EnemyInstance;
use crate::error::DataError;
use crate::grid::Position;
use crate::pathfind::next_step;
use crate::player::PlayerState;
use crate::rng::GameRng;

/// What one enemy ended up doing with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Dead or missing; nothing happened.
    Skipped,
    /// In place all turn and out of reach.
    Waited,
    Moved(Position),
    /// Slipped away instead of swinging.
    Retreated(Position),
    Attacked {
        damage: i32,
    },
    MovedAndAttacked {
        to: Position,
        damage: i32,
    },
}

/// Tiles held by live enemies other than `idx`.
fn live_positions_except(enemies: &[EnemyInstance], idx: usize) -> Vec<Position> {
    enemies
        .iter()
        .enumerate()
        .filter(|(i, e)| *i != idx && e.is_alive())
        .map(|(_, e)| e.pos)
        .collect()
}

/// The farthest open neighbor strictly beyond the current distance to the
/// player, ties broken by scan order. `None` when every option is blocked
/// or no closer than standing still.
fn step_away(
    from: Position,
    player_pos: Position,
    occupied: &[Position],
) -> Option<Position> {
    let mut best = None;
    let mut best_dist = from.distance(player_pos);
    for cand in from.neighbors() {
        if occupied.contains(&cand) {
            continue;
        }
        let d = cand.distance(player_pos);
        if d > best_dist {
            best = Some(cand);
            best_dist = d;
        }
    }
    best
}

/// Run one enemy's turn. Mutates the enemy's position and flags, deals
/// damage to the player, and appends narration to `log`.
///
/// `defending` is the player's armed defend stance; the first attack that
/// resolves consumes it and is halved.
pub fn take_enemy_turn(
    enemies: &mut [EnemyInstance],
    idx: usize,
    player: &mut PlayerState,
    player_pos: Position,
    defending: &mut bool,
    tables: GameTables<'_>,
    rng: &mut GameRng,
    log: &mut Vec<String>,
) -> Result<EnemyAction, DataError> {
    let Some(enemy) = enemies.get(idx) else {
        return Ok(EnemyAction::Skipped);
    };
    if !enemy.is_alive() {
        return Ok(EnemyAction::Skipped);
    }
    let template = enemy_template(tables.enemies, enemy.id)?;
    let name = enemy.name.clone();
    let special = enemy.special;
    let range = enemy.range;
    enemies[idx].first_turn = false;

    if rng.percent(TAUNT_CHANCE) {
        if let Some(taunt) = rng.choose(&template.taunts) {
            log.push(format!("{name}: {taunt}"));
        }
    }

    // pre-turn special state
    match special {
        SpecialAbility::Phase => {
            if rng.percent(PHASE_CHANCE) {
                enemies[idx].phased = true;
                log.push(format!("{name} fades and will evade next hit."));
            } else {
                enemies[idx].phased = false;
                log.push(format!("{name} de-fades"));
            }
        }
        SpecialAbility::Swarm => {
            enemies[idx].swarm_rage = rng.percent(SWARM_RAGE_CHANCE);
        }
        _ => {}
    }

    // movement: kiting and approaching are mutually exclusive
    let start = enemies[idx].pos;
    let dist_before = start.distance(player_pos);
    let mut moved = false;

    if range > 1 && dist_before <= 2 {
        let occupied = live_positions_except(enemies, idx);
        if let Some(back) = step_away(start, player_pos, &occupied) {
            enemies[idx].pos = back;
            log.push(format!("{name} backs away!"));
            moved = true;
        }
    } else if dist_before > 1 {
        let occupied = live_positions_except(enemies, idx);
        let next = next_step(start, player_pos, &occupied);
        if next != start && next != player_pos && !occupied.contains(&next) {
            enemies[idx].pos = next;
            moved = true;
        }
    }

    let pos = enemies[idx].pos;
    let dist = pos.distance(player_pos);

    // ranged units that repositioned sometimes hold fire
    if moved && range > 1 && rng.percent(RANGED_HOLD_CHANCE) {
        return Ok(EnemyAction::Moved(pos));
    }

    if dist <= range {
        if range > 1 && dist > 1 {
            log.push(format!("{name} attacks from a distance!"));
        }

        // a badly wounded melee unit may slip away instead of swinging
        let attack = enemies[idx].attack;
        if range == 1 && enemies[idx].hp < attack.max(6) && rng.percent(RETREAT_CHANCE) {
            let occupied = live_positions_except(enemies, idx);
            if let Some(back) = step_away(pos, player_pos, &occupied) {
                enemies[idx].pos = back;
                log.push(format!("{name} retreats!"));
                return Ok(EnemyAction::Retreated(back));
            }
        }

        let stats = AttackStats {
            attack,
            ..AttackStats::default()
        };
        let hit = resolve(stats, player.agility, None, rng);
        let mut damage = hit.damage;
        if enemies[idx].swarm_rage {
            damage += SWARM_RAGE_BONUS;
        }
        damage = player.mitigate(damage, tables.items)?;
        let mut absorbed = false;
        if *defending {
            damage /= 2;
            *defending = false;
            absorbed = true;
        }

        if range > 1 {
            log.push(format!("{name} fires a ranged attack for {damage} damage!"));
        } else {
            log.push(format!("{name} hits you for {damage} damage!"));
        }
        if absorbed {
            log.push("Your defense absorbed some damage.".to_string());
        }
        player.hp -= damage;

        return Ok(if moved {
            EnemyAction::MovedAndAttacked { to: pos, damage }
        } else {
            EnemyAction::Attacked { damage }
        });
    }

    Ok(if moved {
        EnemyAction::Moved(pos)
    } else {
        EnemyAction::Waited
    })
}
