//! One combat encounter from spawn to outcome.
//!
//! A [`CombatSession`] owns the player, the enemy roster, and the log for
//! the duration of a single fight. The caller feeds it one [`RoundInput`]
//! per round; everything else (enemy turns, spoils, end-of-round
//! bookkeeping) happens inside `play_round`.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::combat::{flee_chance, is_critical, resolve, AttackStats};
use crate::consts::{
    ATTACK_DIE, FIREBOLT_COST, FIREBOLT_POWER, FIREBOLT_RANGE, GOLD_MAX, GOLD_MIN, HEAL_BASE,
    HEAL_COST, MANA_PER_MAGIC, PLAYER_START_COL, PLAYER_START_ROW, XP_MAX, XP_MIN,
};
use crate::data::{arena_def, item_def, ArenaId, GameTables, Passive};
use crate::enemy::{spawn_wave, take_enemy_turn, EnemyInstance};
use crate::error::DataError;
use crate::grid::{Direction, Position};
use crate::player::PlayerState;
use crate::rng::GameRng;

/// The two castable spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Spell {
    Firebolt,
    Heal,
}

/// The one action a round allows, after movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionChoice {
    /// Strike an adjacent enemy. With several adjacent, `target` (a roster
    /// index) must name one; with exactly one, `None` picks it.
    Attack { target: Option<usize> },
    Defend,
    Magic(Spell),
    /// Use the inventory item at this index.
    UseItem(usize),
    /// Trade the action for one more step.
    MoveAgain(Direction),
    Run,
    Pass,
}

/// Everything the player decides in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInput {
    pub movement: Option<Direction>,
    pub action: ActionChoice,
}

impl RoundInput {
    /// Act without moving.
    pub fn act(action: ActionChoice) -> Self {
        Self {
            movement: None,
            action,
        }
    }

    /// Step once, then act.
    pub fn move_and(movement: Direction, action: ActionChoice) -> Self {
        Self {
            movement: Some(movement),
            action,
        }
    }
}

/// How an encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
    Fled,
}

/// What one call to `play_round` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Continue,
    Ended(EncounterOutcome),
}

/// A live encounter. Created by [`CombatSession::new`], driven by
/// [`CombatSession::play_round`] until it reports an ending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatSession {
    pub arena_id: ArenaId,
    pub player: PlayerState,
    pub player_pos: Position,
    pub enemies: Vec<EnemyInstance>,
    pub round: i32,
    pub defending: bool,
    pub outcome: Option<EncounterOutcome>,
    pub messages: Vec<String>,
    pub rng: GameRng,
}

impl CombatSession {
    /// Stage a fight in `arena_id`: spawn the wave, seat the player on the
    /// left side, and open the log with the encounter roster.
    pub fn new(
        arena_id: ArenaId,
        player: PlayerState,
        tables: GameTables<'_>,
        mut rng: GameRng,
    ) -> Result<Self, DataError> {
        let arena = arena_def(tables.arenas, arena_id)?;
        let player_pos = Position::new(PLAYER_START_ROW, PLAYER_START_COL);
        let enemies = spawn_wave(arena, player_pos, tables.enemies, &mut rng)?;
        let roster = enemies
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Ok(Self {
            arena_id,
            player,
            player_pos,
            enemies,
            round: 1,
            defending: false,
            outcome: None,
            messages: vec![format!("Encounter: {roster}")],
            rng,
        })
    }

    /// Append one line to the encounter log.
    pub fn message(&mut self, line: impl Into<String>) {
        self.messages.push(line.into());
    }

    /// Take and clear the accumulated log lines.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Surrender the session and keep the (possibly dead) player.
    pub fn into_player(self) -> PlayerState {
        self.player
    }

    fn is_blocked(&self, pos: Position) -> bool {
        self.enemies.iter().any(|e| e.is_alive() && e.pos == pos)
    }

    fn living_enemies(&self) -> i32 {
        self.enemies.iter().filter(|e| e.is_alive()).count() as i32
    }

    /// Play one full round: movement, the chosen action, the enemy phase,
    /// then end-of-round bookkeeping. Calling again after the encounter
    /// ended just reports the same outcome.
    pub fn play_round(
        &mut self,
        input: RoundInput,
        tables: GameTables<'_>,
    ) -> Result<RoundResult, DataError> {
        if let Some(outcome) = self.outcome {
            return Ok(RoundResult::Ended(outcome));
        }
        self.message(format!("========= Round {}", self.round));

        if let Some(dir) = input.movement {
            let dest = self.player_pos.step(dir).clamped();
            if self.is_blocked(dest) {
                self.message("Blocked: an enemy holds that tile.");
            } else {
                self.player_pos = dest;
            }
        }

        match input.action {
            ActionChoice::Attack { target } => self.do_attack(target, tables)?,
            ActionChoice::Defend => {
                self.defending = true;
                self.message("You brace for incoming attacks.");
            }
            ActionChoice::Magic(spell) => self.do_magic(spell),
            ActionChoice::UseItem(index) => self.do_use_item(index, tables)?,
            ActionChoice::MoveAgain(dir) => self.do_move_again(dir),
            ActionChoice::Run => {
                if self.do_run() {
                    self.outcome = Some(EncounterOutcome::Fled);
                    return Ok(RoundResult::Ended(EncounterOutcome::Fled));
                }
            }
            ActionChoice::Pass => self.message("No action taken."),
        }

        if self.enemies.iter().all(|e| !e.is_alive()) {
            self.award_victory(tables)?;
            self.outcome = Some(EncounterOutcome::Victory);
            return Ok(RoundResult::Ended(EncounterOutcome::Victory));
        }

        // enemy phase, stopping the moment the player falls
        for idx in 0..self.enemies.len() {
            take_enemy_turn(
                &mut self.enemies,
                idx,
                &mut self.player,
                self.player_pos,
                &mut self.defending,
                tables,
                &mut self.rng,
                &mut self.messages,
            )?;
            if self.player.hp <= 0 {
                self.message("You were slain...");
                self.outcome = Some(EncounterOutcome::Defeat);
                return Ok(RoundResult::Ended(EncounterOutcome::Defeat));
            }
        }

        self.defending = false;
        if self.player.passive == Passive::Arcane
            && self.player.mana < self.player.magic * MANA_PER_MAGIC
        {
            self.player.mana += 1;
            self.message("Arcane energy restores 1 mana.");
        }
        self.round += 1;
        Ok(RoundResult::Continue)
    }

    fn do_attack(&mut self, target: Option<usize>, tables: GameTables<'_>) -> Result<(), DataError> {
        // the roll is committed before anything else so a UI can show it
        let roll = self.rng.rnd(ATTACK_DIE);

        let adjacent: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive() && e.pos.distance(self.player_pos) == 1)
            .map(|(i, _)| i)
            .collect();
        if adjacent.is_empty() {
            self.message("No adjacent enemy to attack.");
            return Ok(());
        }
        let chosen = match target {
            Some(i) if adjacent.contains(&i) => i,
            None if adjacent.len() == 1 => adjacent[0],
            _ => {
                self.message("Invalid target.");
                return Ok(());
            }
        };

        let name = self.enemies[chosen].name.clone();
        if self.enemies[chosen].phased {
            self.enemies[chosen].phased = false;
            self.message(format!("{name} phases and avoids your attack!"));
            return Ok(());
        }

        let stats = AttackStats {
            attack: self.player.weapon_attack(tables.items)?,
            strength: self.player.strength,
            magic: 0,
        };
        let hit = resolve(stats, self.enemies[chosen].agility, Some(roll), &mut self.rng);
        let mut damage = hit.damage;
        if self.player.passive == Passive::Swift {
            damage += 1;
        }
        if is_critical(roll) {
            damage *= 2;
            self.message("CRITICAL STRIKE!");
        }
        self.message(format!("You deal {damage} to {name} (roll {roll})."));
        self.enemies[chosen].hp -= damage;
        if !self.enemies[chosen].is_alive() {
            self.message(format!("{name} falls!"));
        }
        Ok(())
    }

    fn do_magic(&mut self, spell: Spell) {
        match spell {
            Spell::Firebolt => {
                if self.player.mana < FIREBOLT_COST {
                    self.message("Not enough mana.");
                    return;
                }
                // mana is spent even if nothing ends up in range
                self.player.mana -= FIREBOLT_COST;
                let targets: Vec<usize> = self
                    .enemies
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| {
                        e.is_alive() && e.pos.distance(self.player_pos) <= FIREBOLT_RANGE
                    })
                    .map(|(i, _)| i)
                    .collect();
                if targets.is_empty() {
                    self.message("No targets in range for Firebolt.");
                    return;
                }
                for idx in targets {
                    let name = self.enemies[idx].name.clone();
                    if self.enemies[idx].phased {
                        self.enemies[idx].phased = false;
                        self.message(format!("{name} phased and avoided Firebolt!"));
                        continue;
                    }
                    let stats = AttackStats {
                        attack: FIREBOLT_POWER,
                        strength: 0,
                        magic: self.player.magic,
                    };
                    let hit = resolve(stats, self.enemies[idx].agility, None, &mut self.rng);
                    self.message(format!("Firebolt hits {name} for {}.", hit.damage));
                    self.enemies[idx].hp -= hit.damage;
                }
            }
            Spell::Heal => {
                if self.player.mana < HEAL_COST {
                    self.message("Not enough mana.");
                    return;
                }
                self.player.mana -= HEAL_COST;
                let healed = (self.player.max_hp - self.player.hp)
                    .min(HEAL_BASE + self.player.magic);
                self.player.hp += healed;
                self.message(format!("You cast Heal and gain {healed} HP."));
            }
        }
    }

    fn do_use_item(&mut self, index: usize, tables: GameTables<'_>) -> Result<(), DataError> {
        if self.player.inventory.is_empty() {
            self.message("Inventory empty.");
            return Ok(());
        }
        if index >= self.player.inventory.len() {
            self.message("Invalid item index.");
            return Ok(());
        }
        let id = self.player.inventory.remove(index);
        let line = self.player.apply_item(id, tables.items, Some(self.arena_id))?;
        self.message(line);
        Ok(())
    }

    fn do_move_again(&mut self, dir: Direction) {
        let dest = self.player_pos.step(dir).clamped();
        if self.is_blocked(dest) {
            self.message("Second move blocked by enemy.");
        } else {
            self.player_pos = dest;
            self.message("You move again.");
        }
    }

    /// Roll the flee attempt. True means the player got away.
    fn do_run(&mut self) -> bool {
        let chance = flee_chance(self.player.agility, self.living_enemies());
        let roll = self.rng.rnd(100);
        if roll <= chance {
            self.message("You successfully fled.");
            true
        } else {
            self.message("Failed to flee.");
            false
        }
    }

    fn award_victory(&mut self, tables: GameTables<'_>) -> Result<(), DataError> {
        self.message("All foes defeated!");
        let arena = arena_def(tables.arenas, self.arena_id)?;
        let loot = self.rng.choose(arena.loot).copied();
        let gold = self.rng.between(GOLD_MIN, GOLD_MAX);
        let xp = self.rng.between(XP_MIN, XP_MAX);
        self.player.gold += gold;
        self.player.exp += xp;
        match loot {
            Some(item) => {
                self.player.add_item(item);
                let def = item_def(tables.items, item)?;
                self.message(format!("Found {} and {gold} gold (+{xp} XP)!", def.name));
            }
            None => self.message(format!("Found {gold} gold (+{xp} XP)!")),
        }
        self.player.record_arena_victory(self.arena_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        ClassId, EnemyId, EnemyTemplate, ItemDef, ItemEffect, ItemId, SpecialAbility,
    };
    use crate::player::{Equipment, StoryFlags};

    const ITEMS: &[ItemDef] = &[
        ItemDef {
            id: ItemId::SmallPotion,
            name: "Small Potion",
            effect: ItemEffect::Heal(12),
            price: Some(12),
        },
        ItemDef {
            id: ItemId::MagicTome,
            name: "Magic Tome",
            effect: ItemEffect::Mana(8),
            price: Some(60),
        },
    ];

    const TEMPLATES: &[EnemyTemplate] = &[EnemyTemplate {
        id: EnemyId::MiniPekka,
        name: "Mini P.E.K.K.A.",
        hp: 34,
        attack: 10,
        agility: 3,
        special: SpecialAbility::None,
        range: 1,
        taunts: ["CLANG!", "Charge!"],
    }];

    fn tables() -> GameTables<'static> {
        GameTables {
            classes: &[],
            items: ITEMS,
            enemies: TEMPLATES,
            arenas: &[],
        }
    }

    fn fresh_player() -> PlayerState {
        PlayerState {
            name: "Test".to_string(),
            class: ClassId::Wizard,
            passive: Passive::Arcane,
            strength: 4,
            agility: 0,
            magic: 10,
            hp: 200,
            max_hp: 200,
            mana: 20,
            level: 1,
            exp: 0,
            gold: 0,
            inventory: vec![ItemId::SmallPotion],
            equipment: Equipment::default(),
            flags: StoryFlags::empty(),
        }
    }

    fn enemy_at(pos: Position, hp: i32) -> EnemyInstance {
        let mut e = EnemyInstance::from_template(&TEMPLATES[0], pos);
        e.hp = hp;
        e.max_hp = hp;
        e
    }

    fn session_with(enemies: Vec<EnemyInstance>, seed: u64) -> CombatSession {
        CombatSession {
            arena_id: ArenaId::GoblinForest,
            player: fresh_player(),
            player_pos: Position::new(PLAYER_START_ROW, PLAYER_START_COL),
            enemies,
            round: 1,
            defending: false,
            outcome: None,
            messages: Vec::new(),
            rng: GameRng::new(seed),
        }
    }

    #[test]
    fn movement_into_a_live_enemy_is_blocked() {
        let mut s = session_with(vec![enemy_at(Position::new(3, 2), 50)], 1);
        let r = s
            .play_round(
                RoundInput::move_and(Direction::Right, ActionChoice::Pass),
                tables(),
            )
            .unwrap();
        assert_eq!(r, RoundResult::Continue);
        assert_eq!(s.player_pos, Position::new(3, 1));
        assert!(s
            .messages
            .iter()
            .any(|m| m == "Blocked: an enemy holds that tile."));
    }

    #[test]
    fn pass_still_advances_the_round() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        let r = s.play_round(RoundInput::act(ActionChoice::Pass), tables()).unwrap();
        assert_eq!(r, RoundResult::Continue);
        assert_eq!(s.round, 2);
        assert!(s.messages.iter().any(|m| m == "No action taken."));
        assert!(s.messages.iter().any(|m| m == "========= Round 1"));
    }

    #[test]
    fn attack_with_nobody_adjacent_just_logs() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.play_round(
            RoundInput::act(ActionChoice::Attack { target: None }),
            tables(),
        )
        .unwrap();
        assert!(s.messages.iter().any(|m| m == "No adjacent enemy to attack."));
    }

    #[test]
    fn ambiguous_target_must_be_named() {
        // two adjacent enemies, no explicit pick
        let mut s = session_with(
            vec![
                enemy_at(Position::new(3, 2), 50),
                enemy_at(Position::new(2, 1), 50),
            ],
            1,
        );
        s.play_round(
            RoundInput::act(ActionChoice::Attack { target: None }),
            tables(),
        )
        .unwrap();
        assert!(s.messages.iter().any(|m| m == "Invalid target."));
        assert_eq!(s.enemies[0].hp, 50);
        assert_eq!(s.enemies[1].hp, 50);

        // a named target lands
        let mut s = session_with(
            vec![
                enemy_at(Position::new(3, 2), 50),
                enemy_at(Position::new(2, 1), 50),
            ],
            1,
        );
        s.play_round(
            RoundInput::act(ActionChoice::Attack { target: Some(1) }),
            tables(),
        )
        .unwrap();
        assert!(s.enemies[1].hp < 50);
        assert_eq!(s.enemies[0].hp, 50);
    }

    #[test]
    fn dead_or_distant_targets_are_invalid() {
        let mut dead = enemy_at(Position::new(3, 2), 50);
        dead.hp = 0;
        let mut s = session_with(vec![dead, enemy_at(Position::new(2, 1), 50)], 1);
        s.play_round(
            RoundInput::act(ActionChoice::Attack { target: Some(0) }),
            tables(),
        )
        .unwrap();
        assert!(s.messages.iter().any(|m| m == "Invalid target."));
    }

    #[test]
    fn heal_spends_mana_and_caps_at_max() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.player.hp = 195;
        s.play_round(
            RoundInput::act(ActionChoice::Magic(Spell::Heal)),
            tables(),
        )
        .unwrap();
        assert_eq!(s.player.hp, 200);
        assert!(s.messages.iter().any(|m| m == "You cast Heal and gain 5 HP."));
        assert_eq!(s.player.mana, 18);
    }

    #[test]
    fn firebolt_spends_mana_before_finding_no_targets() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.play_round(
            RoundInput::act(ActionChoice::Magic(Spell::Firebolt)),
            tables(),
        )
        .unwrap();
        assert_eq!(s.player.mana, 17);
        assert!(s
            .messages
            .iter()
            .any(|m| m == "No targets in range for Firebolt."));
    }

    #[test]
    fn insufficient_mana_is_a_log_line_not_a_cast() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.player.mana = 2;
        s.play_round(
            RoundInput::act(ActionChoice::Magic(Spell::Firebolt)),
            tables(),
        )
        .unwrap();
        assert_eq!(s.player.mana, 2);
        assert!(s.messages.iter().any(|m| m == "Not enough mana."));
    }

    #[test]
    fn item_use_consumes_and_applies() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.player.hp = 100;
        s.play_round(RoundInput::act(ActionChoice::UseItem(0)), tables())
            .unwrap();
        // Goblin Forest heals at face value
        assert_eq!(s.player.hp, 112);
        assert!(s.player.inventory.is_empty());
        assert!(s.messages.iter().any(|m| m == "You heal 12 HP."));

        s.play_round(RoundInput::act(ActionChoice::UseItem(0)), tables())
            .unwrap();
        assert!(s.messages.iter().any(|m| m == "Inventory empty."));
    }

    #[test]
    fn bad_item_index_is_recoverable() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.play_round(RoundInput::act(ActionChoice::UseItem(9)), tables())
            .unwrap();
        assert!(s.messages.iter().any(|m| m == "Invalid item index."));
        assert_eq!(s.player.inventory.len(), 1);
    }

    #[test]
    fn move_again_takes_the_action_slot() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.play_round(
            RoundInput::move_and(Direction::Right, ActionChoice::MoveAgain(Direction::Right)),
            tables(),
        )
        .unwrap();
        assert_eq!(s.player_pos, Position::new(3, 3));
        assert!(s.messages.iter().any(|m| m == "You move again."));
    }

    #[test]
    fn arcane_regen_ticks_at_round_end() {
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.player.mana = 5;
        s.play_round(RoundInput::act(ActionChoice::Pass), tables()).unwrap();
        assert_eq!(s.player.mana, 6);
        assert!(s
            .messages
            .iter()
            .any(|m| m == "Arcane energy restores 1 mana."));

        // at the cap nothing regenerates
        let mut s = session_with(vec![enemy_at(Position::new(0, 10), 50)], 1);
        s.player.mana = 20;
        s.play_round(RoundInput::act(ActionChoice::Pass), tables()).unwrap();
        assert_eq!(s.player.mana, 20);
    }

    #[test]
    fn finished_sessions_stay_finished() {
        let mut s = session_with(vec![enemy_at(Position::new(3, 2), 50)], 1);
        s.outcome = Some(EncounterOutcome::Fled);
        let hp = s.player.hp;
        let r = s.play_round(RoundInput::act(ActionChoice::Pass), tables()).unwrap();
        assert_eq!(r, RoundResult::Ended(EncounterOutcome::Fled));
        assert_eq!(s.player.hp, hp);
        assert_eq!(s.round, 1);
        assert!(s.messages.is_empty());
    }
}
