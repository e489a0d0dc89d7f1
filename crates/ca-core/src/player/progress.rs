//! Levelling, rest, dragon diplomacy, and run endings.

use super::{PlayerState, StoryFlags};
use crate::consts::{
    LEVEL_EXP_STEP, LEVEL_HP_GAIN, MANA_PER_MAGIC, SPARE_BASE, SPARE_CAP, SPARE_MAGIC_BONUS,
    SPARE_MAGIC_MIN, SPARE_SCALE_BONUS,
};
use crate::data::{ArenaId, ItemId};
use crate::rng::GameRng;

impl PlayerState {
    /// Consume banked experience into levels. Each level costs 20 times the
    /// current level; a big haul can grant several at once. Levelling
    /// refills HP and mana and raises every stat by one.
    pub fn try_level_up(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while self.exp >= LEVEL_EXP_STEP * self.level {
            self.level += 1;
            self.max_hp += LEVEL_HP_GAIN;
            self.hp = self.max_hp;
            self.strength += 1;
            self.agility += 1;
            self.magic += 1;
            self.mana = self.magic * MANA_PER_MAGIC;
            lines.push(format!("Level up! Now level {}", self.level));
        }
        lines
    }

    /// Full recovery between fights.
    pub fn rest(&mut self) -> String {
        self.hp = self.max_hp;
        self.mana = self.magic * MANA_PER_MAGIC;
        "You rest and fully recover your health and mana.".to_string()
    }

    /// Percent chance that the adult dragon accepts surrender. A strong
    /// magic aura helps, and so does carrying a dragon's scale.
    pub fn spare_chance(&self) -> i32 {
        let mut chance = SPARE_BASE;
        if self.magic >= SPARE_MAGIC_MIN {
            chance += SPARE_MAGIC_BONUS;
        }
        if self.has_item(ItemId::DragonScale) || self.flags.contains(StoryFlags::DRAGON_SCALE) {
            chance += SPARE_SCALE_BONUS;
        }
        chance.min(SPARE_CAP)
    }

    /// Kneel before the adult dragon instead of fighting. On success the
    /// dragon gifts a scale and the peaceful flags are set; on failure the
    /// caller should start the fight.
    pub fn attempt_spare(&mut self, rng: &mut GameRng) -> bool {
        if rng.percent(self.spare_chance()) {
            self.flags
                .insert(StoryFlags::BEFRIENDED_ADULT_DRAGON | StoryFlags::BEFRIENDED_DRAGON);
            self.add_item(ItemId::DragonScale);
            true
        } else {
            false
        }
    }

    /// Record the story consequences of clearing an arena.
    pub fn record_arena_victory(&mut self, arena: ArenaId) {
        match arena {
            ArenaId::DragonsPeak => self.flags.insert(StoryFlags::SLAIN_DRAGON),
            ArenaId::DragonArena => {
                self.flags.insert(StoryFlags::SLAIN_ADULT_DRAGON);
                self.harmonize_dragon_flags();
            }
            ArenaId::HiddenThrone => self.flags.insert(StoryFlags::TRUE_RULER),
            _ => {}
        }
    }

    /// Adult-dragon flags imply their younger counterparts.
    pub fn harmonize_dragon_flags(&mut self) {
        if self.flags.contains(StoryFlags::BEFRIENDED_ADULT_DRAGON) {
            self.flags.insert(StoryFlags::BEFRIENDED_DRAGON);
        }
        if self.flags.contains(StoryFlags::SLAIN_ADULT_DRAGON) {
            self.flags.insert(StoryFlags::SLAIN_DRAGON);
        }
    }

    /// The Hidden Throne opens to whoever holds both the map and the key,
    /// as items or as already-used flags.
    pub fn can_enter_hidden_throne(&self) -> bool {
        let map = self.has_item(ItemId::TreasureMap) || self.flags.contains(StoryFlags::HAS_MAP);
        let key = self.has_item(ItemId::CrownKey) || self.flags.contains(StoryFlags::HAS_CROWN_KEY);
        map && key
    }

    /// Title the run earns if it ended right now. Checked top to bottom;
    /// the first match wins.
    pub fn ending_title(&self) -> &'static str {
        if self.hp <= 0 {
            "Fallen Champion"
        } else if self.flags.contains(StoryFlags::TRUE_RULER) {
            "True Ruler"
        } else if self.flags.contains(StoryFlags::BEFRIENDED_DRAGON) {
            "Dragon Companion"
        } else if self.flags.contains(StoryFlags::SLAIN_DRAGON) && self.gold > 60 {
            "Hoard King"
        } else if self.exp > 80 || self.level >= 6 {
            "Arena Legend"
        } else {
            "Wandering Champion"
        }
    }
}
