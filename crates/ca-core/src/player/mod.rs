//! The champion: stats, story flags, inventory, and item handling.

mod progress;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::consts::{IMPROVISED_WEAPON_BONUS, MANA_PER_MAGIC};
use crate::data::{item_def, ArenaId, ClassDef, ClassId, ItemDef, ItemEffect, ItemId, Passive};
use crate::error::DataError;

const DEFAULT_NAME: &str = "Champion";

bitflags! {
    /// Narrative milestones. Key items set their flag when used, so losing
    /// the physical item later cannot lock the story.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct StoryFlags: u16 {
        const HAS_MAP = 1 << 0;
        const HAS_CROWN_KEY = 1 << 1;
        const DRAGON_SCALE = 1 << 2;
        const BEFRIENDED_DRAGON = 1 << 3;
        const BEFRIENDED_ADULT_DRAGON = 1 << 4;
        const SLAIN_DRAGON = 1 << 5;
        const SLAIN_ADULT_DRAGON = 1 << 6;
        const TRUE_RULER = 1 << 7;
    }
}

// Manual serde impl for StoryFlags
impl Serialize for StoryFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StoryFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(StoryFlags::from_bits_truncate(bits))
    }
}

/// Worn and wielded gear. Slots hold item ids; the defs stay in the tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
}

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    // Identity
    pub name: String,
    pub class: ClassId,
    pub passive: Passive,

    // Combat stats
    pub strength: i32,
    pub agility: i32,
    pub magic: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub mana: i32,

    // Progression
    pub level: i32,
    pub exp: i32,
    pub gold: i32,

    // Possessions and story
    pub inventory: Vec<ItemId>,
    pub equipment: Equipment,
    pub flags: StoryFlags,
}

impl PlayerState {
    /// Create a level-1 character. Creation grants +2 to every stat and +8
    /// max HP over the class base, plus the class starter kit. An empty
    /// name falls back to the traditional one.
    pub fn new(name: impl Into<String>, class: &ClassDef) -> Self {
        let name = name.into();
        let name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name
        };
        let magic = class.magic + 2;
        Self {
            name,
            class: class.id,
            passive: class.passive,
            strength: class.strength + 2,
            agility: class.agility + 2,
            magic,
            hp: class.max_hp + 8,
            max_hp: class.max_hp + 8,
            mana: magic * MANA_PER_MAGIC,
            level: 1,
            exp: 0,
            gold: 0,
            inventory: class.id.starter_kit().to_vec(),
            equipment: Equipment::default(),
            flags: StoryFlags::empty(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn add_item(&mut self, id: ItemId) {
        self.inventory.push(id);
    }

    /// Remove the first copy of `id`. Returns false if none was held.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.inventory.iter().position(|&held| held == id) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, id: ItemId) -> bool {
        self.inventory.contains(&id)
    }

    /// Attack contribution of the wielded weapon. An occupied slot whose
    /// item has no weapon power still swings for a small improvised bonus.
    pub fn weapon_attack(&self, items: &[ItemDef]) -> Result<i32, DataError> {
        match self.equipment.weapon {
            None => Ok(0),
            Some(id) => match item_def(items, id)?.effect {
                ItemEffect::Weapon(atk) => Ok(atk),
                _ => Ok(IMPROVISED_WEAPON_BONUS),
            },
        }
    }

    /// Flat damage reduction from worn armor.
    pub fn armor_defense(&self, items: &[ItemDef]) -> Result<i32, DataError> {
        match self.equipment.armor {
            None => Ok(0),
            Some(id) => match item_def(items, id)?.effect {
                ItemEffect::Armor(def) => Ok(def),
                _ => Ok(0),
            },
        }
    }

    /// Apply the player's flat mitigations to an incoming hit: the armor
    /// passive first, then worn armor. Never drops below zero.
    pub fn mitigate(&self, damage: i32, items: &[ItemDef]) -> Result<i32, DataError> {
        let mut damage = damage;
        if self.passive == Passive::Armor {
            damage = (damage - 1).max(0);
        }
        damage = (damage - self.armor_defense(items)?).max(0);
        Ok(damage)
    }

    /// Apply one already-removed item and report what happened. Heal
    /// amounts scale with the arena the fight takes place in; out of
    /// combat, pass `None`.
    pub fn apply_item(
        &mut self,
        id: ItemId,
        items: &[ItemDef],
        arena: Option<ArenaId>,
    ) -> Result<String, DataError> {
        let def = item_def(items, id)?;
        match def.effect {
            ItemEffect::Heal(base) => {
                let pct = arena.map_or(100, ArenaId::heal_scale_pct);
                let amount = base * pct / 100;
                let old = self.hp;
                self.hp = (self.hp + amount).min(self.max_hp);
                Ok(format!("You heal {} HP.", self.hp - old))
            }
            ItemEffect::Mana(amount) => {
                self.mana += amount;
                Ok(format!("You restore {amount} mana."))
            }
            ItemEffect::Weapon(_) => {
                if let Some(old) = self.equipment.weapon.replace(id) {
                    self.inventory.push(old);
                }
                Ok(format!("You equip {}.", def.name))
            }
            ItemEffect::Armor(_) => {
                if let Some(old) = self.equipment.armor.replace(id) {
                    self.inventory.push(old);
                }
                Ok(format!("You equip {}.", def.name))
            }
            ItemEffect::Key => {
                self.flags.insert(StoryFlags::HAS_CROWN_KEY);
                Ok(format!("You got {}.", def.name))
            }
            ItemEffect::Map => {
                self.flags.insert(StoryFlags::HAS_MAP);
                Ok("Map found.".to_string())
            }
            ItemEffect::Scale => {
                self.flags.insert(StoryFlags::DRAGON_SCALE);
                Ok("Dragon Scale resonates with you.".to_string())
            }
        }
    }

    /// Buy one item at its listed value. Leaves state untouched when gold
    /// is short.
    pub fn buy(&mut self, def: &ItemDef) -> String {
        let price = def.value();
        if self.gold >= price {
            self.gold -= price;
            self.inventory.push(def.id);
            format!("Bought {}!", def.name)
        } else {
            "Not enough gold!".to_string()
        }
    }

    /// Sell the inventory item at `index` for half its value.
    pub fn sell_at(&mut self, index: usize, items: &[ItemDef]) -> Result<String, DataError> {
        if index >= self.inventory.len() {
            return Ok("Nothing there to sell.".to_string());
        }
        let id = self.inventory.remove(index);
        let def = item_def(items, id)?;
        let price = def.sell_price();
        self.gold += price;
        Ok(format!("Sold {} for {} gold.", def.name, price))
    }
}
