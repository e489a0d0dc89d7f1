//! ca-data: Static game data for Crown Arena
//!
//! Contains class, item, enemy, and arena definitions as const tables of
//! `ca-core` types. The engine never reads these directly; callers pass
//! them in (usually as one [`GameTables`] bundle from [`tables`]).

pub mod arenas;
pub mod classes;
pub mod enemies;
pub mod items;

pub use arenas::{find_arena, get_arena, num_arenas, ARENAS};
pub use classes::{find_class, get_class, num_classes, CLASSES};
pub use enemies::{find_enemy, get_enemy, num_enemies, ENEMIES};
pub use items::{find_item, get_item, num_items, ITEMS, SHOP_STOCK};

use ca_core::GameTables;

/// The full static table set, ready to hand to the engine.
pub fn tables() -> GameTables<'static> {
    GameTables {
        classes: CLASSES,
        items: ITEMS,
        enemies: ENEMIES,
        arenas: ARENAS,
    }
}
