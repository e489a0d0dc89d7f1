//! Item definitions and shop stock
//!
//! Consumables, equipment, and the three story items. `price` is the shop
//! price; items the shop never stocks carry `None` and fall back to the
//! engine's default trade value when sold.

use ca_core::{ItemDef, ItemEffect, ItemId};

// ==================== ITEM DEFINITIONS ====================

/// All item definitions.
pub static ITEMS: &[ItemDef] = &[
    // Consumables
    ItemDef {
        id: ItemId::SmallPotion,
        name: "Small Potion",
        effect: ItemEffect::Heal(12),
        price: Some(12),
    },
    ItemDef {
        id: ItemId::LargePotion,
        name: "Large Potion",
        effect: ItemEffect::Heal(30),
        price: None,
    },
    ItemDef {
        id: ItemId::ElixirBottle,
        name: "Elixir Bottle",
        effect: ItemEffect::Mana(5),
        price: Some(10),
    },
    ItemDef {
        id: ItemId::ElixirFlask,
        name: "Elixir Flask",
        effect: ItemEffect::Mana(12),
        price: Some(20),
    },
    ItemDef {
        id: ItemId::MagicTome,
        name: "Magic Tome",
        effect: ItemEffect::Mana(8),
        price: Some(60),
    },
    // Weapons
    ItemDef {
        id: ItemId::RoyalSword,
        name: "Royal Sword",
        effect: ItemEffect::Weapon(3),
        price: Some(40),
    },
    ItemDef {
        id: ItemId::IronSword,
        name: "Iron Sword",
        effect: ItemEffect::Weapon(2),
        price: None,
    },
    ItemDef {
        id: ItemId::RoyalBlade,
        name: "Royal Blade",
        effect: ItemEffect::Weapon(5),
        price: None,
    },
    // Armor
    ItemDef {
        id: ItemId::LeatherArmor,
        name: "Leather Armor",
        effect: ItemEffect::Armor(2),
        price: None,
    },
    ItemDef {
        id: ItemId::SteelArmor,
        name: "Steel Armor",
        effect: ItemEffect::Armor(4),
        price: Some(45),
    },
    // Story items
    ItemDef {
        id: ItemId::CrownKey,
        name: "Crown Key",
        effect: ItemEffect::Key,
        price: None,
    },
    ItemDef {
        id: ItemId::TreasureMap,
        name: "Treasure Map",
        effect: ItemEffect::Map,
        price: None,
    },
    ItemDef {
        id: ItemId::DragonScale,
        name: "Dragon Scale",
        effect: ItemEffect::Scale,
        price: Some(120),
    },
];

// ==================== SHOP ====================

/// What the shop offers, in display order. Prices live on the item
/// definitions themselves.
pub static SHOP_STOCK: &[ItemId] = &[
    ItemId::ElixirBottle,
    ItemId::SmallPotion,
    ItemId::ElixirFlask,
    ItemId::RoyalSword,
    ItemId::SteelArmor,
    ItemId::MagicTome,
    ItemId::DragonScale,
];

/// Number of item definitions
pub fn num_items() -> usize {
    ITEMS.len()
}

/// Get an item by id
pub fn get_item(id: ItemId) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|i| i.id == id)
}

/// Find an item by display name
pub fn find_item(name: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|i| i.name.eq_ignore_ascii_case(name))
}
