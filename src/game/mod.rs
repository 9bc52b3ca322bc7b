//! # Game Module
//!
//! Core game state: the player model, the scene graph, and the session that
//! coordinates the two.
//!
//! Everything in this module is pure state plus mutation rules. Operations
//! that can fail for gameplay reasons return [`ActionError`] values; nothing
//! here prints, reads input, or touches the filesystem.

pub mod player;
pub mod scene;
pub mod state;

pub use player::*;
pub use scene::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed equipment slots a player can fill.
///
/// # Examples
///
/// ```
/// use wayfarer::EquipSlot;
///
/// assert_eq!(EquipSlot::parse("Weapon"), Some(EquipSlot::Weapon));
/// assert_eq!(EquipSlot::Weapon.as_str(), "weapon");
/// assert_eq!(EquipSlot::parse("ring"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipSlot {
    Weapon,
    Armor,
    Helmet,
    Boots,
}

impl EquipSlot {
    /// All slots, in display order.
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Weapon,
        EquipSlot::Armor,
        EquipSlot::Helmet,
        EquipSlot::Boots,
    ];

    /// Returns the lowercase slot name.
    pub fn as_str(self) -> &'static str {
        match self {
            EquipSlot::Weapon => "weapon",
            EquipSlot::Armor => "armor",
            EquipSlot::Helmet => "helmet",
            EquipSlot::Boots => "boots",
        }
    }

    /// Parses a slot name, case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "weapon" => Some(EquipSlot::Weapon),
            "armor" => Some(EquipSlot::Armor),
            "helmet" => Some(EquipSlot::Helmet),
            "boots" => Some(EquipSlot::Boots),
            _ => None,
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four base attributes every character has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Strength,
    Dexterity,
    Intelligence,
    Constitution,
}

impl Stat {
    /// All stats, in display order.
    pub const ALL: [Stat; 4] = [
        Stat::Strength,
        Stat::Dexterity,
        Stat::Intelligence,
        Stat::Constitution,
    ];

    /// Returns the lowercase stat name.
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Strength => "strength",
            Stat::Dexterity => "dexterity",
            Stat::Intelligence => "intelligence",
            Stat::Constitution => "constitution",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat stat bonus granted by having *any* item in the given slot.
///
/// The table is fixed: weapon grants strength, armor constitution, helmet
/// intelligence, boots dexterity. The bonus does not depend on which item
/// occupies the slot.
///
/// # Examples
///
/// ```
/// use wayfarer::{equipment_bonus, EquipSlot, Stat};
///
/// assert_eq!(equipment_bonus(EquipSlot::Weapon, Stat::Strength), 5);
/// assert_eq!(equipment_bonus(EquipSlot::Weapon, Stat::Dexterity), 0);
/// assert_eq!(equipment_bonus(EquipSlot::Boots, Stat::Dexterity), 3);
/// ```
pub const fn equipment_bonus(slot: EquipSlot, stat: Stat) -> u32 {
    match (slot, stat) {
        (EquipSlot::Weapon, Stat::Strength) => 5,
        (EquipSlot::Armor, Stat::Constitution) => 5,
        (EquipSlot::Helmet, Stat::Intelligence) => 3,
        (EquipSlot::Boots, Stat::Dexterity) => 3,
        _ => 0,
    }
}
