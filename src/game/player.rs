//! # Player Model
//!
//! The player character: vitals, progression, money, base stats, inventory,
//! and equipment. All mutation rules live here; nothing in this module
//! performs I/O.
//!
//! Two invariants are maintained by construction:
//!
//! - `0 <= health <= max_health` after any sequence of damage and healing
//! - an item held in an equipment slot is never simultaneously present in
//!   the inventory (each physical item is either worn or carried)

use crate::config;
use crate::game::{equipment_bonus, EquipSlot, Stat};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// The four base attributes of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub constitution: u32,
}

impl StatBlock {
    /// Returns the base value of the given stat.
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Intelligence => self.intelligence,
            Stat::Constitution => self.constitution,
        }
    }

    /// Returns a mutable reference to the given stat.
    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Strength => &mut self.strength,
            Stat::Dexterity => &mut self.dexterity,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Constitution => &mut self.constitution,
        }
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            strength: config::BASE_STAT,
            dexterity: config::BASE_STAT,
            intelligence: config::BASE_STAT,
            constitution: config::BASE_STAT,
        }
    }
}

/// The four fixed equipment slots. Each holds at most one item by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub helmet: Option<String>,
    pub boots: Option<String>,
}

impl Equipment {
    /// Returns the item equipped in the given slot, if any.
    pub fn get(&self, slot: EquipSlot) -> Option<&str> {
        self.slot_ref(slot).as_deref()
    }

    /// Whether the given slot is occupied.
    pub fn is_equipped(&self, slot: EquipSlot) -> bool {
        self.slot_ref(slot).is_some()
    }

    /// Removes and returns the item in the given slot.
    pub fn take(&mut self, slot: EquipSlot) -> Option<String> {
        self.slot_mut(slot).take()
    }

    /// Places an item into the given slot, returning whatever was there.
    pub fn replace(&mut self, slot: EquipSlot, item: String) -> Option<String> {
        self.slot_mut(slot).replace(item)
    }

    /// Iterates over all slots in display order with their contents.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, Option<&str>)> {
        EquipSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    fn slot_ref(&self, slot: EquipSlot) -> &Option<String> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Helmet => &self.helmet,
            EquipSlot::Boots => &self.boots,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<String> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Helmet => &mut self.helmet,
            EquipSlot::Boots => &mut self.boots,
        }
    }
}

/// The player character.
///
/// # Examples
///
/// ```
/// use wayfarer::Player;
///
/// let mut player = Player::new("Rook");
/// assert_eq!(player.level, 1);
/// assert_eq!(player.health, 100);
/// assert!(player.is_alive());
///
/// player.take_damage(250);
/// assert_eq!(player.health, 0);
/// assert!(!player.is_alive());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Character name
    pub name: String,
    /// Current health, never above `max_health`
    pub health: u32,
    /// Maximum health, grows with level
    pub max_health: u32,
    /// Experience accumulated toward the next level
    pub experience: u64,
    /// Current level, starts at 1
    pub level: u32,
    /// Coins carried
    pub money: u32,
    /// Base attributes, before equipment bonuses
    pub stats: StatBlock,
    /// Carried items in acquisition order; duplicates allowed
    pub inventory: Vec<String>,
    /// Worn items, one per slot
    pub equipment: Equipment,
}

impl Player {
    /// Creates a level-1 player with default vitals and stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: config::DEFAULT_PLAYER_HEALTH,
            max_health: config::DEFAULT_PLAYER_HEALTH,
            experience: 0,
            level: 1,
            money: 0,
            stats: StatBlock::default(),
            inventory: Vec::new(),
            equipment: Equipment::default(),
        }
    }

    /// Current health as a percentage of maximum.
    pub fn health_percentage(&self) -> f64 {
        (self.health as f64 / self.max_health as f64) * 100.0
    }

    /// Whether the player still lives.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduces health by `amount`, flooring at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores health by `amount`, capped at `max_health`.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Experience needed to leave the current level: `100 * level^2`.
    pub fn required_experience(&self) -> u64 {
        100 * (self.level as u64).pow(2)
    }

    /// Grants experience and applies any level-ups it pays for.
    ///
    /// Each level-up consumes the threshold of the level being left, raises
    /// `max_health` by 20, fully restores health, and adds 2 to every base
    /// stat. A single large grant can trigger several level-ups.
    ///
    /// Returns `true` if at least one level-up occurred.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::Player;
    ///
    /// let mut player = Player::new("Rook");
    /// assert!(!player.add_experience(99));
    /// assert!(player.add_experience(1)); // 100 total: level 2
    /// assert_eq!(player.level, 2);
    /// assert_eq!(player.max_health, 120);
    /// assert_eq!(player.stats.strength, 12);
    /// ```
    pub fn add_experience(&mut self, amount: u64) -> bool {
        self.experience += amount;
        let mut leveled_up = false;
        while self.experience >= self.required_experience() {
            self.level_up();
            leveled_up = true;
        }
        leveled_up
    }

    fn level_up(&mut self) {
        let threshold = self.required_experience();
        self.level += 1;
        self.experience -= threshold;
        self.max_health += config::LEVEL_UP_HEALTH_BONUS;
        self.health = self.max_health;
        for stat in Stat::ALL {
            *self.stats.get_mut(stat) += config::LEVEL_UP_STAT_BONUS;
        }
        info!("{} reached level {}", self.name, self.level);
    }

    /// Adds coins to the purse.
    pub fn add_money(&mut self, amount: u32) {
        self.money += amount;
    }

    /// Spends coins. Refuses (returns `false`) if the balance is too low;
    /// the purse can never go negative.
    pub fn spend_money(&mut self, amount: u32) -> bool {
        if amount > self.money {
            return false;
        }
        self.money -= amount;
        true
    }

    /// Appends an item to the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Removes the first matching item from the inventory.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove_item(&mut self, item: &str) -> bool {
        if let Some(index) = self.inventory.iter().position(|held| held == item) {
            self.inventory.remove(index);
            true
        } else {
            false
        }
    }

    /// Whether the inventory contains the named item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Equips an inventory item into a slot.
    ///
    /// Fails (returns `false`) if the item is not in the inventory. If the
    /// slot already holds an item, that item returns to the inventory; the
    /// new item moves from the inventory into the slot.
    pub fn equip_item(&mut self, item: &str, slot: EquipSlot) -> bool {
        if !self.has_item(item) {
            return false;
        }
        if let Some(previous) = self.equipment.take(slot) {
            self.inventory.push(previous);
        }
        self.remove_item(item);
        self.equipment.replace(slot, item.to_string());
        true
    }

    /// Moves the item in `slot` back to the inventory.
    ///
    /// Fails (returns `false`) if the slot is empty.
    pub fn unequip_item(&mut self, slot: EquipSlot) -> bool {
        match self.equipment.take(slot) {
            Some(item) => {
                self.inventory.push(item);
                true
            }
            None => false,
        }
    }

    /// Strength including equipment bonuses.
    pub fn strength(&self) -> u32 {
        self.derived_stat(Stat::Strength)
    }

    /// Dexterity including equipment bonuses.
    pub fn dexterity(&self) -> u32 {
        self.derived_stat(Stat::Dexterity)
    }

    /// Intelligence including equipment bonuses.
    pub fn intelligence(&self) -> u32 {
        self.derived_stat(Stat::Intelligence)
    }

    /// Constitution including equipment bonuses.
    pub fn constitution(&self) -> u32 {
        self.derived_stat(Stat::Constitution)
    }

    fn derived_stat(&self, stat: Stat) -> u32 {
        let bonus: u32 = EquipSlot::ALL
            .into_iter()
            .filter(|&slot| self.equipment.is_equipped(slot))
            .map(|slot| equipment_bonus(slot, stat))
            .sum();
        self.stats.get(stat) + bonus
    }

    /// Attack power: derived strength plus a flat weapon bonus.
    pub fn attack_power(&self) -> u32 {
        let weapon_bonus = if self.equipment.is_equipped(EquipSlot::Weapon) {
            5
        } else {
            0
        };
        self.strength() + weapon_bonus
    }

    /// Defense: derived constitution plus flat bonuses for worn armor.
    pub fn defense(&self) -> u32 {
        let mut defense = self.constitution();
        if self.equipment.is_equipped(EquipSlot::Armor) {
            defense += 5;
        }
        if self.equipment.is_equipped(EquipSlot::Helmet) {
            defense += 2;
        }
        if self.equipment.is_equipped(EquipSlot::Boots) {
            defense += 1;
        }
        defense
    }

    /// One-line inventory listing for display.
    pub fn inventory_summary(&self) -> String {
        if self.inventory.is_empty() {
            "Your pack is empty.".to_string()
        } else {
            format!("Carrying: {}", self.inventory.join(", "))
        }
    }

    /// Slot-by-slot equipment listing for display.
    pub fn equipment_summary(&self) -> String {
        let mut summary = String::new();
        for (slot, item) in self.equipment.iter() {
            let shown = item.unwrap_or("(none)");
            let _ = writeln!(summary, "{}: {}", capitalize(slot.as_str()), shown);
        }
        summary.trim_end().to_string()
    }

    /// Full status sheet for display: vitals, progression, attributes,
    /// equipment, and inventory.
    pub fn status_summary(&self) -> String {
        let filled = (self.health_percentage() / 10.0) as usize;
        let health_bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(10 - filled));

        let mut summary = String::new();
        let _ = writeln!(summary, "{} (level {})", self.name, self.level);
        let _ = writeln!(
            summary,
            "Health: {}/{} {}",
            self.health, self.max_health, health_bar
        );
        let _ = writeln!(
            summary,
            "Experience: {}/{}",
            self.experience,
            self.required_experience()
        );
        let _ = writeln!(summary, "Money: {}", self.money);
        let _ = writeln!(summary);
        let _ = writeln!(summary, "Strength: {} ({} base)", self.strength(), self.stats.strength);
        let _ = writeln!(summary, "Dexterity: {} ({} base)", self.dexterity(), self.stats.dexterity);
        let _ = writeln!(
            summary,
            "Intelligence: {} ({} base)",
            self.intelligence(),
            self.stats.intelligence
        );
        let _ = writeln!(
            summary,
            "Constitution: {} ({} base)",
            self.constitution(),
            self.stats.constitution
        );
        let _ = writeln!(summary);
        let _ = writeln!(summary, "Attack: {}", self.attack_power());
        let _ = writeln!(summary, "Defense: {}", self.defense());
        let _ = writeln!(summary);
        let _ = writeln!(summary, "{}", self.equipment_summary());
        let _ = writeln!(summary);
        let _ = write!(summary, "{}", self.inventory_summary());
        summary
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut player = Player::new("Test");
        player.health = 20;
        player.take_damage(50);
        assert_eq!(player.health, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn healing_caps_at_max_health() {
        let mut player = Player::new("Test");
        player.take_damage(30);
        player.heal(1000);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn healing_by_huge_amounts_does_not_overflow() {
        let mut player = Player::new("Test");
        player.take_damage(10);
        player.heal(u32::MAX);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn level_thresholds_are_quadratic() {
        let mut player = Player::new("Test");
        assert_eq!(player.required_experience(), 100);

        assert!(player.add_experience(100));
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(player.required_experience(), 400);

        assert!(!player.add_experience(399));
        assert!(player.add_experience(1));
        assert_eq!(player.level, 3);
    }

    #[test]
    fn single_grant_can_level_twice() {
        let mut player = Player::new("Test");
        // 100 for level 2 plus 400 for level 3
        assert!(player.add_experience(500));
        assert_eq!(player.level, 3);
        assert_eq!(player.experience, 0);
        assert_eq!(player.max_health, 140);
        assert_eq!(player.health, 140);
        assert_eq!(player.stats.dexterity, 14);
    }

    #[test]
    fn level_up_restores_health_fully() {
        let mut player = Player::new("Test");
        player.take_damage(90);
        player.add_experience(100);
        assert_eq!(player.health, player.max_health);
        assert_eq!(player.max_health, 120);
    }

    #[test]
    fn remove_item_takes_first_match_only() {
        let mut player = Player::new("Test");
        player.add_item("apple");
        player.add_item("apple");
        assert!(player.remove_item("apple"));
        assert_eq!(player.inventory, vec!["apple"]);
        assert!(player.remove_item("apple"));
        assert!(!player.remove_item("apple"));
    }

    #[test]
    fn equip_requires_inventory_membership() {
        let mut player = Player::new("Test");
        assert!(!player.equip_item("sword", EquipSlot::Weapon));

        player.add_item("sword");
        assert!(player.equip_item("sword", EquipSlot::Weapon));
        assert_eq!(player.equipment.get(EquipSlot::Weapon), Some("sword"));
        assert!(!player.has_item("sword"));
    }

    #[test]
    fn equip_swaps_previous_item_back() {
        let mut player = Player::new("Test");
        player.add_item("rusty sword");
        player.add_item("fine sword");
        assert!(player.equip_item("rusty sword", EquipSlot::Weapon));
        assert!(player.equip_item("fine sword", EquipSlot::Weapon));

        assert_eq!(player.equipment.get(EquipSlot::Weapon), Some("fine sword"));
        assert!(player.has_item("rusty sword"));
        assert!(!player.has_item("fine sword"));
    }

    #[test]
    fn unequip_round_trip_preserves_item_set() {
        let mut player = Player::new("Test");
        player.add_item("lantern");
        player.add_item("helm");
        assert!(player.equip_item("helm", EquipSlot::Helmet));
        assert!(player.unequip_item(EquipSlot::Helmet));
        assert!(!player.unequip_item(EquipSlot::Helmet));

        let mut items = player.inventory.clone();
        items.sort();
        assert_eq!(items, vec!["helm", "lantern"]);
        assert!(!player.equipment.is_equipped(EquipSlot::Helmet));
    }

    #[test]
    fn item_never_worn_and_carried_at_once() {
        let mut player = Player::new("Test");
        player.add_item("boots");
        player.equip_item("boots", EquipSlot::Boots);
        assert!(!player.has_item("boots"));
        player.unequip_item(EquipSlot::Boots);
        assert!(player.has_item("boots"));
        assert!(player.equipment.get(EquipSlot::Boots).is_none());
    }

    #[test]
    fn equipment_bonuses_apply_per_slot() {
        let mut player = Player::new("Test");
        for item in ["sword", "mail", "helm", "boots"] {
            player.add_item(item);
        }
        player.equip_item("sword", EquipSlot::Weapon);
        player.equip_item("mail", EquipSlot::Armor);
        player.equip_item("helm", EquipSlot::Helmet);
        player.equip_item("boots", EquipSlot::Boots);

        assert_eq!(player.strength(), 15);
        assert_eq!(player.constitution(), 15);
        assert_eq!(player.intelligence(), 13);
        assert_eq!(player.dexterity(), 13);
    }

    #[test]
    fn weapon_raises_attack_power() {
        let mut player = Player::new("Test");
        let bare_handed = player.attack_power();
        player.add_item("sword");
        player.equip_item("sword", EquipSlot::Weapon);
        assert!(player.attack_power() > bare_handed);
        // +5 strength bonus and +5 flat weapon bonus
        assert_eq!(player.attack_power(), bare_handed + 10);
    }

    #[test]
    fn defense_counts_each_armor_piece() {
        let mut player = Player::new("Test");
        assert_eq!(player.defense(), 10);
        for (item, slot) in [
            ("mail", EquipSlot::Armor),
            ("helm", EquipSlot::Helmet),
            ("boots", EquipSlot::Boots),
        ] {
            player.add_item(item);
            player.equip_item(item, slot);
        }
        // 10 base + 5 armor stat bonus + 5 + 2 + 1 flat bonuses
        assert_eq!(player.defense(), 23);
    }

    #[test]
    fn spending_beyond_balance_is_refused() {
        let mut player = Player::new("Test");
        player.add_money(30);
        assert!(!player.spend_money(31));
        assert_eq!(player.money, 30);
        assert!(player.spend_money(30));
        assert_eq!(player.money, 0);
    }

    #[test]
    fn summaries_render_expected_content() {
        let mut player = Player::new("Rook");
        assert_eq!(player.inventory_summary(), "Your pack is empty.");

        player.add_item("rope");
        player.add_item("torch");
        assert_eq!(player.inventory_summary(), "Carrying: rope, torch");

        player.add_item("sword");
        player.equip_item("sword", EquipSlot::Weapon);
        let equipment = player.equipment_summary();
        assert!(equipment.contains("Weapon: sword"));
        assert!(equipment.contains("Armor: (none)"));

        let status = player.status_summary();
        assert!(status.contains("Rook (level 1)"));
        assert!(status.contains("Health: 100/100 [==========]"));
        assert!(status.contains("Experience: 0/100"));
    }
}
