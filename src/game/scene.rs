//! # Scene Graph
//!
//! Hand-authored locations and the directed connections between them.
//!
//! A scene is either a plain room or a combat encounter; the variant lives in
//! [`SceneKind`] and variant behavior is a `match`, not dispatch. Scenes are
//! authored once at setup; during play only their items, characters, and the
//! encounter flag change.

use crate::game::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Variant payload distinguishing plain rooms from combat encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneKind {
    /// Passive, purely descriptive location
    Room,
    /// Location holding an opponent; outer combat commands are gated on
    /// the `active` flag
    Combat {
        /// Opponent name
        enemy: String,
        /// Opponent attributes (health, attack, ...), in stable order
        enemy_stats: BTreeMap<String, i32>,
        /// Whether the encounter is currently running
        active: bool,
    },
}

/// A single explorable location.
///
/// Connections are directed edges keyed by direction name; lookups are
/// case-insensitive. Items and characters are ordered and duplicate-free.
///
/// # Examples
///
/// ```
/// use wayfarer::Scene;
///
/// let scene = Scene::room("well", "Old Well", "A mossy well.")
///     .with_connection("North", "square")
///     .with_item("coin");
///
/// assert_eq!(scene.get_connection("NORTH"), Some("square"));
/// assert_eq!(scene.get_connection("down"), None);
/// assert_eq!(scene.items, vec!["coin"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique key in the scene map
    pub id: String,
    /// Display name
    pub name: String,
    /// Display text shown when looking around
    pub description: String,
    /// Direction name (lowercase) to target scene id; targets are not
    /// validated here, dangling edges fail at navigation time
    pub connections: BTreeMap<String, String>,
    /// Items lying in the scene, duplicate-free
    pub items: Vec<String>,
    /// Non-player characters present, duplicate-free
    pub characters: Vec<String>,
    /// Room or combat payload
    pub kind: SceneKind,
}

impl Scene {
    /// Creates a plain room.
    pub fn room(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            connections: BTreeMap::new(),
            items: Vec::new(),
            characters: Vec::new(),
            kind: SceneKind::Room,
        }
    }

    /// Creates a combat scene holding the named opponent.
    ///
    /// The encounter starts inactive and is armed by [`Scene::enter`].
    pub fn combat(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        enemy: impl Into<String>,
        enemy_stats: BTreeMap<String, i32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            connections: BTreeMap::new(),
            items: Vec::new(),
            characters: Vec::new(),
            kind: SceneKind::Combat {
                enemy: enemy.into(),
                enemy_stats,
                active: false,
            },
        }
    }

    /// Adds a directed connection. Direction names are stored lowercase.
    pub fn with_connection(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.connections
            .insert(direction.into().to_lowercase(), target.into());
        self
    }

    /// Adds an item (builder form of [`Scene::add_item`]).
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.add_item(item);
        self
    }

    /// Adds a character (builder form of [`Scene::add_character`]).
    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.add_character(character);
        self
    }

    /// Places an item in the scene. Idempotent: a name already present is
    /// not added again.
    pub fn add_item(&mut self, item: impl Into<String>) {
        let item = item.into();
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// Removes an item if present.
    pub fn remove_item(&mut self, item: &str) {
        self.items.retain(|held| held != item);
    }

    /// Whether the named item lies in the scene.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    /// Places a character in the scene. Idempotent like [`Scene::add_item`].
    pub fn add_character(&mut self, character: impl Into<String>) {
        let character = character.into();
        if !self.characters.contains(&character) {
            self.characters.push(character);
        }
    }

    /// Removes a character if present.
    pub fn remove_character(&mut self, character: &str) {
        self.characters.retain(|present| present != character);
    }

    /// Looks up the scene id connected in `direction`, case-insensitively.
    pub fn get_connection(&self, direction: &str) -> Option<&str> {
        self.connections
            .get(&direction.to_lowercase())
            .map(String::as_str)
    }

    /// Lifecycle hook invoked when the player enters the scene.
    ///
    /// Rooms announce themselves; combat scenes additionally arm the
    /// encounter and announce the opponent. Returns display lines for the
    /// renderer.
    pub fn enter(&mut self, _player: &Player) -> Vec<String> {
        match &mut self.kind {
            SceneKind::Room => vec![format!("You enter {}.", self.name)],
            SceneKind::Combat { enemy, active, .. } => {
                *active = true;
                vec![
                    format!("You enter {}.", self.name),
                    format!("Watch out! {} appears!", enemy),
                ]
            }
        }
    }

    /// Lifecycle hook invoked when the player leaves the scene.
    pub fn exit(&mut self, _player: &Player) -> Vec<String> {
        match &self.kind {
            SceneKind::Room => vec![format!("You leave {}.", self.name)],
            SceneKind::Combat { .. } => {
                vec![format!("The fight is behind you. You leave {}.", self.name)]
            }
        }
    }

    /// Whether this scene is a combat encounter that is currently active.
    pub fn is_encounter_active(&self) -> bool {
        matches!(self.kind, SceneKind::Combat { active: true, .. })
    }

    /// Clears the encounter flag. No-op on plain rooms.
    pub fn end_encounter(&mut self) {
        if let SceneKind::Combat { active, .. } = &mut self.kind {
            *active = false;
        }
    }

    /// Renders the opponent's name and attributes, one per line.
    ///
    /// Returns `None` for plain rooms.
    pub fn enemy_summary(&self) -> Option<String> {
        match &self.kind {
            SceneKind::Room => None,
            SceneKind::Combat {
                enemy, enemy_stats, ..
            } => {
                let mut summary = format!("Enemy: {}", enemy);
                for (stat, value) in enemy_stats {
                    let _ = write!(summary, "\n{}: {}", stat, value);
                }
                Some(summary)
            }
        }
    }

    /// Full description of the scene for the `look` command.
    pub fn describe(&self) -> String {
        let mut text = format!("{}\n{}\n{}", self.name, "=".repeat(self.name.len()), self.description);
        if !self.connections.is_empty() {
            let exits: Vec<&str> = self.connections.keys().map(String::as_str).collect();
            let _ = write!(text, "\nExits: {}", exits.join(", "));
        }
        if !self.items.is_empty() {
            let _ = write!(text, "\nItems here: {}", self.items.join(", "));
        }
        if !self.characters.is_empty() {
            let _ = write!(text, "\nAlso here: {}", self.characters.join(", "));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin_stats() -> BTreeMap<String, i32> {
        BTreeMap::from([
            ("attack".to_string(), 8),
            ("defense".to_string(), 3),
            ("health".to_string(), 30),
        ])
    }

    #[test]
    fn item_add_is_idempotent() {
        let mut scene = Scene::room("cellar", "Cellar", "Dark and damp.");
        scene.add_item("rope");
        scene.add_item("rope");
        assert_eq!(scene.items, vec!["rope"]);

        scene.remove_item("rope");
        assert!(scene.items.is_empty());
        scene.remove_item("rope"); // remove-if-present, no panic
    }

    #[test]
    fn character_add_is_idempotent() {
        let mut scene = Scene::room("square", "Square", "Busy.");
        scene.add_character("merchant");
        scene.add_character("merchant");
        assert_eq!(scene.characters, vec!["merchant"]);
        scene.remove_character("merchant");
        assert!(scene.characters.is_empty());
    }

    #[test]
    fn connections_match_case_insensitively() {
        let scene = Scene::room("a", "A", "").with_connection("North", "b");
        assert_eq!(scene.get_connection("north"), Some("b"));
        assert_eq!(scene.get_connection("North"), Some("b"));
        assert_eq!(scene.get_connection("NORTH"), Some("b"));
        assert_eq!(scene.get_connection("south"), None);
    }

    #[test]
    fn entering_combat_arms_the_encounter() {
        let player = Player::new("Test");
        let mut scene = Scene::combat("den", "Goblin Den", "Bones everywhere.", "goblin", goblin_stats());
        assert!(!scene.is_encounter_active());

        let lines = scene.enter(&player);
        assert!(scene.is_encounter_active());
        assert!(lines.iter().any(|line| line.contains("goblin")));

        scene.end_encounter();
        assert!(!scene.is_encounter_active());
    }

    #[test]
    fn enemy_summary_lists_each_attribute() {
        let scene = Scene::combat("den", "Den", "", "goblin", goblin_stats());
        let summary = scene.enemy_summary().unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Enemy: goblin");
        assert!(lines.contains(&"health: 30"));
        assert!(lines.contains(&"attack: 8"));
        assert_eq!(lines.len(), 4);

        let room = Scene::room("a", "A", "");
        assert!(room.enemy_summary().is_none());
        assert!(!room.is_encounter_active());
    }

    #[test]
    fn describe_mentions_exits_and_contents() {
        let scene = Scene::room("square", "Village Square", "Cobblestones.")
            .with_connection("north", "gate")
            .with_item("coin")
            .with_character("guard");
        let text = scene.describe();
        assert!(text.contains("Village Square"));
        assert!(text.contains("Exits: north"));
        assert!(text.contains("Items here: coin"));
        assert!(text.contains("Also here: guard"));
    }
}
