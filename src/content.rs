//! # World Content
//!
//! The hand-authored starting world and the player's initial gear. Scenes
//! form a small directed graph; nothing here is generated.

use crate::game::{EquipSlot, GameState, Player, Scene};
use std::collections::BTreeMap;

/// Items every new player starts with. The sword and tunic are worn from
/// the first turn.
const STARTING_ITEMS: [&str; 3] = ["wooden sword", "cloth tunic", "healing potion"];

/// Creates a fresh session: default player, starting gear, and the authored
/// world, standing in the village square.
///
/// # Examples
///
/// ```
/// use wayfarer::content;
///
/// let game = content::new_game("Rook");
/// assert_eq!(game.current_scene_id(), "village_square");
/// assert!(game.player.equipment.weapon.is_some());
/// ```
pub fn new_game(player_name: &str) -> GameState {
    let mut game = GameState::new(starting_player(player_name));
    for scene in default_world() {
        game.add_scene(scene);
    }
    game.set_initial_scene("village_square");
    game
}

/// Builds the default player with starting gear equipped.
pub fn starting_player(name: &str) -> Player {
    let mut player = Player::new(name);
    for item in STARTING_ITEMS {
        player.add_item(item);
    }
    player.equip_item("wooden sword", EquipSlot::Weapon);
    player.equip_item("cloth tunic", EquipSlot::Armor);
    player
}

/// The authored scene graph.
pub fn default_world() -> Vec<Scene> {
    let goblin_stats = BTreeMap::from([
        ("health".to_string(), 30),
        ("attack".to_string(), 8),
        ("defense".to_string(), 3),
    ]);

    vec![
        Scene::room(
            "village_square",
            "Village Square",
            "Cobblestones worn smooth by generations of market days. A fountain murmurs in the middle.",
        )
        .with_connection("north", "forest_path")
        .with_connection("east", "market_row")
        .with_character("old storyteller"),
        Scene::room(
            "market_row",
            "Market Row",
            "Stalls lean against each other under faded awnings. It smells of bread and tar.",
        )
        .with_connection("west", "village_square")
        .with_connection("north", "hill_shrine")
        .with_item("apple")
        .with_character("merchant"),
        Scene::room(
            "hill_shrine",
            "Hill Shrine",
            "A squat stone shrine on a windy rise. Wax from old candles coats the altar.",
        )
        .with_connection("south", "market_row")
        .with_item("candle")
        .with_character("silent monk"),
        Scene::room(
            "forest_path",
            "Forest Path",
            "Pines crowd the trail. Somewhere ahead, water drips on stone.",
        )
        .with_connection("south", "village_square")
        .with_connection("north", "cave_mouth")
        .with_item("healing potion"),
        Scene::room(
            "cave_mouth",
            "Cave Mouth",
            "Cold air pours out of the dark opening. Scratches mark the rock at knee height.",
        )
        .with_connection("south", "forest_path")
        .with_connection("east", "goblin_den")
        .with_item("torch"),
        Scene::combat(
            "goblin_den",
            "Goblin Den",
            "Gnawed bones and rag nests litter the floor of this low cave.",
            "goblin",
            goblin_stats,
        )
        .with_connection("west", "cave_mouth")
        .with_item("copper coin"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_in_the_square_with_gear_worn() {
        let game = new_game("Rook");
        assert_eq!(game.current_scene_id(), "village_square");
        assert_eq!(game.player.equipment.weapon.as_deref(), Some("wooden sword"));
        assert_eq!(game.player.equipment.armor.as_deref(), Some("cloth tunic"));
        assert_eq!(game.player.inventory, vec!["healing potion"]);
    }

    #[test]
    fn world_has_no_dangling_connections() {
        let game = new_game("Rook");
        for scene in game.scenes.values() {
            for (direction, target) in &scene.connections {
                assert!(
                    game.scenes.contains_key(target),
                    "{} -> {} points at missing scene '{}'",
                    scene.id,
                    direction,
                    target
                );
            }
        }
    }

    #[test]
    fn every_scene_is_reachable_from_the_square() {
        let game = new_game("Rook");
        let mut seen = std::collections::HashSet::from(["village_square".to_string()]);
        let mut frontier = vec!["village_square".to_string()];
        while let Some(id) = frontier.pop() {
            for target in game.scenes[&id].connections.values() {
                if seen.insert(target.clone()) {
                    frontier.push(target.clone());
                }
            }
        }
        assert_eq!(seen.len(), game.scenes.len());
    }
}
