//! End-to-end session walkthrough over the authored world: movement, item
//! transfer, consumables, and the goblin encounter.

use wayfarer::{content, ActionError, ActionOutcome, WayfarerResult};

#[test]
fn walkthrough_of_the_default_world() -> WayfarerResult<()> {
    let mut game = content::new_game("Rook");
    let entry = game.enter_current_scene()?;
    assert!(entry.iter().any(|line| line.contains("Village Square")));

    // North into the forest; a second healing potion lies there.
    assert!(game.navigate("north")?.is_success());
    assert_eq!(game.current_scene_id(), "forest_path");
    assert!(game.pick_up("healing potion")?.is_success());
    assert_eq!(
        game.player
            .inventory
            .iter()
            .filter(|item| item.as_str() == "healing potion")
            .count(),
        2
    );

    // Drink one after a scrape.
    game.player.take_damage(40);
    assert!(game.use_item("healing potion")?.is_success());
    assert_eq!(game.player.health, game.player.max_health);
    assert!(game.player.has_item("healing potion"));

    // On to the cave mouth; grab the torch, drop it again.
    assert!(game.navigate("north")?.is_success());
    assert!(game.pick_up("torch")?.is_success());
    assert!(game.drop_item("torch")?.is_success());
    assert!(game.current_scene()?.has_item("torch"));

    // East into the den: the encounter arms on entry.
    assert!(game.navigate("east")?.is_success());
    let summary = game.encounter_summary()?.expect("encounter should be active");
    assert!(summary.starts_with("Enemy: goblin"));
    assert!(summary.contains("health: 30"));

    // Retreat. The den stays armed but no longer gates anything.
    assert!(game.navigate("west")?.is_success());
    assert_eq!(game.current_scene_id(), "cave_mouth");
    assert!(game.encounter_summary()?.is_none());
    Ok(())
}

#[test]
fn failed_moves_and_transfers_change_nothing() -> WayfarerResult<()> {
    let mut game = content::new_game("Rook");

    let outcome = game.navigate("west")?;
    assert_eq!(
        outcome,
        ActionOutcome::Failure(ActionError::NoConnection {
            direction: "west".to_string()
        })
    );
    assert_eq!(game.current_scene_id(), "village_square");

    let inventory_before = game.player.inventory.clone();
    let items_before = game.current_scene()?.items.clone();
    let outcome = game.pick_up("golden crown")?;
    assert!(!outcome.is_success());
    assert_eq!(game.player.inventory, inventory_before);
    assert_eq!(game.current_scene()?.items, items_before);
    Ok(())
}

#[test]
fn experience_from_play_levels_the_player_up() -> WayfarerResult<()> {
    let mut game = content::new_game("Rook");
    let attack_before = game.player.attack_power();

    assert!(game.player.add_experience(100));
    assert_eq!(game.player.level, 2);
    assert_eq!(game.player.max_health, 120);
    // +2 strength from the level carries into derived attack power.
    assert_eq!(game.player.attack_power(), attack_before + 2);
    Ok(())
}
