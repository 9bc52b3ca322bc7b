//! # Game Session
//!
//! Central session state tying the player to the scene graph.
//!
//! [`GameState`] owns one [`Player`], the map of scenes, and the id of the
//! scene the player stands in. Every command the outer loop can issue maps to
//! one method here; each method fully mutates state and reports what happened
//! before the next command is accepted.
//!
//! Three kinds of outcome are kept apart, mirroring how the loop reacts:
//! success with display lines, an expected gameplay failure ([`ActionError`],
//! rendered and forgotten), and a broken session invariant
//! ([`crate::WayfarerError::InvalidState`], a programmer error).

use crate::game::{EquipSlot, Player, Scene};
use crate::{config, WayfarerError, WayfarerResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An expected, user-facing gameplay failure.
///
/// These are reported to the player and never abort anything; the Display
/// text is what the renderer shows.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The current scene has no connection in that direction
    #[error("you cannot move {direction} from here")]
    NoConnection { direction: String },

    /// The connection points at a scene id that does not exist
    #[error("the way {direction} leads nowhere")]
    UnknownScene { direction: String, scene_id: String },

    /// Tried to pick up an item the scene does not contain
    #[error("there is no {item} here")]
    ItemNotInScene { item: String },

    /// Tried to drop or use an item the player does not carry
    #[error("you are not carrying {item}")]
    ItemNotHeld { item: String },

    /// The item is carried but is not a recognized consumable
    #[error("{item} cannot be used")]
    NotUsable { item: String },

    /// The named equipment slot does not exist
    #[error("there is no equipment slot called {slot}")]
    UnknownSlot { slot: String },

    /// Tried to unequip an empty slot
    #[error("nothing is equipped as {slot}")]
    SlotEmpty { slot: EquipSlot },
}

/// Outcome of a session command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The command succeeded; lines describe what happened
    Success(Vec<String>),
    /// The command failed in an expected way; state is unchanged
    Failure(ActionError),
}

impl ActionOutcome {
    fn success_with(message: String) -> Self {
        ActionOutcome::Success(vec![message])
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success(_))
    }
}

impl From<ActionError> for ActionOutcome {
    fn from(error: ActionError) -> Self {
        ActionOutcome::Failure(error)
    }
}

/// The whole session: one player, the scene graph, and where the player is.
///
/// Invariant: once an initial scene has been set, `current_scene` always keys
/// an existing entry of `scenes`. Methods that find it missing return
/// [`WayfarerError::InvalidState`]; they do not try to recover.
///
/// # Examples
///
/// ```
/// use wayfarer::{GameState, Player, Scene};
///
/// let mut game = GameState::new(Player::new("Rook"));
/// game.add_scene(Scene::room("square", "Square", "Wide and empty.").with_connection("north", "gate"));
/// game.add_scene(Scene::room("gate", "Gate", "Iron-bound."));
/// assert!(game.set_initial_scene("square"));
///
/// let outcome = game.navigate("north").unwrap();
/// assert!(outcome.is_success());
/// assert_eq!(game.current_scene_id(), "gate");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The player character
    pub player: Player,
    /// Id of the scene the player currently stands in
    pub current_scene: String,
    /// All scenes, keyed by id
    pub scenes: HashMap<String, Scene>,
}

impl GameState {
    /// Creates a session with an empty scene graph.
    ///
    /// Callers add scenes and then pick a starting scene with
    /// [`GameState::set_initial_scene`].
    pub fn new(player: Player) -> Self {
        Self {
            player,
            current_scene: String::new(),
            scenes: HashMap::new(),
        }
    }

    /// Registers a scene under its own id, replacing any previous entry.
    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.insert(scene.id.clone(), scene);
    }

    /// Sets the starting scene. Refuses ids that are not registered.
    pub fn set_initial_scene(&mut self, scene_id: &str) -> bool {
        if self.scenes.contains_key(scene_id) {
            self.current_scene = scene_id.to_string();
            true
        } else {
            false
        }
    }

    /// Id of the current scene.
    pub fn current_scene_id(&self) -> &str {
        &self.current_scene
    }

    /// The scene the player stands in.
    pub fn current_scene(&self) -> WayfarerResult<&Scene> {
        self.scenes.get(&self.current_scene).ok_or_else(|| {
            WayfarerError::InvalidState(format!(
                "current scene '{}' is not in the scene map",
                self.current_scene
            ))
        })
    }

    /// Mutable access to the scene the player stands in.
    pub fn current_scene_mut(&mut self) -> WayfarerResult<&mut Scene> {
        let id = self.current_scene.clone();
        self.scenes.get_mut(&id).ok_or_else(|| {
            WayfarerError::InvalidState(format!("current scene '{}' is not in the scene map", id))
        })
    }

    /// Moves the player through the named connection.
    ///
    /// On success the old scene's `exit` hook runs, the current id switches,
    /// and the new scene's `enter` hook runs. If the direction is unconnected
    /// or the edge dangles, nothing changes and the failure is reported.
    pub fn navigate(&mut self, direction: &str) -> WayfarerResult<ActionOutcome> {
        let target = match self.current_scene()?.get_connection(direction) {
            Some(target) => target.to_string(),
            None => {
                return Ok(ActionError::NoConnection {
                    direction: direction.to_lowercase(),
                }
                .into())
            }
        };

        if !self.scenes.contains_key(&target) {
            warn!(
                "scene '{}' has a dangling connection {} -> '{}'",
                self.current_scene, direction, target
            );
            return Ok(ActionError::UnknownScene {
                direction: direction.to_lowercase(),
                scene_id: target,
            }
            .into());
        }

        // Direct field access keeps the player readable while a scene is
        // borrowed mutably.
        let scene = self.scenes.get_mut(&self.current_scene).ok_or_else(|| {
            WayfarerError::InvalidState(format!(
                "current scene '{}' is not in the scene map",
                self.current_scene
            ))
        })?;
        let mut messages = scene.exit(&self.player);
        debug!("navigate: {} -> {}", self.current_scene, target);
        self.current_scene = target;
        let scene = self.scenes.get_mut(&self.current_scene).ok_or_else(|| {
            WayfarerError::InvalidState(format!(
                "current scene '{}' is not in the scene map",
                self.current_scene
            ))
        })?;
        messages.extend(scene.enter(&self.player));
        Ok(ActionOutcome::Success(messages))
    }

    /// Picks up an item lying in the current scene.
    pub fn pick_up(&mut self, item: &str) -> WayfarerResult<ActionOutcome> {
        let scene = self.current_scene_mut()?;
        if !scene.has_item(item) {
            return Ok(ActionError::ItemNotInScene {
                item: item.to_string(),
            }
            .into());
        }
        scene.remove_item(item);
        self.player.add_item(item);
        Ok(ActionOutcome::success_with(format!("You pick up the {}.", item)))
    }

    /// Drops a carried item into the current scene.
    pub fn drop_item(&mut self, item: &str) -> WayfarerResult<ActionOutcome> {
        // Touch the scene first so a broken invariant surfaces before the
        // inventory is mutated.
        self.current_scene()?;
        if !self.player.remove_item(item) {
            return Ok(ActionError::ItemNotHeld {
                item: item.to_string(),
            }
            .into());
        }
        self.current_scene_mut()?.add_item(item);
        Ok(ActionOutcome::success_with(format!("You drop the {}.", item)))
    }

    /// Consumes a usable item from the inventory.
    ///
    /// Only a fixed set of consumables is recognized; anything else fails
    /// with [`ActionError::NotUsable`] and is kept.
    pub fn use_item(&mut self, item: &str) -> WayfarerResult<ActionOutcome> {
        if !self.player.has_item(item) {
            return Ok(ActionError::ItemNotHeld {
                item: item.to_string(),
            }
            .into());
        }
        match item {
            "healing potion" => {
                self.player.heal(config::HEALING_POTION_AMOUNT);
                self.player.remove_item(item);
                Ok(ActionOutcome::success_with(format!(
                    "You drink the healing potion and recover {} health.",
                    config::HEALING_POTION_AMOUNT
                )))
            }
            _ => Ok(ActionError::NotUsable {
                item: item.to_string(),
            }
            .into()),
        }
    }

    /// Equips a carried item into the named slot.
    pub fn equip(&mut self, item: &str, slot_name: &str) -> ActionOutcome {
        let Some(slot) = EquipSlot::parse(slot_name) else {
            return ActionError::UnknownSlot {
                slot: slot_name.to_string(),
            }
            .into();
        };
        if !self.player.equip_item(item, slot) {
            return ActionError::ItemNotHeld {
                item: item.to_string(),
            }
            .into();
        }
        ActionOutcome::success_with(format!("You equip the {} as {}.", item, slot))
    }

    /// Returns the item in the named slot to the inventory.
    pub fn unequip(&mut self, slot_name: &str) -> ActionOutcome {
        let Some(slot) = EquipSlot::parse(slot_name) else {
            return ActionError::UnknownSlot {
                slot: slot_name.to_string(),
            }
            .into();
        };
        let Some(item) = self.player.equipment.get(slot).map(str::to_string) else {
            return ActionError::SlotEmpty { slot }.into();
        };
        self.player.unequip_item(slot);
        ActionOutcome::success_with(format!("You take off the {}.", item))
    }

    /// Runs the current scene's `enter` hook without moving.
    ///
    /// Used when a session begins or has just been loaded, so the starting
    /// scene announces itself (and arms its encounter, if any).
    pub fn enter_current_scene(&mut self) -> WayfarerResult<Vec<String>> {
        let scene = self.scenes.get_mut(&self.current_scene).ok_or_else(|| {
            WayfarerError::InvalidState(format!(
                "current scene '{}' is not in the scene map",
                self.current_scene
            ))
        })?;
        Ok(scene.enter(&self.player))
    }

    /// Describes the current scene for the `look` command.
    pub fn look_around(&self) -> WayfarerResult<String> {
        Ok(self.current_scene()?.describe())
    }

    /// Opponent summary if the player stands in an active encounter.
    pub fn encounter_summary(&self) -> WayfarerResult<Option<String>> {
        let scene = self.current_scene()?;
        if scene.is_encounter_active() {
            Ok(scene.enemy_summary())
        } else {
            Ok(None)
        }
    }
}
