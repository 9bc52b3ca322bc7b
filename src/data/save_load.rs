//! # Save and Load
//!
//! The save document is the serialized [`GameState`] itself: top-level keys
//! `player`, `current_scene`, and `scenes`. Scenes serialize completely,
//! variant payload and description included, so a loaded game is
//! indistinguishable from the saved one.
//!
//! [`load_game`] builds a brand-new session value and hands it to the caller,
//! which swaps it in whole. The live session is never mutated field by field,
//! so a failed load leaves it untouched.

use crate::{GameState, WayfarerError, WayfarerResult};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the session to `path` as pretty-printed JSON.
///
/// An existing file at `path` is first copied aside to `<path>.bak`.
pub fn save_game(game: &GameState, path: impl AsRef<Path>) -> WayfarerResult<()> {
    let path = path.as_ref();
    if path.exists() {
        backup_save(path)?;
    }
    let document = serde_json::to_string_pretty(game)?;
    fs::write(path, document)?;
    info!("game saved to {}", path.display());
    Ok(())
}

/// Reads a session back from `path`.
///
/// Returns a fresh [`GameState`]; the caller replaces its live session with
/// it atomically. Fails with [`WayfarerError::InvalidState`] if the document
/// names a current scene it does not contain.
pub fn load_game(path: impl AsRef<Path>) -> WayfarerResult<GameState> {
    let path = path.as_ref();
    let document = fs::read_to_string(path)?;
    let game: GameState = serde_json::from_str(&document)?;

    if !game.scenes.contains_key(&game.current_scene) {
        return Err(WayfarerError::InvalidState(format!(
            "save file {} points at unknown scene '{}'",
            path.display(),
            game.current_scene
        )));
    }

    info!("game loaded from {}", path.display());
    Ok(game)
}

/// Whether a save file exists at `path`.
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Copies the save at `path` to `<path>.bak`, replacing any older backup.
pub fn backup_save(path: impl AsRef<Path>) -> WayfarerResult<PathBuf> {
    let path = path.as_ref();
    let mut backup = path.as_os_str().to_os_string();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    fs::copy(path, &backup)?;
    info!("backed up {} to {}", path.display(), backup.display());
    Ok(backup)
}

/// Removes the save file at `path`.
pub fn delete_save(path: impl AsRef<Path>) -> WayfarerResult<()> {
    let path = path.as_ref();
    fs::remove_file(path)?;
    info!("deleted save {}", path.display());
    Ok(())
}

/// Basic facts about a save file, for listing and selection displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveInfo {
    pub path: PathBuf,
    pub player_name: String,
    pub player_level: u32,
    pub health: u32,
    pub max_health: u32,
    pub money: u32,
    pub current_scene: String,
}

/// Reads the headline facts out of a save file without keeping the session.
pub fn get_save_info(path: impl AsRef<Path>) -> WayfarerResult<SaveInfo> {
    let path = path.as_ref();
    let game = load_game(path)?;
    Ok(SaveInfo {
        path: path.to_path_buf(),
        player_name: game.player.name,
        player_level: game.player.level,
        health: game.player.health,
        max_health: game.player.max_health,
        money: game.player.money,
        current_scene: game.current_scene,
    })
}

/// Lists JSON save files in `directory`, sorted by name.
///
/// Unreadable directory entries are skipped with a warning rather than
/// failing the whole listing.
pub fn list_saves(directory: impl AsRef<Path>) -> WayfarerResult<Vec<PathBuf>> {
    let mut saves = Vec::new();
    for entry in fs::read_dir(directory.as_ref())? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!("skipping unreadable directory entry: {}", error);
                continue;
            }
        };
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            saves.push(path);
        }
    }
    saves.sort();
    Ok(saves)
}
