//! # Wayfarer
//!
//! A single-player, turn-based text adventure.
//!
//! ## Architecture Overview
//!
//! The crate is split into a pure game core and thin I/O layers around it:
//!
//! - **Player Model**: health, experience and leveling, stats, inventory,
//!   and equipment, with all mutation rules in one place
//! - **Scene Graph**: hand-authored locations connected by named directions,
//!   each holding items and non-player characters
//! - **Game Session**: coordinates the player and the scene graph and exposes
//!   the command surface the outer loop calls into
//! - **Input / UI / Persistence**: command-string parsing, colorized console
//!   rendering, and JSON save files
//!
//! The core never performs I/O; every operation returns a value describing
//! what happened so the console layer can render it.

pub mod content;
pub mod data;
pub mod game;
pub mod input;
pub mod ui;

// Core module re-exports
pub use game::*;
pub use input::*;

pub use data::{delete_save, get_save_info, list_saves, load_game, save_exists, save_game, SaveInfo};
pub use ui::ConsoleRenderer;

/// Core error type for the Wayfarer engine.
///
/// Expected gameplay failures (bad direction, missing item) are *not* errors;
/// they are reported through [`game::ActionError`]. This enum covers resource
/// failures and broken invariants only.
#[derive(thiserror::Error, Debug)]
pub enum WayfarerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Wayfarer codebase.
pub type WayfarerResult<T> = Result<T, WayfarerError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default player starting health
    pub const DEFAULT_PLAYER_HEALTH: u32 = 100;

    /// Starting value for every base stat
    pub const BASE_STAT: u32 = 10;

    /// Maximum health gained per level
    pub const LEVEL_UP_HEALTH_BONUS: u32 = 20;

    /// Added to every base stat per level
    pub const LEVEL_UP_STAT_BONUS: u32 = 2;

    /// Health restored by a healing potion
    pub const HEALING_POTION_AMOUNT: u32 = 50;

    /// Default save file name
    pub const DEFAULT_SAVE_FILE: &str = "savegame.json";
}
