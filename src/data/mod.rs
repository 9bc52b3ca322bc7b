//! # Data Module
//!
//! Save-file persistence: the whole session serializes to a JSON document
//! and loads back as a fresh [`crate::GameState`] value.

pub mod save_load;

pub use save_load::*;
