//! # Input Module
//!
//! Tokenizes raw command strings from the player into typed [`Command`]
//! values the loop can dispatch. Parsing never touches game state.

pub mod commands;

pub use commands::*;
