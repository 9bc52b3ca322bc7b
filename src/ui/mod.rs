//! # UI Module
//!
//! Console rendering for the outer loop. Everything here consumes read-only
//! summaries produced by the game core and writes to stdout.

pub mod console;

pub use console::*;
