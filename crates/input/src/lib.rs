//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`] and turns the
//! terminal's press / repeat / release stream into clean key-down and key-up
//! edges for the session. Auto-repeat itself is the session's job, so OS
//! repeats are swallowed here.

pub mod map;
pub mod tracker;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, is_restart, map_key, should_quit};
pub use tracker::{KeyInput, KeyInputs, KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT};
