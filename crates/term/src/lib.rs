//! Terminal front end.
//!
//! A small game-oriented rendering layer: [`view`] turns a session snapshot
//! into a [`Frame`] of styled glyphs without touching the terminal, and
//! [`terminal`] flushes frames through crossterm, rewriting only the rows
//! that changed.

pub mod frame;
pub mod terminal;
pub mod view;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use frame::{Frame, Glyph, Style};
pub use terminal::{changed_rows, encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{GameView, Layout, Viewport};
