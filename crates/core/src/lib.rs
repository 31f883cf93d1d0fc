//! Core game logic - deterministic and free of I/O
//!
//! Everything needed to run a falling-block game lives here: the board, the
//! tetromino catalog and its rotation engine, pieces, the wall-kick resolver,
//! the per-key repeat timers and the session controller that ties them
//! together. Front ends feed it key events and elapsed time and read back a
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`shape`]: the seven templates and the matrix rotation table
//! - [`board`]: locked cells, row queries and row clearing
//! - [`piece`]: a positioned, oriented template and its footprint
//! - [`kick`]: rotation with directional escape probing
//! - [`repeat`]: frame-rate independent key auto-repeat
//! - [`scoring`]: line rewards and the gravity curve
//! - [`rng`]: seeded piece randomizer
//! - [`config`]: session configuration and validation
//! - [`session`]: the controller
//! - [`snapshot`]: render-facing state
//!
//! # Coordinates
//!
//! Board row 0 is the bottom row and y grows upward. Shape templates are
//! written top row first, so `ShapeMatrix::get` indexes rows from the top and
//! `ShapeMatrix::tile_at` from the bottom.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use falling_blocks_core::Session;
//! use falling_blocks_types::GameAction;
//!
//! let mut session = Session::with_seed(12345);
//!
//! session.handle_key_down(GameAction::MoveRight);
//! session.tick(Duration::from_millis(16));
//! session.handle_key_up(GameAction::MoveRight);
//!
//! session.apply_action(GameAction::HardDrop);
//! assert_eq!(session.board().filled_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod kick;
pub mod piece;
pub mod repeat;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use falling_blocks_types as types;

pub use board::Board;
pub use config::{ConfigError, SessionConfig};
pub use kick::{find_escape, rotate_with_kick, KickOutcome};
pub use piece::{Footprint, Piece};
pub use repeat::{FiredActions, KeyRepeat, RepeatTiming};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{line_clear_reward, GravityConfig};
pub use session::{LockEvent, Phase, Session};
pub use shape::{anchor_offset, rotated_shape, ShapeMatrix, ShapeTemplate, Tile};
pub use snapshot::{GameSnapshot, PieceSnapshot};
