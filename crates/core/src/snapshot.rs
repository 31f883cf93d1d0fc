//! Snapshot module - render-facing copy of session state
//!
//! A [`GameSnapshot`] is taken after each tick and handed to the view, so
//! renderers never borrow the live [`Session`](crate::Session).

use std::time::Duration;

use crate::piece::{Footprint, Piece};
use crate::shape::ShapeMatrix;
use crate::types::{Cell, Orientation, PieceKind, Rgb, Vec2i};

/// Render-facing view of a piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub orientation: Orientation,
    /// Rotated shape matrix
    pub shape: ShapeMatrix,
    /// Board position of the anchor cell
    pub position: Vec2i,
    /// Board position of the matrix's bottom-left corner
    pub origin: Vec2i,
    /// Board cells covered by the piece
    pub cells: Footprint,
    pub color: Rgb,
    pub is_ghost: bool,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            orientation: piece.orientation,
            shape: piece.shape(),
            position: piece.position,
            origin: piece.origin(),
            cells: piece.occupied_cells(),
            color: piece.color(),
            is_ghost: piece.is_ghost,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Board cells, row-major, bottom row first
    pub board: Vec<Cell>,
    pub active: PieceSnapshot,
    pub ghost: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub fall_interval: Duration,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Locked cell at (x, y); `None` for empty or out-of-range cells
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board[y * self.width + x]
    }
}
