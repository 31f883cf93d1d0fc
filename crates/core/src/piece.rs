//! Piece module - a tetromino placed on the board
//!
//! A piece is a template kind plus a board position (the anchor cell), an
//! orientation and a ghost flag. Its footprint is recomputed from the rotation
//! engine whenever it is needed, so moving or turning a piece is just a field
//! update.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shape::{rotated_shape, ShapeMatrix, ShapeTemplate, MAX_SIDE};
use crate::types::{Direction, Orientation, PieceKind, Rgb, Vec2i, GHOST_COLOR};

/// Board-space cells covered by a piece
pub type Footprint = ArrayVec<Vec2i, { MAX_SIDE * MAX_SIDE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Board coordinates of the anchor cell
    pub position: Vec2i,
    pub orientation: Orientation,
    pub is_ghost: bool,
}

impl Piece {
    /// Create a piece in spawn orientation at `position`
    pub fn new(kind: PieceKind, position: Vec2i) -> Self {
        Self {
            kind,
            position,
            orientation: Orientation::Up,
            is_ghost: false,
        }
    }

    /// Create a piece of `kind` whose topmost tile sits on the top row of
    /// `board`, anchored at column `width / 2`.
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        let template = ShapeTemplate::get(kind);
        let anchor = template.matrix().anchor_offset();
        let x = (board.width() / 2) as i32;
        let y = board.height() as i32 - (template.rows.len() as i32 - anchor.y);
        Self::new(kind, Vec2i::new(x, y))
    }

    /// A ghost copy of this piece at the same place
    pub fn ghost(&self) -> Self {
        Self {
            is_ghost: true,
            ..*self
        }
    }

    /// Rotated shape matrix for the current orientation
    pub fn shape(&self) -> ShapeMatrix {
        rotated_shape(self.kind, self.orientation)
    }

    /// Anchor offset inside the rotated matrix
    pub fn anchor_offset(&self) -> Vec2i {
        self.shape().anchor_offset()
    }

    /// Board position of the rotated matrix's bottom-left corner
    pub fn origin(&self) -> Vec2i {
        self.position - self.anchor_offset()
    }

    pub fn color(&self) -> Rgb {
        if self.is_ghost {
            GHOST_COLOR
        } else {
            ShapeTemplate::get(self.kind).color
        }
    }

    /// Board cells covered by the piece's solid tiles
    pub fn occupied_cells(&self) -> Footprint {
        let shape = self.shape();
        let origin = self.position - shape.anchor_offset();
        shape.solid_offsets().map(|offset| origin + offset).collect()
    }

    /// True if any cell is off the board or on top of a locked cell
    pub fn is_colliding(&self, board: &Board) -> bool {
        self.occupied_cells()
            .iter()
            .any(|c| !board.in_bounds(c.x, c.y) || board.is_occupied(c.x, c.y))
    }

    /// Shift the piece by `offset` without any collision check
    pub fn translate(&mut self, offset: Vec2i) {
        self.position += offset;
    }

    /// Shift the piece one cell in `direction` without any collision check
    pub fn step(&mut self, direction: Direction) {
        self.translate(direction.vector());
    }

    /// Turn the orientation a quarter without any collision check
    pub fn turn(&mut self, clockwise: bool) {
        self.orientation = self.orientation.rotate(clockwise);
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// # Panics
    ///
    /// Panics if the piece collides with `board`; callers only commit pieces
    /// that have been validated by a collision check.
    pub fn commit(&self, board: &mut Board) {
        assert!(
            !self.is_colliding(board),
            "committing a colliding {:?} piece at {:?}",
            self.kind,
            self.position
        );
        let color = self.color();
        for c in self.occupied_cells() {
            board.fill(c.x, c.y, color);
        }
    }

    /// Lowest position reachable by moving straight down
    pub fn hard_drop_position(&self, board: &Board) -> Vec2i {
        let mut probe = *self;
        while !probe.is_colliding(board) {
            probe.step(Direction::Down);
        }
        probe.step(Direction::Up);
        probe.position
    }

    /// Move to the hard drop position (no commit)
    pub fn drop_to_floor(&mut self, board: &Board) {
        self.position = self.hard_drop_position(board);
    }
}
