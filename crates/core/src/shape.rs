//! Shape module - tetromino catalog and the matrix rotation engine
//!
//! Every template is a small grid of tiles written top row first, exactly as
//! it reads on screen. One tile per template is the anchor: the cell a piece's
//! position refers to, and the pivot its rotations turn around. The O template
//! has no anchor tile; its anchor offset falls back to (0, 0), which keeps its
//! rotations a no-op.
//!
//! Rotation is a pure function of the base grid and the target orientation:
//!
//! | Orientation | Transform |
//! |-------------|-----------|
//! | Up | identity |
//! | Down | reverse rows, then reverse each row |
//! | Right | reverse rows, then transpose |
//! | Left | transpose, then reverse rows |

use crate::types::{Orientation, PieceKind, Rgb, Vec2i};

/// Largest matrix side. Every template fits in 4x4.
pub const MAX_SIDE: usize = 4;

/// One tile of a shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Filled,
    Anchor,
}

impl Tile {
    /// Whether the tile is part of the piece's footprint.
    pub fn is_solid(self) -> bool {
        !matches!(self, Tile::Empty)
    }
}

use Tile::{Anchor as A, Empty as E, Filled as F};

/// Immutable definition of one tetromino
#[derive(Debug, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub kind: PieceKind,
    /// Rows, top row first
    pub rows: &'static [&'static [Tile]],
    pub color: Rgb,
}

static TEMPLATES: [ShapeTemplate; 7] = [
    ShapeTemplate {
        kind: PieceKind::I,
        rows: &[&[F], &[A], &[F], &[F]],
        color: Rgb::new(0, 209, 146),
    },
    ShapeTemplate {
        kind: PieceKind::J,
        rows: &[&[E, F], &[E, A], &[F, F]],
        color: Rgb::new(48, 105, 152),
    },
    ShapeTemplate {
        kind: PieceKind::L,
        rows: &[&[F, E], &[A, E], &[F, F]],
        color: Rgb::new(208, 112, 56),
    },
    ShapeTemplate {
        kind: PieceKind::O,
        rows: &[&[F, F], &[F, F]],
        color: Rgb::new(221, 225, 0),
    },
    ShapeTemplate {
        kind: PieceKind::S,
        rows: &[&[E, A, F], &[F, F, E]],
        color: Rgb::new(123, 209, 46),
    },
    ShapeTemplate {
        kind: PieceKind::T,
        rows: &[&[F, A, F], &[E, F, E]],
        color: Rgb::new(186, 0, 166),
    },
    ShapeTemplate {
        kind: PieceKind::Z,
        rows: &[&[F, F, E], &[E, A, F]],
        color: Rgb::new(202, 7, 67),
    },
];

impl ShapeTemplate {
    /// Look up the template for a piece kind
    pub fn get(kind: PieceKind) -> &'static ShapeTemplate {
        // TEMPLATES is laid out in `PieceKind` declaration order.
        &TEMPLATES[kind as usize]
    }

    /// All seven templates in catalog order
    pub fn all() -> &'static [ShapeTemplate; 7] {
        &TEMPLATES
    }

    /// The base (spawn orientation) matrix
    pub fn matrix(&self) -> ShapeMatrix {
        let height = self.rows.len();
        let width = self.rows.first().map_or(0, |row| row.len());
        let mut m = ShapeMatrix::empty(width, height);
        for (row, tiles) in self.rows.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                m.set(row, col, tile);
            }
        }
        m
    }
}

/// A rectangular tile grid of at most 4x4, stored row-major, top row first.
///
/// Fixed capacity so rotation and collision checks never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    width: u8,
    height: u8,
    tiles: [Tile; MAX_SIDE * MAX_SIDE],
}

impl ShapeMatrix {
    fn empty(width: usize, height: usize) -> Self {
        debug_assert!(width <= MAX_SIDE && height <= MAX_SIDE);
        Self {
            width: width as u8,
            height: height as u8,
            tiles: [Tile::Empty; MAX_SIDE * MAX_SIDE],
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Tile at (row, col), rows counted from the top
    pub fn get(&self, row: usize, col: usize) -> Tile {
        if row >= self.height() || col >= self.width() {
            return Tile::Empty;
        }
        self.tiles[row * self.width() + col]
    }

    fn set(&mut self, row: usize, col: usize, tile: Tile) {
        let w = self.width();
        self.tiles[row * w + col] = tile;
    }

    /// Tile at column `x`, row `y` counted from the bottom
    pub fn tile_at(&self, x: usize, y: usize) -> Tile {
        if y >= self.height() {
            return Tile::Empty;
        }
        self.get(self.height() - 1 - y, x)
    }

    /// Rows, top row first
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles[..self.width() * self.height()].chunks(self.width().max(1))
    }

    /// Solid tiles as (column, row-from-bottom) offsets
    pub fn solid_offsets(&self) -> impl Iterator<Item = Vec2i> + '_ {
        let h = self.height();
        (0..h).flat_map(move |row| {
            (0..self.width()).filter_map(move |col| {
                self.get(row, col)
                    .is_solid()
                    .then(|| Vec2i::new(col as i32, (h - 1 - row) as i32))
            })
        })
    }

    /// Position of the anchor tile as (column, row-from-bottom), (0, 0) when absent
    pub fn anchor_offset(&self) -> Vec2i {
        let h = self.height();
        for row in 0..h {
            for col in 0..self.width() {
                if self.get(row, col) == Tile::Anchor {
                    return Vec2i::new(col as i32, (h - 1 - row) as i32);
                }
            }
        }
        Vec2i::ZERO
    }

    fn reverse_rows(&self) -> Self {
        let mut out = Self::empty(self.width(), self.height());
        let h = self.height();
        for row in 0..h {
            for col in 0..self.width() {
                out.set(row, col, self.get(h - 1 - row, col));
            }
        }
        out
    }

    fn reverse_each_row(&self) -> Self {
        let mut out = Self::empty(self.width(), self.height());
        let w = self.width();
        for row in 0..self.height() {
            for col in 0..w {
                out.set(row, col, self.get(row, w - 1 - col));
            }
        }
        out
    }

    fn transpose(&self) -> Self {
        let mut out = Self::empty(self.height(), self.width());
        for row in 0..self.height() {
            for col in 0..self.width() {
                out.set(col, row, self.get(row, col));
            }
        }
        out
    }

    /// Apply the transform that takes a spawn-orientation matrix to `orientation`.
    pub fn rotated(&self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Up => *self,
            Orientation::Down => self.reverse_rows().reverse_each_row(),
            Orientation::Right => self.reverse_rows().transpose(),
            Orientation::Left => self.transpose().reverse_rows(),
        }
    }
}

/// The shape matrix of `kind` turned to `orientation`
pub fn rotated_shape(kind: PieceKind, orientation: Orientation) -> ShapeMatrix {
    ShapeTemplate::get(kind).matrix().rotated(orientation)
}

/// Offset of the anchor inside the rotated matrix, measured from its bottom-left
pub fn anchor_offset(kind: PieceKind, orientation: Orientation) -> Vec2i {
    rotated_shape(kind, orientation).anchor_offset()
}
