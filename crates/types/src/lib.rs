//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, making them usable
//! from the engine, the input mapping and the terminal renderer alike.
//!
//! # Coordinates
//!
//! The playfield uses a bottom-left origin:
//!
//! - **x** grows to the right, column 0 is the left wall
//! - **y** grows upwards, row 0 is the bottom row
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Front-end frame interval (~60 FPS) |
//! | `BASE_FALL_INTERVAL_MS` | 1000 | Gravity at score 0 |
//! | `MIN_FALL_INTERVAL_MS` | 300 | Gravity floor |
//! | `FALL_SPEEDUP_THRESHOLD` | 1000 | Points per speed-up step |
//! | `FALL_SPEEDUP_STEP_MS` | 50 | Interval removed per step |
//! | `DEFAULT_REPEAT_DELAY_MS` | 170 | Hold time before auto-repeat |
//! | `DEFAULT_REPEAT_INTERVAL_MS` | 50 | Interval between auto-repeats |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Direction, GameAction, Vec2i, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Direction::Up.rotate(true), Direction::Right);
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::Down.vector(), Vec2i::new(0, -1));
//!
//! assert!(GameAction::MoveLeft.is_repeatable());
//! assert!(!GameAction::HardDrop.is_repeatable());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at score 0 (one row per second)
pub const BASE_FALL_INTERVAL_MS: u32 = 1000;

/// Gravity never gets faster than this
pub const MIN_FALL_INTERVAL_MS: u32 = 300;

/// Every this many points the fall interval shrinks by one step
pub const FALL_SPEEDUP_THRESHOLD: u32 = 1000;

/// Amount removed from the fall interval per threshold crossed
pub const FALL_SPEEDUP_STEP_MS: u32 = 50;

/// Hold time before a repeatable key starts auto-repeating
pub const DEFAULT_REPEAT_DELAY_MS: u32 = 170;

/// Interval between auto-repeats once repeating
pub const DEFAULT_REPEAT_INTERVAL_MS: u32 = 50;

/// Largest single-axis displacement the wall-kick search will try
pub const KICK_MAX_DISTANCE: i32 = 3;

/// Reward for clearing N rows with a single lock, indexed by N.
///
/// Multi-row clears pay disproportionately more: a four-row clear is worth
/// twice as much as four single clears.
pub const LINE_REWARDS: [u32; 5] = [0, 100, 300, 500, 800];

/// Color used to draw the ghost piece
pub const GHOST_COLOR: Rgb = Rgb::new(19, 19, 40);

/// Color of empty board tiles
pub const BACKGROUND_COLOR: Rgb = Rgb::new(7, 7, 30);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Cell filled with the color of the piece that locked there
pub type Cell = Option<Rgb>;

/// Integer (x, y) pair used for board positions, offsets and unit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Vec2i = Vec2i::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2i {
    fn add_assign(&mut self, rhs: Vec2i) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2i {
    fn sub_assign(&mut self, rhs: Vec2i) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Vec2i {
        Vec2i::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: i32) -> Vec2i {
        Vec2i::new(self.x * rhs, self.y * rhs)
    }
}

/// The four cardinal directions in a +y-up coordinate system.
///
/// Declaration order is the clockwise cycle Up → Right → Down → Left and is
/// also the enumeration order used to break wall-kick ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Unit vectors indexed by `Direction as usize`.
const UNIT_VECTORS: [Vec2i; 4] = [
    Vec2i::new(0, 1),
    Vec2i::new(1, 0),
    Vec2i::new(0, -1),
    Vec2i::new(-1, 0),
];

impl Direction {
    /// All directions in clockwise order, starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for this direction
    pub fn vector(self) -> Vec2i {
        UNIT_VECTORS[self as usize]
    }

    /// Step one place around the clockwise cycle (or back, when `clockwise` is false)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::Direction;
    ///
    /// assert_eq!(Direction::Left.rotate(true), Direction::Up);
    /// assert_eq!(Direction::Up.rotate(false), Direction::Left);
    /// ```
    pub fn rotate(self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { 3 };
        Self::ALL[(self as usize + step) % 4]
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }
}

/// Rotation state of a piece. `Up` is the spawn orientation.
pub type Orientation = Direction;

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order. Used for uniform random selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Lowercase one-letter name, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// The fixed control set.
///
/// Declaration order is the order in which held keys are dispatched each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
}

impl GameAction {
    pub const COUNT: usize = 5;

    /// All actions in dispatch order.
    pub const ALL: [GameAction; 5] = [
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::HardDrop,
    ];

    /// Whether holding the key keeps firing the action.
    ///
    /// Only horizontal movement auto-repeats; rotations and hard drop need a
    /// fresh key press every time.
    pub fn is_repeatable(&self) -> bool {
        matches!(self, GameAction::MoveLeft | GameAction::MoveRight)
    }

    /// Stable index in `ALL`, used for per-key tables.
    pub fn index(&self) -> usize {
        *self as usize
    }
}
