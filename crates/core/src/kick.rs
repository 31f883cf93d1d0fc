//! Kick module - shortest single-axis escape after a blocked rotation
//!
//! When a rotation leaves the piece overlapping a wall or locked cells, every
//! cardinal direction is probed at distances 1..=KICK_MAX_DISTANCE. Each
//! direction records the first distance that frees the piece; the globally
//! smallest one wins, ties going to the earlier direction in `Direction::ALL`.
//! There are no diagonal probes.

use tracing::trace;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Direction, KICK_MAX_DISTANCE};

/// Result of a rotation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickOutcome {
    /// The rotated piece fit where it was
    Rotated,
    /// The rotated piece was pushed `distance` cells towards `direction`
    Kicked { direction: Direction, distance: i32 },
    /// No escape within range; the orientation was restored
    Rejected,
}

impl KickOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, KickOutcome::Rejected)
    }
}

/// Smallest resolving distance for each direction, indexed by `Direction as usize`
fn escape_distances(piece: &mut Piece, board: &Board) -> [Option<i32>; 4] {
    let mut found = [None; 4];
    let start = piece.position;

    for direction in Direction::ALL {
        for distance in 1..=KICK_MAX_DISTANCE {
            piece.translate(direction.vector() * distance);
            let free = !piece.is_colliding(board);
            piece.position = start;

            if free {
                found[direction as usize] = Some(distance);
                break;
            }
        }
    }

    found
}

/// Push a colliding piece to the nearest free spot.
///
/// Returns the applied translation, or `None` (piece untouched) when no
/// direction frees it within range.
pub fn find_escape(piece: &mut Piece, board: &Board) -> Option<(Direction, i32)> {
    let found = escape_distances(piece, board);

    // `min_by_key` keeps the first minimum, which is the enumeration-order tie break.
    let (direction, distance) = Direction::ALL
        .iter()
        .filter_map(|&d| found[d as usize].map(|dist| (d, dist)))
        .min_by_key(|&(_, dist)| dist)?;

    piece.translate(direction.vector() * distance);
    Some((direction, distance))
}

/// Rotate `piece` a quarter turn, kicking it free if the new orientation collides.
pub fn rotate_with_kick(piece: &mut Piece, board: &Board, clockwise: bool) -> KickOutcome {
    piece.turn(clockwise);

    if !piece.is_colliding(board) {
        return KickOutcome::Rotated;
    }

    match find_escape(piece, board) {
        Some((direction, distance)) => {
            trace!(kind = ?piece.kind, ?direction, distance, "wall kick");
            KickOutcome::Kicked {
                direction,
                distance,
            }
        }
        None => {
            piece.turn(!clockwise);
            trace!(kind = ?piece.kind, "rotation rejected");
            KickOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rgb, Vec2i};

    #[test]
    fn free_rotation_needs_no_kick() {
        let board = Board::default();
        let mut piece = Piece::new(PieceKind::T, Vec2i::new(5, 10));
        assert_eq!(rotate_with_kick(&mut piece, &board, true), KickOutcome::Rotated);
        assert_eq!(piece.position, Vec2i::new(5, 10));
        assert_eq!(piece.orientation, Direction::Right);
    }

    #[test]
    fn tie_goes_to_earlier_direction() {
        // A piece stuck in a single locked cell can leave upwards or downwards
        // by one; Up comes first.
        let mut board = Board::new(10, 10);
        board.fill(5, 5, Rgb::new(1, 1, 1));
        let mut piece = Piece::new(PieceKind::I, Vec2i::new(5, 5));
        piece.orientation = Direction::Right;

        let escape = find_escape(&mut piece, &board);

        assert_eq!(escape, Some((Direction::Up, 1)));
        assert_eq!(piece.position, Vec2i::new(5, 6));
    }

    #[test]
    fn no_escape_leaves_position_unchanged() {
        // Vertical I in a one-wide well three cells deep on every side.
        let mut board = Board::new(9, 12);
        let filled = Rgb::new(1, 1, 1);
        for y in 0..12 {
            for x in 0..9 {
                if x != 4 {
                    board.fill(x, y, filled);
                }
            }
        }
        let mut piece = Piece::new(PieceKind::I, Vec2i::new(4, 6));
        assert!(!piece.is_colliding(&board));

        let outcome = rotate_with_kick(&mut piece, &board, true);

        assert_eq!(outcome, KickOutcome::Rejected);
        assert!(!outcome.succeeded());
        assert_eq!(piece.orientation, Direction::Up);
        assert_eq!(piece.position, Vec2i::new(4, 6));
    }
}
