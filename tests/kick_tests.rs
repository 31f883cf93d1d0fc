//! Wall kick tests - rotation next to walls, floor and stack

use falling_blocks::core::{rotate_with_kick, Board, KickOutcome, Piece};
use falling_blocks::types::{Direction, Orientation, PieceKind, Rgb, Vec2i};

const GRAY: Rgb = Rgb::new(90, 90, 90);

#[test]
fn test_i_piece_kicks_off_left_wall() {
    let board = Board::default();
    let mut piece = Piece::new(PieceKind::I, Vec2i::new(0, 10));

    let outcome = rotate_with_kick(&mut piece, &board, true);

    assert_eq!(
        outcome,
        KickOutcome::Kicked {
            direction: Direction::Right,
            distance: 2
        }
    );
    assert_eq!(piece.orientation, Orientation::Right);
    let mut xs: Vec<i32> = piece.occupied_cells().iter().map(|c| c.x).collect();
    xs.sort();
    assert_eq!(xs, vec![0, 1, 2, 3]);
    assert!(!piece.is_colliding(&board));
}

#[test]
fn test_i_piece_kicks_off_right_wall() {
    let board = Board::default();
    let mut piece = Piece::new(PieceKind::I, Vec2i::new(9, 10));

    let outcome = rotate_with_kick(&mut piece, &board, true);

    assert_eq!(
        outcome,
        KickOutcome::Kicked {
            direction: Direction::Left,
            distance: 1
        }
    );
    assert_eq!(piece.position, Vec2i::new(8, 10));
}

#[test]
fn test_floor_kick_moves_up() {
    let board = Board::default();
    let mut piece = Piece::new(PieceKind::T, Vec2i::new(5, 0));
    piece.orientation = Orientation::Down;
    assert!(!piece.is_colliding(&board));

    let outcome = rotate_with_kick(&mut piece, &board, true);

    assert_eq!(
        outcome,
        KickOutcome::Kicked {
            direction: Direction::Up,
            distance: 1
        }
    );
    assert_eq!(piece.orientation, Orientation::Left);
    assert_eq!(piece.position, Vec2i::new(5, 1));
}

#[test]
fn test_kick_away_from_stack() {
    // A column of locked cells right of a vertical I.
    let mut board = Board::default();
    for y in 0..4 {
        board.fill(5, y, GRAY);
    }
    let mut piece = Piece::new(PieceKind::I, Vec2i::new(4, 2));
    assert!(!piece.is_colliding(&board));

    let outcome = rotate_with_kick(&mut piece, &board, true);

    // Horizontal at (4, 2) covers x 2..=5 on row 2. Up needs 2 to clear the
    // stack, right never clears it, left needs 1.
    assert_eq!(
        outcome,
        KickOutcome::Kicked {
            direction: Direction::Left,
            distance: 1
        }
    );
    assert_eq!(piece.position, Vec2i::new(3, 2));
}

#[test]
fn test_rejected_rotation_keeps_piece() {
    let mut board = Board::new(6, 8);
    for y in 0..8 {
        for x in 0..6 {
            if x != 2 {
                board.fill(x, y, GRAY);
            }
        }
    }
    let mut piece = Piece::new(PieceKind::I, Vec2i::new(2, 4));
    let before = piece;

    assert_eq!(rotate_with_kick(&mut piece, &board, false), KickOutcome::Rejected);
    assert_eq!(piece, before);
}
