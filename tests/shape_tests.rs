//! Shape and direction tests - catalog and rotation table

use falling_blocks::core::{anchor_offset, rotated_shape, ShapeMatrix, ShapeTemplate, Tile};
use falling_blocks::types::{Direction, Orientation, PieceKind, Vec2i};

fn render(m: &ShapeMatrix) -> Vec<String> {
    m.rows()
        .map(|row| {
            row.iter()
                .map(|t| match t {
                    Tile::Empty => '.',
                    Tile::Filled => '#',
                    Tile::Anchor => '@',
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_direction_rotation_cycle() {
    assert_eq!(Direction::Up.rotate(true), Direction::Right);
    assert_eq!(Direction::Left.rotate(true), Direction::Up);
    assert_eq!(Direction::Up.rotate(false), Direction::Left);

    for d in Direction::ALL {
        assert_eq!(d.rotate(true).rotate(false), d);
        assert_eq!(d.rotate(true).rotate(true), d.opposite());
        assert_eq!(d.vector() + d.opposite().vector(), Vec2i::ZERO);
    }
}

#[test]
fn test_direction_vectors_are_y_up() {
    assert_eq!(Direction::Up.vector(), Vec2i::new(0, 1));
    assert_eq!(Direction::Right.vector(), Vec2i::new(1, 0));
    assert_eq!(Direction::Down.vector(), Vec2i::new(0, -1));
    assert_eq!(Direction::Left.vector(), Vec2i::new(-1, 0));
}

#[test]
fn test_up_is_identity() {
    for template in ShapeTemplate::all() {
        assert_eq!(rotated_shape(template.kind, Orientation::Up), template.matrix());
    }
}

#[test]
fn test_s_piece_turns_vertical() {
    assert_eq!(render(&rotated_shape(PieceKind::S, Orientation::Up)), [".@#", "##."]);
    assert_eq!(
        render(&rotated_shape(PieceKind::S, Orientation::Right)),
        ["#.", "#@", ".#"]
    );
}

#[test]
fn test_quarter_turns_swap_dimensions() {
    for template in ShapeTemplate::all() {
        let up = rotated_shape(template.kind, Orientation::Up);
        let right = rotated_shape(template.kind, Orientation::Right);
        let left = rotated_shape(template.kind, Orientation::Left);
        assert_eq!((up.width(), up.height()), (right.height(), right.width()));
        assert_eq!((right.width(), right.height()), (left.width(), left.height()));
    }
}

#[test]
fn test_every_orientation_keeps_four_tiles_and_one_anchor() {
    for template in ShapeTemplate::all() {
        for o in Direction::ALL {
            let m = rotated_shape(template.kind, o);
            assert_eq!(m.solid_offsets().count(), 4, "{:?} {:?}", template.kind, o);
            let anchors = m
                .rows()
                .flat_map(|row| row.iter())
                .filter(|&&t| t == Tile::Anchor)
                .count();
            let expected = if template.kind == PieceKind::O { 0 } else { 1 };
            assert_eq!(anchors, expected, "{:?} {:?}", template.kind, o);
        }
    }
}

#[test]
fn test_anchor_offset_counts_from_bottom_left() {
    // L:  #.
    //     @.
    //     ##
    assert_eq!(anchor_offset(PieceKind::L, Orientation::Up), Vec2i::new(0, 1));
    // L down: ##
    //         .@
    //         .#
    assert_eq!(
        render(&rotated_shape(PieceKind::L, Orientation::Down)),
        ["##", ".@", ".#"]
    );
    assert_eq!(anchor_offset(PieceKind::L, Orientation::Down), Vec2i::new(1, 1));
}

#[test]
fn test_kind_names_are_distinct_letters() {
    let names: Vec<&str> = PieceKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["i", "j", "l", "o", "s", "t", "z"]);
}

#[test]
fn test_four_quarter_turns_are_identity() {
    for template in ShapeTemplate::all() {
        for o in Direction::ALL {
            let m = rotated_shape(template.kind, o);
            for turn in [Orientation::Right, Orientation::Left] {
                let back = m.rotated(turn).rotated(turn).rotated(turn).rotated(turn);
                assert_eq!(back, m, "{:?} {:?}", template.kind, o);
                assert_eq!(back.anchor_offset(), m.anchor_offset());
            }
            assert_eq!(
                m.rotated(Orientation::Right).rotated(Orientation::Right),
                m.rotated(Orientation::Down)
            );
        }
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let up = rotated_shape(PieceKind::O, Orientation::Up);
    for o in Direction::ALL {
        assert_eq!(rotated_shape(PieceKind::O, o), up);
    }
}
