//! Shape templates, cell projection and rotation.

use pretty_assertions::assert_eq;
use stratoblocks::{Piece, Shape};

fn mask(rows: &[&[u8]]) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|r| r.iter().map(|&v| v != 0).collect())
        .collect()
}

#[test]
fn test_every_template_has_four_cells() {
    for shape in Shape::ALL {
        let piece = Piece::new(shape, 0, 0);
        assert_eq!(piece.cells().len(), 4, "{shape:?}");
    }
}

#[test]
fn test_templates_match_spawn_orientation() {
    assert_eq!(Piece::new(Shape::I, 0, 0).mask, mask(&[&[1, 1, 1, 1]]));
    assert_eq!(Piece::new(Shape::O, 0, 0).mask, mask(&[&[1, 1], &[1, 1]]));
    assert_eq!(Piece::new(Shape::T, 0, 0).mask, mask(&[&[1, 1, 1], &[0, 1, 0]]));
    assert_eq!(Piece::new(Shape::L, 0, 0).mask, mask(&[&[1, 1, 1], &[1, 0, 0]]));
    assert_eq!(Piece::new(Shape::J, 0, 0).mask, mask(&[&[1, 1, 1], &[0, 0, 1]]));
    assert_eq!(Piece::new(Shape::S, 0, 0).mask, mask(&[&[1, 1, 0], &[0, 1, 1]]));
    assert_eq!(Piece::new(Shape::Z, 0, 0).mask, mask(&[&[0, 1, 1], &[1, 1, 0]]));
}

#[test]
fn test_cells_are_offset_by_origin() {
    let piece = Piece::new(Shape::O, 4, 2);
    assert_eq!(piece.cells(), vec![(4, 2), (5, 2), (4, 3), (5, 3)]);

    let moved = piece.shifted(-1, 3);
    assert_eq!(moved.cells(), vec![(3, 5), (4, 5), (3, 6), (4, 6)]);
    assert_eq!(moved.mask, piece.mask);
}

#[test]
fn test_rotate_i_becomes_vertical() {
    let piece = Piece::new(Shape::I, 4, 0).rotated();
    assert_eq!(piece.rows(), 4);
    assert_eq!(piece.cols(), 1);
    assert_eq!(piece.cells(), vec![(4, 0), (4, 1), (4, 2), (4, 3)]);
}

#[test]
fn test_rotate_is_clockwise_into_transposed_box() {
    let t = Piece::new(Shape::T, 0, 0).rotated();
    assert_eq!(t.mask, mask(&[&[0, 1], &[1, 1], &[0, 1]]));

    let l = Piece::new(Shape::L, 0, 0).rotated();
    assert_eq!(l.mask, mask(&[&[1, 1], &[0, 1], &[0, 1]]));
}

#[test]
fn test_rotate_keeps_origin_and_shape_kind() {
    let piece = Piece::new(Shape::S, 3, 7);
    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (3, 7));
    assert_eq!(rotated.shape, Shape::S);
}

#[test]
fn test_four_rotations_return_to_start() {
    for shape in Shape::ALL {
        let piece = Piece::new(shape, 2, 5);
        let back = piece.rotated().rotated().rotated().rotated();
        assert_eq!(back, piece, "{shape:?}");
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let piece = Piece::new(Shape::O, 4, 0);
    assert_eq!(piece.rotated(), piece);
}
