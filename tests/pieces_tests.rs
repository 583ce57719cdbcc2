//! Pieces module tests - shapes and wall kicks

use stackfall::core::pieces::{get_kicks, get_shape, try_rotate, KickFamily};
use stackfall::types::{PieceKind, Rotation};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, Rotation::North), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::East), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::South), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::West), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    // O piece is the same for all rotations
    let north = get_shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(1, 0), (2, 0), (1, 1), (2, 1)]);
    for rotation in Rotation::ALL {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(get_shape(PieceKind::T, Rotation::North), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(get_shape(PieceKind::T, Rotation::East), [(2, 0), (2, 1), (3, 1), (2, 2)]);
}

#[test]
fn test_every_shape_has_distinct_cells_in_box() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let shape = get_shape(kind, rotation);
            for (i, a) in shape.iter().enumerate() {
                assert!((0..4).contains(&a.0) && (0..4).contains(&a.1));
                for b in &shape[i + 1..] {
                    assert_ne!(a, b, "{kind} {rotation:?} repeats a cell");
                }
            }
        }
    }
}

// ============== Kick Tests ==============

#[test]
fn test_kick_families() {
    assert_eq!(KickFamily::of(PieceKind::I), KickFamily::I);
    assert_eq!(KickFamily::of(PieceKind::O), KickFamily::O);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(KickFamily::of(kind), KickFamily::Jlstz);
    }
}

#[test]
fn test_kicks_start_with_no_offset() {
    for kind in PieceKind::ALL {
        for from in Rotation::ALL {
            for to in [from.rotate_cw(), from.rotate_ccw()] {
                let kicks = get_kicks(kind, from, to);
                assert_eq!(kicks[0], (0, 0));
                let expected = if kind == PieceKind::O { 1 } else { 5 };
                assert_eq!(kicks.len(), expected);
            }
        }
    }
}

#[test]
fn test_jlstz_kick_values() {
    assert_eq!(
        get_kicks(PieceKind::T, Rotation::North, Rotation::East),
        &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)]
    );
    assert_eq!(
        get_kicks(PieceKind::L, Rotation::West, Rotation::North),
        &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]
    );
}

#[test]
fn test_i_kick_values() {
    assert_eq!(
        get_kicks(PieceKind::I, Rotation::North, Rotation::East),
        &[(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)]
    );
    assert_eq!(
        get_kicks(PieceKind::I, Rotation::North, Rotation::West),
        &[(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)]
    );
}

#[test]
fn test_untabled_pair_gets_plain_rotation() {
    assert_eq!(get_kicks(PieceKind::T, Rotation::North, Rotation::South), &[(0, 0)]);
}

// ============== Rotation Tests ==============

#[test]
fn test_try_rotate_free_space_uses_first_candidate() {
    let result = try_rotate(PieceKind::T, Rotation::North, 3, 5, Rotation::East, |_, _, _| false);
    assert_eq!(result, Some((Rotation::East, 3, 5)));
}

#[test]
fn test_try_rotate_takes_first_free_kick() {
    // Only the third candidate (-1, -1) is free
    let result = try_rotate(PieceKind::T, Rotation::North, 3, 5, Rotation::East, |_, x, y| {
        (x, y) != (2, 4)
    });
    assert_eq!(result, Some((Rotation::East, 2, 4)));
}

#[test]
fn test_try_rotate_all_blocked() {
    let result = try_rotate(PieceKind::I, Rotation::East, 3, 5, Rotation::South, |_, _, _| true);
    assert_eq!(result, None);
}
