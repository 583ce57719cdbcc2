//! Board tests

use stackfall::core::{Board, Piece};
use stackfall::types::{PieceKind, Rotation};

fn standard() -> Board {
    Board::new(10, 20, 2)
}

fn fill_row(board: &mut Board, y: i32, kind: PieceKind) {
    for x in 0..board.width() as i32 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = standard();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 22);
    assert_eq!(board.visible_rows(), 20);
    assert_eq!(board.hidden_rows(), 2);

    for y in 0..22 {
        for x in 0..10 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = standard();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 22), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = standard();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, 22, Some(PieceKind::T)));
}

#[test]
fn test_occupancy_outside_the_grid() {
    let mut board = standard();

    // Walls and floor block, the space above the grid does not
    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(10, 5));
    assert!(board.is_occupied(3, 22));
    assert!(!board.is_occupied(3, -1));
    assert!(!board.is_occupied(3, -40));

    assert!(!board.is_occupied(3, 4));
    board.set(3, 4, Some(PieceKind::S));
    assert!(board.is_occupied(3, 4));
}

#[test]
fn test_piece_may_overlap_top_edge() {
    let board = standard();
    // I North fills row y + 1, so y = -1 puts it on row 0
    let piece = Piece::new(PieceKind::I, 3, -1);
    assert!(!board.collides(&piece));

    let above = Piece::new(PieceKind::I, 3, -5);
    assert!(!board.collides(&above));
}

#[test]
fn test_collides_at_walls_and_stack() {
    let mut board = standard();

    assert!(!board.collides_at(PieceKind::O, Rotation::North, -1, 0));
    assert!(board.collides_at(PieceKind::O, Rotation::North, -2, 0));
    assert!(board.collides_at(PieceKind::O, Rotation::North, 8, 0));

    // O at (3, 19) covers rows 19 and 20, columns 4 and 5
    assert!(!board.collides_at(PieceKind::O, Rotation::North, 3, 19));
    board.set(5, 20, Some(PieceKind::J));
    assert!(board.collides_at(PieceKind::O, Rotation::North, 3, 19));
}

#[test]
fn test_lock_writes_piece_kind() {
    let mut board = standard();
    let piece = Piece::new(PieceKind::T, 3, 20);

    board.lock(&piece);

    for (x, y) in piece.cells() {
        assert_eq!(board.get(x, y), Some(Some(PieceKind::T)));
    }
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 4);
}

#[test]
fn test_lock_drops_cells_above_grid() {
    let mut board = standard();
    // T North at y = -1: top cell on row -1, the others on row 0
    let piece = Piece::new(PieceKind::T, 3, -1);

    board.lock(&piece);

    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 3);
}

#[test]
fn test_full_rows_top_to_bottom() {
    let mut board = standard();
    fill_row(&mut board, 21, PieceKind::I);
    fill_row(&mut board, 18, PieceKind::L);
    board.set(0, 19, Some(PieceKind::Z));

    assert!(board.is_row_full(21));
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_full(22));
    assert_eq!(board.full_rows(), vec![18, 21]);
}

#[test]
fn test_collapse_single_row() {
    let mut board = standard();
    fill_row(&mut board, 21, PieceKind::I);
    board.set(4, 20, Some(PieceKind::T));

    board.collapse(&[21]);

    assert_eq!(board.get(4, 21), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 21), Some(None));
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_collapse_non_adjacent_rows_keeps_order() {
    let mut board = standard();
    fill_row(&mut board, 21, PieceKind::I);
    board.set(1, 20, Some(PieceKind::S));
    fill_row(&mut board, 19, PieceKind::I);
    board.set(2, 18, Some(PieceKind::Z));
    board.set(3, 17, Some(PieceKind::J));

    board.collapse(&[19, 21]);

    assert_eq!(board.get(1, 21), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 20), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::J)));
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
    assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 3);
}

#[test]
fn test_collapse_order_does_not_matter() {
    let mut a = standard();
    for y in [10, 15, 20] {
        fill_row(&mut a, y, PieceKind::O);
    }
    a.set(7, 12, Some(PieceKind::L));
    let mut b = a.clone();

    a.collapse(&[20, 10, 15]);
    b.collapse(&[10, 15, 20]);

    assert_eq!(a, b);
    assert_eq!(a.get(7, 14), Some(Some(PieceKind::L)));
}

#[test]
fn test_to_rows_and_clear() {
    let mut board = standard();
    board.set(9, 21, Some(PieceKind::I));

    let rows = board.to_rows();
    assert_eq!(rows.len(), 22);
    assert_eq!(rows[21][9], Some(PieceKind::I));

    board.clear();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
