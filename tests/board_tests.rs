//! Board tests: frozen-cell storage, line detection, and compaction.

use duotris::core::Board;
use duotris::types::PieceKind;

#[test]
fn new_board_is_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert!(board.is_empty());
    assert_eq!(board.len(), 0);
}

#[test]
#[should_panic(expected = "must be positive")]
fn zero_width_panics() {
    Board::new(0, 20);
}

#[test]
#[should_panic(expected = "must be positive")]
fn negative_height_panics() {
    Board::new(10, -3);
}

#[test]
fn freeze_and_lookup() {
    let mut board = Board::new(10, 20);
    board.freeze((5, 10), PieceKind::T);
    assert!(board.is_occupied((5, 10)));
    assert_eq!(board.get((5, 10)), Some(PieceKind::T));
    assert_eq!(board.get((5, 11)), None);
    assert!(!board.is_occupied((5, 11)));
}

#[test]
fn partial_rows_do_not_clear() {
    let mut board = Board::new(10, 20);
    for col in 0..9 {
        board.freeze((col, 0), PieceKind::I);
    }
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.len(), 9);
}

#[test]
fn full_row_clears_and_reports_its_index() {
    let mut board = Board::new(10, 20);
    for col in 0..10 {
        board.freeze((col, 0), PieceKind::I);
    }
    board.freeze((4, 1), PieceKind::O);

    assert_eq!(board.clear_full_rows(), vec![0]);
    assert_eq!(board.len(), 1);
    // The survivor dropped onto the floor.
    assert_eq!(board.get((4, 0)), Some(PieceKind::O));
    assert_eq!(board.get((4, 1)), None);
}

#[test]
fn survivors_drop_by_cleared_rows_strictly_below() {
    let mut board = Board::new(10, 20);
    for col in 0..10 {
        board.freeze((col, 3), PieceKind::I);
        board.freeze((col, 7), PieceKind::I);
    }
    board.freeze((0, 0), PieceKind::T); // below both, stays put
    board.freeze((1, 5), PieceKind::S); // above one cleared row
    board.freeze((2, 9), PieceKind::Z); // above both

    assert_eq!(board.clear_full_rows(), vec![3, 7]);
    assert_eq!(board.get((0, 0)), Some(PieceKind::T));
    assert_eq!(board.get((1, 4)), Some(PieceKind::S));
    assert_eq!(board.get((2, 7)), Some(PieceKind::Z));
    assert_eq!(board.len(), 3);
}

#[test]
fn clear_is_idempotent() {
    let mut board = Board::new(10, 20);
    for col in 0..10 {
        board.freeze((col, 0), PieceKind::J);
    }
    assert_eq!(board.clear_full_rows().len(), 1);
    assert!(board.clear_full_rows().is_empty());
}

#[test]
fn resize_keeps_existing_cells() {
    let mut board = Board::new(10, 20);
    board.freeze((3, 3), PieceKind::L);
    board.resize(6, 12);
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 12);
    assert_eq!(board.get((3, 3)), Some(PieceKind::L));
}

#[test]
fn narrow_board_uses_its_own_width_for_full_rows() {
    let mut board = Board::new(4, 8);
    for col in 0..4 {
        board.freeze((col, 2), PieceKind::I);
    }
    assert_eq!(board.clear_full_rows(), vec![2]);
    assert!(board.is_empty());
}
