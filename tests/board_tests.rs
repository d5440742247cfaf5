//! Board tests - bounds, row clearing and compaction

use blockfall::core::Board;
use blockfall::types::{Cell, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);

    for row in 0..BOARD_ROWS as i8 {
        for col in 0..BOARD_COLS as i8 {
            assert_eq!(board.get(row, col), Some(Cell::Empty), "({row}, {col})");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_ROWS as i8, 0), None);
    assert_eq!(board.get(0, BOARD_COLS as i8), None);
    assert!(board.is_out_of_bounds(20, 11));
    assert!(!board.is_out_of_bounds(19, 11));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Cell::Filled));
    assert!(board.is_filled(10, 5));
    assert!(board.is_empty_at(5, 10));

    assert!(board.set(10, 5, Cell::Empty));
    assert!(!board.is_filled(10, 5));
}

#[test]
fn test_board_set_out_of_bounds_writes_nothing() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Cell::Filled));
    assert!(!board.set(0, -1, Cell::Filled));
    assert!(!board.set(BOARD_ROWS as i8, 0, Cell::Filled));
    assert!(!board.set(0, BOARD_COLS as i8, Cell::Filled));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for col in 0..BOARD_COLS as i8 - 1 {
        board.set(19, col, Cell::Filled);
    }
    assert!(!board.is_row_full(19));

    board.set(19, BOARD_COLS as i8 - 1, Cell::Filled);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_rows_five_and_six() {
    let mut board = Board::new();
    board.fill_row(5);
    board.fill_row(6);
    board.set(4, 3, Cell::Filled);
    board.set(0, 0, Cell::Filled);
    board.set(10, 7, Cell::Filled);

    assert_eq!(board.clear_full_rows(), 2);

    // Everything above the cleared rows drops by two; below is untouched.
    assert!(board.is_filled(6, 3));
    assert!(board.is_filled(2, 0));
    assert!(board.is_filled(10, 7));
    assert_eq!(board.filled_count(), 3);
    assert!(board.row(0).unwrap().iter().all(|c| !c.is_filled()));
    assert!(board.row(1).unwrap().iter().all(|c| !c.is_filled()));
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(19);
    board.set(18, 2, Cell::Filled);
    board.fill_row(17);
    board.set(16, 9, Cell::Filled);

    assert_eq!(board.clear_full_rows(), 2);
    assert!(board.is_filled(19, 2));
    assert!(board.is_filled(18, 9));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_whole_board() {
    let mut board = Board::new();
    for row in 0..BOARD_ROWS as usize {
        board.fill_row(row);
    }

    assert_eq!(board.clear_full_rows(), BOARD_ROWS as u32);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut board = Board::new();
    board.set(19, 0, Cell::Filled);
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}
