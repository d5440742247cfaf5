//! Shape catalog and piece movement tests

use blockfall::core::{cells_of, collides, rotation_count, ActivePiece, Board};
use blockfall::types::{Cell, PieceKind, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_every_kind_has_four_distinct_cells_per_state() {
    for kind in PieceKind::ALL {
        let count = rotation_count(kind);
        assert!(count >= 1);
        for rotation in 0..count {
            let cells = cells_of(kind, rotation);
            for (i, a) in cells.iter().enumerate() {
                assert!(a.0 >= 0 && a.1 >= 0, "{kind:?} offset {a:?}");
                for b in &cells[i + 1..] {
                    assert_ne!(a, b, "{kind:?} rotation {rotation} repeats a cell");
                }
            }
        }
    }
}

#[test]
fn test_rotation_index_wraps() {
    for kind in PieceKind::ALL {
        let count = rotation_count(kind);
        assert_eq!(cells_of(kind, count), cells_of(kind, 0));
        assert_eq!(cells_of(kind, count + 1), cells_of(kind, 1 % count));
    }
}

#[test]
fn test_spawn_positions_are_centered_and_in_bounds() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.rotation, 0);
        assert!(!piece.collides(&board), "{kind:?} spawns colliding");

        let (min_c, max_c) = piece
            .cells()
            .iter()
            .fold((i8::MAX, i8::MIN), |(lo, hi), &(_, c)| (lo.min(c), hi.max(c)));
        let left = min_c;
        let right = BOARD_COLS as i8 - 1 - max_c;
        assert!((left - right).abs() <= 1, "{kind:?} off-centre: {left} vs {right}");
    }
    assert_eq!(ActivePiece::spawn(PieceKind::O).col, 5);
    assert_eq!(ActivePiece::spawn(PieceKind::I).col, 4);
}

#[test]
fn test_collides_at_walls_and_floor() {
    let board = Board::new();

    assert!(collides(&board, PieceKind::O, 0, 0, -1));
    assert!(collides(&board, PieceKind::O, 0, 0, BOARD_COLS as i8 - 1));
    assert!(!collides(&board, PieceKind::O, 0, 18, 0));
    assert!(collides(&board, PieceKind::O, 0, 19, 0));
    // Vertical I is four tall.
    assert!(!collides(&board, PieceKind::I, 1, 16, 0));
    assert!(collides(&board, PieceKind::I, 1, 17, 0));
    assert!(collides(&board, PieceKind::T, 0, -1, 4));
}

#[test]
fn test_out_of_bounds_collides_regardless_of_board() {
    let empty = Board::new();
    let mut full = Board::new();
    for row in 0..BOARD_ROWS as usize {
        full.fill_row(row);
    }

    let mut checked = 0;
    for kind in PieceKind::ALL {
        for rotation in 0..rotation_count(kind) {
            for row in -4..BOARD_ROWS as i8 + 4 {
                for col in -4..BOARD_COLS as i8 + 4 {
                    let outside = cells_of(kind, rotation).iter().any(|&(dr, dc)| {
                        let (r, c) = (row + dr, col + dc);
                        r < 0 || r >= BOARD_ROWS as i8 || c < 0 || c >= BOARD_COLS as i8
                    });
                    if !outside {
                        continue;
                    }
                    checked += 1;
                    assert!(
                        collides(&empty, kind, rotation, row, col),
                        "{kind:?}/{rotation} at ({row}, {col}) on empty board"
                    );
                    assert!(
                        collides(&full, kind, rotation, row, col),
                        "{kind:?}/{rotation} at ({row}, {col}) on full board"
                    );
                }
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_collides_with_stack() {
    let mut board = Board::new();
    board.set(10, 6, Cell::Filled);

    assert!(collides(&board, PieceKind::O, 0, 9, 5));
    assert!(!collides(&board, PieceKind::O, 0, 8, 5));
    assert!(!collides(&board, PieceKind::O, 0, 9, 7));
}

#[test]
fn test_move_blocked_at_left_wall() {
    let board = Board::new();
    let piece = ActivePiece {
        col: 0,
        ..ActivePiece::spawn(PieceKind::T)
    };
    assert_eq!(piece.try_shift(&board, 0, -1), None);
    assert!(piece.try_shift(&board, 0, 1).is_some());
}

#[test]
fn test_full_rotation_cycle_restores_piece() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let start = ActivePiece {
            row: 8,
            col: 4,
            ..ActivePiece::spawn(kind)
        };
        let mut piece = start;
        for _ in 0..rotation_count(kind) {
            piece = piece.try_rotate(&board).expect("open board rotation");
        }
        assert_eq!(piece.cells(), start.cells(), "{kind:?}");
        assert_eq!(piece.rotation % rotation_count(kind), start.rotation);
    }
}

#[test]
fn test_drop_row_lands_on_stack() {
    let mut board = Board::new();
    board.set(15, 5, Cell::Filled);

    let piece = ActivePiece::spawn(PieceKind::O);
    assert_eq!(piece.drop_row(&board), 13);
    assert_eq!(piece.shifted(0, -3).drop_row(&board), 18);
}
