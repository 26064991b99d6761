//! Grid behavior through the public API: legality, locking, and the
//! simultaneous multi-row clear semantics.

use tetris_engine::{Board, PieceKind};

const WIDTH: i8 = 10;
const TOTAL: i8 = 22;

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..WIDTH {
        board.set(x, y, Some(PieceKind::S));
    }
}

#[test]
fn locked_cells_are_permanent_and_typed() {
    let mut board = Board::new();
    board.lock(&[(4, 20), (5, 20), (4, 21), (5, 21)], PieceKind::O);

    assert!(board.is_occupied(4, 21));
    assert_eq!(board.get(5, 20), Some(Some(PieceKind::O)));
    assert!(!board.is_legal(&[(4, 19), (4, 20), (4, 21), (3, 21)]));
}

#[test]
fn separated_full_rows_clear_in_one_evaluation() {
    let mut board = Board::new();
    let bottom = TOTAL - 1;

    fill_row(&mut board, bottom);
    fill_row(&mut board, bottom - 2);
    // The row between stays partial.
    board.set(0, bottom - 1, Some(PieceKind::J));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[(bottom - 2) as u8, bottom as u8]);

    // The partial row slid down onto the floor; everything above is empty.
    assert_eq!(board.get(0, bottom), Some(Some(PieceKind::J)));
    assert!(board.is_free(1, bottom));
    for y in 0..bottom {
        for x in 0..WIDTH {
            assert!(board.is_free(x, y), "({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn adjacent_rows_shift_by_the_number_cleared() {
    let mut board = Board::new();
    let bottom = TOTAL - 1;

    board.set(7, bottom - 2, Some(PieceKind::L));
    fill_row(&mut board, bottom - 1);
    fill_row(&mut board, bottom);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(board.get(7, bottom), Some(Some(PieceKind::L)));
    assert!(board.is_free(7, bottom - 2));
}

#[test]
fn no_full_rows_means_no_change() {
    let mut board = Board::new();
    board.set(3, 21, Some(PieceKind::T));
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn buffer_rows_participate_in_clears() {
    // A full buffer row is cleared like any other; compaction treats the
    // whole grid uniformly.
    let mut board = Board::new();
    fill_row(&mut board, 0);
    board.set(2, 1, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[0]);
    assert_eq!(board.get(2, 1), Some(Some(PieceKind::Z)));
}

#[test]
fn clear_empties_everything() {
    let mut board = Board::new();
    fill_row(&mut board, 21);
    board.clear();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
