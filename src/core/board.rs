//! The settled-cell grid.
//!
//! A flat, row-major array of cells covering the visible field plus the
//! hidden buffer rows above it. `(x, y)` coordinates run left to right and
//! top to bottom; rows `0..BUFFER_ROWS` are the buffer. The grid answers one
//! legality predicate for all movement, absorbs locked pieces, and compacts
//! full rows.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BUFFER_ROWS, TOTAL_HEIGHT, VISIBLE_HEIGHT, WIDTH};

const COLS: usize = WIDTH as usize;
const ROWS: usize = TOTAL_HEIGHT as usize;
const GRID_SIZE: usize = COLS * ROWS;

/// The settled-cell matrix, buffer rows included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; GRID_SIZE],
}

impl Board {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= WIDTH as i8 || y < 0 || y >= TOTAL_HEIGHT as i8 {
            return None;
        }
        Some(y as usize * COLS + x as usize)
    }

    /// Visible width, for layout collaborators.
    pub fn width(&self) -> u8 {
        WIDTH
    }

    /// Visible height, for layout collaborators. The buffer is not rendered.
    pub fn height(&self) -> u8 {
        VISIBLE_HEIGHT
    }

    /// Full height including the buffer rows.
    pub fn total_height(&self) -> u8 {
        TOTAL_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and settled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// The single predicate behind every movement and rotation: all four
    /// cells inside the grid (buffer included) and none settled.
    pub fn is_legal(&self, cells: &[(i8, i8); 4]) -> bool {
        cells.iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Permanently transfer a piece's cells into the grid, tagged with its
    /// kind. Callers check legality first; out-of-bounds cells are dropped.
    pub fn lock(&mut self, cells: &[(i8, i8); 4], kind: PieceKind) {
        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Whether every cell of row `y` is settled.
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= TOTAL_HEIGHT {
            return false;
        }
        let start = y as usize * COLS;
        self.cells[start..start + COLS].iter().all(Cell::is_some)
    }

    /// Remove every full row in one pass, shifting the rows above each down
    /// and emptying the exposed top rows. Returns the removed row indices in
    /// top-to-bottom order. All full rows go in the same evaluation; two
    /// separated full rows produce one result with two entries, never two
    /// single-row results.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, ROWS> {
        let mut cleared = ArrayVec::new();
        let mut write_y = ROWS;

        // Two-pointer compaction from the bottom up: full rows are skipped,
        // everything else slides down into the write cursor.
        for read_y in (0..ROWS).rev() {
            if self.is_row_full(read_y as u8) {
                cleared.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * COLS;
                    let dst = write_y * COLS;
                    self.cells.copy_within(src..src + COLS, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_y * COLS] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Empty every cell (new game).
    pub fn clear(&mut self) {
        self.cells = [None; GRID_SIZE];
    }

    /// Copy the visible rows into a rectangular snapshot buffer. Row 0 of the
    /// output is the first row below the buffer.
    pub fn copy_visible_into(&self, out: &mut [[Cell; COLS]; VISIBLE_HEIGHT as usize]) {
        for (vy, row) in out.iter_mut().enumerate() {
            let start = (vy + BUFFER_ROWS as usize) * COLS;
            row.copy_from_slice(&self.cells[start..start + COLS]);
        }
    }

    /// Raw cells, row-major, buffer rows first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_row_major_with_buffer_first() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, TOTAL_HEIGHT as i8 - 1), Some(GRID_SIZE - 1));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(WIDTH as i8, 0), None);
        assert_eq!(Board::index(0, TOTAL_HEIGHT as i8), None);
    }

    #[test]
    fn lock_tags_cells_with_the_kind() {
        let mut board = Board::new();
        board.lock(&[(3, 20), (4, 20), (3, 21), (4, 21)], PieceKind::O);

        assert_eq!(board.get(3, 20), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 21), Some(Some(PieceKind::O)));
        assert!(board.is_occupied(3, 21));
        assert!(board.is_free(5, 21));
    }

    #[test]
    fn is_legal_rejects_walls_floor_and_settled_cells() {
        let mut board = Board::new();
        assert!(board.is_legal(&[(0, 0), (9, 0), (0, 21), (9, 21)]));
        assert!(!board.is_legal(&[(-1, 5), (0, 5), (1, 5), (2, 5)]));
        assert!(!board.is_legal(&[(7, 5), (8, 5), (9, 5), (10, 5)]));
        assert!(!board.is_legal(&[(0, 20), (0, 21), (0, 22), (1, 21)]));

        board.set(4, 10, Some(PieceKind::T));
        assert!(!board.is_legal(&[(3, 10), (4, 10), (5, 10), (4, 9)]));
    }

    #[test]
    fn copy_visible_skips_buffer_rows() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::I)); // buffer, invisible
        board.set(5, BUFFER_ROWS as i8, Some(PieceKind::T)); // first visible row

        let mut out = [[None; COLS]; VISIBLE_HEIGHT as usize];
        board.copy_visible_into(&mut out);

        assert_eq!(out[0][5], Some(PieceKind::T));
        assert!(out.iter().flatten().filter(|c| c.is_some()).count() == 1);
    }
}
