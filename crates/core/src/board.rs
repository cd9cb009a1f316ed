//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of `u8` cell values (0 = empty, 1-7 = the shape
//! family that locked there), stored as a flat array for cache locality and
//! zero-allocation line clears.
//! Coordinates: (x, y) with x in 0..10 left to right and y in 0..20 top to
//! bottom. The grid is mutated only by `merge` and `clear_full_rows`.

use arrayvec::ArrayVec;

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

use crate::piece::Piece;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [u8; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_CELL; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell value at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell value at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, value: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a locked cell (in bounds and nonzero).
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY_CELL)
    }

    /// Collision test for a piece displaced by (dx, dy).
    ///
    /// A placement collides when any occupied piece cell would land outside
    /// the left/right walls, at or below the floor, or on a locked cell.
    /// Rows above the top (negative y) do not collide: rotation near the top
    /// edge may transiently lift cells above row 0, and that is a fixed rule
    /// of this engine rather than an oversight.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.board_cells().any(|(x, y, _)| {
            let bx = x + dx;
            let by = y + dy;
            if bx < 0 || bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8 {
                return true;
            }
            by >= 0 && self.is_occupied(bx, by)
        })
    }

    /// Write every occupied piece cell into the grid at its board position.
    ///
    /// Cells still above the top edge are dropped; they have nowhere to
    /// persist and the spawn-collision check ends the game right after.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y, v) in piece.board_cells() {
            self.set(x, y, v);
        }
    }

    /// Check if a row contains no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&v| v != EMPTY_CELL)
    }

    /// Clear all full rows and return their indices (bottom to top).
    ///
    /// Remaining rows keep their relative order and shift down; an equal
    /// number of empty rows appears at the top. Two-pointer compaction with
    /// zero allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh empty rows at the top.
        self.cells[..write_y * width].fill(EMPTY_CELL);

        cleared_rows
    }

    /// Copy the grid into a fixed 2D array (renderer snapshot format).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
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
    use blockfall_types::PieceKind;

    #[test]
    fn index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn collides_ignores_rows_above_the_top() {
        let board = Board::new();
        let mut piece = Piece::new(PieceKind::I);
        // Rotate to a column and lift it above the top edge.
        piece.matrix = piece.matrix.rotated(true);
        piece.y = -3;
        assert!(!board.collides(&piece, 0, 0));

        // The same piece past the right wall does collide.
        piece.x = 8;
        assert!(board.collides(&piece, 0, 0));
    }

    #[test]
    fn merge_drops_cells_above_the_top() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::O);
        piece.y = -1;
        board.merge(&piece);
        // Only the lower row of the O landed on the grid.
        assert_eq!(board.get(4, 0), Some(2));
        assert_eq!(board.get(5, 0), Some(2));
        let locked: usize = (0..BOARD_HEIGHT as i8)
            .flat_map(|y| (0..BOARD_WIDTH as i8).map(move |x| (x, y)))
            .filter(|&(x, y)| board.is_occupied(x, y))
            .count();
        assert_eq!(locked, 2);
    }
}
