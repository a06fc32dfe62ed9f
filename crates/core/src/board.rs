//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell holds a color id (`0` = empty).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//! Rows above the field (y < 0) are not stored; pieces may occupy them while falling.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{ColorId, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices cleared in one pass. Every row can be full at once.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [ColorId; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
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

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<ColorId> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, color: ColorId) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is inside the board and holds no locked cell
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Check whether a piece can occupy its current position.
    ///
    /// Every filled cell must be within the side walls and above the floor.
    /// Cells above the top of the field are allowed; cells inside the field
    /// must be empty.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| {
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return false;
            }
            y < 0 || self.is_empty(x, y)
        })
    }

    /// Write the piece's color into every filled cell inside the field.
    ///
    /// Cells above the top are dropped. Returns the number of cells written.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if y >= 0 && self.set(x, y, piece.color) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != EMPTY)
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // Keep the row: move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(EMPTY);

        cleared_rows
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_completed_rows(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[ColorId] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid (for snapshots)
    pub fn write_color_grid(
        &self,
        out: &mut [[ColorId; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty and a digit is a color id. Missing leading rows are empty,
    /// so callers only spell out the bottom of the field.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if let Some(color) = ch.to_digit(10) {
                    board.set(x as i8, (offset + i) as i8, color as ColorId);
                }
            }
        }
        board
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<ColorId>> {
        self.cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
