//! Shapes module - the tetromino catalog and the rotation transform
//!
//! A [`Shape`] is a small rectangular binary matrix (at most 4x4) stored in a
//! fixed array, so shapes are `Copy` and never allocate. Cells outside the
//! bounding box are always empty, which lets derived equality compare filled
//! patterns directly.

use crate::types::SHAPE_COUNT;

/// Largest width/height a shape can have.
pub const MAX_SHAPE_SIZE: usize = 4;

/// A rectangular binary matrix describing one rotation of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major cells: `cells[y][x]`
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, larger than 4x4, or not rectangular.
    /// The catalog is built in a `const`, so a bad entry fails compilation.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= MAX_SHAPE_SIZE, "shape height out of range");
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_SIZE, "shape width out of range");

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < height {
            assert!(rows[y].len() == width, "shape rows must be rectangular");
            let mut x = 0;
            while x < width {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check whether the cell at column `x`, row `y` is filled.
    /// Out-of-box coordinates are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row.
    pub fn filled(self) -> impl Iterator<Item = (i8, i8)> {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                self.cells[y as usize][x as usize].then_some((x as i8, y as i8))
            })
        })
    }

    /// Convert back to rows of 0/1 values (for display/testing)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| u8::from(self.cells[y][x]))
                    .collect()
            })
            .collect()
    }

    /// Rotate 90° clockwise. See [`rotate_clockwise`].
    pub fn rotated_cw(&self) -> Shape {
        rotate_clockwise(self)
    }
}

/// Rotate a shape 90° clockwise.
///
/// For an `h x w` input the output is `w x h` with
/// `output[x][h - 1 - y] = input[y][x]`. The input is left untouched.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let h = shape.height as usize;
    let w = shape.width as usize;

    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for y in 0..h {
        for x in 0..w {
            cells[x][h - 1 - y] = shape.cells[y][x];
        }
    }

    Shape {
        width: shape.height,
        height: shape.width,
        cells,
    }
}

/// The seven tetrominoes, in a stable order.
pub const CATALOG: [Shape; SHAPE_COUNT] = [
    Shape::from_rows(&[&[1, 1, 1, 1]]),             // I
    Shape::from_rows(&[&[1, 1], &[1, 1]]),          // O
    Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),    // T
    Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),    // J
    Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),    // L
    Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),    // Z
    Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),    // S
];

/// Get the shape catalog
pub fn catalog() -> &'static [Shape; SHAPE_COUNT] {
    &CATALOG
}
