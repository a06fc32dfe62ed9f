//! Piece module - a shape placed on the board with a color

use crate::shapes::{rotate_clockwise, Shape};
use crate::types::ColorId;

/// A falling (or held, or previewed) piece.
///
/// `(x, y)` is the top-left corner of the shape's bounding box in board
/// coordinates; `y` may be negative while the piece pokes above the field.
/// Pieces carry no validation: legality is decided by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
    pub color: ColorId,
}

impl Piece {
    /// Place `shape` with its bounding box at `(column, 0)`
    pub fn spawn(shape: Shape, column: i8, color: ColorId) -> Self {
        Self {
            x: column,
            y: 0,
            shape,
            color,
        }
    }

    /// The shape rotated clockwise. `self` is not changed.
    pub fn rotated(&self) -> Shape {
        rotate_clockwise(&self.shape)
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape.filled().map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Copy moved by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with a different shape at the same origin
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::CATALOG;

    #[test]
    fn test_spawn_position() {
        let piece = Piece::spawn(CATALOG[2], 3, 4);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.color, 4);
        assert_eq!(piece.shape, CATALOG[2]);
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece::spawn(CATALOG[1], 3, 1).shifted(0, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 5), (4, 5), (3, 6), (4, 6)]);
    }

    #[test]
    fn test_rotated_leaves_piece_unchanged() {
        let piece = Piece::spawn(CATALOG[0], 3, 2);
        let rotated = piece.rotated();
        assert_eq!(piece.shape, CATALOG[0]);
        assert_eq!(rotated.height(), 4);
        assert_eq!(piece.with_shape(rotated).x, 3);
    }
}
