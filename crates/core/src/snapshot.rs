use crate::piece::Piece;
use crate::types::{ColorId, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything the shell draws in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[ColorId; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Piece,
    /// Row the active piece would land on after a hard drop.
    pub ghost_y: i8,
    pub next: Piece,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Color at (x, y) with the active piece drawn over the locked cells.
    pub fn color_at(&self, x: i8, y: i8) -> Option<ColorId> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        if self.active.cells().any(|cell| cell == (x, y)) {
            return Some(self.active.color);
        }
        Some(self.board[y as usize][x as usize])
    }
}
