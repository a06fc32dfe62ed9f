//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `GRAVITY_MS` | 450 | Time between forced one-row descents |
//!
//! # Scoring
//!
//! | Event | Points |
//! |-------|--------|
//! | Soft drop step | `SOFT_DROP_POINTS` (1) |
//! | Hard drop | `HARD_DROP_POINTS` (2) |
//! | Gravity lock clearing 1/2/3/4 rows | `GRAVITY_LINE_SCORES` (100/300/500/800) |
//! | Hard drop lock clearing n rows | `HARD_DROP_LINE_POINTS` × n (200 × n) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, BOARD_WIDTH, BOARD_HEIGHT, SPAWN_COLUMN};
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! assert_eq!(SPAWN_COLUMN, 3);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column where the left edge of a freshly spawned piece's bounding box lands.
pub const SPAWN_COLUMN: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: one forced descent every 450ms
pub const GRAVITY_MS: u32 = 450;

/// Number of distinct piece colors. Valid color ids are `1..=COLOR_COUNT`.
pub const COLOR_COUNT: u8 = 6;

/// Number of shapes in the catalog.
pub const SHAPE_COUNT: usize = 7;

/// Points for one successful soft drop step.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points for the hard drop action itself (independent of distance).
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear bonus for gravity locks, indexed by rows cleared (0-4).
pub const GRAVITY_LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Per-row bonus for rows cleared by a hard drop lock.
pub const HARD_DROP_LINE_POINTS: u32 = 200;

/// A locked board cell: `0` is empty, `1..=COLOR_COUNT` is a locked color.
pub type ColorId = u8;

/// The empty cell value.
pub const EMPTY: ColorId = 0;


/// Game actions that can be applied to modify game state
///
/// Each discrete input event from the shell maps to exactly one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (+1 point when it moves)
    SoftDrop,
    /// Drop piece to its lowest valid row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Hold current piece (once per spawned piece)
    Hold,
    /// Restart the game (allowed at any time, including after game over)
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "hold" => Some(GameAction::Hold),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in log output)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Hold => "hold",
            GameAction::Restart => "restart",
        }
    }
}

/// Which path locked a piece. Line clear bonuses differ between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockSource {
    /// Gravity could not move the piece further down.
    Gravity,
    /// The player hard dropped the piece.
    HardDrop,
}

impl LockSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockSource::Gravity => "gravity",
            LockSource::HardDrop => "hardDrop",
        }
    }
}

/// Core-side event emitted after a piece locks.
///
/// The driver consumes it through `GameState::take_last_event` to trigger
/// optional sound or animation hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub source: LockSource,
    pub lines_cleared: u32,
    /// Line clear bonus only (drop points are not included).
    pub line_clear_score: u32,
    /// The piece spawned after this lock did not fit.
    pub game_over: bool,
}
