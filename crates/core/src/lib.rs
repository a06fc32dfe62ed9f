//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted randomizer) produces identical games
//! - **Testable**: Unit tests for every rule, property tests for the board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for tick and action processing
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino footprints and the clockwise rotation
//! - [`piece`]: a shape placed on the board with a color
//! - [`board`]: 10x20 grid with collision detection, locking and line clearing
//! - [`game_state`]: active/next/held pieces, gravity, actions, scoring, game over
//! - [`rng`]: the injectable [`Randomizer`] and its implementations
//! - [`scoring`]: drop points and line clear bonuses
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every shape and every color is equally likely
//! - **Plain rotation**: clockwise only, no wall kicks
//! - **Gravity lock**: a piece locks as soon as gravity cannot move it
//! - **Hold**: swap the active piece once per spawned piece
//! - **Game over**: a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() >= 2); // Hard drop awards points
//! assert!(game.take_last_event().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time; the piece falls one row per `GRAVITY_MS` (450ms).

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{Randomizer, ScriptedRng, SimpleRng};
pub use scoring::{calculate_drop_score, line_clear_score};
pub use shapes::{catalog, rotate_clockwise, Shape, CATALOG};
pub use snapshot::GameSnapshot;
