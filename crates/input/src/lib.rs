//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press is one discrete action; there is no auto-repeat handling here.

pub mod map;

pub use blockfall_types as types;

pub use map::{game_over_choice, handle_key_event, should_quit, GameOverChoice};
