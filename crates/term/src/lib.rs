//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer and the renderer flushes only what changed to the terminal.
//! Board cells are drawn two columns wide to roughly square them up.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{block_color, Cell, CellStyle, FrameBuffer, Rgb, BLOCK_PALETTE};
pub use game_view::{AnchorY, GameView, Viewport, GAME_OVER_HINT, GAME_OVER_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
