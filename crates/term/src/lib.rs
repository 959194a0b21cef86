//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a framebuffer of styled characters which is then diffed and flushed to
//! the terminal, giving precise control over aspect ratio (two columns per
//! grid cell) without a widget toolkit.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: pure frame-to-framebuffer layout
//! - [`renderer`]: terminal setup, diffing and output

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
