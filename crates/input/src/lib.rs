//! Terminal input module (engine-facing).
//!
//! Turns `crossterm` key and mouse events into [`crate::types::Command`]s.
//! The key map and the swipe detector are plain functions of their inputs;
//! only [`TerminalInput`] talks to the terminal.

pub mod gesture;
pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use gesture::SwipeDetector;
pub use map::{map_key, should_quit};
pub use source::TerminalInput;
