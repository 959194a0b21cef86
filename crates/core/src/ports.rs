//! Seams to the outside world.
//!
//! The engine knows nothing about terminals, keyboards or touch screens. A
//! host wires an [`InputSource`] and a [`Renderer`] around one
//! [`GameState`](crate::GameState) and shuttles commands and frames between
//! them.

use std::time::Duration;

use crate::frame::Frame;
use crate::types::Command;

/// What an input source can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Command(Command),
    /// The output surface changed size; redraw everything
    Resize,
    /// The player wants to leave
    Quit,
}

/// Produces commands, one at a time, in arrival order.
pub trait InputSource {
    type Error;

    /// Wait up to `timeout` for the next event.
    fn poll(&mut self, timeout: Duration) -> Result<Option<InputEvent>, Self::Error>;
}

/// Draws frames. Holds no game logic.
pub trait Renderer {
    type Error;

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;

    /// Drop any cached output so the next frame is drawn in full.
    fn invalidate(&mut self) {}

    /// The best recorded score changed. Renderers without a score panel
    /// can ignore this.
    fn show_best(&mut self, _best: Option<u32>) {}
}
