//! Read-only view of a game for renderers.
//!
//! A [`Frame`] borrows the grid and pieces, so taking one per draw costs no
//! copies.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::types::Phase;

/// Everything a renderer needs to draw one frame, borrowed from the game.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub current: &'a Piece,
    pub next: &'a Piece,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: Phase,
    pub play_time_ms: u64,
}

impl Frame<'_> {
    /// Play time as `MM:SS`
    pub fn play_time_label(&self) -> String {
        let secs = self.play_time_ms / 1000;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
