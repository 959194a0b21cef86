//! Events emitted by the engine.
//!
//! The engine never waits on rendering. Anything a host may want to react to
//! (flash cleared rows, log, record a high score) is queued here and drained
//! after each step with [`GameState::drain_events`](crate::GameState::drain_events).

use arrayvec::ArrayVec;

use crate::pieces::MAX_SHAPE_SIDE;
use crate::types::PieceKind;

/// Rows removed by one lock, top to bottom.
///
/// A single lock can complete at most as many rows as the tallest shape.
pub type ClearedRows = ArrayVec<usize, MAX_SHAPE_SIDE>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was written into the grid at its resting position
    Locked { kind: PieceKind, x: i32, y: i32 },
    /// Full rows were removed after a lock
    LinesCleared {
        rows: ClearedRows,
        count: usize,
        points: u32,
    },
    /// The level went up and gravity sped up
    LevelUp { level: u32, drop_interval_ms: u32 },
    /// No room for the next piece
    GameOver {
        score: u32,
        lines: u32,
        level: u32,
        play_time_ms: u64,
    },
    /// A fresh game replaced the old one
    Restarted,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Locked { .. } => "locked",
            GameEvent::LinesCleared { .. } => "lines_cleared",
            GameEvent::LevelUp { .. } => "level_up",
            GameEvent::GameOver { .. } => "game_over",
            GameEvent::Restarted => "restarted",
        }
    }
}
