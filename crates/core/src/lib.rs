//! Core game logic - pure, deterministic, and testable
//!
//! All the rules of the falling-block game live here: the grid, piece shapes
//! and collision, scoring and levels, the piece randomizer and the state
//! machine that ties them together. Nothing in this crate touches a terminal,
//! a clock or the filesystem; hosts drive it through [`GameState::apply`] and
//! [`GameState::tick`] and draw whatever [`GameState::frame`] hands back.
//!
//! # Module Structure
//!
//! - [`grid`]: the playfield of locked cells, row detection and compaction
//! - [`pieces`]: shapes, counter-clockwise rotation and collision
//! - [`scoring`]: line-clear points, level policies and gravity speed
//! - [`rng`]: seeded uniform and bag randomizers
//! - [`game_state`]: the engine
//! - [`events`]: what happened during a step, for hosts to react to
//! - [`highscore`]: the top-five table
//! - [`ports`]: input and renderer traits
//!
//! # Game Rules
//!
//! | Rule | Value |
//! |------|-------|
//! | Grid | 10 columns x 20 rows |
//! | Spawn | top row, horizontally centered |
//! | Rotation | counter-clockwise, no wall kicks |
//! | Line clears | 100 / 300 / 500 / 800 for 1-4 rows |
//! | Level | `score / 1000 + 1` (or one per N lines) |
//! | Gravity | 1000ms, 100ms faster per level, floor 100ms |
//!
//! The game ends when a piece locks touching the top row or the next piece
//! has no room to spawn.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{Command, Phase};
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::SoftDrop);
//!
//! // A second of game time pulls the piece down one more row.
//! for _ in 0..63 {
//!     game.tick(16);
//! }
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.current().y, 2);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod frame;
pub mod game_state;
pub mod grid;
pub mod highscore;
pub mod pieces;
pub mod ports;
pub mod rng;
pub mod scoring;

pub use blockfall_types as types;

pub use config::GameConfig;
pub use error::ConfigError;
pub use events::{ClearedRows, GameEvent};
pub use frame::Frame;
pub use game_state::GameState;
pub use grid::Grid;
pub use highscore::{HighScoreEntry, HighScores};
pub use pieces::{canonical_shape, collides, rotate, Piece, Shape};
pub use ports::{InputEvent, InputSource, Renderer};
pub use rng::{PieceSource, Randomizer, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_score, LevelPolicy};
