//! Game state module - the engine
//!
//! Ties the grid, pieces, randomizer and scoring together into one state
//! machine:
//!
//! ```text
//!            TogglePause                 no room for next piece
//!  Running <-------------> Paused     Running ----------------> GameOver
//!     ^                                                            |
//!     +------------------------- Restart --------------------------+
//! ```
//!
//! Gravity and soft drops share one step: move the piece down a row, or, if
//! it cannot move, lock it, clear rows, score, level up and spawn the next
//! piece. Rejected moves and rotations are silent no-ops.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::events::{ClearedRows, GameEvent};
use crate::frame::Frame;
use crate::grid::Grid;
use crate::pieces::{collides, rotate, Piece, MAX_SHAPE_SIDE};
use crate::rng::PieceSource;
use crate::scoring::{drop_interval_ms, line_clear_score};
use crate::types::{Command, Phase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    current: Piece,
    next: Piece,
    source: PieceSource,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Time since the last gravity step
    drop_counter_ms: u32,
    /// Time spent running (pauses excluded)
    play_time_ms: u64,
    phase: Phase,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a new game
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        Ok(Self::start(config, grid))
    }

    /// Start a new game on the standard grid with default rules
    pub fn with_seed(seed: u32) -> Self {
        Self::start(GameConfig::default().with_seed(seed), Grid::standard())
    }

    fn start(config: GameConfig, grid: Grid) -> Self {
        let mut source = PieceSource::new(config.randomizer, config.seed);
        let current = Piece::spawn(source.next_kind(), grid.width());
        let next = Piece::spawn(source.next_kind(), grid.width());
        Self::assemble(config, grid, current, next, source)
    }

    /// Resume from an arbitrary position: a prepared grid and the pieces in
    /// play. The grid's size overrides the configured one.
    ///
    /// Pieces are taken as given, even if `current` already overlaps the
    /// grid; the next drop then ends the game. A grid that already has full
    /// rows is rejected, so every later clear is completed by one piece.
    pub fn from_parts(
        config: GameConfig,
        grid: Grid,
        current: Piece,
        next: Piece,
    ) -> Result<Self, ConfigError> {
        let config = config.with_size(grid.width(), grid.height());
        config.validate()?;
        let full = grid.find_full_rows().len();
        if full > 0 {
            return Err(ConfigError::FullRows { count: full });
        }
        let source = PieceSource::new(config.randomizer, config.seed);
        Ok(Self::assemble(config, grid, current, next, source))
    }

    fn assemble(
        config: GameConfig,
        grid: Grid,
        current: Piece,
        next: Piece,
        source: PieceSource,
    ) -> Self {
        Self {
            config,
            grid,
            current,
            next,
            source,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: drop_interval_ms(1),
            drop_counter_ms: 0,
            play_time_ms: 0,
            phase: Phase::Running,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn play_time_ms(&self) -> u64 {
        self.play_time_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Borrowed view for a renderer
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid: &self.grid,
            current: &self.current,
            next: &self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            phase: self.phase,
            play_time_ms: self.play_time_ms,
        }
    }

    /// Events queued since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match (self.phase, command) {
            (_, Command::Restart) => {
                self.restart();
                true
            }
            (Phase::GameOver, _) => false,
            (Phase::Running, Command::TogglePause) => {
                self.phase = Phase::Paused;
                debug!("paused");
                true
            }
            (Phase::Paused, Command::TogglePause) => {
                self.phase = Phase::Running;
                debug!("resumed");
                true
            }
            (Phase::Paused, _) => false,
            (Phase::Running, Command::MoveLeft) => self.try_shift(-1),
            (Phase::Running, Command::MoveRight) => self.try_shift(1),
            (Phase::Running, Command::Rotate) => self.try_rotate(),
            (Phase::Running, Command::SoftDrop) => {
                self.drop_counter_ms = 0;
                self.step_down();
                true
            }
        }
    }

    /// Advance the clock. Runs one gravity step once the accumulated time
    /// reaches the drop interval. Returns whether a step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.play_time_ms = self.play_time_ms.saturating_add(elapsed_ms as u64);
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);

        if self.drop_counter_ms < self.drop_interval_ms {
            return false;
        }
        self.drop_counter_ms = 0;
        self.step_down();
        true
    }

    /// Throw the current game away and start over. The piece stream carries
    /// on, so the new game gets different pieces.
    pub fn restart(&mut self) {
        let width = self.grid.width();
        self.grid.clear();
        self.current = Piece::spawn(self.source.next_kind(), width);
        self.next = Piece::spawn(self.source.next_kind(), width);
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = drop_interval_ms(1);
        self.drop_counter_ms = 0;
        self.play_time_ms = 0;
        self.phase = Phase::Running;
        self.events.push(GameEvent::Restarted);
        info!("game restarted");
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        let candidate = self.current.moved(dx, 0);
        if collides(&candidate, &self.grid) {
            return false;
        }
        self.current = candidate;
        true
    }

    fn try_rotate(&mut self) -> bool {
        let rotated = rotate(&self.current, &self.grid);
        let changed = rotated != self.current;
        self.current = rotated;
        changed
    }

    /// Move down one row, or lock if the piece is resting.
    ///
    /// Returns true if the piece moved.
    fn step_down(&mut self) -> bool {
        let candidate = self.current.moved(0, 1);
        if !collides(&candidate, &self.grid) {
            self.current = candidate;
            return true;
        }
        self.lock_current();
        false
    }

    /// Lock, clear, score, then spawn or end the game
    fn lock_current(&mut self) {
        let piece = self.current;
        self.grid.lock(&piece);
        debug!(kind = %piece.kind, x = piece.x, y = piece.y, "piece locked");
        self.events.push(GameEvent::Locked {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
        });

        let full_rows = self.grid.find_full_rows();
        if !full_rows.is_empty() {
            let count = self.grid.clear_rows(&full_rows);
            let points = line_clear_score(count);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(count as u32);
            info!(count, points, score = self.score, lines = self.lines, "lines cleared");

            // Only the locked piece can complete a row, so at most
            // MAX_SHAPE_SIDE rows clear at once.
            let rows: ClearedRows = full_rows.iter().copied().take(MAX_SHAPE_SIDE).collect();
            self.events.push(GameEvent::LinesCleared {
                rows,
                count,
                points,
            });
            self.update_level();
        }

        // Locking in the spawn row, or leaving no room for the next piece,
        // ends the game.
        if piece.y <= 0 || collides(&self.next, &self.grid) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                play_time_ms = self.play_time_ms,
                "game over"
            );
            self.events.push(GameEvent::GameOver {
                score: self.score,
                lines: self.lines,
                level: self.level,
                play_time_ms: self.play_time_ms,
            });
            return;
        }

        self.current = self.next;
        self.next = Piece::spawn(self.source.next_kind(), self.grid.width());
    }

    fn update_level(&mut self) {
        let level = self
            .config
            .level_policy
            .level_for(self.score, self.lines)
            .max(self.level);
        if level == self.level {
            return;
        }
        self.level = level;
        self.drop_interval_ms = drop_interval_ms(level);
        info!(level, drop_interval_ms = self.drop_interval_ms, "level up");
        self.events.push(GameEvent::LevelUp {
            level,
            drop_interval_ms: self.drop_interval_ms,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
