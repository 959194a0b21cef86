//! The host loop: one game, its high scores, and the pipes to the outside.
//!
//! A [`Session`] is the single owner of a [`GameState`]. Each loop iteration
//! renders a frame, waits for input until the next tick is due, applies at
//! most one command, ticks the engine with the measured elapsed time and
//! then reacts to whatever events the engine queued.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::{GameEvent, GameState, HighScores, InputEvent, InputSource, Renderer};
use crate::scores::ScoreStore;
use crate::types::{Command, TICK_MS};

/// Date format of high-score entries
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct Session {
    game: GameState,
    scores: HighScores,
    store: Option<ScoreStore>,
}

impl Session {
    pub fn new(game: GameState, scores: HighScores) -> Self {
        Self {
            game,
            scores,
            store: None,
        }
    }

    /// Persist the table here after every recorded score
    pub fn with_store(mut self, store: ScoreStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    /// Apply one command and handle the resulting events.
    ///
    /// Returns true if the high-score table changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = self.game.apply(command);
        debug!(command = command.as_str(), changed, "command");
        self.handle_events()
    }

    /// Advance the clock and handle the resulting events.
    ///
    /// Returns true if the high-score table changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.game.tick(elapsed_ms);
        self.handle_events()
    }

    fn handle_events(&mut self) -> bool {
        let mut scores_changed = false;
        for event in self.game.drain_events() {
            match event {
                GameEvent::GameOver {
                    score,
                    lines,
                    level,
                    play_time_ms,
                } => {
                    info!(score, lines, level, play_time_ms, "final result");
                    scores_changed |= self.record(score);
                }
                GameEvent::Restarted => info!("new game"),
                other => debug!(event = other.name(), "game event"),
            }
        }
        scores_changed
    }

    fn record(&mut self, score: u32) -> bool {
        let date = chrono::Local::now().format(DATE_FORMAT).to_string();
        let Some(rank) = self.scores.record(score, date) else {
            return false;
        };
        info!(score, rank = rank + 1, "new high score");

        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.scores) {
                warn!(error = %e, path = %store.path().display(), "failed to save high scores");
            }
        }
        true
    }

    /// Run until the input source reports [`InputEvent::Quit`].
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<()>
    where
        I: InputSource,
        I::Error: Into<anyhow::Error>,
        R: Renderer,
        R::Error: Into<anyhow::Error>,
    {
        let tick = Duration::from_millis(TICK_MS as u64);
        let mut last_tick = Instant::now();
        renderer.show_best(self.scores.best());

        loop {
            renderer.render(&self.game.frame()).map_err(Into::into)?;

            let timeout = tick.saturating_sub(last_tick.elapsed());
            let mut scores_changed = match input.poll(timeout).map_err(Into::into)? {
                Some(InputEvent::Quit) => break,
                Some(InputEvent::Resize) => {
                    renderer.invalidate();
                    false
                }
                Some(InputEvent::Command(command)) => self.apply(command),
                None => false,
            };

            let elapsed = last_tick.elapsed();
            if elapsed >= tick {
                last_tick = Instant::now();
                scores_changed |= self.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
            }

            if scores_changed {
                renderer.show_best(self.scores.best());
            }
        }

        info!(score = self.game.score(), "session ended");
        Ok(())
    }
}
