//! Game configuration.
//!
//! Everything here is checked once, when a [`GameState`](crate::GameState)
//! is built. After that the engine has no failure paths.

use crate::error::ConfigError;
use crate::grid::{Grid, MAX_GRID_SIDE};
use crate::rng::Randomizer;
use crate::scoring::LevelPolicy;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub level_policy: LevelPolicy,
    pub randomizer: Randomizer,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_WIDTH as usize,
            rows: BOARD_HEIGHT as usize,
            level_policy: LevelPolicy::default(),
            randomizer: Randomizer::default(),
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_level_policy(mut self, policy: LevelPolicy) -> Self {
        self.level_policy = policy;
        self
    }

    pub fn with_randomizer(mut self, randomizer: Randomizer) -> Self {
        self.randomizer = randomizer;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 || self.cols > MAX_GRID_SIDE || self.rows > MAX_GRID_SIDE
        {
            return Err(ConfigError::GridSize {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if let LevelPolicy::Lines { per_level: 0 } = self.level_policy {
            return Err(ConfigError::LinesPerLevel);
        }
        Ok(())
    }

    /// An empty grid of the configured size
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.cols, self.rows)
    }
}
