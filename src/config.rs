//! Runtime configuration from `BLOCKFALL_*` environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKFALL_SEED` | randomizer seed | wall clock |
//! | `BLOCKFALL_LEVEL_POLICY` | `score`, `lines` or `lines:N` | `score` |
//! | `BLOCKFALL_RANDOMIZER` | `uniform` or `bag` | `uniform` |
//! | `BLOCKFALL_COLS` / `BLOCKFALL_ROWS` | grid size | 10 x 20 |
//! | `BLOCKFALL_SCORES` | high-score file | `blockfall-scores.json` |
//! | `BLOCKFALL_LOG` | log file; logging is off when unset | - |
//!
//! Empty values count as unset.

use std::env;
use std::path::PathBuf;

use crate::core::{ConfigError, GameConfig, LevelPolicy, Randomizer};

pub const DEFAULT_SCORES_PATH: &str = "blockfall-scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub scores_path: PathBuf,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. The resulting game config is validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut game = GameConfig::default().with_seed(clock_seed());

        if let Some(v) = get("BLOCKFALL_SEED") {
            game.seed = parse_num("BLOCKFALL_SEED", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_LEVEL_POLICY") {
            game.level_policy =
                LevelPolicy::from_str(&v).ok_or_else(|| invalid("BLOCKFALL_LEVEL_POLICY", &v))?;
        }
        if let Some(v) = get("BLOCKFALL_RANDOMIZER") {
            game.randomizer =
                Randomizer::from_str(&v).ok_or_else(|| invalid("BLOCKFALL_RANDOMIZER", &v))?;
        }
        if let Some(v) = get("BLOCKFALL_COLS") {
            game.cols = parse_num("BLOCKFALL_COLS", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_ROWS") {
            game.rows = parse_num("BLOCKFALL_ROWS", &v)?;
        }
        game.validate()?;

        let scores_path = get("BLOCKFALL_SCORES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));
        let log_path = get("BLOCKFALL_LOG").map(PathBuf::from);

        Ok(Self {
            game,
            scores_path,
            log_path,
        })
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_num<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid(key, value))
}

fn clock_seed() -> u32 {
    let now = chrono::Utc::now();
    (now.timestamp() as u32) ^ now.timestamp_subsec_nanos()
}
