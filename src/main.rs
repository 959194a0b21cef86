//! Terminal Blockfall runner.
//!
//! Configuration comes from `BLOCKFALL_*` environment variables (see
//! [`blockfall::config`]). Logs go to `BLOCKFALL_LOG` when it is set and
//! nowhere otherwise, so they never garble the screen.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameState, HighScores};
use blockfall::input::TerminalInput;
use blockfall::term::TerminalRenderer;
use blockfall::{AppConfig, ScoreStore, Session};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    info!(
        seed = config.game.seed,
        cols = config.game.cols,
        rows = config.game.rows,
        randomizer = config.game.randomizer.as_str(),
        "starting"
    );

    let store = ScoreStore::new(&config.scores_path);
    let scores = store.load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable high scores");
        HighScores::new()
    });
    let game = GameState::new(config.game)?;
    let mut session = Session::new(game, scores).with_store(store);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = session.run(&mut TerminalInput::default(), &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
