//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the host-side
//! pieces that tie them together: environment configuration, high-score
//! persistence and the session loop the `blockfall` binary runs.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod scores;
pub mod session;

pub use config::AppConfig;
pub use scores::ScoreStore;
pub use session::Session;
