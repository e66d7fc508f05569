// Library interface for mastermind
// This allows integration tests to drive the engine and the session loop

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;

pub use cli::{CliInterface, StartupOptions, parse_args};
pub use config::GameConfig;
pub use engine::{CodeEngine, ScoreResult, parse_digits};
pub use error::UsageError;
pub use game_state::{Feedback, GameInterface, GameState, SessionSummary, game_loop, is_quit};
