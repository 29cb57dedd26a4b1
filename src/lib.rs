//! Live football scoreboard library
//!
//! Tracks in-progress matches with their scores, match clocks and textual
//! updates, and renders a ranked summary of every game on a scoreboard.
//!
//! # Examples
//!
//! ```rust
//! use live_scoreboard::game::Game;
//! use live_scoreboard::game::clock::ManualClock;
//! use live_scoreboard::models::Team;
//! use live_scoreboard::scoreboard::ScoreBoard;
//! use live_scoreboard::error::ScoreboardError;
//! use chrono::{TimeZone, Utc};
//!
//! fn main() -> Result<(), ScoreboardError> {
//!     let clock = ManualClock::shared(Utc.with_ymd_and_hms(2021, 1, 1, 20, 0, 0).unwrap());
//!     let spain = Team::new("spain", vec![], "Spain", "spain.png");
//!     let brazil = Team::new("brazil", vec![], "Brazil", "brazil.png");
//!
//!     let mut board = ScoreBoard::new();
//!     board.add_game(Game::with_clock("game1", spain, brazil, clock.clone())?);
//!     board.start_game("game1")?;
//!     board.update_score("game1", [1, 1])?;
//!
//!     clock.advance_minutes(10);
//!     assert_eq!(board.get_scores(), "Spain 1 vs 1 Brazil 10'");
//!     Ok(())
//! }
//! ```
//!
//! `Game` and `ScoreBoard` do no locking of their own; share them across
//! threads only behind your own synchronization.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod models;
pub mod scoreboard;
pub mod script;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, ScoreboardError};
pub use game::{Game, GameStatus};
pub use game::clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use models::{Player, Team, Update, Venue};
pub use scoreboard::{EndedGamePolicy, GameSummary, ScoreBoard};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
