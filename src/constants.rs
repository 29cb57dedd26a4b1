//! Application-wide constants
//!
//! Names, defaults and environment variable keys shared between the
//! library and the binary.

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "live_scoreboard";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "live_scoreboard.log";

/// Default log level for the crate's tracing target
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in the config file and the environment
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Environment variables that override config file values
pub mod env_vars {
    /// Overrides `log_file_path`
    pub const LOG_FILE: &str = "SCOREBOARD_LOG_FILE";

    /// Overrides `log_level`
    pub const LOG_LEVEL: &str = "SCOREBOARD_LOG_LEVEL";

    /// Overrides `ended_games` (`retain` or `remove`)
    pub const ENDED_GAMES: &str = "SCOREBOARD_ENDED_GAMES";
}
