use thiserror::Error;

/// Errors raised by the game state machine and the scoreboard.
///
/// The display text is the bare message so reports and test expectations
/// can compare it directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// A lifecycle move that is not permitted from the current state.
    #[error("{0}")]
    InvalidTransition(String),

    /// The operation needs the game to be in a different lifecycle phase.
    #[error("{0}")]
    InvalidState(String),

    #[error("Team is not part of this game {team_id}")]
    UnknownTeam { team_id: String },

    /// A caller supplied value is out of range.
    #[error("{0}")]
    InvalidArgument(String),
}

impl ScoreboardError {
    /// Create an invalid transition error
    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an unknown team error
    pub fn unknown_team(team_id: impl Into<String>) -> Self {
        Self::UnknownTeam {
            team_id: team_id.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_transition_error(&self) -> bool {
        matches!(self, ScoreboardError::InvalidTransition(_))
    }

    pub fn is_state_error(&self) -> bool {
        matches!(self, ScoreboardError::InvalidState(_))
    }

    /// Check if the error was caused by bad caller input rather than game state
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ScoreboardError::UnknownTeam { .. } | ScoreboardError::InvalidArgument(_)
        )
    }
}

/// Application level errors for the scoreboard binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Match script error: {0}")]
    Script(String),

    #[error("Match script event #{index} ({action} on {game}) failed: {source}")]
    ScriptEvent {
        index: usize,
        action: &'static str,
        game: String,
        #[source]
        source: ScoreboardError,
    },

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a match script error with context
    pub fn script_error(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}
