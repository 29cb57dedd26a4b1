use crate::game::{Game, GameStatus};
use serde::Serialize;

/// One row of the score report in a serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub minutes: u32,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub updates: Vec<String>,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        let [home_score, away_score] = game.scores();
        Self {
            id: game.id().to_string(),
            home_team: game.home_team().name().to_string(),
            away_team: game.away_team().name().to_string(),
            home_score,
            away_score,
            minutes: game.current_game_time(),
            status: game.status(),
            venue: game.venue().map(|v| v.to_string()),
            updates: game.updates().iter().map(|u| u.to_string()).collect(),
        }
    }
}
