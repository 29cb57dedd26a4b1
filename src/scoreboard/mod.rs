//! Registry of games and the ranked score report.

pub mod ranking;
pub mod summary;

use crate::error::ScoreboardError;
use crate::game::Game;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use ranking::rank_by_total_score;
pub use summary::GameSummary;

/// What happens to a game on the scoreboard once it has been ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndedGamePolicy {
    /// Keep the game in the report with its final score.
    #[default]
    Retain,
    /// Drop the game from the registry as soon as it ends.
    Remove,
}

impl FromStr for EndedGamePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(EndedGamePolicy::Retain),
            "remove" => Ok(EndedGamePolicy::Remove),
            other => Err(format!(
                "unknown ended game policy '{other}', expected 'retain' or 'remove'"
            )),
        }
    }
}

impl fmt::Display for EndedGamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndedGamePolicy::Retain => f.write_str("retain"),
            EndedGamePolicy::Remove => f.write_str("remove"),
        }
    }
}

/// Games keyed by id, in registration order.
///
/// Lifecycle calls for an id that is not registered are silent no-ops. Errors
/// raised by a registered game are passed through unchanged.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    games: IndexMap<String, Game>,
    ended_games: EndedGamePolicy,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(ended_games: EndedGamePolicy) -> Self {
        Self {
            games: IndexMap::new(),
            ended_games,
        }
    }

    pub fn ended_game_policy(&self) -> EndedGamePolicy {
        self.ended_games
    }

    /// Registers `game` under its id.
    ///
    /// A game already registered under the same id is replaced in place and
    /// returned.
    pub fn add_game(&mut self, game: Game) -> Option<Game> {
        let id = game.id().to_string();
        let replaced = self.games.insert(id.clone(), game);
        if replaced.is_some() {
            tracing::warn!("Game {id} was already on the scoreboard, replacing it");
        } else {
            tracing::debug!("Game {id} added to the scoreboard");
        }
        replaced
    }

    pub fn remove_game(&mut self, id: &str) -> Option<Game> {
        self.games.shift_remove(id)
    }

    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.get(id)
    }

    pub fn game_mut(&mut self, id: &str) -> Option<&mut Game> {
        self.games.get_mut(id)
    }

    /// Registered games in registration order.
    pub fn games(&self) -> impl DoubleEndedIterator<Item = &Game> {
        self.games.values()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn start_game(&mut self, id: &str) -> Result<(), ScoreboardError> {
        self.with_game(id, Game::start)
    }

    /// Ends the game and applies the ended-game policy.
    pub fn end_game(&mut self, id: &str) -> Result<(), ScoreboardError> {
        self.with_game(id, Game::end)?;
        if self.ended_games == EndedGamePolicy::Remove && self.remove_game(id).is_some() {
            tracing::debug!("Game {id} ended and removed from the scoreboard");
        }
        Ok(())
    }

    pub fn start_half_time(&mut self, id: &str) -> Result<(), ScoreboardError> {
        self.with_game(id, Game::start_half_time)
    }

    pub fn end_half_time(&mut self, id: &str) -> Result<(), ScoreboardError> {
        self.with_game(id, Game::end_half_time)
    }

    pub fn restart_game(&mut self, id: &str) -> Result<(), ScoreboardError> {
        self.with_game(id, Game::restart)
    }

    /// Sets both scores of a game as `[home, away]`.
    ///
    /// Negative scores are rejected before the game is looked up, so nothing is
    /// touched on failure.
    pub fn update_score(&mut self, id: &str, score: [i64; 2]) -> Result<(), ScoreboardError> {
        let [home_score, away_score] = score;
        let (Ok(home_score), Ok(away_score)) = (u32::try_from(home_score), u32::try_from(away_score))
        else {
            return Err(ScoreboardError::invalid_argument(
                "Score must be a positive number",
            ));
        };

        self.with_game(id, |game| {
            game.update_home_team_score(home_score)?;
            game.update_away_team_score(away_score)
        })
    }

    /// The report: one line per game, highest total score first.
    pub fn get_scores(&self) -> String {
        rank_by_total_score(self.games.values())
            .iter()
            .map(|game| game.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The report rows in the same order as [`ScoreBoard::get_scores`].
    pub fn summaries(&self) -> Vec<GameSummary> {
        rank_by_total_score(self.games.values())
            .into_iter()
            .map(GameSummary::from)
            .collect()
    }

    fn with_game<F>(&mut self, id: &str, action: F) -> Result<(), ScoreboardError>
    where
        F: FnOnce(&mut Game) -> Result<(), ScoreboardError>,
    {
        match self.games.get_mut(id) {
            Some(game) => action(game),
            None => {
                tracing::debug!("No game {id} on the scoreboard, ignoring");
                Ok(())
            }
        }
    }
}
