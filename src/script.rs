//! Match scripts: a TOML description of teams, games and timed events that is
//! replayed against a [`ManualClock`] to produce a scoreboard.
//!
//! ```toml
//! start = "2021-01-01T20:00:00Z"
//! report_at = 30
//!
//! [[teams]]
//! id = "spain"
//! name = "Spain"
//!
//! [[teams]]
//! id = "brazil"
//! name = "Brazil"
//!
//! [[games]]
//! id = "game1"
//! home = "spain"
//! away = "brazil"
//!
//! [[events]]
//! at = 0
//! game = "game1"
//! action = "start"
//!
//! [[events]]
//! at = 12
//! game = "game1"
//! action = "score"
//! score = [1, 0]
//! ```

use crate::error::{AppError, ScoreboardError};
use crate::game::Game;
use crate::game::clock::{ManualClock, SharedClock};
use crate::models::{Player, Team, Update, Venue};
use crate::scoreboard::{EndedGamePolicy, ScoreBoard};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchScript {
    /// RFC 3339 time of minute 0. Defaults to the current time.
    #[serde(default)]
    pub start: Option<String>,
    /// Minutes after `start` at which the report is taken. Defaults to the last event.
    #[serde(default)]
    pub report_at: Option<i64>,
    #[serde(default)]
    pub teams: Vec<TeamSpec>,
    #[serde(default)]
    pub games: Vec<GameSpec>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameSpec {
    pub id: String,
    pub home: String,
    pub away: String,
    #[serde(default)]
    pub venue: Option<Venue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEvent {
    /// Minutes after the script start.
    pub at: i64,
    pub game: String,
    #[serde(flatten)]
    pub action: ScriptAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    Start,
    StartHalfTime,
    EndHalfTime,
    End,
    Restart,
    Score { score: [i64; 2] },
    Update { time: String, text: String },
    LineUp { team: String, players: Vec<Player> },
}

impl ScriptAction {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptAction::Start => "start",
            ScriptAction::StartHalfTime => "start_half_time",
            ScriptAction::EndHalfTime => "end_half_time",
            ScriptAction::End => "end",
            ScriptAction::Restart => "restart",
            ScriptAction::Score { .. } => "score",
            ScriptAction::Update { .. } => "update",
            ScriptAction::LineUp { .. } => "line_up",
        }
    }
}

/// Result of a replay: the scoreboard and the clock its games read, standing
/// at the report time.
#[derive(Debug)]
pub struct Replay {
    pub board: ScoreBoard,
    pub clock: Arc<ManualClock>,
}

impl MatchScript {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }

    pub async fn load(path: &str) -> Result<Self, AppError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// Minute 0 of the script.
    pub fn start_time(&self) -> Result<DateTime<Utc>, AppError> {
        match &self.start {
            Some(start) => DateTime::parse_from_rfc3339(start)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| {
                    AppError::datetime_parse_error(format!(
                        "Failed to parse script start '{start}': {e}"
                    ))
                }),
            None => Ok(Utc::now()),
        }
    }

    /// Builds the scoreboard and applies every event in time order.
    ///
    /// Events sharing the same minute run in file order. The first failing
    /// game operation aborts the replay.
    pub fn replay(&self, policy: EndedGamePolicy) -> Result<Replay, AppError> {
        let start = self.start_time()?;
        let clock = ManualClock::shared(start);
        let mut board = ScoreBoard::with_policy(policy);

        let teams = self.build_teams()?;
        for spec in &self.games {
            board.add_game(Self::build_game(spec, &teams, clock.clone())?);
        }
        tracing::info!(
            "Replaying {} events over {} games from {start}",
            self.events.len(),
            board.len()
        );

        let mut order: Vec<usize> = (0..self.events.len()).collect();
        order.sort_by_key(|&i| self.events[i].at);

        for index in order {
            let event = &self.events[index];
            if event.at < 0 {
                return Err(AppError::script_error(format!(
                    "event #{index} has a negative time ({})",
                    event.at
                )));
            }
            if !self.games.iter().any(|g| g.id == event.game) {
                return Err(AppError::script_error(format!(
                    "event #{index} refers to unknown game '{}'",
                    event.game
                )));
            }

            let at = minutes_after(start, event.at).ok_or_else(|| {
                AppError::script_error(format!(
                    "event #{index} time {} is out of range",
                    event.at
                ))
            })?;
            clock.set(at);
            Self::apply(&mut board, event).map_err(|source| AppError::ScriptEvent {
                index,
                action: event.action.name(),
                game: event.game.clone(),
                source,
            })?;
        }

        if let Some(report_at) = self.report_at {
            let at = minutes_after(start, report_at).ok_or_else(|| {
                AppError::script_error(format!("report time {report_at} is out of range"))
            })?;
            clock.set(at);
        }

        Ok(Replay { board, clock })
    }

    fn build_teams(&self) -> Result<HashMap<&str, Team>, AppError> {
        let mut teams = HashMap::new();
        for spec in &self.teams {
            let team = Team::new(
                spec.id.as_str(),
                spec.players.clone(),
                spec.name.as_str(),
                spec.logo.as_str(),
            );
            if teams.insert(spec.id.as_str(), team).is_some() {
                return Err(AppError::script_error(format!(
                    "team '{}' is defined twice",
                    spec.id
                )));
            }
        }
        Ok(teams)
    }

    fn build_game(
        spec: &GameSpec,
        teams: &HashMap<&str, Team>,
        clock: SharedClock,
    ) -> Result<Game, AppError> {
        let team = |id: &str| {
            teams.get(id).cloned().ok_or_else(|| {
                AppError::script_error(format!("game '{}' refers to unknown team '{id}'", spec.id))
            })
        };

        let game = Game::with_clock(spec.id.as_str(), team(&spec.home)?, team(&spec.away)?, clock)?;
        Ok(match &spec.venue {
            Some(venue) => game.with_venue(venue.clone()),
            None => game,
        })
    }

    fn apply(board: &mut ScoreBoard, event: &ScriptEvent) -> Result<(), ScoreboardError> {
        let id = event.game.as_str();
        tracing::debug!("Minute {}: {} on {id}", event.at, event.action.name());

        match &event.action {
            ScriptAction::Start => board.start_game(id),
            ScriptAction::StartHalfTime => board.start_half_time(id),
            ScriptAction::EndHalfTime => board.end_half_time(id),
            ScriptAction::End => board.end_game(id),
            ScriptAction::Restart => board.restart_game(id),
            ScriptAction::Score { score } => board.update_score(id, *score),
            ScriptAction::Update { time, text } => match board.game_mut(id) {
                Some(game) => game
                    .add_update(Update::new(time.as_str(), text.as_str()))
                    .map(|_| ()),
                None => Ok(()),
            },
            ScriptAction::LineUp { team, players } => match board.game_mut(id) {
                Some(game) => {
                    if game.add_line_up(team, players.clone()) {
                        Ok(())
                    } else {
                        Err(ScoreboardError::unknown_team(team.as_str()))
                    }
                }
                None => Ok(()),
            },
        }
    }
}

/// `start` moved forward by `minutes`, or `None` when chrono cannot represent it.
fn minutes_after(start: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    start.checked_add_signed(Duration::try_minutes(minutes)?)
}
