//! A single match between two teams.
//!
//! `Game` owns the lifecycle (`NotStarted -> InProgress <-> HalfTime -> Finished`,
//! with `restart` taking a finished game back to `InProgress`), the per-team
//! score and lineup maps, the ordered update list and the match clock.

pub mod clock;

use crate::error::ScoreboardError;
use crate::models::{Player, Team, Update, Venue};
use chrono::{DateTime, Utc};
use clock::{SharedClock, SystemClock, whole_minutes_between};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Lifecycle phase of a game, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    HalfTime,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameStatus::NotStarted => "not started",
            GameStatus::InProgress => "in progress",
            GameStatus::HalfTime => "half-time",
            GameStatus::Finished => "finished",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    id: String,
    home_team: Team,
    away_team: Team,
    venue: Option<Venue>,
    scores: HashMap<String, u32>,
    line_ups: HashMap<String, Vec<Player>>,
    updates: Vec<Update>,
    started: bool,
    finished: bool,
    half_time: bool,
    start_time: Option<DateTime<Utc>>,
    half_time_start: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    total_minutes: u32,
    clock: SharedClock,
}

impl Game {
    /// Creates a game timed by the system clock.
    ///
    /// Fails with `InvalidArgument` when both teams share the same id.
    pub fn new(id: impl Into<String>, home_team: Team, away_team: Team) -> Result<Self, ScoreboardError> {
        Self::with_clock(id, home_team, away_team, Arc::new(SystemClock))
    }

    /// Creates a game that reads the time from `clock`.
    pub fn with_clock(
        id: impl Into<String>,
        home_team: Team,
        away_team: Team,
        clock: SharedClock,
    ) -> Result<Self, ScoreboardError> {
        if home_team.id() == away_team.id() {
            return Err(ScoreboardError::invalid_argument(format!(
                "A game needs two different teams, got '{}' twice",
                home_team.id()
            )));
        }

        let scores = HashMap::from([
            (home_team.id().to_string(), 0),
            (away_team.id().to_string(), 0),
        ]);
        let line_ups = HashMap::from([
            (home_team.id().to_string(), Vec::new()),
            (away_team.id().to_string(), Vec::new()),
        ]);

        Ok(Self {
            id: id.into(),
            home_team,
            away_team,
            venue: None,
            scores,
            line_ups,
            updates: Vec::new(),
            started: false,
            finished: false,
            half_time: false,
            start_time: None,
            half_time_start: None,
            end_time: None,
            total_minutes: 0,
            clock,
        })
    }

    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.venue = Some(venue);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn venue(&self) -> Option<&Venue> {
        self.venue.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished
        } else if self.half_time {
            GameStatus::HalfTime
        } else if self.started {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// True while the game has started and not yet finished, half-time included.
    pub fn is_on(&self) -> bool {
        self.started && !self.finished
    }

    pub fn is_half_time(&self) -> bool {
        self.half_time
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn half_time_start(&self) -> Option<DateTime<Utc>> {
        self.half_time_start
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn start(&mut self) -> Result<(), ScoreboardError> {
        if self.started && !self.finished {
            return Err(ScoreboardError::invalid_transition(
                "Can't start a game that has already started",
            ));
        }
        if self.finished {
            return Err(ScoreboardError::invalid_transition(
                "Can't start a game that has already finished",
            ));
        }

        self.started = true;
        self.start_time = Some(self.clock.now());
        tracing::debug!("Game {} started at {:?}", self.id, self.start_time);
        Ok(())
    }

    /// Pauses the match clock. Minutes played so far are banked.
    pub fn start_half_time(&mut self) -> Result<(), ScoreboardError> {
        if !self.started || self.finished || self.half_time {
            return Err(ScoreboardError::invalid_transition(
                "Game must be in progress and not in halftime to start halftime",
            ));
        }

        let now = self.clock.now();
        self.half_time = true;
        self.half_time_start = Some(now);
        self.bank_elapsed_minutes(now);
        self.start_time = None;
        tracing::debug!(
            "Game {} entered half-time after {} minutes",
            self.id,
            self.total_minutes
        );
        Ok(())
    }

    /// Resumes the match clock from now.
    pub fn end_half_time(&mut self) -> Result<(), ScoreboardError> {
        if !self.half_time || self.half_time_start.is_none() {
            return Err(ScoreboardError::invalid_transition(
                "Halftime has not started yet",
            ));
        }

        self.half_time = false;
        self.start_time = Some(self.clock.now());
        tracing::debug!("Game {} resumed after half-time", self.id);
        Ok(())
    }

    pub fn end(&mut self) -> Result<(), ScoreboardError> {
        if !self.started {
            return Err(ScoreboardError::invalid_transition(
                "Cannot end the game that has not started",
            ));
        }
        if self.half_time {
            return Err(ScoreboardError::invalid_transition(
                "Cannot end the game during halftime",
            ));
        }
        if self.finished {
            return Err(ScoreboardError::invalid_transition(
                "Cannot end the game that has ended",
            ));
        }

        let now = self.clock.now();
        self.finished = true;
        self.end_time = Some(now);
        self.bank_elapsed_minutes(now);
        tracing::debug!(
            "Game {} finished {}-{} after {} minutes",
            self.id,
            self.scores()[0],
            self.scores()[1],
            self.total_minutes
        );
        Ok(())
    }

    /// Replays a finished game from scratch: scores, updates and clock are reset
    /// and the game is immediately in progress again. Lineups are kept.
    pub fn restart(&mut self) -> Result<(), ScoreboardError> {
        if !self.finished {
            return Err(ScoreboardError::invalid_transition(
                "Can't restart a game that has not finished",
            ));
        }

        self.finished = false;
        self.started = true;
        self.start_time = Some(self.clock.now());
        self.end_time = None;
        self.updates.clear();
        for score in self.scores.values_mut() {
            *score = 0;
        }
        self.total_minutes = 0;
        self.half_time = false;
        self.half_time_start = None;
        tracing::debug!("Game {} restarted", self.id);
        Ok(())
    }

    /// Minutes played, excluding half-time.
    ///
    /// Frozen during half-time and after the final whistle.
    pub fn current_game_time(&self) -> u32 {
        if !self.started {
            return 0;
        }
        if self.half_time || self.finished {
            return self.total_minutes;
        }

        match self.start_time {
            Some(start) => self
                .total_minutes
                .saturating_add(whole_minutes_between(start, self.clock.now())),
            None => self.total_minutes,
        }
    }

    fn bank_elapsed_minutes(&mut self, now: DateTime<Utc>) {
        if let Some(start) = self.start_time {
            self.total_minutes = self
                .total_minutes
                .saturating_add(whole_minutes_between(start, now));
        }
    }

    /// Appends an update and returns every update so far, in insertion order.
    pub fn add_update(&mut self, update: Update) -> Result<&[Update], ScoreboardError> {
        if !self.is_on() {
            return Err(ScoreboardError::invalid_state(
                "Can't add an update to a game that is not on",
            ));
        }
        tracing::debug!("Game {} update: {}", self.id, update);
        self.updates.push(update);
        Ok(&self.updates)
    }

    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Replaces the lineup of `team_id`.
    ///
    /// Returns `false` and leaves every lineup untouched when the team is not
    /// playing in this game.
    pub fn add_line_up(&mut self, team_id: &str, players: Vec<Player>) -> bool {
        match self.line_ups.get_mut(team_id) {
            Some(line_up) => {
                *line_up = players;
                true
            }
            None => {
                tracing::debug!("Game {} has no team {team_id}, lineup ignored", self.id);
                false
            }
        }
    }

    /// Lineup of `team_id`, empty for teams not in this game.
    pub fn line_up(&self, team_id: &str) -> &[Player] {
        self.line_ups
            .get(team_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sets the score of `team_id` to `score`. This is an absolute value, not an increment.
    pub fn update_score(&mut self, team_id: &str, score: u32) -> Result<(), ScoreboardError> {
        if !self.started {
            return Err(ScoreboardError::invalid_state("Game has not started yet"));
        }
        if self.finished {
            return Err(ScoreboardError::invalid_state("Game has already finished"));
        }

        let slot = self
            .scores
            .get_mut(team_id)
            .ok_or_else(|| ScoreboardError::unknown_team(team_id))?;
        *slot = score;
        Ok(())
    }

    pub fn update_home_team_score(&mut self, score: u32) -> Result<(), ScoreboardError> {
        let team_id = self.home_team.id().to_string();
        self.update_score(&team_id, score)
    }

    pub fn update_away_team_score(&mut self, score: u32) -> Result<(), ScoreboardError> {
        let team_id = self.away_team.id().to_string();
        self.update_score(&team_id, score)
    }

    pub fn score(&self, team_id: &str) -> Option<u32> {
        self.scores.get(team_id).copied()
    }

    /// `[home, away]`
    pub fn scores(&self) -> [u32; 2] {
        [
            self.score(self.home_team.id()).unwrap_or_default(),
            self.score(self.away_team.id()).unwrap_or_default(),
        ]
    }

    pub fn total_score(&self) -> u32 {
        self.scores().iter().sum()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [home_score, away_score] = self.scores();
        write!(
            f,
            "{} {} vs {} {}",
            self.home_team.name(),
            home_score,
            away_score,
            self.away_team.name()
        )?;
        let minutes = self.current_game_time();
        if minutes > 0 {
            write!(f, " {minutes}'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::clock::ManualClock;
    use chrono::TimeZone;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 1, 14, 0, 0).unwrap()
    }

    fn mexico_canada(clock: &Arc<ManualClock>) -> Game {
        Game::with_clock(
            "game1",
            Team::new("mexico", vec![], "Mexico", "logo.png"),
            Team::new("canada", vec![], "Canada", "logo.png"),
            clock.clone(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_is_not_on() {
        let clock = ManualClock::shared(kickoff());
        let game = mexico_canada(&clock);
        assert!(!game.is_on());
        assert_eq!(game.status(), GameStatus::NotStarted);
        assert_eq!(game.scores(), [0, 0]);
        assert!(game.line_up("mexico").is_empty());
        assert!(game.line_up("canada").is_empty());
        assert!(game.venue().is_none());
    }

    #[test]
    fn test_same_team_twice_is_rejected() {
        let team = Team::new("mexico", vec![], "Mexico", "logo.png");
        let result = Game::new("game1", team.clone(), team);
        assert!(matches!(result, Err(ScoreboardError::InvalidArgument(_))));
    }

    #[test]
    fn test_with_venue() {
        let clock = ManualClock::shared(kickoff());
        let game = mexico_canada(&clock).with_venue(Venue::new("Azteca", "Mexico City", "Mexico"));
        assert_eq!(game.venue().map(|v| v.name()), Some("Azteca"));
    }

    #[test]
    fn test_start_records_start_time() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        assert!(game.is_on());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.start_time(), Some(kickoff()));
    }

    #[test]
    fn test_start_twice_fails() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        let error = game.start().unwrap_err();
        assert!(error.is_transition_error());
        assert_eq!(error.to_string(), "Can't start a game that has already started");
    }

    #[test]
    fn test_start_finished_game_fails_with_distinct_message() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        game.end().unwrap();
        let error = game.start().unwrap_err();
        assert!(error.is_transition_error());
        assert_eq!(error.to_string(), "Can't start a game that has already finished");
    }

    #[test]
    fn test_elapsed_minutes_is_zero_before_start() {
        let clock = ManualClock::shared(kickoff());
        let game = mexico_canada(&clock);
        clock.advance_minutes(30);
        assert_eq!(game.current_game_time(), 0);
    }

    #[test]
    fn test_elapsed_minutes_runs_live() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        clock.advance_minutes(12);
        assert_eq!(game.current_game_time(), 12);
        clock.advance(chrono::Duration::seconds(59));
        assert_eq!(game.current_game_time(), 12);
    }

    #[test]
    fn test_half_time_freezes_clock() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        clock.advance_minutes(45);
        game.start_half_time().unwrap();
        assert_eq!(game.status(), GameStatus::HalfTime);
        assert!(game.is_on());
        assert_eq!(game.start_time(), None);
        assert_eq!(game.half_time_start(), Some(kickoff() + chrono::Duration::minutes(45)));

        clock.advance_minutes(15);
        assert_eq!(game.current_game_time(), 45);

        game.end_half_time().unwrap();
        clock.advance_minutes(20);
        assert_eq!(game.current_game_time(), 65);
    }

    #[test]
    fn test_half_time_requires_running_game() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        assert!(game.start_half_time().unwrap_err().is_transition_error());

        game.start().unwrap();
        game.start_half_time().unwrap();
        let error = game.start_half_time().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Game must be in progress and not in halftime to start halftime"
        );
    }

    #[test]
    fn test_end_half_time_without_half_time_fails() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        let error = game.end_half_time().unwrap_err();
        assert!(error.is_transition_error());
        assert_eq!(error.to_string(), "Halftime has not started yet");
    }

    #[test]
    fn test_end_guards() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        assert_eq!(
            game.end().unwrap_err().to_string(),
            "Cannot end the game that has not started"
        );

        game.start().unwrap();
        game.start_half_time().unwrap();
        assert_eq!(
            game.end().unwrap_err().to_string(),
            "Cannot end the game during halftime"
        );

        game.end_half_time().unwrap();
        game.end().unwrap();
        assert_eq!(
            game.end().unwrap_err().to_string(),
            "Cannot end the game that has ended"
        );
    }

    #[test]
    fn test_end_freezes_clock() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        clock.advance_minutes(90);
        game.end().unwrap();
        assert!(!game.is_on());
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.end_time(), Some(kickoff() + chrono::Duration::minutes(90)));

        clock.advance_minutes(30);
        assert_eq!(game.current_game_time(), 90);
    }

    #[test]
    fn test_restart_resets_game() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        game.update_score("mexico", 2).unwrap();
        game.add_update(Update::new("10", "Goal by Lozano.")).unwrap();
        clock.advance_minutes(90);
        game.end().unwrap();

        game.restart().unwrap();
        assert!(game.is_on());
        assert_eq!(game.scores(), [0, 0]);
        assert!(game.updates().is_empty());
        assert_eq!(game.current_game_time(), 0);
        assert_eq!(game.end_time(), None);

        clock.advance_minutes(5);
        assert_eq!(game.current_game_time(), 5);
    }

    #[test]
    fn test_restart_requires_finished_game() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        assert!(game.restart().unwrap_err().is_transition_error());
        game.start().unwrap();
        let error = game.restart().unwrap_err();
        assert_eq!(error.to_string(), "Can't restart a game that has not finished");
    }

    #[test]
    fn test_add_update_requires_game_on() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        let error = game.add_update(Update::new("1", "Kick-off")).unwrap_err();
        assert!(error.is_state_error());
        assert_eq!(error.to_string(), "Can't add an update to a game that is not on");
    }

    #[test]
    fn test_updates_keep_insertion_order() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        game.add_update(Update::new("90", "Foul by Vini Jr.")).unwrap();
        let updates = game.add_update(Update::new("70", "Goal by Pablo Gavi.")).unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].to_string(), "90: Foul by Vini Jr.");
        assert_eq!(updates[1].to_string(), "70: Goal by Pablo Gavi.");
    }

    #[test]
    fn test_add_line_up() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        let players = vec![Player::new("Alphonso", "Davies"), Player::new("Jonathan", "David")];
        assert!(game.add_line_up("canada", players.clone()));
        assert_eq!(game.line_up("canada"), players.as_slice());
        assert!(game.line_up("mexico").is_empty());
    }

    #[test]
    fn test_add_line_up_for_foreign_team_is_rejected() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        let players = vec![Player::new("Lionel Messi", "Forward")];
        assert!(!game.add_line_up("random", players));
        assert!(game.line_up("mexico").is_empty());
        assert!(game.line_up("canada").is_empty());
        assert!(game.line_up("random").is_empty());
    }

    #[test]
    fn test_update_score() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        game.update_score("mexico", 1).unwrap();
        game.update_score("canada", 2).unwrap();
        assert_eq!(game.score("mexico"), Some(1));
        assert_eq!(game.score("canada"), Some(2));
        assert_eq!(game.total_score(), 3);

        game.update_score("mexico", 0).unwrap();
        assert_eq!(game.scores(), [0, 2]);
    }

    #[test]
    fn test_update_score_before_start_fails() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        let error = game.update_score("mexico", 1).unwrap_err();
        assert!(error.is_state_error());
        assert_eq!(error.to_string(), "Game has not started yet");
    }

    #[test]
    fn test_update_score_after_end_fails() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        game.end().unwrap();
        let error = game.update_away_team_score(1).unwrap_err();
        assert_eq!(error.to_string(), "Game has already finished");
    }

    #[test]
    fn test_update_score_unknown_team() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        game.start().unwrap();
        let error = game.update_score("brazil", 1).unwrap_err();
        assert_eq!(error, ScoreboardError::unknown_team("brazil"));
        assert_eq!(game.score("brazil"), None);
        assert_eq!(game.scores(), [0, 0]);
    }

    #[test]
    fn test_display_with_and_without_minutes() {
        let clock = ManualClock::shared(kickoff());
        let mut game = mexico_canada(&clock);
        assert_eq!(game.to_string(), "Mexico 0 vs 0 Canada");

        game.start().unwrap();
        game.update_home_team_score(1).unwrap();
        clock.advance_minutes(30);
        assert_eq!(game.to_string(), "Mexico 1 vs 0 Canada 30'");
    }
}
