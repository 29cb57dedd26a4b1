use crate::game::Game;
use crate::game::clock::ManualClock;
use crate::models::{Player, Team};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

/// Test utilities for creating teams, games and a controllable clock
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Fixed kick-off time used by every builder: 2021-01-01 20:00 UTC
    pub fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 1, 20, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("kick-off 2021-01-01 20:00 UTC is not a valid time"))
    }

    /// Creates a manual clock standing at [`TestDataBuilder::kickoff`]
    pub fn clock() -> Arc<ManualClock> {
        ManualClock::shared(Self::kickoff())
    }

    /// Creates a team whose display name is the id with a capitalized first letter
    pub fn team(id: &str) -> Team {
        Team::new(id, vec![], capitalize(id), "logo.png")
    }

    /// Creates a team with a roster
    pub fn team_with_players(id: &str, players: &[(&str, &str)]) -> Team {
        let players = players
            .iter()
            .map(|(first, last)| Player::new(*first, *last))
            .collect();
        Team::new(id, players, capitalize(id), "logo.png")
    }

    /// Creates a not-yet-started game with id `"<home>-<away>"`
    ///
    /// # Panics
    /// When `home` and `away` are equal.
    pub fn game(home: &str, away: &str, clock: &Arc<ManualClock>) -> Game {
        Game::with_clock(
            format!("{home}-{away}"),
            Self::team(home),
            Self::team(away),
            clock.clone(),
        )
        .unwrap_or_else(|e| panic!("invalid test game {home}-{away}: {e}"))
    }

    /// Creates a game and starts it at the clock's current time
    pub fn started_game(home: &str, away: &str, clock: &Arc<ManualClock>) -> Game {
        let mut game = Self::game(home, away, clock);
        if let Err(e) = game.start() {
            panic!("failed to start test game {home}-{away}: {e}");
        }
        game
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
