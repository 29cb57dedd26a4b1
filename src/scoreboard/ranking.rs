//! Report ordering.
//!
//! Games are ordered by descending total score. On equal totals the game
//! registered later is shown first, so a fresh tie climbs above older ones.

use crate::game::Game;

/// Orders `games` (given in registration order) for the score report.
pub fn rank_by_total_score<'a, I>(games: I) -> Vec<&'a Game>
where
    I: DoubleEndedIterator<Item = &'a Game>,
{
    let mut ranked: Vec<&Game> = games.rev().collect();
    // Stable sort keeps the reversed registration order inside each tie.
    ranked.sort_by(|a, b| b.total_score().cmp(&a.total_score()));
    ranked
}
