//! Season schedule (solution) model.
//!
//! A schedule is the full ordered collection of games for one season.
//! Once construction completes it must always satisfy the hard
//! invariants checked by [`crate::validation::validate_schedule`]:
//! N·(N−1) games, every ordered team pair hosted exactly once, each
//! team in 2·(N−1) games, and no team twice within a round.
//!
//! The only sanctioned mutations after construction are venue
//! assignment and the optimizer's pairwise (round, date) swap, exposed
//! here as [`Schedule::swap_round_slots`] with its safety predicate
//! [`Schedule::can_swap_games`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Game;

/// A complete season schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// All games of the season.
    pub games: Vec<Game>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from a game list.
    pub fn with_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Adds a game.
    pub fn add_game(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Number of games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// All games a team plays, in storage order.
    pub fn games_for_team(&self, team: &str) -> Vec<&Game> {
        self.games.iter().filter(|g| g.involves(team)).collect()
    }

    /// All games in a round, in storage order.
    pub fn games_in_round(&self, round: u32) -> Vec<&Game> {
        self.games.iter().filter(|g| g.round == round).collect()
    }

    /// Distinct round numbers, ascending.
    pub fn round_numbers(&self) -> Vec<u32> {
        let mut rounds: Vec<u32> = self.games.iter().map(|g| g.round).collect();
        rounds.sort_unstable();
        rounds.dedup();
        rounds
    }

    /// Distinct play dates, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.games.iter().map(|g| g.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Whether swapping the (round, date) of games `a` and `b` keeps
    /// every affected round free of repeated teams.
    ///
    /// Swapping never touches home/away, so the pairing invariants are
    /// unaffected; only the no-team-twice-per-round invariant needs this
    /// guard. The swap is safe exactly when neither game's teams appear
    /// elsewhere in the other game's round.
    pub fn can_swap_games(&self, a: usize, b: usize) -> bool {
        let (ga, gb) = (&self.games[a], &self.games[b]);
        if ga.round == gb.round {
            return false;
        }

        for (i, game) in self.games.iter().enumerate() {
            if game.round == ga.round && i != a {
                if game.involves(&gb.home) || game.involves(&gb.away) {
                    return false;
                }
            } else if game.round == gb.round && i != b {
                if game.involves(&ga.home) || game.involves(&ga.away) {
                    return false;
                }
            }
        }
        true
    }

    /// Exchanges the round and date of games `a` and `b`.
    ///
    /// Venue assignments are left in place; they are round-local and
    /// re-balanced wholesale after optimization.
    pub fn swap_round_slots(&mut self, a: usize, b: usize) {
        let round = self.games[a].round;
        let date = self.games[a].date;
        self.games[a].round = self.games[b].round;
        self.games[a].date = self.games[b].date;
        self.games[b].round = round;
        self.games[b].date = date;
    }
}
