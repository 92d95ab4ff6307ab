//! Game model.
//!
//! A game is the atomic scheduling unit: one home team hosting one away
//! team in a specific round, on a specific date, at a venue slot. Games
//! are created once by pairing generation; the date assigner, venue
//! balancer, and optimizer mutate their scheduling attributes in place.
//! The pairing itself (home/away) is never changed after creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::VenueSlot;

/// A single scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Hosting team.
    pub home: String,
    /// Visiting team.
    pub away: String,
    /// Round number (1-based, 1..=2·(N−1)).
    pub round: u32,
    /// Calendar date the round is played on.
    pub date: NaiveDate,
    /// Assigned (field, time slot), `None` until the balancer runs.
    pub venue: Option<VenueSlot>,
}

impl Game {
    /// Creates a game with no venue assigned yet.
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        round: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            round,
            date,
            venue: None,
        }
    }

    /// Whether the given team plays in this game.
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    /// Whether the given team is the hosting side.
    pub fn is_home(&self, team: &str) -> bool {
        self.home == team
    }

    /// The opposing team, if `team` plays in this game.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home == team {
            Some(&self.away)
        } else if self.away == team {
            Some(&self.home)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
    }

    #[test]
    fn test_game_new() {
        let game = Game::new("Stars", "Rebels", 3, sample_date());
        assert_eq!(game.home, "Stars");
        assert_eq!(game.away, "Rebels");
        assert_eq!(game.round, 3);
        assert!(game.venue.is_none());
    }

    #[test]
    fn test_involves() {
        let game = Game::new("Stars", "Rebels", 1, sample_date());
        assert!(game.involves("Stars"));
        assert!(game.involves("Rebels"));
        assert!(!game.involves("Clippers"));
    }

    #[test]
    fn test_opponent_of() {
        let game = Game::new("Stars", "Rebels", 1, sample_date());
        assert_eq!(game.opponent_of("Stars"), Some("Rebels"));
        assert_eq!(game.opponent_of("Rebels"), Some("Stars"));
        assert_eq!(game.opponent_of("Clippers"), None);
    }

    #[test]
    fn test_is_home() {
        let game = Game::new("Stars", "Rebels", 1, sample_date());
        assert!(game.is_home("Stars"));
        assert!(!game.is_home("Rebels"));
    }
}
