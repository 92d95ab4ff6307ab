//! Team roster model.
//!
//! The roster is the fixed, ordered list of teams participating in a
//! season. Its order is load-bearing: pairing generation, scoring
//! reports, and tie-breaking all iterate teams in roster order.
//!
//! # Reference
//! Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

use serde::{Deserialize, Serialize};

/// The ordered list of teams in a division.
///
/// A double round-robin season requires an even number of teams;
/// odd rosters are rejected at generation time (no bye policy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Team identifiers, in fixed order.
    pub teams: Vec<String>,
}

impl Roster {
    /// Creates a roster from an ordered team list.
    pub fn new(teams: Vec<String>) -> Self {
        Self { teams }
    }

    /// Number of teams (N).
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Whether a team is on the roster.
    pub fn contains(&self, team: &str) -> bool {
        self.teams.iter().any(|t| t == team)
    }

    /// Rounds in a double round-robin season: 2·(N−1).
    pub fn rounds_per_season(&self) -> usize {
        2 * self.team_count().saturating_sub(1)
    }

    /// Simultaneous games per round: N/2.
    pub fn games_per_round(&self) -> usize {
        self.team_count() / 2
    }

    /// Total games in the season: N·(N−1).
    pub fn season_game_count(&self) -> usize {
        let n = self.team_count();
        n * n.saturating_sub(1)
    }

    /// Games each team plays: 2·(N−1).
    pub fn games_per_team(&self) -> usize {
        self.rounds_per_season()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_counts() {
        let roster: Roster = ["A", "B", "C", "D"].into_iter().collect();
        assert_eq!(roster.team_count(), 4);
        assert_eq!(roster.rounds_per_season(), 6);
        assert_eq!(roster.games_per_round(), 2);
        assert_eq!(roster.season_game_count(), 12);
        assert_eq!(roster.games_per_team(), 6);
    }

    #[test]
    fn test_roster_twelve_teams() {
        let roster: Roster = (1..=12).map(|i| format!("Team {i}")).collect();
        assert_eq!(roster.rounds_per_season(), 22);
        assert_eq!(roster.games_per_round(), 6);
        assert_eq!(roster.season_game_count(), 132);
    }

    #[test]
    fn test_roster_contains() {
        let roster: Roster = ["A", "B"].into_iter().collect();
        assert!(roster.contains("A"));
        assert!(!roster.contains("Z"));
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::new(Vec::new());
        assert_eq!(roster.team_count(), 0);
        assert_eq!(roster.rounds_per_season(), 0);
        assert_eq!(roster.season_game_count(), 0);
    }
}
