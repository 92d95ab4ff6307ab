//! Hard-constraint validation for season schedules.
//!
//! Re-derives every check directly from the game collection; no
//! cached counts are trusted. Detects:
//! - Wrong total game count (must be N·(N−1))
//! - Teams playing the wrong number of games (2·(N−1), half at home)
//! - Ordered pairs hosted more or less than exactly once
//! - A team appearing twice within one round
//! - Games naming teams outside the roster
//!
//! Cheap enough (O(N²) in the team count) to run after every accepted
//! optimizer move.

use std::collections::HashMap;

use crate::models::{Roster, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of hard-constraint violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Total game count is not N·(N−1).
    GameCount,
    /// A team's total, home, or away game count is off.
    TeamGameCount,
    /// An ordered (home, away) pair occurs zero or multiple times.
    PairingCount,
    /// A team appears more than once in a single round.
    RoundClash,
    /// A game names a team not on the roster.
    UnknownTeam,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule against the hard season invariants.
///
/// Checks:
/// 1. Exactly N·(N−1) games exist.
/// 2. Each roster team plays 2·(N−1) games: N−1 home, N−1 away.
/// 3. Every ordered pair (A, B) of distinct teams is hosted exactly once.
/// 4. No team appears twice within any round.
///
/// All violations are collected; the check never stops at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_schedule(schedule: &Schedule, roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();
    let n = roster.team_count();

    if schedule.game_count() != roster.season_game_count() {
        errors.push(ValidationError::new(
            ValidationErrorKind::GameCount,
            format!(
                "Expected {} games, found {}",
                roster.season_game_count(),
                schedule.game_count()
            ),
        ));
    }

    // Games referencing teams outside the roster.
    for game in &schedule.games {
        for team in [&game.home, &game.away] {
            if !roster.contains(team) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeam,
                    format!("Game in round {} names unknown team '{team}'", game.round),
                ));
            }
        }
    }

    // Per-team home/away totals.
    let mut home_counts: HashMap<&str, usize> = HashMap::new();
    let mut away_counts: HashMap<&str, usize> = HashMap::new();
    for game in &schedule.games {
        *home_counts.entry(game.home.as_str()).or_insert(0) += 1;
        *away_counts.entry(game.away.as_str()).or_insert(0) += 1;
    }

    let per_side = n.saturating_sub(1);
    for team in &roster.teams {
        let home = home_counts.get(team.as_str()).copied().unwrap_or(0);
        let away = away_counts.get(team.as_str()).copied().unwrap_or(0);
        if home != per_side || away != per_side {
            errors.push(ValidationError::new(
                ValidationErrorKind::TeamGameCount,
                format!(
                    "{team} plays {home} home / {away} away games instead of {per_side} each"
                ),
            ));
        }
    }

    // Ordered-pair counts: every (home, away) pair exactly once.
    let mut pair_counts: HashMap<(&str, &str), usize> = HashMap::new();
    for game in &schedule.games {
        *pair_counts
            .entry((game.home.as_str(), game.away.as_str()))
            .or_insert(0) += 1;
    }

    for home in &roster.teams {
        for away in &roster.teams {
            if home == away {
                continue;
            }
            let count = pair_counts
                .get(&(home.as_str(), away.as_str()))
                .copied()
                .unwrap_or(0);
            if count != 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PairingCount,
                    format!("{home} hosts {away} {count} times instead of once"),
                ));
            }
        }
    }

    // No team twice within a round.
    let mut round_teams: HashMap<u32, HashMap<&str, usize>> = HashMap::new();
    for game in &schedule.games {
        let teams = round_teams.entry(game.round).or_default();
        *teams.entry(game.home.as_str()).or_insert(0) += 1;
        *teams.entry(game.away.as_str()).or_insert(0) += 1;
    }

    let mut rounds: Vec<u32> = round_teams.keys().copied().collect();
    rounds.sort_unstable();
    for round in rounds {
        let teams = &round_teams[&round];
        for team in &roster.teams {
            let count = teams.get(team.as_str()).copied().unwrap_or(0);
            if count > 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoundClash,
                    format!("Round {round}: {team} appears {count} times"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
