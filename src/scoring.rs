//! Consecutive home/away run scoring.
//!
//! The soft objective of the season: no team should play long unbroken
//! stretches of home (or away) games. For each team, the schedule's
//! games are ordered by date and reduced to an H/A marker sequence;
//! the longest run of identical markers beyond a threshold counts as
//! violations. Lower total is better; zero is ideal.
//!
//! Scoring is a pure read of the game collection, recomputed from
//! scratch on every call; the optimizer evaluates it once per
//! candidate swap.
//!
//! # Reference
//! de Werra (1981), "Scheduling in Sports" (home-away pattern breaks)

use std::collections::HashMap;

use crate::models::{Roster, Schedule};

/// Run length beyond which consecutive home or away games count as
/// violations.
pub const DEFAULT_RUN_THRESHOLD: u32 = 4;

/// Per-team consecutive-run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Team this report describes.
    pub team: String,
    /// Longest run of consecutive home games.
    pub max_home_run: u32,
    /// Longest run of consecutive away games.
    pub max_away_run: u32,
    /// Excess beyond the threshold, home and away summed.
    pub violations: u32,
}

/// Schedule-wide consecutive-run score.
///
/// Reports are kept in roster order, which makes worst-offender
/// selection deterministic under ties.
#[derive(Debug, Clone)]
pub struct ConsecutiveRunScore {
    /// One report per roster team, in roster order.
    pub reports: Vec<RunReport>,
    /// Sum of all teams' violation counts.
    pub total_violations: u32,
}

impl ConsecutiveRunScore {
    /// Scores a schedule against a run-length threshold.
    ///
    /// Games are ordered by date ascending; each team contributes an
    /// 'H' or 'A' marker per game, and a run longer than `threshold`
    /// adds its excess length to that team's violation count.
    pub fn calculate(schedule: &Schedule, roster: &Roster, threshold: u32) -> Self {
        let mut order: Vec<usize> = (0..schedule.games.len()).collect();
        order.sort_by_key(|&i| schedule.games[i].date);

        let mut sequences: HashMap<&str, Vec<bool>> = roster
            .teams
            .iter()
            .map(|t| (t.as_str(), Vec::new()))
            .collect();

        for &i in &order {
            let game = &schedule.games[i];
            if let Some(seq) = sequences.get_mut(game.home.as_str()) {
                seq.push(true);
            }
            if let Some(seq) = sequences.get_mut(game.away.as_str()) {
                seq.push(false);
            }
        }

        let mut reports = Vec::with_capacity(roster.team_count());
        let mut total_violations = 0;

        for team in &roster.teams {
            let sequence = &sequences[team.as_str()];
            let (max_home_run, max_away_run) = longest_runs(sequence);
            let violations = max_home_run.saturating_sub(threshold)
                + max_away_run.saturating_sub(threshold);
            total_violations += violations;
            reports.push(RunReport {
                team: team.clone(),
                max_home_run,
                max_away_run,
                violations,
            });
        }

        Self {
            reports,
            total_violations,
        }
    }

    /// Whether no team has any violation.
    pub fn is_clean(&self) -> bool {
        self.total_violations == 0
    }

    /// The team with the highest violation count, if any team has one.
    ///
    /// Ties resolve to the earliest roster position.
    pub fn worst_offender(&self) -> Option<&RunReport> {
        let mut worst: Option<&RunReport> = None;
        for report in &self.reports {
            if report.violations == 0 {
                continue;
            }
            if worst.is_none_or(|w| report.violations > w.violations) {
                worst = Some(report);
            }
        }
        worst
    }
}

/// Longest (home, away) runs in an H/A marker sequence.
fn longest_runs(sequence: &[bool]) -> (u32, u32) {
    let mut max_home = 0u32;
    let mut max_away = 0u32;
    let mut current_home = 0u32;
    let mut current_away = 0u32;

    for &is_home in sequence {
        if is_home {
            current_home += 1;
            current_away = 0;
            max_home = max_home.max(current_home);
        } else {
            current_away += 1;
            current_home = 0;
            max_away = max_away.max(current_away);
        }
    }

    (max_home, max_away)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Game;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    /// One game per day for the focus team, H/A per the markers;
    /// opponents are throwaway teams outside the roster's interest.
    fn schedule_from_markers(team: &str, markers: &[bool]) -> Schedule {
        let mut schedule = Schedule::new();
        for (i, &is_home) in markers.iter().enumerate() {
            let opponent = format!("Opp{i}");
            let round = i as u32 + 1;
            let game = if is_home {
                Game::new(team, opponent, round, date(round))
            } else {
                Game::new(opponent, team, round, date(round))
            };
            schedule.add_game(game);
        }
        schedule
    }

    #[test]
    fn test_longest_runs() {
        assert_eq!(longest_runs(&[]), (0, 0));
        assert_eq!(longest_runs(&[true, true, false]), (2, 1));
        assert_eq!(
            longest_runs(&[false, false, true, false, false, false]),
            (1, 3)
        );
    }

    #[test]
    fn test_five_home_games_is_one_violation() {
        let roster: Roster = ["Stars"].into_iter().collect();
        let schedule = schedule_from_markers("Stars", &[true; 5]);
        let score = ConsecutiveRunScore::calculate(&schedule, &roster, DEFAULT_RUN_THRESHOLD);
        assert_eq!(score.reports[0].max_home_run, 5);
        assert_eq!(score.reports[0].max_away_run, 0);
        assert_eq!(score.reports[0].violations, 1);
        assert_eq!(score.total_violations, 1);
    }

    #[test]
    fn test_runs_within_threshold_are_clean() {
        let roster: Roster = ["Stars"].into_iter().collect();
        let markers = [true, true, true, true, false, true, true];
        let schedule = schedule_from_markers("Stars", &markers);
        let score = ConsecutiveRunScore::calculate(&schedule, &roster, 4);
        assert_eq!(score.reports[0].max_home_run, 4);
        assert!(score.is_clean());
    }

    #[test]
    fn test_home_and_away_excess_both_count() {
        let roster: Roster = ["Stars"].into_iter().collect();
        // Six home then six away: excess 2 + 2 with threshold 4.
        let markers: Vec<bool> = (0..12).map(|i| i < 6).collect();
        let schedule = schedule_from_markers("Stars", &markers);
        let score = ConsecutiveRunScore::calculate(&schedule, &roster, 4);
        assert_eq!(score.reports[0].max_home_run, 6);
        assert_eq!(score.reports[0].max_away_run, 6);
        assert_eq!(score.reports[0].violations, 4);
    }

    #[test]
    fn test_sequence_follows_date_order_not_storage_order() {
        let roster: Roster = ["Stars"].into_iter().collect();
        // Stored away-game first but dated last: H,H,A in date order.
        let mut schedule = Schedule::new();
        schedule.add_game(Game::new("OppZ", "Stars", 3, date(9)));
        schedule.add_game(Game::new("Stars", "OppA", 1, date(1)));
        schedule.add_game(Game::new("Stars", "OppB", 2, date(5)));
        let score = ConsecutiveRunScore::calculate(&schedule, &roster, 1);
        assert_eq!(score.reports[0].max_home_run, 2);
        assert_eq!(score.reports[0].max_away_run, 1);
        assert_eq!(score.reports[0].violations, 1);
    }

    #[test]
    fn test_worst_offender_ties_resolve_to_roster_order() {
        let roster: Roster = ["First", "Second"].into_iter().collect();
        let mut schedule = schedule_from_markers("First", &[true; 5]);
        for game in schedule_from_markers("Second", &[false; 5]).games {
            schedule.add_game(game);
        }
        let score = ConsecutiveRunScore::calculate(&schedule, &roster, 4);
        assert_eq!(score.total_violations, 2);
        assert_eq!(score.worst_offender().unwrap().team, "First");
    }

    #[test]
    fn test_worst_offender_none_when_clean() {
        let roster: Roster = ["Stars"].into_iter().collect();
        let schedule = schedule_from_markers("Stars", &[true, false]);
        let score = ConsecutiveRunScore::calculate(&schedule, &roster, 4);
        assert!(score.worst_offender().is_none());
    }
}
