//! Double round-robin pairing generation.
//!
//! # Algorithm
//!
//! Circle method: fix the first team in place and rotate the remaining
//! N−1 teams one position per round, moving the last rotating slot to
//! the front of the rotation. Each round pairs the fixed team against
//! the slot the rotation just filled and folds the remaining teams
//! together from the two ends inward. N−1 rounds cover every unordered
//! pair exactly once; mirroring home and away yields the second half.
//!
//! Deterministic, O(N²), no search or backtracking. The hard schedule
//! invariants hold by construction.
//!
//! # Reference
//! Kirkman (1847) round-robin construction; Kendall et al. (2010),
//! "Scheduling in sports: An annotated bibliography"

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::Roster;

/// One home/away pairing within a round, before dates and venues exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Hosting team.
    pub home: String,
    /// Visiting team.
    pub away: String,
}

/// Generates the season's pairings, partitioned into rounds.
///
/// Returns 2·(N−1) rounds of N/2 pairings each; rounds in the second
/// half mirror the first half with home and away swapped.
///
/// # Errors
/// `Configuration` for rosters with fewer than two teams or an odd
/// team count (no bye policy exists).
pub fn generate_pairings(roster: &Roster) -> Result<Vec<Vec<Pairing>>> {
    let n = roster.team_count();
    if n < 2 {
        return Err(ScheduleError::Configuration(format!(
            "A season needs at least two teams, got {n}"
        )));
    }
    if n % 2 != 0 {
        return Err(ScheduleError::Configuration(format!(
            "Double round-robin requires an even team count, got {n}; byes are unsupported"
        )));
    }

    let teams = &roster.teams;
    let mut order: Vec<usize> = (0..n).collect();
    let mut rounds: Vec<Vec<Pairing>> = Vec::with_capacity(2 * (n - 1));

    for _ in 0..n - 1 {
        let mut pairings = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            let (home, away) = if i == 0 {
                (order[0], order[1])
            } else {
                (order[i + 1], order[n - i])
            };
            pairings.push(Pairing {
                home: teams[home].clone(),
                away: teams[away].clone(),
            });
        }
        rounds.push(pairings);

        // Rotate: position 0 is fixed, the last slot moves to position 1.
        if let Some(last) = order.pop() {
            order.insert(1, last);
        }
    }

    // Second half: mirror home/away of the first.
    for r in 0..n - 1 {
        let mirrored = rounds[r]
            .iter()
            .map(|p| Pairing {
                home: p.away.clone(),
                away: p.home.clone(),
            })
            .collect();
        rounds.push(mirrored);
    }

    Ok(rounds)
}
