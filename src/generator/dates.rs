//! Round-to-date assignment.
//!
//! Maps abstract round numbers onto an externally supplied, ordered
//! pool of eligible play dates: round i plays on the i-th pool date,
//! no gaps, no reuse. Which dates are eligible (weekday policy,
//! blackouts, practice days) is entirely the caller's concern; the
//! pool is consumed as given.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::models::{Game, Schedule};

use super::pairing::Pairing;

/// Builds the season schedule by assigning each round to a pool date.
///
/// Rounds are numbered from 1 in input order; round i receives
/// `date_pool[i − 1]`.
///
/// # Errors
/// `Configuration` if the pool is shorter than the round count, or if
/// a date repeats within the consumed prefix (a reused date would
/// merge two rounds in every date-ordered view of the schedule).
pub fn assign_round_dates(rounds: Vec<Vec<Pairing>>, date_pool: &[NaiveDate]) -> Result<Schedule> {
    if date_pool.len() < rounds.len() {
        return Err(ScheduleError::Configuration(format!(
            "Need {} play dates for {} rounds, got {}",
            rounds.len(),
            rounds.len(),
            date_pool.len()
        )));
    }

    let consumed = &date_pool[..rounds.len()];
    let mut seen = HashSet::new();
    for date in consumed {
        if !seen.insert(date) {
            return Err(ScheduleError::Configuration(format!(
                "Play date {date} appears more than once in the date pool"
            )));
        }
    }

    let mut schedule = Schedule::new();
    for (index, pairings) in rounds.into_iter().enumerate() {
        let round = index as u32 + 1;
        let date = consumed[index];
        for pairing in pairings {
            schedule.add_game(Game::new(pairing.home, pairing.away, round, date));
        }
    }

    Ok(schedule)
}
