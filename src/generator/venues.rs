//! Greedy venue balancing.
//!
//! # Algorithm
//!
//! Rounds are processed in ascending order. Within a round, each game
//! takes the cheapest unused slot, where a slot's cost is the sum of
//! both teams' prior games at its field plus both teams' prior games
//! at its time slot. Ties resolve to the catalog's slot enumeration
//! order. Counters update as each game is placed, so later rounds see
//! all earlier placements.
//!
//! The balancer runs once during construction and once more, from
//! fresh counters, after optimization: round swaps change which games
//! co-occur, which invalidates any earlier balance bookkeeping. Venue
//! assignments are round-local artifacts, not part of a game's
//! identity.
//!
//! # Complexity
//! O(R · S²) for R rounds and S slots per round.

use std::collections::HashMap;

use crate::models::{Game, Schedule, VenueCatalog, VenueSlot};

/// Per-team tallies of games played at each field and each time slot.
///
/// Drives the greedy assignment; can also be recomputed from a
/// finished schedule to report season-wide venue balance.
#[derive(Debug, Clone, Default)]
pub struct VenueUsage {
    field_counts: HashMap<String, HashMap<String, u32>>,
    time_counts: HashMap<String, HashMap<String, u32>>,
}

impl VenueUsage {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the tally from a schedule's assigned venues.
    ///
    /// Games without a venue are skipped.
    pub fn tally(schedule: &Schedule) -> Self {
        let mut usage = Self::new();
        for game in &schedule.games {
            if let Some(venue) = &game.venue {
                usage.record(game, venue);
            }
        }
        usage
    }

    /// Games a team has played at a field.
    pub fn field_count(&self, team: &str, field: &str) -> u32 {
        self.field_counts
            .get(team)
            .and_then(|counts| counts.get(field))
            .copied()
            .unwrap_or(0)
    }

    /// Games a team has played at a time slot.
    pub fn time_slot_count(&self, team: &str, time_slot: &str) -> u32 {
        self.time_counts
            .get(team)
            .and_then(|counts| counts.get(time_slot))
            .copied()
            .unwrap_or(0)
    }

    /// Combined prior-usage cost of placing `game` at `slot`: both
    /// teams' field counts plus both teams' time-slot counts.
    fn cost(&self, game: &Game, slot: &VenueSlot) -> u32 {
        self.field_count(&game.home, &slot.field)
            + self.field_count(&game.away, &slot.field)
            + self.time_slot_count(&game.home, &slot.time_slot)
            + self.time_slot_count(&game.away, &slot.time_slot)
    }

    /// Counts one game for both teams at the slot's field and time.
    fn record(&mut self, game: &Game, slot: &VenueSlot) {
        for team in [&game.home, &game.away] {
            *self
                .field_counts
                .entry(team.clone())
                .or_default()
                .entry(slot.field.clone())
                .or_insert(0) += 1;
            *self
                .time_counts
                .entry(team.clone())
                .or_default()
                .entry(slot.time_slot.clone())
                .or_insert(0) += 1;
        }
    }
}

/// Assigns a venue slot to every game, round by round, balancing each
/// team's season totals per field and per time slot.
///
/// A round whose game count differs from the catalog's slot count is
/// skipped untouched and returned in the skipped list; partial or
/// doubled-up slot assignments are worse than none. Construction never
/// produces such rounds; the check guards corrupted input.
pub fn assign_venues(schedule: &mut Schedule, catalog: &VenueCatalog) -> Vec<u32> {
    let slots = catalog.slots();
    let mut usage = VenueUsage::new();
    let mut skipped = Vec::new();

    for round in schedule.round_numbers() {
        let game_indices: Vec<usize> = (0..schedule.games.len())
            .filter(|&i| schedule.games[i].round == round)
            .collect();

        if game_indices.len() != slots.len() {
            tracing::warn!(
                "Round {round} has {} games, expected {}; venue assignment skipped",
                game_indices.len(),
                slots.len()
            );
            skipped.push(round);
            continue;
        }

        let mut used = vec![false; slots.len()];
        for &game_index in &game_indices {
            let game = &schedule.games[game_index];
            let mut best: Option<usize> = None;
            let mut best_cost = u32::MAX;

            for (slot_index, slot) in slots.iter().enumerate() {
                if used[slot_index] {
                    continue;
                }
                let cost = usage.cost(game, slot);
                if cost < best_cost {
                    best_cost = cost;
                    best = Some(slot_index);
                }
            }

            if let Some(slot_index) = best {
                used[slot_index] = true;
                let slot = slots[slot_index].clone();
                usage.record(&schedule.games[game_index], &slot);
                schedule.games[game_index].venue = Some(slot);
            }
        }
    }

    skipped
}
