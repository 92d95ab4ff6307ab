//! Season construction pipeline.
//!
//! Builds a valid season in three deterministic steps (circle-method
//! pairings, round-to-date assignment, greedy venue balancing), then
//! hands the result to the local-search optimizer and re-verifies the
//! hard invariants. Construction alone already satisfies every hard
//! constraint; optimization only improves the soft consecutive-run
//! objective.
//!
//! # Example
//!
//! ```
//! use chrono::{Days, NaiveDate};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_league::generator::{SeasonGenerator, SeasonRequest};
//! use u_league::models::{Roster, VenueCatalog};
//!
//! let roster: Roster = ["A", "B", "C", "D"].into_iter().collect();
//! let opening = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
//! let dates: Vec<NaiveDate> = (0..6)
//!     .map(|week| opening.checked_add_days(Days::new(week * 7)).unwrap())
//!     .collect();
//! let venues = VenueCatalog::new(
//!     vec!["Field 1".into(), "Field 2".into()],
//!     vec!["9:00 AM".into()],
//! );
//!
//! let request = SeasonRequest::new(roster, dates, venues);
//! let mut rng = SmallRng::seed_from_u64(42);
//! let plan = SeasonGenerator::new().generate(&request, &mut rng).unwrap();
//! assert_eq!(plan.schedule.game_count(), 12);
//! ```

mod dates;
mod pairing;
mod venues;

pub use dates::assign_round_dates;
pub use pairing::{generate_pairings, Pairing};
pub use venues::{assign_venues, VenueUsage};

use chrono::NaiveDate;
use rand::Rng;
use std::collections::HashSet;

use crate::error::{Result, ScheduleError};
use crate::models::{Roster, Schedule, VenueCatalog};
use crate::optimizer::{OptimizationOutcome, SwapOptimizer, DEFAULT_ITERATION_BUDGET};
use crate::scoring::{RunReport, DEFAULT_RUN_THRESHOLD};
use crate::validation::validate_schedule;

/// Input container for season generation.
#[derive(Debug, Clone)]
pub struct SeasonRequest {
    /// Ordered team list (must be even-sized).
    pub roster: Roster,
    /// Eligible play dates, in order, blackouts already removed.
    /// Needs at least 2·(N−1) entries.
    pub date_pool: Vec<NaiveDate>,
    /// Field/time-slot catalog; its product must equal N/2.
    pub venues: VenueCatalog,
}

impl SeasonRequest {
    /// Creates a new season request.
    pub fn new(roster: Roster, date_pool: Vec<NaiveDate>, venues: VenueCatalog) -> Self {
        Self {
            roster,
            date_pool,
            venues,
        }
    }
}

/// A generated season: the schedule plus its final quality report.
#[derive(Debug, Clone)]
pub struct SeasonPlan {
    /// Valid, venue-balanced, optimized schedule.
    pub schedule: Schedule,
    /// Per-team consecutive-run reports, in roster order.
    pub reports: Vec<RunReport>,
    /// Whether optimization eliminated every violation.
    pub outcome: OptimizationOutcome,
}

/// Season generation driver.
///
/// Holds the tunables (consecutive-run threshold, optimizer budget);
/// the league inputs arrive per call via [`SeasonRequest`], so one
/// process can generate any number of divisions.
#[derive(Debug, Clone)]
pub struct SeasonGenerator {
    run_threshold: u32,
    iteration_budget: u32,
}

impl SeasonGenerator {
    /// Creates a generator with default tunables.
    pub fn new() -> Self {
        Self {
            run_threshold: DEFAULT_RUN_THRESHOLD,
            iteration_budget: DEFAULT_ITERATION_BUDGET,
        }
    }

    /// Sets the consecutive-run threshold.
    pub fn with_run_threshold(mut self, threshold: u32) -> Self {
        self.run_threshold = threshold;
        self
    }

    /// Sets the optimizer's iteration budget.
    pub fn with_iteration_budget(mut self, budget: u32) -> Self {
        self.iteration_budget = budget;
        self
    }

    /// Generates a full season schedule.
    ///
    /// Pipeline: pairings → dates → venues → validate → optimize
    /// (which re-balances venues and re-validates internally).
    ///
    /// # Errors
    /// `Configuration` for invalid inputs (checked up front, no partial
    /// result); `InternalConsistency` if a hard invariant breaks mid
    /// pipeline, which the construction makes unreachable.
    pub fn generate<R: Rng>(&self, request: &SeasonRequest, rng: &mut R) -> Result<SeasonPlan> {
        self.check_request(request)?;

        let rounds = generate_pairings(&request.roster)?;
        let mut schedule = assign_round_dates(rounds, &request.date_pool)?;

        let skipped = assign_venues(&mut schedule, &request.venues);
        if !skipped.is_empty() {
            return Err(ScheduleError::InternalConsistency(format!(
                "Construction produced malformed rounds {skipped:?}"
            )));
        }

        if let Err(errors) = validate_schedule(&schedule, &request.roster) {
            let summary: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(ScheduleError::InternalConsistency(format!(
                "Constructed schedule violates hard constraints: {}",
                summary.join("; ")
            )));
        }

        let optimizer = SwapOptimizer::new()
            .with_run_threshold(self.run_threshold)
            .with_iteration_budget(self.iteration_budget);
        let optimized = optimizer.optimize(&schedule, &request.roster, &request.venues, rng)?;

        Ok(SeasonPlan {
            schedule: optimized.schedule,
            reports: optimized.score.reports,
            outcome: optimized.outcome,
        })
    }

    /// Validates the request before any construction work.
    fn check_request(&self, request: &SeasonRequest) -> Result<()> {
        let roster = &request.roster;
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

        let mut seen = HashSet::new();
        for team in &roster.teams {
            if !seen.insert(team.as_str()) {
                return Err(ScheduleError::Configuration(format!(
                    "Duplicate team name '{team}' on the roster"
                )));
            }
        }

        if request.date_pool.len() < roster.rounds_per_season() {
            return Err(ScheduleError::Configuration(format!(
                "Need {} play dates for {} teams, got {}",
                roster.rounds_per_season(),
                n,
                request.date_pool.len()
            )));
        }

        let venues = &request.venues;
        if venues.fields.is_empty() || venues.time_slots.is_empty() {
            return Err(ScheduleError::Configuration(
                "Venue catalog needs at least one field and one time slot".into(),
            ));
        }
        if venues.slot_count() != roster.games_per_round() {
            return Err(ScheduleError::Configuration(format!(
                "Venue catalog offers {} slots per round but {} teams need {}",
                venues.slot_count(),
                n,
                roster.games_per_round()
            )));
        }

        Ok(())
    }
}

impl Default for SeasonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn pool(len: usize) -> Vec<NaiveDate> {
        let opening = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
        (0..len)
            .map(|i| opening.checked_add_days(Days::new(i as u64 * 2)).unwrap())
            .collect()
    }

    fn twelve_team_request() -> SeasonRequest {
        SeasonRequest::new(
            (1..=12).map(|i| format!("Team {i}")).collect(),
            pool(25),
            VenueCatalog::new(
                vec!["Field 1".into(), "Field 2".into(), "Field 3".into()],
                vec!["9:00 AM".into(), "10:30 AM".into()],
            ),
        )
    }

    #[test]
    fn test_generates_full_valid_season() {
        let request = twelve_team_request();
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = SeasonGenerator::new().with_iteration_budget(500);
        let plan = generator.generate(&request, &mut rng).unwrap();

        assert_eq!(plan.schedule.game_count(), 132);
        assert_eq!(plan.schedule.round_numbers().len(), 22);
        assert!(validate_schedule(&plan.schedule, &request.roster).is_ok());
        assert!(plan.schedule.games.iter().all(|g| g.venue.is_some()));
        assert_eq!(plan.reports.len(), 12);
    }

    #[test]
    fn test_rounds_use_earliest_pool_dates() {
        let request = twelve_team_request();
        let mut rng = SmallRng::seed_from_u64(1);
        let generator = SeasonGenerator::new().with_iteration_budget(0);
        let plan = generator.generate(&request, &mut rng).unwrap();

        let expected: Vec<NaiveDate> = request.date_pool[..22].to_vec();
        assert_eq!(plan.schedule.dates(), expected);
    }

    #[test]
    fn test_odd_roster_is_a_configuration_error() {
        let mut request = twelve_team_request();
        request.roster.teams.pop();
        let mut rng = SmallRng::seed_from_u64(0);
        let err = SeasonGenerator::new()
            .generate(&request, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_duplicate_team_is_a_configuration_error() {
        let mut request = twelve_team_request();
        request.roster.teams[3] = request.roster.teams[0].clone();
        let mut rng = SmallRng::seed_from_u64(0);
        let err = SeasonGenerator::new()
            .generate(&request, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_short_date_pool_is_a_configuration_error() {
        let mut request = twelve_team_request();
        request.date_pool.truncate(21);
        let mut rng = SmallRng::seed_from_u64(0);
        let err = SeasonGenerator::new()
            .generate(&request, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_catalog_size_mismatch_is_a_configuration_error() {
        let mut request = twelve_team_request();
        request.venues.fields.pop();
        let mut rng = SmallRng::seed_from_u64(0);
        let err = SeasonGenerator::new()
            .generate(&request, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
    }

    #[test]
    fn test_four_team_season() {
        let request = SeasonRequest::new(
            ["A", "B", "C", "D"].into_iter().collect(),
            pool(6),
            VenueCatalog::new(
                vec!["Field 1".into(), "Field 2".into()],
                vec!["9:00 AM".into()],
            ),
        );
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = SeasonGenerator::new().with_iteration_budget(100);
        let plan = generator.generate(&request, &mut rng).unwrap();

        assert_eq!(plan.schedule.game_count(), 12);
        assert!(validate_schedule(&plan.schedule, &request.roster).is_ok());
    }

    #[test]
    fn test_plan_serializes() {
        let request = twelve_team_request();
        let mut rng = SmallRng::seed_from_u64(9);
        let generator = SeasonGenerator::new().with_iteration_budget(0);
        let plan = generator.generate(&request, &mut rng).unwrap();

        let json = serde_json::to_string(&plan.schedule).unwrap();
        let restored: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.games, plan.schedule.games);
    }
}
