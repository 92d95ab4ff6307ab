//! League season scheduling for the U-Engine ecosystem.
//!
//! Generates double round-robin season schedules: every team hosts
//! every other team exactly once and visits it exactly once, games are
//! spread over a caller-supplied date pool and a fixed field/time-slot
//! catalog, and a local search keeps any team's consecutive home or
//! away games short.
//!
//! Generation is construct-then-improve: a deterministic circle-method
//! construction satisfies all hard constraints up front, and the
//! optimizer only ever applies swaps proven not to break them.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Roster`, `Game`, `Schedule`,
//!   `VenueCatalog`, `VenueSlot`
//! - **`generator`**: Construction pipeline and `SeasonGenerator`
//!   entry point — pairings, round dates, venue balancing
//! - **`scoring`**: Consecutive home/away run scoring
//! - **`optimizer`**: Swap-based local search over round assignments
//! - **`validation`**: Hard-invariant checks (game counts, pairings,
//!   round clashes)
//! - **`error`**: Error taxonomy
//!
//! # References
//!
//! - Kendall, Knust, Ribeiro & Urrutia (2010), "Scheduling in sports:
//!   An annotated bibliography"
//! - de Werra (1981), "Scheduling in Sports"
//! - Aarts & Lenstra (1997), "Local Search in Combinatorial Optimization"

pub mod error;
pub mod generator;
pub mod models;
pub mod optimizer;
pub mod scoring;
pub mod validation;
