//! Swap-based local search over round assignments.
//!
//! # Algorithm
//!
//! Greedy hill-climbing with a randomized fallback:
//!
//! 1. Score the schedule; stop early once no team has a violation.
//! 2. Target the worst-offending team. For each of its games, look for
//!    a game in another round whose (round, date) can be exchanged
//!    without putting any team twice into either affected round.
//!    Apply the first such swap that strictly lowers the score;
//!    revert every swap that does not.
//! 3. If no targeted swap helps, try one uniformly random pair of
//!    games; keep it only if it beats the best score seen so far.
//! 4. Every new best is kept as an explicit cloned snapshot.
//!
//! After the budget (or an early success), venues are re-balanced from
//! fresh counters and the hard invariants are re-validated. Swaps only
//! exchange round and date, never the pairing set or the home/away
//! orientation, so only the no-team-twice-per-round invariant needs
//! guarding, which is what makes thousands of candidate evaluations
//! cheap. Strict improvement is required to avoid cycling between
//! equally-scored states.
//!
//! The random source is injected; seed it for reproducible runs.
//!
//! # Reference
//! Aarts & Lenstra (1997), "Local Search in Combinatorial Optimization"

use rand::Rng;

use crate::error::{Result, ScheduleError};
use crate::generator::assign_venues;
use crate::models::{Roster, Schedule, VenueCatalog};
use crate::scoring::{ConsecutiveRunScore, DEFAULT_RUN_THRESHOLD};
use crate::validation::validate_schedule;

/// Default iteration budget.
pub const DEFAULT_ITERATION_BUDGET: u32 = 10_000;

/// How the optimization run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationOutcome {
    /// Every team's consecutive runs are within the threshold.
    Optimal,
    /// The iteration budget ran out with violations remaining. The
    /// schedule is still valid, just not objective-optimal.
    BudgetExhausted,
}

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best schedule found, venues re-balanced, invariants verified.
    pub schedule: Schedule,
    /// Score of `schedule`.
    pub score: ConsecutiveRunScore,
    /// Whether the run ended optimal or out of budget.
    pub outcome: OptimizationOutcome,
    /// Number of times a new best score was found.
    pub improvements: u32,
    /// Iterations actually executed.
    pub iterations: u32,
}

/// Local-search optimizer for consecutive home/away runs.
#[derive(Debug, Clone)]
pub struct SwapOptimizer {
    run_threshold: u32,
    iteration_budget: u32,
}

impl SwapOptimizer {
    /// Creates an optimizer with the default threshold and budget.
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

    /// Sets the iteration budget.
    pub fn with_iteration_budget(mut self, budget: u32) -> Self {
        self.iteration_budget = budget;
        self
    }

    /// Optimizes a valid schedule, returning one that is still valid
    /// and scores no worse.
    ///
    /// The input is not mutated; the search works on an owned copy and
    /// snapshots the best schedule seen. A budget of zero returns the
    /// input schedule (venues re-balanced) unchanged in score.
    ///
    /// # Errors
    /// `InternalConsistency` if the final schedule fails hard-invariant
    /// validation. Unreachable while the swap safety check is sound,
    /// and never worth returning a corrupted schedule over.
    pub fn optimize<R: Rng>(
        &self,
        schedule: &Schedule,
        roster: &Roster,
        catalog: &VenueCatalog,
        rng: &mut R,
    ) -> Result<OptimizationResult> {
        let mut working = schedule.clone();
        let mut best = working.clone();
        let mut best_score =
            ConsecutiveRunScore::calculate(&working, roster, self.run_threshold).total_violations;

        tracing::debug!("Starting local search: {best_score} violations, budget {}", self.iteration_budget);

        let mut improvements = 0u32;
        let mut iterations = 0u32;

        for iteration in 0..self.iteration_budget {
            iterations = iteration + 1;
            if iteration % 1000 == 0 {
                tracing::debug!(
                    "Iteration {iteration}: best score {best_score}, {improvements} improvements"
                );
            }

            let current = ConsecutiveRunScore::calculate(&working, roster, self.run_threshold);
            let Some(worst) = current.worst_offender() else {
                tracing::debug!("All consecutive runs within threshold after {iteration} iterations");
                break;
            };

            let targeted_indices: Vec<usize> = (0..working.games.len())
                .filter(|&i| working.games[i].involves(&worst.team))
                .collect();

            let mut swap_made = false;
            'targeted: for &a in &targeted_indices {
                for b in 0..working.games.len() {
                    if working.games[b].round == working.games[a].round
                        || !working.can_swap_games(a, b)
                    {
                        continue;
                    }

                    working.swap_round_slots(a, b);
                    let rescored =
                        ConsecutiveRunScore::calculate(&working, roster, self.run_threshold);

                    if rescored.total_violations < current.total_violations {
                        if rescored.total_violations < best_score {
                            best_score = rescored.total_violations;
                            best = working.clone();
                            improvements += 1;
                            tracing::debug!(
                                "Improvement #{improvements}: new best score {best_score}"
                            );
                        }
                        swap_made = true;
                        break 'targeted;
                    }
                    working.swap_round_slots(a, b);
                }
            }

            if !swap_made {
                let a = rng.random_range(0..working.games.len());
                let b = rng.random_range(0..working.games.len());
                if working.can_swap_games(a, b) {
                    working.swap_round_slots(a, b);
                    let rescored =
                        ConsecutiveRunScore::calculate(&working, roster, self.run_threshold);
                    if rescored.total_violations < best_score {
                        best_score = rescored.total_violations;
                        best = working.clone();
                        improvements += 1;
                        tracing::debug!(
                            "Random improvement #{improvements}: new best score {best_score}"
                        );
                    } else {
                        working.swap_round_slots(a, b);
                    }
                }
            }
        }

        // Round swaps invalidate all venue bookkeeping; re-balance the
        // best schedule from zeroed counters.
        let skipped = assign_venues(&mut best, catalog);
        if !skipped.is_empty() {
            return Err(ScheduleError::InternalConsistency(format!(
                "Rounds {skipped:?} lost games during optimization"
            )));
        }

        if let Err(errors) = validate_schedule(&best, roster) {
            let summary: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(ScheduleError::InternalConsistency(format!(
                "Optimized schedule violates hard constraints: {}",
                summary.join("; ")
            )));
        }

        let score = ConsecutiveRunScore::calculate(&best, roster, self.run_threshold);
        let outcome = if score.is_clean() {
            OptimizationOutcome::Optimal
        } else {
            OptimizationOutcome::BudgetExhausted
        };

        tracing::debug!(
            "Local search finished: {} violations after {iterations} iterations, {improvements} improvements",
            score.total_violations
        );

        Ok(OptimizationResult {
            schedule: best,
            score,
            outcome,
            improvements,
            iterations,
        })
    }
}

impl Default for SwapOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
