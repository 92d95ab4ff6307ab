//! Error types for season generation.

use thiserror::Error;

/// Errors surfaced by schedule generation and optimization.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Invalid generation inputs: odd roster, short date pool,
    /// mismatched venue catalog. Generation cannot proceed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A hard schedule invariant was violated after construction or
    /// optimization. Unreachable by design; treated as a defect.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
}

/// Result type alias for schedule generation operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
