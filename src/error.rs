//! Error types for building a simulation

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type for simulation construction
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while constructing a simulation.
/// Stepping never fails once construction succeeded.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("allocation failed for {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("timestep must be finite and positive, got {0}")]
    InvalidTimestep(f64),

    #[error("a simulation needs at least one body (the primary)")]
    NoPrimary,

    #[error("body {index} ({name}) has mass {mass} kg, expected finite and positive")]
    InvalidMass {
        index: usize,
        name: String,
        mass: f64,
    },

    #[error("body {index} ({name}) has mass {mass} kg, larger than the primary")]
    PrimaryNotDominant {
        index: usize,
        name: String,
        mass: f64,
    },

    #[error("body {name}: {field} must have 3 components, got {len}")]
    BadVector {
        name: String,
        field: &'static str,
        len: usize,
    },

    #[error("invalid debris configuration: {0}")]
    InvalidDebris(String),
}

impl SimError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| SimError::Allocation { what, source }
    }
}
