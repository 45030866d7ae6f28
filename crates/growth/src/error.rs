use slope_solvers::transient::euler;
use thiserror::Error;

use crate::ParameterError;

/// Errors returned by [`compute_trace`](crate::compute_trace).
#[derive(Debug, Error)]
pub enum Error {
    /// The parameters were rejected before any step was taken.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// The Euler solver reported a failure.
    ///
    /// Never produced by [`compute_trace`](crate::compute_trace) or
    /// [`observe_trace`](crate::observe_trace): [`GrowthModel`](crate::GrowthModel)
    /// and [`GrowthProblem`](crate::GrowthProblem) are infallible, and
    /// overflow is recorded in the trace rather than reported. Callers may
    /// treat this arm as unreachable.
    #[error("integration failed: {0}")]
    Integration(#[from] euler::Error),
}
