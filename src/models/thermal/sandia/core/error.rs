use thiserror::Error;

use crate::support::matrix::MatrixError;

/// Errors that can occur while evaluating the Sandia thermal problem.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThermalError {
    /// The series solution is only valid for non-negative times.
    ///
    /// Reported before any output is produced.
    /// A `NaN` time passed to a single-point evaluation is reported the same way.
    #[error("time at index {index} is negative: {time} s")]
    NegativeTime {
        /// Position of the offending value in the time grid.
        index: usize,

        /// The offending time in seconds.
        time: f64,
    },

    /// Normalized inputs overflowed when rescaled onto the parameter bounds.
    #[error("rescaled inputs are not finite: {0}")]
    Rescale(#[from] MatrixError),
}
