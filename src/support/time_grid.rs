//! Ordered time grids for transient models.

use std::ops::Deref;

use thiserror::Error;

/// Errors that can occur while building a [`TimeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeGridError {
    /// A time value is `NaN`.
    #[error("time at index {index} is not a number")]
    NotANumber { index: usize },

    /// A time value is smaller than the one before it.
    #[error("time at index {index} is smaller than its predecessor")]
    Decreasing { index: usize },
}

/// A non-decreasing sequence of time values in seconds.
///
/// The grid itself does not forbid negative times.
/// Models that are only valid for `t ≥ 0` reject them at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid(Vec<f64>);

impl TimeGrid {
    /// Creates a grid from time values in seconds.
    ///
    /// # Errors
    ///
    /// Returns a [`TimeGridError`] if a value is `NaN` or the values decrease.
    pub fn new(times: Vec<f64>) -> Result<Self, TimeGridError> {
        for (index, time) in times.iter().enumerate() {
            if time.is_nan() {
                return Err(TimeGridError::NotANumber { index });
            }
            if index > 0 && *time < times[index - 1] {
                return Err(TimeGridError::Decreasing { index });
            }
        }
        Ok(Self(times))
    }

    /// Creates `n` evenly spaced times from `start` to `stop`, inclusive.
    ///
    /// The last value is exactly `stop` when `n > 1`.
    ///
    /// ```
    /// use twine_test_functions::support::time_grid::TimeGrid;
    ///
    /// let t = TimeGrid::linspace(0.0, 1000.0, 11).unwrap();
    /// assert_eq!(t.len(), 11);
    /// assert_eq!(t[1], 100.0);
    /// assert_eq!(t[10], 1000.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`TimeGridError`] if `stop < start` or either is `NaN`.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Self, TimeGridError> {
        let times = match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let step = (stop - start) / (n - 1) as f64;
                #[allow(clippy::cast_precision_loss)]
                let mut times: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
                times[n - 1] = stop;
                times
            }
        };
        Self::new(times)
    }

    /// Returns the time values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for TimeGrid {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
