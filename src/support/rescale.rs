//! Affine rescaling of normalized inputs to physical ranges.
//!
//! Models are sampled on the unit hypercube and each column is then mapped to
//! its physical range with [`rescale`].
//! Values outside `[0, 1]` are not rejected; they extrapolate linearly past the
//! bounds.
//! An extrapolated entry that overflows to infinity is reported as an error.

use super::matrix::{MatrixError, ParameterMatrix};

/// Lower and upper bounds of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Creates bounds spanning `min` to `max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps a normalized `fraction` onto these bounds.
    ///
    /// ```
    /// use twine_test_functions::support::rescale::Bounds;
    ///
    /// let bounds = Bounds::new(100.0, 200.0);
    /// assert_eq!(bounds.at(0.25), 125.0);
    /// assert_eq!(bounds.at(1.5), 250.0);
    /// ```
    #[must_use]
    pub fn at(&self, fraction: f64) -> f64 {
        self.min + (self.max - self.min) * fraction
    }

    /// Returns the midpoint of the range.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.at(0.5)
    }
}

/// Rescales each column `j` of `xx` from `[0, 1]` onto `bounds[j]`.
///
/// The output has the same shape as the input.
///
/// # Errors
///
/// Returns [`MatrixError::NonFinite`] if a far out-of-range input overflows
/// once rescaled.
pub fn rescale<const K: usize>(
    xx: &ParameterMatrix<K>,
    bounds: &[Bounds; K],
) -> Result<ParameterMatrix<K>, MatrixError> {
    let rows = xx
        .rows()
        .iter()
        .map(|row| std::array::from_fn(|j| bounds[j].at(row[j])))
        .collect();

    ParameterMatrix::new(rows)
}
