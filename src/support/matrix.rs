//! Fixed-width parameter matrices.
//!
//! A [`ParameterMatrix<K>`] holds `n` samples, each an ordered row of exactly
//! `K` finite values.
//! The row width is part of the type, so a borehole evaluator cannot be handed
//! a thermal matrix by mistake.

use std::ops::Index;

use thiserror::Error;

/// Errors that can occur while building a [`ParameterMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An entry is infinite or `NaN`.
    #[error("non-finite entry at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },
}

/// An ordered sequence of samples, each with `K` finite parameters.
///
/// Column order is significant and fixed by the model consuming the matrix.
///
/// # Example
///
/// ```
/// use twine_test_functions::support::matrix::ParameterMatrix;
///
/// let xx = ParameterMatrix::new(vec![[0.1, 0.2], [0.3, 0.4]]).unwrap();
/// assert_eq!(xx.n_samples(), 2);
/// assert_eq!(xx.column(1).collect::<Vec<_>>(), vec![0.2, 0.4]);
///
/// assert!(ParameterMatrix::new(vec![[0.1, f64::NAN]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMatrix<const K: usize> {
    rows: Vec<[f64; K]>,
}

impl<const K: usize> ParameterMatrix<K> {
    /// Creates a matrix from rows of parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonFinite`] for the first entry that is
    /// infinite or `NaN`.
    pub fn new(rows: Vec<[f64; K]>) -> Result<Self, MatrixError> {
        for (row, values) in rows.iter().enumerate() {
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(MatrixError::NonFinite { row, column });
            }
        }
        Ok(Self { rows })
    }

    /// Creates a matrix with every row equal to `row`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NonFinite`] if `row` has a non-finite entry.
    pub fn repeat(row: [f64; K], n_samples: usize) -> Result<Self, MatrixError> {
        Self::new(vec![row; n_samples])
    }

    /// Builds a matrix row by row without checking finiteness.
    ///
    /// Callers must only pass values already known to be finite, such as
    /// unit-cube draws or entries copied from a valid matrix.
    pub(crate) fn from_rows_unchecked(rows: Vec<[f64; K]>) -> Self {
        Self { rows }
    }

    /// Number of samples (rows).
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn rows(&self) -> &[[f64; K]] {
        &self.rows
    }

    /// Iterates over the values of a single column.
    ///
    /// # Panics
    ///
    /// Panics if `column >= K`.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(column < K, "column {column} out of range for width {K}");
        self.rows.iter().map(move |row| row[column])
    }
}

impl<const K: usize> Index<usize> for ParameterMatrix<K> {
    type Output = [f64; K];

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}
