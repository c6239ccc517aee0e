use std::{cmp::Ordering, marker::PhantomData};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Normalized model coordinates use this constraint before they are rescaled
/// onto physical bounds.
///
/// # Examples
///
/// ```
/// use twine_test_functions::support::constraint::{Constrained, UnitInterval};
///
/// let a = Constrained::<f64, UnitInterval>::new(0.25).unwrap();
/// assert_eq!(a.into_inner(), 0.25);
///
/// let z = UnitInterval::zero();
/// let o = UnitInterval::one();
/// assert_eq!((z.into_inner(), o.into_inner()), (0.0, 1.0));
///
/// assert!(UnitInterval::new(-0.0001).is_err());
/// assert!(UnitInterval::new(1.0001).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<f64, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, UnitInterval>, ConstraintError> {
        Constrained::<f64, UnitInterval>::new(value)
    }

    /// Returns the lower bound (zero) as a constrained value.
    #[must_use]
    pub const fn zero() -> Constrained<f64, UnitInterval> {
        Self::endpoint(0.0)
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub const fn one() -> Constrained<f64, UnitInterval> {
        Self::endpoint(1.0)
    }

    const fn endpoint(value: f64) -> Constrained<f64, UnitInterval> {
        Constrained {
            value,
            _marker: PhantomData,
        }
    }
}

impl Constraint<f64> for UnitInterval {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
