use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Physical properties that appear in a denominator, such as a slab thickness
/// or a thermal conductivity, use this constraint.
///
/// # Examples
///
/// ```
/// use twine_test_functions::support::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let x = Constrained::<_, StrictlyPositive>::new(0.05).unwrap();
/// assert_eq!(x.into_inner(), 0.05);
///
/// // Associated constructor:
/// let y = StrictlyPositive::new(3000.0).unwrap();
/// assert_eq!(y.into_inner(), 3000.0);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(
            StrictlyPositive::new(0.0).unwrap_err(),
            ConstraintError::Zero
        );
        assert_eq!(
            StrictlyPositive::new(-5.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert!(StrictlyPositive::new(f64::NAN).is_err());
    }

    #[test]
    fn lengths() {
        assert!(StrictlyPositive::new(Length::new::<meter>(0.0127)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<meter>(-0.0127)).is_err());
    }
}
