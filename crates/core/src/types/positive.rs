use num_traits::Zero;

/// A value that is guaranteed to be strictly greater than zero.
///
/// Used for physical parameters such as link lengths and masses, where zero
/// would make the equations of motion singular.
///
/// # Examples
///
/// ```
/// use pendula_core::Positive;
///
/// assert_eq!(Positive::new(1.5).map(Positive::into_inner), Some(1.5));
/// assert!(Positive::new(0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Positive<T>(T);

impl<T> Positive<T>
where
    T: PartialOrd + Zero,
{
    /// Wraps `value` if it is strictly positive, returning `None` otherwise.
    pub fn new(value: T) -> Option<Self> {
        if value > T::zero() {
            Some(Self(value))
        } else {
            None
        }
    }
}

impl<T> Positive<T> {
    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Positive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, f64::Mass, length::meter, mass::kilogram};

    #[test]
    fn zero_is_not_positive() {
        assert!(Positive::new(0.0).is_none());
        assert!(Positive::new(-0.0).is_none());
        assert!(Positive::new(f64::NAN).is_none());
        assert!(Positive::new(1e-12).is_some());
    }

    #[test]
    fn wraps_lengths_and_masses() {
        let length = Length::new::<meter>(0.5);
        assert_eq!(Positive::new(length).unwrap().into_inner(), length);

        let mass = Mass::new::<kilogram>(-1.0);
        assert!(Positive::new(mass).is_none(), "Negative mass is not ok");
    }
}
