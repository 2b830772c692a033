use num_traits::Zero;

/// A value that is guaranteed to be greater than or equal to zero.
///
/// The check happens once, at construction, so code holding a
/// `NonNegative<T>` never has to re-validate it. `NaN` compares false against
/// zero and is therefore rejected.
///
/// Works for primitive numbers and for `uom` quantities alike.
///
/// # Examples
///
/// ```
/// use pendula_core::NonNegative;
///
/// let rate = NonNegative::new(0.4).unwrap();
/// assert_eq!(rate.into_inner(), 0.4);
///
/// assert!(NonNegative::new(-1.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct NonNegative<T>(T);

impl<T> NonNegative<T>
where
    T: PartialOrd + Zero,
{
    /// Wraps `value` if it is non-negative, returning `None` otherwise.
    pub fn new(value: T) -> Option<Self> {
        if value >= T::zero() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns zero wrapped as a `NonNegative`.
    #[must_use]
    pub fn zero() -> Self {
        Self(T::zero())
    }
}

impl<T> NonNegative<T> {
    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for NonNegative<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
