use pendula_core::Positive;
use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Mass},
    length::meter,
    mass::kilogram,
};

/// Standard gravity used by [`Configuration::default`], in m/s².
const STANDARD_GRAVITY: f64 = 9.81;

/// Physical parameters of a double pendulum.
///
/// Link lengths and masses must be finite and strictly positive; gravity must
/// be finite. The values are checked once, at construction, and cannot change
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    l1: Length,
    l2: Length,
    m1: Mass,
    m2: Mass,
    g: Acceleration,
}

/// Errors that can occur when validating a [`Configuration`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("L1 must be finite and positive")]
    L1,

    #[error("L2 must be finite and positive")]
    L2,

    #[error("M1 must be finite and positive")]
    M1,

    #[error("M2 must be finite and positive")]
    M2,

    #[error("g must be finite")]
    Gravity,
}

impl Default for Configuration {
    /// Unit lengths and masses under standard gravity.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::from_si([1.0, 1.0], [1.0, 1.0], STANDARD_GRAVITY).unwrap()
    }
}

impl Configuration {
    /// Creates a configuration from link lengths, bob masses and gravity.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is out of range.
    pub fn new(
        lengths: [Length; 2],
        masses: [Mass; 2],
        g: Acceleration,
    ) -> Result<Self, ConfigurationError> {
        let [l1, l2] = lengths;
        let [m1, m2] = masses;

        check_positive(l1.value, ConfigurationError::L1)?;
        check_positive(l2.value, ConfigurationError::L2)?;
        check_positive(m1.value, ConfigurationError::M1)?;
        check_positive(m2.value, ConfigurationError::M2)?;
        if !g.value.is_finite() {
            return Err(ConfigurationError::Gravity);
        }

        Ok(Self { l1, l2, m1, m2, g })
    }

    /// Creates a configuration from SI values: metres, kilograms and m/s².
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that is out of range.
    pub fn from_si(
        lengths: [f64; 2],
        masses: [f64; 2],
        g: f64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(
            lengths.map(Length::new::<meter>),
            masses.map(Mass::new::<kilogram>),
            Acceleration::new::<meter_per_second_squared>(g),
        )
    }

    /// Returns the length of the upper link.
    #[must_use]
    pub fn l1(&self) -> Length {
        self.l1
    }

    /// Returns the length of the lower link.
    #[must_use]
    pub fn l2(&self) -> Length {
        self.l2
    }

    /// Returns the mass of the upper bob.
    #[must_use]
    pub fn m1(&self) -> Mass {
        self.m1
    }

    /// Returns the mass of the lower bob.
    #[must_use]
    pub fn m2(&self) -> Mass {
        self.m2
    }

    /// Returns the gravitational acceleration.
    #[must_use]
    pub fn g(&self) -> Acceleration {
        self.g
    }
}

fn check_positive(value: f64, err: ConfigurationError) -> Result<(), ConfigurationError> {
    Positive::new(value)
        .filter(|value| value.as_ref().is_finite())
        .map(|_| ())
        .ok_or(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    #[test]
    fn default_is_unit_pendulum() {
        let config = Configuration::default();

        assert_eq!(config.l1().get::<meter>(), 1.0);
        assert_eq!(config.l2().get::<meter>(), 1.0);
        assert_eq!(config.m1().get::<kilogram>(), 1.0);
        assert_eq!(config.m2().get::<kilogram>(), 1.0);
        assert_eq!(config.g().get::<meter_per_second_squared>(), 9.81);
    }

    #[test]
    fn accepts_any_length_unit() {
        let config = Configuration::new(
            [Length::new::<centimeter>(50.0), Length::new::<meter>(2.0)],
            [Mass::new::<kilogram>(3.0), Mass::new::<kilogram>(1.0)],
            Acceleration::new::<meter_per_second_squared>(1.62),
        )
        .unwrap();

        assert_relative_eq!(config.l1().get::<meter>(), 0.5);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let g = 9.81;
        assert_eq!(
            Configuration::from_si([0.0, 1.0], [1.0, 1.0], g),
            Err(ConfigurationError::L1)
        );
        assert_eq!(
            Configuration::from_si([1.0, -1.0], [1.0, 1.0], g),
            Err(ConfigurationError::L2)
        );
        assert_eq!(
            Configuration::from_si([1.0, 1.0], [f64::NAN, 1.0], g),
            Err(ConfigurationError::M1)
        );
        assert_eq!(
            Configuration::from_si([1.0, 1.0], [1.0, f64::INFINITY], g),
            Err(ConfigurationError::M2)
        );
        assert_eq!(
            Configuration::from_si([1.0, 1.0], [1.0, 1.0], f64::NAN),
            Err(ConfigurationError::Gravity)
        );
    }

    #[test]
    fn zero_gravity_is_allowed() {
        assert!(Configuration::from_si([1.0, 1.0], [1.0, 1.0], 0.0).is_ok());
    }
}
