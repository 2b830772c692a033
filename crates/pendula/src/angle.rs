use std::str::FromStr;

use uom::si::{
    angle::{degree, radian},
    angular_velocity::{degree_per_second, radian_per_second},
    f64::{Angle, AngularVelocity},
};

use crate::{Error, State};

/// The unit an initial state is expressed in.
///
/// Parses from exactly `"radians"` or `"degrees"`. Angular velocities follow
/// the angle unit, so a state in degrees carries its rates in degrees per
/// second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts a state expressed in this unit to radians.
    #[must_use]
    pub fn to_radians(self, state: State) -> State {
        match self {
            Self::Radians => state,
            Self::Degrees => State {
                theta1: Angle::new::<degree>(state.theta1).get::<radian>(),
                omega1: AngularVelocity::new::<degree_per_second>(state.omega1)
                    .get::<radian_per_second>(),
                theta2: Angle::new::<degree>(state.theta2).get::<radian>(),
                omega2: AngularVelocity::new::<degree_per_second>(state.omega2)
                    .get::<radian_per_second>(),
            },
        }
    }
}

impl FromStr for AngleUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radians" => Ok(Self::Radians),
            "degrees" => Ok(Self::Degrees),
            other => Err(Error::InvalidArgument(format!(
                "angle unit must be \"radians\" or \"degrees\", got {other:?}"
            ))),
        }
    }
}

impl TryFrom<&str> for AngleUnit {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_the_two_units() {
        assert_eq!("radians".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert_eq!(AngleUnit::try_from("degrees").unwrap(), AngleUnit::Degrees);
    }

    #[test]
    fn rejects_anything_else() {
        for unit in ["dreg", "rad", "Radians", ""] {
            let err = unit.parse::<AngleUnit>().unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{unit:?}: {err}");
        }
    }

    #[test]
    fn converts_degrees_to_radians() {
        let state = AngleUnit::Degrees.to_radians(State::new(180.0, 90.0, -45.0, 360.0));

        assert_relative_eq!(state.theta1, PI);
        assert_relative_eq!(state.omega1, PI / 2.0);
        assert_relative_eq!(state.theta2, -PI / 4.0);
        assert_relative_eq!(state.omega2, 2.0 * PI);
    }

    #[test]
    fn radians_pass_through() {
        let state = State::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(AngleUnit::Radians.to_radians(state), state);
    }
}
