use std::convert::Infallible;

use pendula_core::{Model, OdeProblem};

use crate::{Configuration, Rates, State};

/// The equation of motion of a planar double pendulum.
///
/// Two point masses hang from massless rigid links: `M1` at the end of `L1`,
/// pivoted at the origin, and `M2` at the end of `L2`, pivoted at `M1`. With
/// `δ = θ2 − θ1` and `M = M1 + M2`, Lagrange's equations give
///
/// ```text
/// α1 = [M2·L1·ω1²·sinδ·cosδ + M2·g·sinθ2·cosδ + M2·L2·ω2²·sinδ − M·g·sinθ1]
///      / [L1·(M − M2·cos²δ)]
///
/// α2 = [−M2·L2·ω2²·sinδ·cosδ + M·g·sinθ1·cosδ − M·L1·ω1²·sinδ − M·g·sinθ2]
///      / [L2·(M − M2·cos²δ)]
/// ```
///
/// The denominator is at least `L·M1 > 0`, so the equations are regular for
/// every valid [`Configuration`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoublePendulum {
    config: Configuration,
}

impl DoublePendulum {
    /// Creates the equation of motion for a configuration.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Returns the configuration this equation was built for.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Returns the time derivative of `state`.
    ///
    /// The system is autonomous, so `_t` does not affect the result. Finite
    /// input always yields finite output.
    #[must_use]
    pub fn rates(&self, _t: f64, state: &State) -> Rates {
        let l1 = self.config.l1().value;
        let l2 = self.config.l2().value;
        let m1 = self.config.m1().value;
        let m2 = self.config.m2().value;
        let g = self.config.g().value;

        let State {
            theta1,
            omega1,
            theta2,
            omega2,
        } = *state;

        let (sin_d, cos_d) = (theta2 - theta1).sin_cos();
        let total = m1 + m2;
        let reduced = total - m2 * cos_d * cos_d;

        let domega1 = (m2 * l1 * omega1 * omega1 * sin_d * cos_d
            + m2 * g * theta2.sin() * cos_d
            + m2 * l2 * omega2 * omega2 * sin_d
            - total * g * theta1.sin())
            / (l1 * reduced);

        let domega2 = (-m2 * l2 * omega2 * omega2 * sin_d * cos_d
            + total * g * theta1.sin() * cos_d
            - total * l1 * omega1 * omega1 * sin_d
            - total * g * theta2.sin())
            / (l2 * reduced);

        Rates {
            dtheta1: omega1,
            domega1,
            dtheta2: omega2,
            domega2,
        }
    }
}

impl Model for DoublePendulum {
    type Input = State;
    type Output = Rates;
    type Error = Infallible;

    fn call(&self, input: &State) -> Result<Rates, Self::Error> {
        Ok(self.rates(0.0, input))
    }
}

/// Integrates the full pendulum state `(θ1, ω1, θ2, ω2)`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PendulumProblem;

impl OdeProblem<4> for PendulumProblem {
    type Input = State;
    type Output = Rates;
    type Error = Infallible;

    fn state(&self, input: &State) -> Result<[f64; 4], Self::Error> {
        Ok((*input).into())
    }

    fn derivative(&self, _input: &State, output: &Rates) -> Result<[f64; 4], Self::Error> {
        Ok((*output).into())
    }

    fn build_input(&self, _base: &State, _t: f64, state: &[f64; 4]) -> Result<State, Self::Error> {
        Ok(State::from(*state))
    }
}
