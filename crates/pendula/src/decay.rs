//! Exponential decay, `du/dt = −a·u`.
//!
//! A one-dimensional companion to the pendulum that shares its integrator.
//! The exact solution `u(t) = u₀·e^(−a·t)` makes it a convenient check on the
//! solver itself.

use std::convert::Infallible;

use pendula_core::{Model, NonNegative, OdeProblem};
use pendula_solvers::transient::dopri5::{self, Config};
use thiserror::Error;

use crate::{Error, Integrator};

/// Returned when a decay rate is negative (or NaN).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("decay rate must be non-negative, got {0}")]
pub struct NegativeParameter(pub f64);

/// A quantity that decays at a constant relative rate `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    rate: NonNegative<f64>,
}

/// Sampled solution of an [`ExponentialDecay`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecaySolution {
    pub time: Vec<f64>,
    pub amount: Vec<f64>,
}

impl ExponentialDecay {
    /// Creates a decay model with rate `a` (per unit time).
    ///
    /// # Errors
    ///
    /// Returns [`NegativeParameter`] if `a` is negative or NaN.
    pub fn new(a: f64) -> Result<Self, NegativeParameter> {
        NonNegative::new(a)
            .map(|rate| Self { rate })
            .ok_or(NegativeParameter(a))
    }

    /// Returns the decay rate `a`.
    #[must_use]
    pub fn decay_rate(&self) -> f64 {
        *self.rate.as_ref()
    }

    /// Returns `du/dt` at amount `u`. The model is autonomous.
    #[must_use]
    pub fn rate(&self, _t: f64, u: f64) -> f64 {
        -self.decay_rate() * u
    }

    /// Returns the exact amount at time `t`, starting from `u0`.
    #[must_use]
    pub fn exact(&self, u0: f64, t: f64) -> f64 {
        u0 * (-self.decay_rate() * t).exp()
    }

    /// Integrates from `u0` over `[0, duration]`, sampling every `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `duration` or `step` is not
    /// finite and positive, and [`Error::Solver`] if integration fails.
    pub fn solve(&self, u0: f64, duration: f64, step: f64) -> Result<DecaySolution, Error> {
        self.solve_with(&Integrator::default(), u0, duration, step)
    }

    /// Integrates like [`solve`](Self::solve) using the tolerances of
    /// `integrator`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_with(
        &self,
        integrator: &Integrator,
        u0: f64,
        duration: f64,
        step: f64,
    ) -> Result<DecaySolution, Error> {
        let config = Config::new(duration, step)?
            .with_tolerances(integrator.rel_tol(), integrator.abs_tol())?;

        let solution = dopri5::solve_unobserved(self, &DecayProblem, &u0, &config)?;

        Ok(DecaySolution {
            time: solution.times(),
            amount: solution.column(0),
        })
    }
}

impl Model for ExponentialDecay {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, u: &f64) -> Result<f64, Self::Error> {
        Ok(self.rate(0.0, *u))
    }
}

struct DecayProblem;

impl OdeProblem<1> for DecayProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn state(&self, u: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*u])
    }

    fn derivative(&self, _u: &f64, dudt: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*dudt])
    }

    fn build_input(&self, _base: &f64, _t: f64, state: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(state[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn negative_rate_is_rejected() {
        assert_eq!(ExponentialDecay::new(-1.0), Err(NegativeParameter(-1.0)));
        assert!(ExponentialDecay::new(f64::NAN).is_err());
        assert!(ExponentialDecay::new(0.0).is_ok());
    }

    #[test]
    fn rate_is_proportional_to_amount() {
        let model = ExponentialDecay::new(0.4).unwrap();

        assert_relative_eq!(model.rate(0.0, 3.2), -1.28);
        assert_eq!(model.rate(5.0, 3.2), model.rate(0.0, 3.2));
        assert_eq!(model.call(&3.2).unwrap(), model.rate(0.0, 3.2));
    }

    #[test]
    fn tracks_the_exact_solution() {
        let model = ExponentialDecay::new(0.4).unwrap();
        let solution = model.solve(3.2, 10.0, 10.0 / 299.0).unwrap();

        assert!(solution.time.len() >= 299);
        assert_eq!(solution.time.len(), solution.amount.len());
        for (&t, &u) in solution.time.iter().zip(&solution.amount) {
            assert_relative_eq!(u, model.exact(3.2, t), max_relative = 1e-5);
        }
    }

    #[test]
    fn zero_rate_holds_steady() {
        let model = ExponentialDecay::new(0.0).unwrap();
        let solution = model.solve(3.2, 1.0, 0.1).unwrap();

        assert!(solution.amount.iter().all(|&u| u == 3.2));
    }

    #[test]
    fn rejects_bad_span() {
        let model = ExponentialDecay::new(0.4).unwrap();
        assert!(matches!(
            model.solve(3.2, 10.0, -0.1),
            Err(Error::InvalidArgument(_))
        ));
    }
}
