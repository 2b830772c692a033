use pendula_core::{Observer, Positive};
use pendula_solvers::transient::dopri5::{self, Action, Config, Event};

use crate::{AngleUnit, DoublePendulum, Error, State, Trajectory, equation::PendulumProblem};

/// Integrates a [`DoublePendulum`] forward in time from `t = 0`.
///
/// Uses the explicit adaptive Dormand–Prince 5(4) method with the maximum
/// step and the first step both set to the requested sample step. The
/// solution is sampled at that spacing and closed with the state at the end
/// of the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    rel_tol: f64,
    abs_tol: f64,
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            rel_tol: Config::DEFAULT_REL_TOL,
            abs_tol: Config::DEFAULT_ABS_TOL,
        }
    }
}

impl Integrator {
    /// Creates an integrator with custom error tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either tolerance is non-positive
    /// or non-finite.
    pub fn with_tolerances(rel_tol: f64, abs_tol: f64) -> Result<Self, Error> {
        let valid = |tol: f64| Positive::new(tol).is_some_and(|tol| tol.as_ref().is_finite());
        if !valid(rel_tol) || !valid(abs_tol) {
            return Err(Error::InvalidArgument(format!(
                "tolerances must be finite and positive, got rel_tol = {rel_tol}, abs_tol = {abs_tol}"
            )));
        }
        Ok(Self { rel_tol, abs_tol })
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Integrates `pendulum` from `initial` over `[0, duration]`.
    ///
    /// `initial` is interpreted in `unit` and converted to radians first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `duration` or `step` is not
    /// finite and positive, and [`Error::Solver`] if integration fails.
    pub fn integrate(
        &self,
        pendulum: &DoublePendulum,
        initial: State,
        duration: f64,
        step: f64,
        unit: AngleUnit,
    ) -> Result<Trajectory, Error> {
        self.integrate_observed(pendulum, initial, duration, step, unit, ())
    }

    /// Integrates like [`integrate`](Self::integrate), reporting each accepted
    /// solver step to `observer`.
    ///
    /// The observer may return [`Action::StopEarly`]; the trajectory then ends
    /// at the last sample reached and reports
    /// [`Status::StoppedByObserver`](dopri5::Status::StoppedByObserver).
    ///
    /// # Errors
    ///
    /// Same as [`integrate`](Self::integrate).
    pub fn integrate_observed<Obs>(
        &self,
        pendulum: &DoublePendulum,
        initial: State,
        duration: f64,
        step: f64,
        unit: AngleUnit,
        observer: Obs,
    ) -> Result<Trajectory, Error>
    where
        Obs: Observer<Event<4>, Action>,
    {
        let config = Config::new(duration, step)?.with_tolerances(self.rel_tol, self.abs_tol)?;
        let initial = unit.to_radians(initial);

        let solution = dopri5::solve(pendulum, &PendulumProblem, &initial, &config, observer)?;

        Ok(Trajectory::from_solution(
            *pendulum.configuration(),
            step,
            solution,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Status;

    #[test]
    fn rejects_bad_tolerances() {
        assert!(Integrator::with_tolerances(1e-6, 1e-9).is_ok());
        assert!(matches!(
            Integrator::with_tolerances(0.0, 1e-9),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Integrator::with_tolerances(1e-6, f64::NAN),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_bad_span() {
        let pendulum = DoublePendulum::default();
        let integrator = Integrator::default();
        let initial = State::new(0.1, 0.0, 0.1, 0.0);

        for (duration, step) in [(0.0, 0.01), (-1.0, 0.01), (1.0, 0.0), (1.0, f64::INFINITY)] {
            let result = integrator.integrate(&pendulum, initial, duration, step, AngleUnit::Radians);
            assert!(
                matches!(result, Err(Error::InvalidArgument(_))),
                "duration = {duration}, step = {step}"
            );
        }
    }

    #[test]
    fn samples_cover_the_span_uniformly() {
        let trajectory = Integrator::default()
            .integrate(
                &DoublePendulum::default(),
                State::new(0.5, 0.0, -0.5, 0.0),
                1.0,
                0.01,
                AngleUnit::Radians,
            )
            .unwrap();

        assert_eq!(trajectory.status(), Status::Complete);
        assert_eq!(trajectory.time()[0], 0.0);
        assert_eq!(trajectory.len(), 101);
        assert_eq!(trajectory.time()[100], 1.0);
        for pair in trajectory.time().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.01, max_relative = 1e-6);
        }
        assert_eq!(trajectory.theta1().len(), trajectory.len());
        assert_eq!(trajectory.omega2().len(), trajectory.len());
    }

    #[test]
    fn observer_sees_every_accepted_step() {
        let mut last_t = 0.0;
        let trajectory = Integrator::default()
            .integrate_observed(
                &DoublePendulum::default(),
                State::new(0.5, 0.0, 0.0, 0.0),
                0.5,
                0.05,
                AngleUnit::Radians,
                |event: &Event<4>| {
                    assert!(event.t >= last_t);
                    last_t = event.t;
                    None
                },
            )
            .unwrap();

        assert_relative_eq!(last_t, 0.5, max_relative = 1e-9);
        assert!(trajectory.stats().accepted_steps >= 10);
    }
}
