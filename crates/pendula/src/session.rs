use pendula_core::Observer;

use crate::{
    Action, AngleUnit, Configuration, DoublePendulum, Error, Event, Frame, Integrator, State,
    Trajectory,
};

/// A double pendulum simulation: a fixed configuration and its latest
/// solved trajectory.
///
/// A new session is unsolved. [`solve`](Self::solve) integrates the motion
/// and stores the trajectory, replacing any earlier one. Every series
/// accessor fails with [`Error::NoSolution`] until the first successful
/// solve. A failed solve leaves the session exactly as it was.
///
/// # Example
///
/// ```no_run
/// use pendula::{Configuration, Session, State};
///
/// let config = Configuration::from_si([1.0, 0.5], [3.0, 1.0], 9.81)?;
/// let mut session = Session::new(config);
///
/// session.solve(State::new(0.1, 0.3, 0.5, 0.8), 10.0, 0.016, "radians")?;
///
/// for (t, k) in session.time()?.iter().zip(session.kinetic()?) {
///     println!("{t:.3} {k:.6}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Session {
    pendulum: DoublePendulum,
    integrator: Integrator,
    trajectory: Option<Trajectory>,
}

impl Session {
    /// Creates an unsolved session for `config`.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            pendulum: DoublePendulum::new(config),
            integrator: Integrator::default(),
            trajectory: None,
        }
    }

    /// Replaces the integrator used by later solves.
    #[must_use]
    pub fn with_integrator(self, integrator: Integrator) -> Self {
        Self { integrator, ..self }
    }

    /// Returns the session's configuration.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        self.pendulum.configuration()
    }

    /// Returns the equation of motion the session integrates.
    #[must_use]
    pub fn pendulum(&self) -> &DoublePendulum {
        &self.pendulum
    }

    /// Returns `true` once a trajectory is available.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.trajectory.is_some()
    }

    /// Integrates from `initial` over `[0, duration]`, sampling every `step`.
    ///
    /// `unit` is an [`AngleUnit`] or one of the strings `"radians"` and
    /// `"degrees"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an unknown unit or a
    /// non-positive `duration` or `step`, and [`Error::Solver`] if
    /// integration fails. On error the previous trajectory, if any, is kept.
    pub fn solve<U>(
        &mut self,
        initial: impl Into<State>,
        duration: f64,
        step: f64,
        unit: U,
    ) -> Result<&Trajectory, Error>
    where
        U: TryInto<AngleUnit>,
        Error: From<U::Error>,
    {
        self.solve_observed(initial, duration, step, unit, ())
    }

    /// Solves like [`solve`](Self::solve), reporting each accepted solver
    /// step to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn solve_observed<U, Obs>(
        &mut self,
        initial: impl Into<State>,
        duration: f64,
        step: f64,
        unit: U,
        observer: Obs,
    ) -> Result<&Trajectory, Error>
    where
        U: TryInto<AngleUnit>,
        Error: From<U::Error>,
        Obs: Observer<Event<4>, Action>,
    {
        let unit = unit.try_into()?;
        let initial = initial.into();

        let trajectory = self.integrator.integrate_observed(
            &self.pendulum,
            initial,
            duration,
            step,
            unit,
            observer,
        )?;

        log::info!(
            "solved double pendulum over {duration} s: {} samples ({:?})",
            trajectory.len(),
            trajectory.status(),
        );

        Ok(&*self.trajectory.insert(trajectory))
    }

    /// Returns the latest trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn trajectory(&self) -> Result<&Trajectory, Error> {
        self.trajectory.as_ref().ok_or(Error::NoSolution)
    }

    /// Sample times, starting at 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn time(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.time())
    }

    /// Angle of the upper link, in radians.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn theta1(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.theta1())
    }

    /// Angle of the lower link, in radians.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn theta2(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.theta2())
    }

    /// Angular velocity of the upper link, in rad/s.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn omega1(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.omega1())
    }

    /// Angular velocity of the lower link, in rad/s.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn omega2(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.omega2())
    }

    /// Horizontal position of the upper bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn x1(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.x1())
    }

    /// Vertical position of the upper bob, negative below the pivot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn y1(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.y1())
    }

    /// Horizontal position of the lower bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn x2(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.x2())
    }

    /// Vertical position of the lower bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn y2(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.y2())
    }

    /// Horizontal velocity of the upper bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn vx1(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.vx1())
    }

    /// Vertical velocity of the upper bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn vy1(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.vy1())
    }

    /// Horizontal velocity of the lower bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn vx2(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.vx2())
    }

    /// Vertical velocity of the lower bob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn vy2(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.vy2())
    }

    /// Kinetic energy of both bobs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn kinetic(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.kinetic())
    }

    /// Potential energy, zero at the hanging rest position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn potential(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.potential())
    }

    /// Kinetic plus potential energy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn total_energy(&self) -> Result<&[f64], Error> {
        Ok(self.trajectory()?.total_energy())
    }

    /// Animation frames, one per sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSolution`] if the session has not been solved.
    pub fn frames(&self) -> Result<impl ExactSizeIterator<Item = Frame> + '_, Error> {
        Ok(self.trajectory()?.frames())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn sessions_can_move_between_threads() {
        assert_send_sync::<Session>();
    }

    #[test]
    fn new_session_is_unsolved() {
        let session = Session::new(Configuration::default());

        assert!(!session.is_solved());
        assert!(matches!(session.trajectory(), Err(Error::NoSolution)));
        assert!(matches!(session.frames(), Err(Error::NoSolution)));
    }

    #[test]
    fn custom_integrator_is_used() {
        let integrator = Integrator::with_tolerances(1e-9, 1e-12).unwrap();
        let mut session = Session::new(Configuration::default()).with_integrator(integrator);

        session
            .solve(State::new(0.2, 0.0, 0.2, 0.0), 0.1, 0.01, AngleUnit::Radians)
            .unwrap();

        assert!(session.is_solved());
    }
}
