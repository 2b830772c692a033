//! Dormand–Prince 5(4) solver for ODE problems.
//!
//! An explicit embedded Runge–Kutta method that estimates the local error of
//! each step from a 4th-order companion solution and adapts the step size to
//! keep it within `rel_tol` and `abs_tol`. Steps never exceed the configured
//! `dt`, and the first step is `dt`.
//!
//! Results are reported as dense output: the continuous extension of the
//! method is evaluated at `t = 0, dt, 2·dt, …`, so the returned samples are
//! uniformly spaced even though the internal steps are not. The state at the
//! end of the final step closes the series, so a complete run always ends at
//! `t_end`.
//!
//! # Example
//!
//! ```ignore
//! use pendula_solvers::transient::dopri5;
//!
//! let config = dopri5::Config::new(10.0, 0.01)?;
//! let solution = dopri5::solve_unobserved(&model, &problem, &initial, &config)?;
//!
//! for point in &solution.points {
//!     println!("t={}: {:?}", point.t, point.y);
//! }
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Point, Solution, Stats, Status};

use std::cell::{Cell, RefCell};

use ode_solvers::{Dopri5, SVector, System, dop_shared::OutputType};
use pendula_core::{Model, Observer, OdeProblem};

// Step size controller settings, as recommended by Hairer & Wanner.
const SAFETY_FACTOR: f64 = 0.9;
const BETA: f64 = 0.04;
const FAC_MIN: f64 = 0.2;
const FAC_MAX: f64 = 10.0;

// Stiffness detection is not wanted; a period this long never triggers it.
const STIFFNESS_CHECK_PERIOD: u32 = u32::MAX;

// Dense samples closer together than this fraction of `dt` are duplicates.
const DUPLICATE_FRACTION: f64 = 1e-9;

// Relative distance within which an evaluation counts as the step's end point.
const END_POINT_TOLERANCE: f64 = 1e-12;

/// Integrates an ODE problem over `[0, config.t_end()]` using Dopri5.
///
/// # Algorithm
///
/// 1. Extract the initial state from `initial` and emit event 0.
/// 2. Run the adaptive integrator. For every trial point the solver asks
///    for, build a model input with [`OdeProblem::build_input`], call the
///    model and read the derivative with [`OdeProblem::derivative`].
/// 3. After each accepted step, emit an [`Event`]. If the observer returns
///    [`Action::StopEarly`], stop integrating.
/// 4. Collect the dense output samples into a [`Solution`] and close it with
///    the state at the end of the last accepted step.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any trial point, or if
/// the integrator gives up (step count cap reached, step size underflow).
pub fn solve<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    initial: &M::Input,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event<N>, Action>,
{
    let y0 = problem.state(initial).map_err(Error::problem)?;

    let event = Event {
        step: 0,
        t: 0.0,
        y: y0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            points: vec![Point { t: 0.0, y: y0 }],
            stats: Stats::default(),
        });
    }

    let failure = RefCell::new(None);
    let stopped = Cell::new(false);
    let latest = Cell::new(None);
    let accepted = Cell::new(None);

    let system = OdeSystem {
        model,
        problem,
        base: initial,
        observer: &mut observer,
        failure: &failure,
        stopped: &stopped,
        latest: &latest,
        accepted: &accepted,
        step: 0,
    };

    let mut stepper = Dopri5::from_param(
        system,
        0.0,
        config.t_end(),
        config.dt(),
        SVector::from(y0),
        config.rel_tol(),
        config.abs_tol(),
        SAFETY_FACTOR,
        BETA,
        FAC_MIN,
        FAC_MAX,
        config.dt(),
        config.dt(),
        config.max_steps(),
        STIFFNESS_CHECK_PERIOD,
        OutputType::Dense,
    );

    let result = stepper.integrate();

    if let Some(err) = failure.borrow_mut().take() {
        return Err(err);
    }
    let stats = result?;

    let status = if stopped.get() {
        Status::StoppedByObserver
    } else {
        Status::Complete
    };

    let min_gap = config.dt() * DUPLICATE_FRACTION;
    let end = accepted.get().map(|point: Point<N>| {
        if status == Status::Complete && (point.t - config.t_end()).abs() <= min_gap {
            Point {
                t: config.t_end(),
                ..point
            }
        } else {
            point
        }
    });
    let points = collect_points(stepper.x_out(), stepper.y_out(), y0, end, min_gap);

    log::debug!(
        "dopri5 {status:?}: {} samples, {} evaluations, {} accepted and {} rejected steps",
        points.len(),
        stats.num_eval,
        stats.accepted_steps,
        stats.rejected_steps,
    );

    Ok(Solution {
        status,
        points,
        stats: Stats {
            evaluations: stats.num_eval,
            accepted_steps: stats.accepted_steps,
            rejected_steps: stats.rejected_steps,
        },
    })
}

/// Integrates an ODE problem using Dopri5 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or the integrator gives up.
pub fn solve_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    initial: &M::Input,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, config, ())
}

/// Turns raw dense output into strictly increasing samples starting at 0.
///
/// `end` is the state at the end of the last accepted step. It is appended
/// when the dense samples stop short of it, and otherwise replaces the final
/// dense sample it coincides with.
fn collect_points<const N: usize>(
    x_out: &[f64],
    y_out: &[SVector<f64, N>],
    y0: [f64; N],
    end: Option<Point<N>>,
    min_gap: f64,
) -> Vec<Point<N>> {
    let mut points: Vec<Point<N>> = Vec::with_capacity(x_out.len() + 2);
    points.push(Point { t: 0.0, y: y0 });

    for (&t, y) in x_out.iter().zip(y_out) {
        let last = points[points.len() - 1].t;
        if t - last > min_gap {
            points.push(Point { t, y: (*y).into() });
        }
    }

    if let Some(end) = end {
        let last = points.len() - 1;
        if end.t - points[last].t > min_gap {
            points.push(end);
        } else if last > 0 {
            points[last] = end;
        }
    }

    points
}

/// Adapts a model and problem into an `ode_solvers` system.
struct OdeSystem<'a, M, P, Obs, const N: usize>
where
    M: Model,
{
    model: &'a M,
    problem: &'a P,
    base: &'a M::Input,
    observer: &'a mut Obs,
    failure: &'a RefCell<Option<Error>>,
    stopped: &'a Cell<bool>,
    /// The most recent successful right-hand-side evaluation.
    latest: &'a Cell<Option<Point<N>>>,
    /// The state at the end of the most recent accepted step.
    accepted: &'a Cell<Option<Point<N>>>,
    step: usize,
}

impl<M, P, Obs, const N: usize> OdeSystem<'_, M, P, Obs, N>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
{
    fn evaluate(&self, t: f64, y: &[f64; N]) -> Result<[f64; N], Error> {
        let input = self
            .problem
            .build_input(self.base, t, y)
            .map_err(Error::problem)?;
        let output = self.model.call(&input).map_err(Error::model)?;
        self.problem
            .derivative(&input, &output)
            .map_err(Error::problem)
    }
}

impl<M, P, Obs, const N: usize> System<f64, SVector<f64, N>> for OdeSystem<'_, M, P, Obs, N>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event<N>, Action>,
{
    fn system(&self, t: f64, y: &SVector<f64, N>, dy: &mut SVector<f64, N>) {
        match self.evaluate(t, &(*y).into()) {
            Ok(derivative) => {
                self.latest.set(Some(Point { t, y: (*y).into() }));
                *dy = SVector::from(derivative);
            }
            Err(err) => {
                self.failure.borrow_mut().get_or_insert(err);
                *dy = SVector::from_element(f64::NAN);
            }
        }
    }

    fn solout(&mut self, t: f64, y: &SVector<f64, N>, _dy: &SVector<f64, N>) -> bool {
        // Stop as soon as a model or problem call has failed.
        if self.failure.borrow().is_some() {
            return true;
        }

        // The last stage of an accepted step is evaluated at its end point, so
        // the latest evaluation holds the state at `t`. The `y` handed in here
        // is the latest dense sample, which can lag by up to `dt`.
        let y = match self.latest.get() {
            Some(point) if (point.t - t).abs() <= END_POINT_TOLERANCE * t.abs().max(1.0) => {
                point.y
            }
            _ => (*y).into(),
        };
        self.accepted.set(Some(Point { t, y }));

        self.step += 1;
        let event = Event {
            step: self.step,
            t,
            y,
        };

        if let Some(Action::StopEarly) = self.observer.observe(&event) {
            self.stopped.set(true);
            return true;
        }
        false
    }
}
