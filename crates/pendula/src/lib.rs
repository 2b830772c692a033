//! Double pendulum dynamics.
//!
//! This crate integrates the equations of motion of a planar double pendulum
//! and derives physical observables from the resulting angle trajectories:
//!
//! - [`DoublePendulum`]: the equation of motion, `(θ1, ω1, θ2, ω2) → (ω1, α1, ω2, α2)`
//! - [`Integrator`]: drives the Dopri5 solver to produce a [`Trajectory`]
//! - [`kinematics`]: positions, velocities and energies of both masses
//! - [`Session`]: owns a [`Configuration`] and the latest trajectory
//! - [`decay`]: the exponential decay model, `du/dt = -a·u`
//!
//! # Example
//!
//! ```no_run
//! use pendula::{Configuration, Session, State};
//!
//! let mut session = Session::new(Configuration::default());
//! session.solve(State::new(0.5, 0.0, 0.3, 0.0), 10.0, 0.01, "radians")?;
//!
//! let energy = session.total_energy()?;
//! println!("energy drift: {}", energy[energy.len() - 1] - energy[0]);
//! # Ok::<(), pendula::Error>(())
//! ```

mod angle;
mod config;
mod equation;
mod error;
mod integrator;
mod session;
mod state;
mod trajectory;

pub mod decay;
pub mod kinematics;

pub use angle::AngleUnit;
pub use config::{Configuration, ConfigurationError};
pub use equation::DoublePendulum;
pub use error::Error;
pub use integrator::Integrator;
pub use session::Session;
pub use state::{Rates, State};
pub use trajectory::{Frame, Trajectory};

pub use pendula_solvers::transient::dopri5::{Action, Event, Stats, Status};
