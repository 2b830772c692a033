use std::convert::Infallible;

use pendula_solvers::transient::dopri5;

/// Errors returned by the pendulum models and the session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was rejected before any integration work started.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A result was requested before `solve` produced a trajectory.
    #[error("no solution exists; call `solve` first")]
    NoSolution,

    /// The integrator failed part-way through.
    #[error(transparent)]
    Solver(#[from] dopri5::Error),
}

impl From<dopri5::ConfigError> for Error {
    fn from(err: dopri5::ConfigError) -> Self {
        let reason = match err {
            dopri5::ConfigError::TEnd => "duration must be finite and positive".to_owned(),
            dopri5::ConfigError::Dt => "step size must be finite and positive".to_owned(),
            dopri5::ConfigError::RelTol | dopri5::ConfigError::AbsTol => err.to_string(),
        };
        Self::InvalidArgument(reason)
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
