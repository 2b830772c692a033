use thiserror::Error;

/// Step count cap used when the requested span needs fewer steps.
const MIN_MAX_STEPS: u32 = 100_000;

/// Configuration for the Dopri5 solver.
///
/// Integration always starts at `t = 0` and runs to `t_end`. The step size
/// never exceeds `dt`, the first step is `dt`, and the returned samples are
/// spaced exactly `dt` apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    t_end: f64,
    dt: f64,
    rel_tol: f64,
    abs_tol: f64,
    max_steps: u32,
}

/// Errors that can occur when validating a Dopri5 solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("t_end must be finite and positive")]
    TEnd,

    #[error("dt must be finite and positive")]
    Dt,

    #[error("rel_tol must be finite and positive")]
    RelTol,

    #[error("abs_tol must be finite and positive")]
    AbsTol,
}

impl Config {
    /// Relative tolerance used unless overridden.
    pub const DEFAULT_REL_TOL: f64 = 1e-3;

    /// Absolute tolerance used unless overridden.
    pub const DEFAULT_ABS_TOL: f64 = 1e-6;

    /// Creates a config for integrating over `[0, t_end]` with step bound `dt`.
    ///
    /// The step count cap is sized so that a run which never rejects a step
    /// fits several times over.
    ///
    /// # Errors
    ///
    /// Returns an error if `t_end` or `dt` is non-positive or non-finite.
    pub fn new(t_end: f64, dt: f64) -> Result<Self, ConfigError> {
        if !t_end.is_finite() || t_end <= 0.0 {
            return Err(ConfigError::TEnd);
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::Dt);
        }

        Ok(Self {
            t_end,
            dt,
            rel_tol: Self::DEFAULT_REL_TOL,
            abs_tol: Self::DEFAULT_ABS_TOL,
            max_steps: max_steps_for_span(t_end, dt),
        })
    }

    /// Replaces the error-control tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is non-positive or non-finite.
    pub fn with_tolerances(self, rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol <= 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(ConfigError::AbsTol);
        }

        Ok(Self {
            rel_tol,
            abs_tol,
            ..self
        })
    }

    /// Replaces the cap on the number of attempted steps.
    #[must_use]
    pub fn with_max_steps(self, max_steps: u32) -> Self {
        Self { max_steps, ..self }
    }

    /// Returns the end of the integration span.
    #[must_use]
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Returns the maximum step size, which is also the sample spacing.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
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

    /// Returns the cap on the number of attempted steps.
    #[must_use]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn max_steps_for_span(t_end: f64, dt: f64) -> u32 {
    let needed = (t_end / dt).ceil() * 4.0;
    if needed >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        (needed as u32).max(MIN_MAX_STEPS)
    }
}
