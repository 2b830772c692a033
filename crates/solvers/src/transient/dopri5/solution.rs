/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Integrated over the whole requested span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A sampled point of the solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// The independent variable (usually time).
    pub t: f64,

    /// The state vector at `t`.
    pub y: [f64; N],
}

/// Work counters reported by the underlying integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of right-hand-side evaluations.
    pub evaluations: u32,

    /// Number of steps the error controller accepted.
    pub accepted_steps: u32,

    /// Number of steps the error controller rejected and retried.
    pub rejected_steps: u32,
}

/// The result of a Dopri5 integration.
///
/// Points start at `t = 0`, are strictly increasing in `t`, and are spaced by
/// the configured `dt`. The last point is the state at the end of the final
/// accepted step: `t_end` for a complete run, so the last interval may be
/// shorter than `dt`.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// Samples of the solution, uniformly spaced except for the last.
    pub points: Vec<Point<N>>,

    /// Integrator work counters.
    pub stats: Stats,
}

impl<const N: usize> Solution<N> {
    /// Returns the sample times.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.t).collect()
    }

    /// Returns the time series of state component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn column(&self, index: usize) -> Vec<f64> {
        assert!(index < N, "state has {N} components, asked for {index}");
        self.points.iter().map(|point| point.y[index]).collect()
    }
}
