/// The state of a double pendulum.
///
/// Angles are measured from the downward vertical in radians and are never
/// wrapped, so a link that has swung over the top twice reads `θ > 4π`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pub theta1: f64,
    pub omega1: f64,
    pub theta2: f64,
    pub omega2: f64,
}

impl State {
    /// Creates a state from angles and angular velocities.
    #[must_use]
    pub fn new(theta1: f64, omega1: f64, theta2: f64, omega2: f64) -> Self {
        Self {
            theta1,
            omega1,
            theta2,
            omega2,
        }
    }
}

impl From<[f64; 4]> for State {
    fn from([theta1, omega1, theta2, omega2]: [f64; 4]) -> Self {
        Self::new(theta1, omega1, theta2, omega2)
    }
}

impl From<(f64, f64, f64, f64)> for State {
    fn from((theta1, omega1, theta2, omega2): (f64, f64, f64, f64)) -> Self {
        Self::new(theta1, omega1, theta2, omega2)
    }
}

impl From<State> for [f64; 4] {
    fn from(state: State) -> Self {
        [state.theta1, state.omega1, state.theta2, state.omega2]
    }
}

/// The time derivative of a [`State`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    /// dθ1/dt, equal to ω1.
    pub dtheta1: f64,
    /// dω1/dt, the angular acceleration α1.
    pub domega1: f64,
    /// dθ2/dt, equal to ω2.
    pub dtheta2: f64,
    /// dω2/dt, the angular acceleration α2.
    pub domega2: f64,
}

impl From<Rates> for [f64; 4] {
    fn from(rates: Rates) -> Self {
        [rates.dtheta1, rates.domega1, rates.dtheta2, rates.domega2]
    }
}
