/// Event emitted by the Dopri5 solver.
///
/// Step 0 carries the initial state. Steps 1..N are emitted after each step
/// the error controller accepts, at the end of that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const N: usize> {
    /// The accepted-step count (0 for the initial state).
    pub step: usize,

    /// The independent variable at the end of the step.
    pub t: f64,

    /// The state vector at `t`.
    pub y: [f64; N],
}
