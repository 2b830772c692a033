/// Control actions supported by the Dopri5 solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the samples produced so far.
    StopEarly,
}
