/// A hook that sees every event a solver emits.
///
/// An integrator calls [`observe`](Observer::observe) once per event, for
/// example once per accepted time step, and reads the returned action before
/// it continues. `None` means carry on. What `Some(action)` does is up to the
/// solver; the Dopri5 integrator understands a request to stop early.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, so a one-off check on
/// a run needs no named type. Pass `()` to run unobserved.
///
/// # Example
///
/// ```
/// use pendula_core::Observer;
///
/// let mut peak = 0.0_f64;
/// let mut track_peak = |energy: &f64| -> Option<()> {
///     peak = peak.max(*energy);
///     None
/// };
///
/// for energy in [1.0, 3.5, 2.0] {
///     track_peak.observe(&energy);
/// }
/// assert_eq!(peak, 3.5);
/// ```
pub trait Observer<E, A> {
    /// Inspects `event` and returns the action the solver should take, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Halt,
    }

    fn drive<O: Observer<f64, Action>>(mut observer: O, events: &[f64]) -> usize {
        for (i, event) in events.iter().enumerate() {
            if observer.observe(event) == Some(Action::Halt) {
                return i;
            }
        }
        events.len()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1.0, 2.0, 3.0]), 3);
    }

    #[test]
    fn closure_observer_can_halt() {
        let halt_above_two = |event: &f64| (*event > 2.0).then_some(Action::Halt);
        assert_eq!(drive(halt_above_two, &[1.0, 2.0, 3.0, 4.0]), 2);
    }
}
