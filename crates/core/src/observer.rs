/// Receives events from a solver and optionally steers it.
///
/// A solver calls [`observe`](Observer::observe) once per event. Returning
/// `Some(action)` asks the solver to act on it (for example, to stop early);
/// returning `None` lets the solver carry on.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the observer that never acts. Stateful observers that callers want to
/// inspect after a run should also implement the trait for `&mut Self`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
