/// Receives events from a solver and optionally steers it.
///
/// Solvers call [`Observer::observe`] with each event they emit. Returning
/// `Some(action)` asks the solver to act on it; returning `None` lets the solver
/// continue unchanged.
///
/// The unit type `()` is a no-op observer, and any `FnMut(&E) -> Option<A>`
/// closure is an observer.
pub trait Observer<E, A> {
    /// Handles an event and returns an optional action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
