/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the last grid point.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
///
/// `times[i]` is the grid point of `states[i]`, and `states[0]` is the initial
/// condition. For a complete run both hold one entry per grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Grid points visited, in order.
    pub times: Vec<f64>,

    /// State at each visited grid point.
    pub states: Vec<S>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the final time and state, if any were recorded.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &S)> {
        Some((*self.times.last()?, self.states.last()?))
    }
}
