/// Event emitted by the Euler solver for each grid point.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The grid point this state belongs to.
    pub time: f64,

    /// The state at `time`.
    pub state: S,
}
