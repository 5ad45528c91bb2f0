use crate::{ExactSolution, OdeProblem};

/// Adapts a closure that returns `Result` into a problem or exact solution.
///
/// - `Fallible(|t, x| -> Result<f64, E>)` is an [`OdeProblem`].
/// - `Fallible(|t| -> Result<f64, E>)` is an [`ExactSolution`].
///
/// The closure's error is passed through to the caller untouched.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> OdeProblem for Fallible<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type State = f64;
    type Error = E;

    fn derivative(&self, t: f64, state: &f64) -> Result<f64, E> {
        (self.0)(t, *state)
    }
}

impl<F, E> ExactSolution for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn value(&self, t: f64) -> Result<f64, E> {
        (self.0)(t)
    }
}
