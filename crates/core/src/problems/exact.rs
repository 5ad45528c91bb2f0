use std::convert::Infallible;

/// A closed-form solution `g(t)` used to check a numerical trajectory.
///
/// Any closure `Fn(f64) -> f64` is an infallible exact solution.
pub trait ExactSolution {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the solution at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the solution cannot be evaluated at `t`.
    fn value(&self, t: f64) -> Result<f64, Self::Error>;
}

impl<F> ExactSolution for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn value(&self, t: f64) -> Result<f64, Self::Error> {
        Ok(self(t))
    }
}
