use std::convert::Infallible;

use crate::{DerivativeOf, StepIntegrable};

/// A first-order ODE `x' = f(t, x)` to be integrated over time.
///
/// The problem supplies the derivative of its state at a given time. Steppers
/// call [`OdeProblem::derivative`] once per step, at the previous grid point,
/// and advance the state through [`StepIntegrable`].
///
/// Any closure `Fn(f64, f64) -> f64` taking `(t, x)` is an infallible problem
/// over an `f64` state. Wrap closures that return `Result` in
/// [`Fallible`](crate::Fallible) so their errors reach the caller.
pub trait OdeProblem {
    type State: StepIntegrable<f64>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the derivative of the state at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated.
    fn derivative(
        &self,
        t: f64,
        state: &Self::State,
    ) -> Result<DerivativeOf<Self::State, f64>, Self::Error>;
}

impl<F> OdeProblem for F
where
    F: Fn(f64, f64) -> f64,
{
    type State = f64;
    type Error = Infallible;

    fn derivative(&self, t: f64, state: &f64) -> Result<f64, Self::Error> {
        Ok(self(t, *state))
    }
}
