//! Checking forward Euler trajectories against closed-form solutions.
//!
//! [`compare`] integrates a problem with [`euler`] and samples an
//! [`ExactSolution`] on the identical grid, so both sequences line up point for
//! point. [`sample_function_error`] reduces that comparison to one number.
//!
//! # Norms
//!
//! The default [`ErrorNorm::L2`] is the square root of the summed squared
//! deviations, with no division by the point count. Use [`ErrorNorm::Rms`] for
//! a true root-mean-square or [`ErrorNorm::Max`] for the worst point.

mod comparison;
mod error;
mod norm;

pub use comparison::Comparison;
pub use error::Error;
pub use norm::{ErrorNorm, LengthMismatch};

use tangent_core::{ExactSolution, OdeProblem, TimeGrid};
use tracing::debug;

use crate::transient::euler::{self, Config};

/// Integrates `f` from `y_0` over `[a, b)` and samples `g` on the same grid.
///
/// # Errors
///
/// Returns [`Error::Solve`] if the grid is invalid or `f` fails, and
/// [`Error::Exact`] if `g` fails at any grid point.
pub fn compare<P, G>(
    f: &P,
    g: &G,
    y_0: f64,
    delta_t: f64,
    a: f64,
    b: f64,
) -> Result<Comparison, Error>
where
    P: OdeProblem<State = f64>,
    G: ExactSolution,
{
    let grid = TimeGrid::new(a, b, delta_t).map_err(euler::Error::from)?;
    let solution = euler::solve_unobserved(f, y_0, &grid, &Config::default())?;

    let exact = solution
        .times
        .iter()
        .map(|&t| g.value(t).map_err(|err| Error::exact(t, err)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Comparison {
        times: solution.times,
        approx: solution.states,
        exact,
    })
}

/// Returns the [`ErrorNorm::L2`] deviation of the forward Euler solution of `f`
/// from the exact solution `g` over `[a, b)`.
///
/// # Errors
///
/// Returns the same errors as [`compare`].
pub fn sample_function_error<P, G>(
    f: &P,
    g: &G,
    y_0: f64,
    delta_t: f64,
    a: f64,
    b: f64,
) -> Result<f64, Error>
where
    P: OdeProblem<State = f64>,
    G: ExactSolution,
{
    sample_function_error_with(ErrorNorm::L2, f, g, y_0, delta_t, a, b)
}

/// Returns the deviation of the forward Euler solution of `f` from `g` under `norm`.
///
/// # Errors
///
/// Returns the same errors as [`compare`].
pub fn sample_function_error_with<P, G>(
    norm: ErrorNorm,
    f: &P,
    g: &G,
    y_0: f64,
    delta_t: f64,
    a: f64,
    b: f64,
) -> Result<f64, Error>
where
    P: OdeProblem<State = f64>,
    G: ExactSolution,
{
    let comparison = compare(f, g, y_0, delta_t, a, b)?;
    let error = comparison.error(norm);
    debug!(?norm, error, points = comparison.len(), "measured deviation from exact solution");
    Ok(error)
}
