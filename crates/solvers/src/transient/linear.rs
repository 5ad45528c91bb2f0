//! Forward Euler for linear ODEs `u' = rate * u + offset`.
//!
//! The default equation is `u' = 2u - 1`. Its grid must divide `[t_0, t_f)`
//! into a whole number of steps, so the trajectory holds exactly
//! `(t_f - t_0) / delta_t` values.

use std::convert::Infallible;

use tangent_core::{OdeProblem, TimeGrid};

use super::euler::{self, Config, Error};

/// The linear ODE `u' = rate * u + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearOde {
    pub rate: f64,
    pub offset: f64,
}

impl Default for LinearOde {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl LinearOde {
    /// `u' = 2u - 1`.
    pub const DEFAULT: Self = Self {
        rate: 2.0,
        offset: -1.0,
    };

    /// Creates `u' = rate * u + offset`.
    #[must_use]
    pub fn new(rate: f64, offset: f64) -> Self {
        Self { rate, offset }
    }

    /// Returns the constant solution `-offset / rate`, if there is one.
    #[must_use]
    pub fn equilibrium(&self) -> Option<f64> {
        (self.rate != 0.0).then(|| -self.offset / self.rate)
    }

    /// Returns the closed-form solution passing through `(t_0, u_0)`.
    ///
    /// With an equilibrium `u*`, this is `u(t) = (u_0 - u*) e^{rate (t - t_0)} + u*`;
    /// with `rate == 0` it is the line `u(t) = u_0 + offset (t - t_0)`.
    pub fn exact(&self, t_0: f64, u_0: f64) -> impl Fn(f64) -> f64 + Copy + use<> {
        let Self { rate, offset } = *self;
        let equilibrium = self.equilibrium();
        move |t| match equilibrium {
            Some(u_eq) => (u_0 - u_eq) * (rate * (t - t_0)).exp() + u_eq,
            None => u_0 + offset * (t - t_0),
        }
    }
}

impl OdeProblem for LinearOde {
    type State = f64;
    type Error = Infallible;

    fn derivative(&self, _t: f64, u: &f64) -> Result<f64, Self::Error> {
        Ok(self.rate * u + self.offset)
    }
}

/// Returns the forward Euler trajectory of `u' = 2u - 1` from `u_0` over `[t_0, t_f)`.
///
/// # Errors
///
/// Returns [`Error::Grid`] if `(t_f - t_0) / delta_t` is not a positive whole
/// number, `delta_t <= 0`, or any argument is non-finite.
pub fn solve(u_0: f64, t_0: f64, t_f: f64, delta_t: f64) -> Result<Vec<f64>, Error> {
    solve_with(&LinearOde::DEFAULT, u_0, t_0, t_f, delta_t, &Config::default())
}

/// Returns the forward Euler trajectory of any [`LinearOde`] over `[t_0, t_f)`.
///
/// # Errors
///
/// Returns the same errors as [`solve`], plus [`Error::TooManyPoints`] if the
/// grid exceeds `config`.
pub fn solve_with(
    ode: &LinearOde,
    u_0: f64,
    t_0: f64,
    t_f: f64,
    delta_t: f64,
    config: &Config,
) -> Result<Vec<f64>, Error> {
    let grid = TimeGrid::whole_steps(t_0, t_f, delta_t)?;
    let solution = euler::solve_unobserved(ode, u_0, &grid, config)?;
    Ok(solution.states)
}
