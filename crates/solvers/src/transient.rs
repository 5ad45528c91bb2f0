//! Fixed-step integrators for ODE problems.
//!
//! An [`OdeProblem`] supplies `f(t, x)`; the solvers here march its state
//! across a [`TimeGrid`] one step at a time.
//!
//! # Solvers
//!
//! - [`euler`] — forward Euler for any problem whose state is
//!   [`StepIntegrable`]
//! - [`linear`] — forward Euler for linear ODEs `u' = a u + b`, with the
//!   closed-form solution for checking it
//!
//! [`OdeProblem`]: tangent_core::OdeProblem
//! [`StepIntegrable`]: tangent_core::StepIntegrable
//! [`TimeGrid`]: tangent_core::TimeGrid

pub mod euler;
pub mod linear;
