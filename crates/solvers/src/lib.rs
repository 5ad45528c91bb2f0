//! Forward Euler steppers and closed-form error checks.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step forward Euler integration of first-order ODEs
//!   ([`euler`](transient::euler) for any [`OdeProblem`], [`linear`](transient::linear)
//!   for `u' = a u + b`)
//! - [`accuracy`] — comparing a trajectory to an exact solution on the same grid
//!
//! [`OdeProblem`]: tangent_core::OdeProblem

pub mod accuracy;
pub mod transient;
