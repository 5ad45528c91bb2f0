//! Core traits and types for forward Euler integration.
//!
//! This crate defines the shared abstractions that the steppers in
//! `tangent-solvers` build on:
//!
//! - [`TimeGrid`] — a validated, evenly spaced, half-open grid of time points
//! - [`StepIntegrable`] — a state that advances by `derivative * delta`
//! - [`OdeProblem`] — a derivative function `f(t, state)`
//! - [`ExactSolution`] — a closed-form solution `g(t)` to compare against
//! - [`Fallible`] — adapts closures that return `Result` into either problem
//! - [`Observer`] — receives solver events and optionally returns control actions

mod grid;
mod observer;
mod problems;
mod step;

pub use grid::{GridError, TimeGrid};
pub use observer::Observer;
pub use problems::{ExactSolution, Fallible, OdeProblem};
pub use step::{DerivativeOf, StepIntegrable};
