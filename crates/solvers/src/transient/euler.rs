//! Forward Euler solver for ODE problems.
//!
//! This module provides a fixed-step forward Euler integrator. It marches a
//! state across a half-open [`TimeGrid`] using the derivative at the previous
//! grid point:
//!
//! ```text
//! x_i = x_{i-1} + f(t_{i-1}, x_{i-1}) * dt
//! ```
//!
//! # Example
//!
//! ```
//! use tangent_solvers::transient::euler;
//!
//! // x' = x, x(0) = 1 over [0, 0.1) with dt = 0.001
//! let xs = euler::trajectory(&|_t: f64, x: f64| x, 1.0, 0.0, 0.1, 0.001)?;
//!
//! assert_eq!(xs.len(), 100);
//! assert_eq!(xs[0], 1.0);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::fmt::Debug;

use tangent_core::{Observer, OdeProblem, StepIntegrable, TimeGrid};
use tracing::{debug, trace};

/// Integrates an ODE problem across a grid using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial state at the first grid point.
/// 2. For each remaining grid point:
///    - Compute the derivative at the previous grid point and state.
///    - Step the state forward: `state + derivative * dt`.
///    - Record the new state.
/// 3. Return the solution with the full trajectory.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial state and after each
/// integration step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns [`Error::TooManyPoints`] if the grid is larger than the config
/// allows, or [`Error::Problem`] if the derivative fails at any step.
pub fn solve<P, Obs>(
    problem: &P,
    initial: P::State,
    grid: &TimeGrid,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::State: Clone + Debug,
    Obs: Observer<Event<P::State>, Action>,
{
    let len = grid.len();
    if len > config.max_points() {
        return Err(Error::TooManyPoints {
            len,
            max: config.max_points(),
        });
    }

    let delta_t = grid.delta_t();
    debug!(
        points = len,
        t_0 = grid.t_0(),
        delta_t,
        "starting forward Euler integration"
    );

    let mut times = Vec::with_capacity(len);
    let mut states = Vec::with_capacity(len);
    let mut state = initial;
    let mut previous_time = grid.t_0();

    for (step, time) in grid.iter().enumerate() {
        if step > 0 {
            let derivative = problem
                .derivative(previous_time, &state)
                .map_err(|err| Error::problem(step, previous_time, err))?;
            state = state.step(derivative, delta_t);
            trace!(step, time, ?state, "stepped");
        }

        times.push(time);
        states.push(state.clone());
        previous_time = time;

        let event = Event {
            step,
            time,
            state: state.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step, time, "integration stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                times,
                states,
                steps: step,
            });
        }
    }

    let steps = len.saturating_sub(1);
    debug!(steps, "forward Euler integration complete");

    Ok(Solution {
        status: Status::Complete,
        times,
        states,
        steps,
    })
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the grid is too large or the derivative fails.
pub fn solve_unobserved<P>(
    problem: &P,
    initial: P::State,
    grid: &TimeGrid,
    config: &Config,
) -> Result<Solution<P::State>, Error>
where
    P: OdeProblem,
    P::State: Clone + Debug,
{
    solve(problem, initial, grid, config, ())
}

/// Returns the forward Euler trajectory of `f` from `f_0` over `[t_0, t_f)`.
///
/// The trajectory holds `ceil((t_f - t_0) / delta_t)` values, one per grid
/// point, starting with `f_0`.
///
/// # Errors
///
/// Returns [`Error::Grid`] if `delta_t <= 0`, `t_f <= t_0`, or any argument is
/// non-finite, and [`Error::Problem`] if `f` fails.
pub fn trajectory<P>(f: &P, f_0: f64, t_0: f64, t_f: f64, delta_t: f64) -> Result<Vec<f64>, Error>
where
    P: OdeProblem<State = f64>,
{
    let grid = TimeGrid::new(t_0, t_f, delta_t)?;
    let solution = solve_unobserved(f, f_0, &grid, &Config::default())?;
    Ok(solution.states)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use tangent_core::{DerivativeOf, Fallible, GridError};

    // --- Test fixtures ---

    /// State: position
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Position(f64);

    /// Derivative: velocity
    #[derive(Debug, Clone, Copy)]
    struct Velocity(f64);

    impl StepIntegrable<f64> for Position {
        type Derivative = Velocity;

        fn step(&self, derivative: Velocity, dt: f64) -> Self {
            Position(self.0 + derivative.0 * dt)
        }
    }

    /// Motion with a constant velocity.
    struct ConstantVelocity(f64);

    impl OdeProblem for ConstantVelocity {
        type State = Position;
        type Error = std::convert::Infallible;

        fn derivative(
            &self,
            _t: f64,
            _state: &Position,
        ) -> Result<DerivativeOf<Position, f64>, Self::Error> {
            Ok(Velocity(self.0))
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("blew up")]
    struct BlewUp;

    // --- Tests ---

    #[test]
    fn constant_velocity_motion() {
        let grid = TimeGrid::new(0.0, 1.1, 0.1).unwrap();

        let solution = solve_unobserved(
            &ConstantVelocity(2.0),
            Position(0.0),
            &grid,
            &Config::default(),
        )
        .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.states.len(), 11);

        // After 10 steps at v=2, dt=0.1: position = 0 + 2*0.1*10 = 2.0
        let (time, position) = solution.last().unwrap();
        assert_relative_eq!(position.0, 2.0, epsilon = 1e-12);
        assert_relative_eq!(time, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn exponential_growth_tracks_exp() {
        let xs = trajectory(&|_t: f64, x: f64| x, 1.0, 0.0, 0.1, 0.001).unwrap();
        let grid = TimeGrid::new(0.0, 0.1, 0.001).unwrap();

        assert_eq!(xs.len(), 100);
        for (x, t) in xs.iter().zip(grid.iter()) {
            assert_abs_diff_eq!(*x, t.exp(), epsilon = 1e-3);
        }
    }

    #[test]
    fn derivative_uses_previous_grid_point() {
        // x' = 3t from x(0) = 1 with dt = 0.3 over [0, 1)
        let xs = trajectory(&|t: f64, _x: f64| 3.0 * t, 1.0, 0.0, 1.0, 0.3).unwrap();

        assert_eq!(xs.len(), 4);
        for (actual, expected) in xs.iter().zip([1.0, 1.0, 1.27, 1.81]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn first_value_is_initial_condition() {
        let xs = trajectory(&|t: f64, x: f64| t - x, -4.5, 2.0, 3.0, 0.5).unwrap();

        assert_eq!(xs[0], -4.5);
    }

    #[test]
    fn single_point_grid_returns_initial_condition() {
        let xs = trajectory(&|_t: f64, _x: f64| f64::NAN, 7.0, 0.0, 0.5, 1.0).unwrap();

        assert_eq!(xs, vec![7.0]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let f = |t: f64, x: f64| (t * x).sin() - 0.5 * x;

        let first = trajectory(&f, 0.3, 0.0, 5.0, 0.01).unwrap();
        let second = trajectory(&f, 0.3, 0.0, 5.0, 0.01).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let f = |_t: f64, x: f64| x;

        assert!(matches!(
            trajectory(&f, 1.0, 0.0, 1.0, 0.0),
            Err(Error::Grid(GridError::NonPositiveStep { .. }))
        ));
        assert!(matches!(
            trajectory(&f, 1.0, 1.0, 1.0, 0.1),
            Err(Error::Grid(GridError::EmptyInterval { .. }))
        ));
        assert!(matches!(
            trajectory(&f, 1.0, 2.0, 1.0, 0.1),
            Err(Error::Grid(GridError::EmptyInterval { .. }))
        ));
    }

    #[test]
    fn derivative_error_propagates_unchanged() {
        let f = Fallible(|t: f64, x: f64| if t < 0.25 { Ok(x) } else { Err(BlewUp) });

        let err = trajectory(&f, 1.0, 0.0, 1.0, 0.1).unwrap_err();

        let Error::Problem { step, time, source } = err else {
            panic!("expected a problem error");
        };
        assert_eq!(step, 4);
        assert_relative_eq!(time, 0.3, epsilon = 1e-12);
        assert!(source.downcast_ref::<BlewUp>().is_some());
    }

    #[test]
    fn grid_larger_than_config_is_rejected() {
        let grid = TimeGrid::new(0.0, 1.0, 0.01).unwrap();
        let config = Config::new(50).unwrap();

        let err = solve_unobserved(&|_t: f64, x: f64| x, 1.0, &grid, &config).unwrap_err();

        assert!(matches!(err, Error::TooManyPoints { len: 100, max: 50 }));
    }

    #[test]
    fn observer_can_stop_early() {
        let grid = TimeGrid::new(0.0, 10.0, 0.1).unwrap();

        let observer = |event: &Event<Position>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(
            &ConstantVelocity(1.0),
            Position(0.0),
            &grid,
            &Config::default(),
            observer,
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.states.len(), 6);
        assert_eq!(solution.times.len(), 6);
    }

    #[test]
    fn events_follow_the_grid() {
        let grid = TimeGrid::new(0.0, 1.0, 0.25).unwrap();

        let mut seen = Vec::new();
        solve(
            &|_t: f64, _x: f64| 2.0,
            0.0,
            &grid,
            &Config::default(),
            |event: &Event<f64>| {
                seen.push((event.step, event.time, event.state));
                None
            },
        )
        .expect("should solve");

        assert_eq!(
            seen,
            vec![
                (0, 0.0, 0.0),
                (1, 0.25, 0.5),
                (2, 0.5, 1.0),
                (3, 0.75, 1.5)
            ]
        );
    }
}
