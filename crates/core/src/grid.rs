use thiserror::Error;

/// Ulps of slack allowed when treating a step ratio as a whole number.
///
/// Spans such as `0.1 / 0.001` can land a few ulps away from the integer they
/// represent, which would otherwise add a spurious grid point under `ceil`.
const WHOLE_STEP_ULPS: f64 = 4.0;

/// An evenly spaced, half-open grid of time points over `[t_0, t_f)`.
///
/// Point `i` is `t_0 + i * delta_t`. Points are computed by multiplication
/// rather than repeated addition, so spacing does not drift over long grids.
///
/// A constructed grid always holds at least one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t_0: f64,
    delta_t: f64,
    len: usize,
}

/// Errors that can occur when building a [`TimeGrid`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("grid bounds and step size must be finite")]
    NonFinite,

    #[error("step size must be positive, got {delta_t}")]
    NonPositiveStep { delta_t: f64 },

    #[error("final time {t_f} must be greater than initial time {t_0}")]
    EmptyInterval { t_0: f64, t_f: f64 },

    #[error("span {span} is not a whole number of steps of size {delta_t}")]
    NonIntegralSteps { span: f64, delta_t: f64 },

    #[error("span {span} holds too many steps of size {delta_t} to index")]
    Overflow { span: f64, delta_t: f64 },
}

impl TimeGrid {
    /// Creates a grid over `[t_0, t_f)` with `ceil((t_f - t_0) / delta_t)` points.
    ///
    /// When `delta_t` does not divide the span evenly, the last point lies in
    /// the final partial step and `t_f` itself is never included.
    ///
    /// # Errors
    ///
    /// Returns an error if any argument is non-finite, `delta_t <= 0`, or
    /// `t_f <= t_0`.
    pub fn new(t_0: f64, t_f: f64, delta_t: f64) -> Result<Self, GridError> {
        let span = validate(t_0, t_f, delta_t)?;
        let ratio = span / delta_t;
        let steps = whole_steps(t_0, t_f, delta_t, ratio).unwrap_or_else(|| ratio.ceil());
        let len = to_len(steps.max(1.0)).ok_or(GridError::Overflow { span, delta_t })?;

        Ok(Self { t_0, delta_t, len })
    }

    /// Creates a grid over `[t_0, t_f)` where `delta_t` divides the span exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NonIntegralSteps`] if `(t_f - t_0) / delta_t` is not
    /// a positive whole number, or any error [`TimeGrid::new`] returns.
    pub fn whole_steps(t_0: f64, t_f: f64, delta_t: f64) -> Result<Self, GridError> {
        let span = validate(t_0, t_f, delta_t)?;
        let steps = whole_steps(t_0, t_f, delta_t, span / delta_t)
            .filter(|&steps| steps >= 1.0)
            .ok_or(GridError::NonIntegralSteps { span, delta_t })?;
        let len = to_len(steps).ok_or(GridError::Overflow { span, delta_t })?;

        Ok(Self { t_0, delta_t, len })
    }

    /// Returns the first grid point.
    #[must_use]
    pub fn t_0(&self) -> f64 {
        self.t_0
    }

    /// Returns the spacing between grid points.
    #[must_use]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Returns the number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; kept for parity with [`TimeGrid::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the exclusive upper bound `t_0 + len * delta_t`.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.point(self.len)
    }

    /// Returns grid point `i`, or `None` if `i` is out of range.
    #[must_use]
    pub fn time(&self, i: usize) -> Option<f64> {
        (i < self.len).then(|| self.point(i))
    }

    /// Iterates over the grid points in increasing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.point(i))
    }

    /// Collects the grid points into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn point(&self, i: usize) -> f64 {
        self.t_0 + i as f64 * self.delta_t
    }
}

/// Checks the raw arguments and returns the span `t_f - t_0`.
fn validate(t_0: f64, t_f: f64, delta_t: f64) -> Result<f64, GridError> {
    if !(t_0.is_finite() && t_f.is_finite() && delta_t.is_finite()) {
        return Err(GridError::NonFinite);
    }
    if delta_t <= 0.0 {
        return Err(GridError::NonPositiveStep { delta_t });
    }
    if t_f <= t_0 {
        return Err(GridError::EmptyInterval { t_0, t_f });
    }
    Ok(t_f - t_0)
}

/// Returns the nearest whole number if `ratio` is within rounding error of it.
///
/// The slack covers representing the bounds, subtracting them, and dividing
/// by `delta_t`, so it stays far below one step even on very long grids.
fn whole_steps(t_0: f64, t_f: f64, delta_t: f64, ratio: f64) -> Option<f64> {
    let nearest = ratio.round();
    let slack = WHOLE_STEP_ULPS * f64::EPSILON * (t_0.abs().max(t_f.abs()) / delta_t + ratio);
    ((ratio - nearest).abs() <= slack).then_some(nearest)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn to_len(steps: f64) -> Option<usize> {
    (steps.is_finite() && steps < usize::MAX as f64).then(|| steps as usize)
}
