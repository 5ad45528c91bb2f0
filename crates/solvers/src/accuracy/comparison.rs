use super::ErrorNorm;

/// An approximate trajectory and the exact solution sampled on the same grid.
///
/// The three sequences always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub(super) times: Vec<f64>,
    pub(super) approx: Vec<f64>,
    pub(super) exact: Vec<f64>,
}

impl Comparison {
    /// Returns the grid points.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the forward Euler values.
    #[must_use]
    pub fn approx(&self) -> &[f64] {
        &self.approx
    }

    /// Returns the exact solution values.
    #[must_use]
    pub fn exact(&self) -> &[f64] {
        &self.exact
    }

    /// Returns the number of compared points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if no points were compared, which `compare` never produces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Summarizes the deviation under `norm`.
    #[must_use]
    pub fn error(&self, norm: ErrorNorm) -> f64 {
        norm.reduce(self.deviations())
    }

    /// Returns `true` if every point is strictly within `tolerance` of exact.
    #[must_use]
    pub fn within(&self, tolerance: f64) -> bool {
        self.deviations().all(|d| d.abs() < tolerance)
    }

    fn deviations(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.approx.iter().zip(&self.exact).map(|(a, e)| a - e)
    }
}
