use thiserror::Error;

/// How pointwise deviations between two trajectories are summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorNorm {
    /// `sqrt(sum(d_i^2))`, the Euclidean norm of the deviation vector.
    ///
    /// This is not normalized by the number of points, so it grows with the
    /// grid length.
    #[default]
    L2,

    /// `sqrt(sum(d_i^2) / N)`, the root-mean-square deviation.
    Rms,

    /// `max |d_i|`, the largest pointwise deviation.
    Max,
}

/// Two trajectories of different lengths cannot be compared pointwise.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot compare {approx} approximate values with {exact} exact values")]
pub struct LengthMismatch {
    pub approx: usize,
    pub exact: usize,
}

impl ErrorNorm {
    /// Summarizes the deviation between `approx` and `exact`.
    ///
    /// Empty inputs measure `0.0` under every norm.
    ///
    /// # Errors
    ///
    /// Returns [`LengthMismatch`] if the slices differ in length.
    pub fn measure(self, approx: &[f64], exact: &[f64]) -> Result<f64, LengthMismatch> {
        if approx.len() != exact.len() {
            return Err(LengthMismatch {
                approx: approx.len(),
                exact: exact.len(),
            });
        }
        Ok(self.reduce(approx.iter().zip(exact).map(|(a, e)| a - e)))
    }

    /// Folds an exact-size stream of deviations into a single error.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn reduce(self, deviations: impl ExactSizeIterator<Item = f64>) -> f64 {
        let n = deviations.len();
        if n == 0 {
            return 0.0;
        }
        match self {
            Self::L2 => deviations.map(|d| d * d).sum::<f64>().sqrt(),
            Self::Rms => (deviations.map(|d| d * d).sum::<f64>() / n as f64).sqrt(),
            Self::Max => deviations.map(f64::abs).fold(0.0, f64::max),
        }
    }
}
