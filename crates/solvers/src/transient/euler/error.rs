use std::error::Error as StdError;

use tangent_core::GridError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("grid has {len} points, more than the configured maximum of {max}")]
    TooManyPoints { len: usize, max: usize },

    #[error("derivative failed at step {step} (t = {time}): {source}")]
    Problem {
        step: usize,
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(
        step: usize,
        time: f64,
        err: E,
    ) -> Self {
        Self::Problem {
            step,
            time,
            source: Box::new(err),
        }
    }
}
