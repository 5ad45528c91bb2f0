use std::error::Error as StdError;

use crate::transient::euler;

/// Errors that can occur when comparing a trajectory to an exact solution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("integration failed: {0}")]
    Solve(#[from] euler::Error),

    #[error("exact solution failed at t = {time}: {source}")]
    Exact {
        time: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn exact<E: StdError + Send + Sync + 'static>(time: f64, err: E) -> Self {
        Self::Exact {
            time,
            source: Box::new(err),
        }
    }
}
