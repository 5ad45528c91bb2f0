use thiserror::Error;

/// Configuration for the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_points: usize,
}

/// Errors that can occur when validating an Euler solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_points must be at least 1")]
    ZeroMaxPoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_points: 10_000_000,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_points` bounds the grid length the solver accepts, and therefore
    /// the size of the trajectory it allocates.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_points` is zero.
    pub fn new(max_points: usize) -> Result<Self, ConfigError> {
        if max_points == 0 {
            return Err(ConfigError::ZeroMaxPoints);
        }
        Ok(Self { max_points })
    }

    /// Returns the largest grid the solver will integrate over.
    #[must_use]
    pub fn max_points(&self) -> usize {
        self.max_points
    }
}
