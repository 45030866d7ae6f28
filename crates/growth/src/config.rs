use thiserror::Error;

/// Limits applied when computing traces and analytical curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    max_steps: usize,
    curve_samples: usize,
}

/// Errors that can occur when validating a [`Config`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_steps must be at least 1")]
    ZeroMaxSteps,

    #[error("curve_samples must be at least 2, got {0}")]
    TooFewCurveSamples(usize),
}

impl Config {
    /// Default upper bound on the number of Euler steps in one trace.
    pub const DEFAULT_MAX_STEPS: usize = 10_000_000;

    /// Default number of points on a dense analytical curve.
    pub const DEFAULT_CURVE_SAMPLES: usize = 1000;

    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero or `curve_samples` is below 2.
    pub fn new(max_steps: usize, curve_samples: usize) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        if curve_samples < 2 {
            return Err(ConfigError::TooFewCurveSamples(curve_samples));
        }

        Ok(Self {
            max_steps,
            curve_samples,
        })
    }

    /// Returns the largest step count a trace may have.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the number of samples for a dense analytical curve.
    #[must_use]
    pub fn curve_samples(&self) -> usize {
        self.curve_samples
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: Self::DEFAULT_MAX_STEPS,
            curve_samples: Self::DEFAULT_CURVE_SAMPLES,
        }
    }
}
