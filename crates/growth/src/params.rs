use thiserror::Error;

use crate::Config;

/// Quotients within this many relative epsilons of a whole number count as an
/// exact multiple of `h`.
///
/// Decimal inputs such as `x_target = 0.3` and `h = 0.1` divide to
/// `2.9999999999999996` in binary floating point. Anything further from the
/// integer is a real fraction and rounds down.
const STEP_SNAP_ULPS: f64 = 4.0;

/// Inputs for one run: the equation dy/dx = k·y, its initial point, and the
/// stepping range.
///
/// Fields are public so a run can be described with struct update syntax.
/// Nothing is checked until [`validate`](Self::validate) or
/// [`compute_trace`](crate::compute_trace) is called.
///
/// ```
/// use slope_growth::Parameters;
///
/// let finer = Parameters {
///     h: 0.01,
///     ..Parameters::default()
/// };
/// assert!(finer.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Rate constant in dy/dx = k·y.
    pub k: f64,

    /// Initial x.
    pub x0: f64,

    /// Initial y, the value at `x0`.
    pub y0: f64,

    /// The x value to stop at. Must be greater than `x0`.
    pub x_target: f64,

    /// Step size. Must be positive.
    pub h: f64,
}

/// Reasons a set of [`Parameters`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("target x ({x_target}) must be greater than initial x ({x0})")]
    TargetNotAfterStart { x0: f64, x_target: f64 },

    #[error("step size must be positive, got {h}")]
    NonPositiveStep { h: f64 },

    #[error("{steps} steps exceeds the limit of {max}")]
    TooManySteps { steps: f64, max: usize },
}

impl Parameters {
    /// Creates parameters for dy/dx = `k`·y starting at (`x0`, `y0`) and
    /// stepping by `h` up to `x_target`.
    #[must_use]
    pub fn new(k: f64, x0: f64, y0: f64, x_target: f64, h: f64) -> Self {
        Self {
            k,
            x0,
            y0,
            x_target,
            h,
        }
    }

    /// Checks that every value is finite, `x_target > x0`, and `h > 0`.
    ///
    /// # Errors
    ///
    /// Returns the first violated condition.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("k", self.k),
            ("x0", self.x0),
            ("y0", self.y0),
            ("x_target", self.x_target),
            ("h", self.h),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }

        if self.x_target <= self.x0 {
            return Err(ParameterError::TargetNotAfterStart {
                x0: self.x0,
                x_target: self.x_target,
            });
        }
        if self.h <= 0.0 {
            return Err(ParameterError::NonPositiveStep { h: self.h });
        }

        Ok(())
    }

    /// Returns the length of the stepping range, `x_target - x0`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.x_target - self.x0
    }

    /// Returns the number of whole steps of size `h` that fit in the range.
    ///
    /// This is `floor((x_target - x0) / h)`: no partial step is taken, so the
    /// last x may fall short of `x_target`. A quotient within a few ulps of
    /// an integer is treated as that integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the step count
    /// exceeds [`Config::max_steps`].
    pub fn step_count(&self, config: &Config) -> Result<usize, ParameterError> {
        self.validate()?;

        let ratio = self.span() / self.h;
        let nearest = ratio.round();
        let tolerance = STEP_SNAP_ULPS * f64::EPSILON * nearest.max(1.0);
        let whole = if (ratio - nearest).abs() <= tolerance {
            nearest
        } else {
            ratio.floor()
        };

        #[allow(clippy::cast_precision_loss)]
        let max = config.max_steps() as f64;
        if !whole.is_finite() || whole > max {
            return Err(ParameterError::TooManySteps {
                steps: whole,
                max: config.max_steps(),
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = whole as usize;
        Ok(steps)
    }
}

impl Default for Parameters {
    /// Growth at 10% per unit x from (0, 1) to x = 2 in steps of 0.1.
    fn default() -> Self {
        Self::new(0.1, 0.0, 1.0, 2.0, 0.1)
    }
}
