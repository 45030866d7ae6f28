use crate::{Config, Parameters};

/// The exact solution of dy/dx = k·y through (x0, y0): y = y0·e^(k·(x−x0)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    k: f64,
    x0: f64,
    y0: f64,
}

impl Exponential {
    #[must_use]
    pub fn new(k: f64, x0: f64, y0: f64) -> Self {
        Self { k, x0, y0 }
    }

    /// Evaluates the solution at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.y0 * (self.k * (x - self.x0)).exp()
    }

    /// Evaluates the solution at each of `xs`, preserving order.
    #[must_use]
    pub fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.at(x)).collect()
    }

    /// Samples the solution at [`Config::curve_samples`] evenly spaced points
    /// on `[x0, x_end]`, returning `[x, y]` pairs.
    ///
    /// The first pair is `[x0, y0]` and the last is at exactly `x_end`.
    #[must_use]
    pub fn curve(&self, x_end: f64, config: &Config) -> Vec<[f64; 2]> {
        linspace(self.x0, x_end, config.curve_samples())
            .into_iter()
            .map(|x| [x, self.at(x)])
            .collect()
    }
}

impl From<&Parameters> for Exponential {
    fn from(parameters: &Parameters) -> Self {
        Self::new(parameters.k, parameters.x0, parameters.y0)
    }
}

/// Evaluates y0·e^(k·(x−x0)) at each of `xs`.
#[must_use]
pub fn evaluate_analytical(k: f64, x0: f64, y0: f64, xs: &[f64]) -> Vec<f64> {
    Exponential::new(k, x0, y0).evaluate(xs)
}

/// Returns `samples` evenly spaced values from `start` to `end`, inclusive.
///
/// Zero samples give an empty vector and one sample gives `[start]`. The last
/// value is exactly `end`.
#[must_use]
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let spacing = (end - start) / (samples - 1) as f64;
            let mut values: Vec<f64> = (0..samples - 1)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + i * spacing
                })
                .collect();
            values.push(end);
            values
        }
    }
}
