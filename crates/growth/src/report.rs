use std::fmt;

use crate::{Exponential, Trace};

/// Comparison of one trace record against the exact solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorRow {
    pub step: usize,
    pub x: f64,

    /// The Euler approximation at `x`.
    pub euler: f64,

    /// The exact solution at `x`.
    pub analytical: f64,

    /// `|euler − analytical|`.
    pub absolute: f64,

    /// `|euler − analytical| / |analytical| × 100`, or `None` where the exact
    /// solution is zero and the percentage is undefined.
    pub relative_percent: Option<f64>,
}

impl ErrorRow {
    fn new(step: usize, x: f64, euler: f64, analytical: f64) -> Self {
        let difference = euler - analytical;
        let relative_percent =
            (analytical != 0.0).then(|| (difference / analytical).abs() * 100.0);

        Self {
            step,
            x,
            euler,
            analytical,
            absolute: difference.abs(),
            relative_percent,
        }
    }

    /// Returns `true` if the relative error is undefined at this row.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.relative_percent.is_none()
    }
}

/// Per-record errors of a [`Trace`] against the exact exponential, with the
/// worst case of each.
///
/// Rows whose exact value is zero have no relative error and are left out of
/// [`max_relative_percent`](Self::max_relative_percent). A NaN error makes the
/// corresponding maximum NaN.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorReport {
    rows: Vec<ErrorRow>,
    max_absolute: f64,
    max_relative_percent: Option<f64>,
}

impl ErrorReport {
    /// Compares every record of `trace` with the exact solution through the
    /// trace's own `(k, x0, y0)`.
    #[must_use]
    pub fn new(trace: &Trace) -> Self {
        let exact = Exponential::from(trace.parameters());
        let xs = trace.xs();
        let analytical = exact.evaluate(&xs);

        let rows: Vec<ErrorRow> = trace
            .iter()
            .zip(analytical)
            .map(|(record, value)| ErrorRow::new(record.step, record.x, record.y, value))
            .collect();

        let max_absolute = max_or_nan(rows.iter().map(|row| row.absolute)).unwrap_or(0.0);
        let max_relative_percent = max_or_nan(rows.iter().filter_map(|row| row.relative_percent));

        let degenerate = rows.iter().filter(|row| row.is_degenerate()).count();
        if degenerate > 0 {
            log::debug!(
                "{degenerate} of {} points have a zero exact value; relative error undefined there",
                rows.len()
            );
        }

        Self {
            rows,
            max_absolute,
            max_relative_percent,
        }
    }

    /// Returns one row per trace record, in step order.
    #[must_use]
    pub fn rows(&self) -> &[ErrorRow] {
        &self.rows
    }

    /// Returns the largest absolute error across the trace.
    #[must_use]
    pub fn max_absolute(&self) -> f64 {
        self.max_absolute
    }

    /// Returns the largest defined relative error, in percent.
    ///
    /// `None` when the relative error is undefined at every point.
    #[must_use]
    pub fn max_relative_percent(&self) -> Option<f64> {
        self.max_relative_percent
    }

    /// Returns how many rows have an undefined relative error.
    #[must_use]
    pub fn degenerate_points(&self) -> usize {
        self.rows.iter().filter(|row| row.is_degenerate()).count()
    }
}

impl fmt::Display for ErrorReport {
    /// Renders the report as a table with 6 decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>16} {:>20} {:>16} {:>20}",
            "x", "Euler's Method", "Analytical Solution", "Absolute Error", "Relative Error (%)"
        )?;
        for row in &self.rows {
            write!(
                f,
                "{:>12.6} {:>16.6} {:>20.6} {:>16.6} ",
                row.x, row.euler, row.analytical, row.absolute
            )?;
            match row.relative_percent {
                Some(percent) => writeln!(f, "{percent:>20.6}")?,
                None => writeln!(f, "{:>20}", "undefined")?,
            }
        }
        Ok(())
    }
}

/// Maximum of `values`, or NaN if any value is NaN. `None` when empty.
fn max_or_nan(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(|a, b| {
        if a.is_nan() || b.is_nan() {
            f64::NAN
        } else {
            a.max(b)
        }
    })
}
