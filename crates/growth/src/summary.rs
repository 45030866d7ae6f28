use std::fmt;

use crate::{ErrorReport, Trace};

/// Headline figures for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub final_x: f64,
    pub final_y: f64,
    pub steps: usize,
    pub max_absolute_error: f64,

    /// `None` when the relative error is undefined at every point.
    pub max_relative_error_percent: Option<f64>,
}

impl Summary {
    #[must_use]
    pub fn new(trace: &Trace, report: &ErrorReport) -> Self {
        Self {
            final_x: trace.final_x(),
            final_y: trace.final_y(),
            steps: trace.steps(),
            max_absolute_error: report.max_absolute(),
            max_relative_error_percent: report.max_relative_percent(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final x value: {:.4}", self.final_x)?;
        writeln!(f, "Final y value: {:.4}", self.final_y)?;
        writeln!(f, "Number of steps: {}", self.steps)?;
        writeln!(f, "Maximum absolute error: {:.6}", self.max_absolute_error)?;
        match self.max_relative_error_percent {
            Some(percent) => writeln!(f, "Maximum relative error: {percent:.4}%"),
            None => writeln!(f, "Maximum relative error: undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Parameters, compute_trace};

    fn summarize(parameters: Parameters) -> Summary {
        let trace = compute_trace(&parameters).unwrap();
        Summary::new(&trace, &ErrorReport::new(&trace))
    }

    #[test]
    fn renders_default_run() {
        let text = summarize(Parameters::default()).to_string();

        assert_eq!(
            text,
            "Final x value: 2.0000\n\
             Final y value: 1.2202\n\
             Number of steps: 20\n\
             Maximum absolute error: 0.001213\n\
             Maximum relative error: 0.0993%\n"
        );
    }

    #[test]
    fn renders_undefined_relative_error() {
        let summary = summarize(Parameters::new(0.3, 0.0, 0.0, 1.0, 0.5));

        assert_eq!(summary.steps, 2);
        assert_eq!(summary.max_relative_error_percent, None);
        assert!(summary.to_string().ends_with("Maximum relative error: undefined\n"));
    }
}
