use std::fmt;

use slope_core::{Observer, Snapshot};
use slope_solvers::transient::euler;

use crate::{Config, Error, GrowthModel, GrowthProblem, Parameters, Point, Rate};

/// One row of a [`Trace`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Step index, 0 for the initial point.
    pub step: usize,

    pub x: f64,

    /// Approximate solution at `x`.
    pub y: f64,

    /// The slope k·y used for the step that produced this record, evaluated
    /// at the start of that step. For record 0 this is k·y0.
    pub dy_dx: f64,

    /// The increment `h · dy_dx` added to the previous y. Zero for record 0.
    pub delta_y: f64,
}

impl Record {
    /// Returns `true` if every field of the record is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.dy_dx.is_finite()
            && self.delta_y.is_finite()
    }
}

/// The complete, ordered output of one Euler run.
///
/// A trace always contains the initial record, so it is never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trace {
    parameters: Parameters,
    records: Vec<Record>,
}

impl Trace {
    /// Converts the solver history into records.
    ///
    /// Record `i > 0` carries the slope of snapshot `i - 1`, the slope that
    /// was applied to reach it.
    fn from_history(parameters: Parameters, history: &[Snapshot<Point, Rate>]) -> Self {
        let mut records = Vec::with_capacity(history.len());

        if let Some(initial) = history.first() {
            records.push(Record {
                step: 0,
                x: initial.input.x,
                y: initial.input.y,
                dy_dx: initial.output.0,
                delta_y: 0.0,
            });
        }

        let pairs = history.iter().zip(history.iter().skip(1));
        for (index, (previous, current)) in pairs.enumerate() {
            let slope = previous.output;
            records.push(Record {
                step: index + 1,
                x: current.input.x,
                y: current.input.y,
                dy_dx: slope.0,
                delta_y: slope.increment(parameters.h),
            });
        }

        Self {
            parameters,
            records,
        }
    }

    /// Returns the parameters this trace was computed from.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the records in step order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records, one more than [`steps`](Self::steps).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a computed trace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of Euler steps taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// Returns the initial record.
    #[must_use]
    pub fn first(&self) -> &Record {
        &self.records[0]
    }

    /// Returns the last record.
    #[must_use]
    pub fn last(&self) -> &Record {
        &self.records[self.records.len() - 1]
    }

    #[must_use]
    pub fn final_x(&self) -> f64 {
        self.last().x
    }

    #[must_use]
    pub fn final_y(&self) -> f64 {
        self.last().y
    }

    /// Returns the x value of every record.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.x).collect()
    }

    /// Returns the approximate y value of every record.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.y).collect()
    }

    /// Returns the (x, y) pairs of the trace, ready for plotting.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.records.iter().map(|r| [r.x, r.y]).collect()
    }

    /// Returns `true` if no record overflowed to infinity or NaN.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.records.iter().all(Record::is_finite)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Trace {
    /// Renders the trace as a table, x to 4 decimals and the rest to 6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>12} {:>16} {:>16} {:>16}",
            "Step", "x", "y", "dy/dx", "Δy"
        )?;
        for record in &self.records {
            writeln!(
                f,
                "{:>6} {:>12.4} {:>16.6} {:>16.6} {:>16.6}",
                record.step, record.x, record.y, record.dy_dx, record.delta_y
            )?;
        }
        Ok(())
    }
}

/// Computes the Euler trace with the default [`Config`].
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if `x_target <= x0`, `h <= 0`, any
/// value is non-finite, or the step count exceeds the default limit. No
/// step is taken in that case.
pub fn compute_trace(parameters: &Parameters) -> Result<Trace, Error> {
    compute_trace_with(parameters, &Config::default())
}

/// Computes the Euler trace of dy/dx = k·y.
///
/// Record 0 is `(0, x0, y0, k·y0, 0)`. Each following record is produced by
/// one forward Euler step: `dy/dx = k·y_prev`, `delta_y = h·dy/dx`,
/// `x = x_prev + h`, `y = y_prev + delta_y`. The number of steps is
/// [`Parameters::step_count`]; no partial final step is taken.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if the parameters are rejected by
/// [`Parameters::step_count`].
pub fn compute_trace_with(parameters: &Parameters, config: &Config) -> Result<Trace, Error> {
    observe_trace(parameters, config, ())
}

/// Computes the Euler trace, passing each step to `observer` as it happens.
///
/// The observer sees an [`euler::Event`] for the initial point and after
/// every step. Returning [`euler::Action::StopEarly`] ends the run, and the
/// trace then holds only the records computed so far.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] if the parameters are rejected by
/// [`Parameters::step_count`].
pub fn observe_trace<O>(
    parameters: &Parameters,
    config: &Config,
    observer: O,
) -> Result<Trace, Error>
where
    O: Observer<euler::Event<Point, Rate>, euler::Action>,
{
    let steps = parameters.step_count(config)?;
    log::debug!(
        "computing {steps} Euler steps for k={} from ({}, {}) with h={}",
        parameters.k,
        parameters.x0,
        parameters.y0,
        parameters.h
    );

    let model = GrowthModel::new(parameters.k);
    let initial = Point {
        x: parameters.x0,
        y: parameters.y0,
    };
    let solution = euler::solve(&model, &GrowthProblem, initial, parameters.h, steps, observer)?;
    if solution.status == euler::Status::StoppedByObserver {
        log::debug!("observer stopped the run after {} of {steps} steps", solution.steps);
    }

    let trace = Trace::from_history(*parameters, &solution.history);
    if !trace.is_finite() {
        log::debug!("trace for k={} contains non-finite values", parameters.k);
    }

    Ok(trace)
}
