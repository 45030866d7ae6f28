//! Forward Euler approximation of dy/dx = k·y, with error analysis against the
//! exact solution y = y0·e^(k·(x−x0)).
//!
//! The crate is a thin domain layer over the generic Euler solver in
//! [`slope_solvers`]:
//!
//! - [`compute_trace`]: validates [`Parameters`], steps the equation with a
//!   fixed step size, and returns the full [`Trace`]; [`observe_trace`] does
//!   the same while reporting each step to an observer
//! - [`evaluate_analytical`] and [`Exponential`]: the closed-form solution,
//!   at trace points or over a dense [`linspace`] grid
//! - [`ErrorReport`]: absolute and relative error of every trace record
//! - [`Summary`]: final point, step count, and worst-case errors
//!
//! Everything is a pure function of its inputs. Non-finite values produced by
//! runaway growth are kept in the trace as-is; see [`Trace::is_finite`].
//!
//! # Example
//!
//! ```
//! use slope_growth::{ErrorReport, Parameters, Summary, compute_trace};
//!
//! let parameters = Parameters::new(0.1, 0.0, 1.0, 2.0, 0.1);
//! let trace = compute_trace(&parameters)?;
//! let report = ErrorReport::new(&trace);
//! let summary = Summary::new(&trace, &report);
//!
//! assert_eq!(summary.steps, 20);
//! assert!(summary.max_relative_error_percent.unwrap() < 0.11);
//! # Ok::<(), slope_growth::Error>(())
//! ```

mod analytical;
mod config;
mod error;
mod model;
mod params;
mod report;
mod summary;
mod trace;

pub use analytical::{Exponential, evaluate_analytical, linspace};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use model::{Amount, GrowthModel, GrowthProblem, Point, Rate};
pub use params::{ParameterError, Parameters};
pub use report::{ErrorReport, ErrorRow};
pub use summary::Summary;
pub use trace::{Record, Trace, compute_trace, compute_trace_with, observe_trace};
