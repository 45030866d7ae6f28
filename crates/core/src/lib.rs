//! Core traits and types for stepping ordinary differential equations.
//!
//! Solvers and domain crates in this workspace build on these abstractions:
//!
//! - [`Model`]: a deterministic callable from a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OdeProblem`]: adapts a model's input and output to a steppable state
//! - [`StepIntegrable`]: a state that advances by `derivative * delta`

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
