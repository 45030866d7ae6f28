//! Explicit integrators that step an [`OdeProblem`] with a fixed step size.
//!
//! [`OdeProblem`]: slope_core::OdeProblem

pub mod euler;
