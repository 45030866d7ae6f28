//! Fixed-step solvers for [`OdeProblem`]s.
//!
//! # Modules
//!
//! - [`transient`]: explicit time-stepping integrators
//!
//! [`OdeProblem`]: slope_core::OdeProblem

pub mod transient;
