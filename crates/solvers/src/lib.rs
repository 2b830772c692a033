//! Numerical solvers for the Pendula workspace.
//!
//! # Modules
//!
//! - [`transient`]: time integration of [`OdeProblem`]s
//!
//! [`OdeProblem`]: pendula_core::OdeProblem

pub mod transient;
