//! Solvers for transient problems: integrating ODE systems over time.
//!
//! # Solvers
//!
//! - [`dopri5`]: explicit adaptive Dormand–Prince 5(4) with uniformly spaced
//!   dense output

pub mod dopri5;
