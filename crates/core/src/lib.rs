//! Core traits and types for the Pendula workspace.
//!
//! This crate defines the shared abstractions that the solvers and the
//! physical models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OdeProblem`]: adapts a model to a first-order system of `N` ODEs
//! - [`NonNegative`], [`Positive`]: validated numeric wrappers for physical
//!   parameters

mod model;
mod observer;
mod ode;
mod types;

pub use model::Model;
pub use observer::Observer;
pub use ode::OdeProblem;
pub use types::{NonNegative, Positive};
