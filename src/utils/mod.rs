//! Convergence measures and manufactured problems.

pub mod convergence;
pub mod problem;

pub use convergence::{Convergence, SolveStats, converged, relative_error, relative_residual};
pub use problem::{ManufacturedProblem, ones};
