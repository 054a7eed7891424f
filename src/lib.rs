//! lsbench: classical iterative solvers for dense linear systems over Faer
//!
//! This crate provides Jacobi, Gauss-Seidel, a gradient method and conjugate gradient
//! for dense systems `Ax = b`, the convergence and error measures used to compare them,
//! a Matrix Market coordinate reader, and a small harness that times each solver on a
//! manufactured problem with known solution.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod menu;
pub mod report;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;

// Re-export SolveStats at the crate root for convenience
pub use utils::convergence::SolveStats;
