//! Context module for lsbench.
//!
//! This module provides the solver-selection enum and the context type that turns a
//! selected kind plus configuration into a solve.
//!
//! Modules:
//! - [`solve_context`]: Contains `SolverKind` and the `SolveContext` factory.
//!
//! # Example
//! ```rust,ignore
//! use lsbench::context::{SolveContext, SolverKind};
//! let ctx = SolveContext::new(SolverKind::ConjugateGradient, 1e-8, 20_000);
//! let out = ctx.solve_context(&a, &b, &x0)?;
//! ```

pub mod solve_context;
pub use solve_context::{SolveContext, SolverKind};
