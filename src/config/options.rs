//! Command-line or API options for a benchmark run.
//!
//! This module provides the `RunOptions` struct, which collects everything a run needs
//! besides the matrix itself: the tolerance, the iteration bound shared by all solvers,
//! the directory matrices are listed from, which solvers to run, and how Jacobi and
//! Gauss-Seidel treat a zero diagonal. Values are passed explicitly into each solve.

use std::path::PathBuf;

use crate::context::SolverKind;
use crate::solver::DiagonalPolicy;

/// Tolerances offered by the interactive selector.
pub const TOLERANCES: [f64; 4] = [1e-4, 1e-6, 1e-8, 1e-10];

/// Iteration bound shared by all solvers.
pub const DEFAULT_MAX_ITERS: usize = 20_000;

/// Directory scanned for matrix files.
pub const DEFAULT_MATRIX_DIR: &str = "resources";

/// Run parameters.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Convergence tolerance handed to every solver
    pub tolerance: f64,

    /// Iteration bound handed to every solver
    pub max_iters: usize,

    /// Where matrix files are listed from
    pub matrix_dir: PathBuf,

    /// Solvers to run, in order
    pub solvers: Vec<SolverKind>,

    /// Zero-diagonal handling for Jacobi and Gauss-Seidel
    pub diagonal: DiagonalPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCES[1],
            max_iters: DEFAULT_MAX_ITERS,
            matrix_dir: PathBuf::from(DEFAULT_MATRIX_DIR),
            solvers: SolverKind::ALL.to_vec(),
            diagonal: DiagonalPolicy::Reject,
        }
    }
}

impl RunOptions {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn with_matrix_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.matrix_dir = dir.into();
        self
    }

    /// An empty list keeps the default of all four solvers.
    pub fn with_solvers(mut self, solvers: Vec<SolverKind>) -> Self {
        if !solvers.is_empty() {
            self.solvers = solvers;
        }
        self
    }

    pub fn with_diagonal_policy(mut self, diagonal: DiagonalPolicy) -> Self {
        self.diagonal = diagonal;
        self
    }
}
