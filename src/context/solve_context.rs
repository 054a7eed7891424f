//! Factory for the iterative solvers.
//!
//! This module provides the `SolverKind` enum, one variant per method, and the `SolveContext`
//! struct that binds a kind to its tolerance, iteration bound and diagonal policy. A harness
//! can walk `SolverKind::ALL` and hand each kind the same read-only system.
//!
//! # Usage
//!
//! 1. Construct a `SolveContext` with the desired solver kind, tolerance, and iteration limit.
//! 2. Call `solve_context` to solve a linear system `Ax = b` from an initial guess.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems. SIAM.
//! - Templates for the Solution of Linear Systems: Building Blocks for Iterative Methods,
//!   2nd Edition (Barrett et al.)

use std::fmt;
use std::str::FromStr;

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::LsError;
use crate::solver::{
    CgSolver, DiagonalPolicy, GaussSeidelSolver, GradientSolver, JacobiSolver, LinearSolver, Solved,
};

/// Enum representing the available solver types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Jacobi sweeps (previous iterate only)
    Jacobi,
    /// Gauss-Seidel sweeps (in place)
    GaussSeidel,
    /// Gradient method with residual-driven direction update
    Gradient,
    /// Conjugate Gradient (CG) method (for SPD matrices)
    ConjugateGradient,
}

impl SolverKind {
    /// Every kind, in benchmark order.
    pub const ALL: [SolverKind; 4] = [
        SolverKind::Jacobi,
        SolverKind::GaussSeidel,
        SolverKind::Gradient,
        SolverKind::ConjugateGradient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Jacobi => "Jacobi",
            SolverKind::GaussSeidel => "Gauss-Seidel",
            SolverKind::Gradient => "Gradient",
            SolverKind::ConjugateGradient => "Conjugate Gradient",
        }
    }

    /// True for the methods that stop on `‖Ax − b‖₂ / ‖b‖₂`; the others stop on `‖r‖₂`.
    pub fn uses_relative_test(self) -> bool {
        matches!(self, SolverKind::Jacobi | SolverKind::GaussSeidel)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = LsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jacobi" => Ok(SolverKind::Jacobi),
            "gauss-seidel" | "gauss_seidel" | "gs" => Ok(SolverKind::GaussSeidel),
            "gradient" | "gd" => Ok(SolverKind::Gradient),
            "cg" | "conjugate-gradient" | "conjugate_gradient" => Ok(SolverKind::ConjugateGradient),
            _ => Err(LsError::UnknownSolver(s.to_string())),
        }
    }
}

/// Context and configuration for one solver invocation.
///
/// Holds the solver kind, tolerance, iteration bound and diagonal policy. The matrix and
/// vectors are passed to `solve_context` by reference and never stored.
#[derive(Debug, Clone, Copy)]
pub struct SolveContext<T> {
    /// The type of solver to use
    pub kind: SolverKind,
    /// Convergence tolerance (relative or absolute, depending on solver)
    pub tol: T,
    /// Maximum number of iterations
    pub max_it: usize,
    /// Zero-diagonal handling for Jacobi and Gauss-Seidel
    pub diagonal: DiagonalPolicy,
}

impl<T: num_traits::Float + From<f64>> SolveContext<T> {
    pub fn new(kind: SolverKind, tol: T, max_it: usize) -> Self {
        Self { kind, tol, max_it, diagonal: DiagonalPolicy::default() }
    }

    pub fn with_diagonal_policy(mut self, diagonal: DiagonalPolicy) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// Solve the linear system `Ax = b` from `x0` using the configured solver.
    ///
    /// # Returns
    /// * `Ok(Solved)` whether or not the method converged
    /// * `Err(LsError)` when the inputs are rejected before iterating
    pub fn solve_context<M, V>(&self, a: &M, b: &V, x0: &V) -> Result<Solved<V, T>, LsError>
    where
        M: MatVec<Vec<T>> + MatShape + MatrixGet<T>,
        V: AsRef<[T]> + From<Vec<T>>,
    {
        match self.kind {
            SolverKind::Jacobi => {
                let mut solver =
                    JacobiSolver::new(self.tol, self.max_it).with_diagonal_policy(self.diagonal);
                solver.solve(a, b, x0)
            }
            SolverKind::GaussSeidel => {
                let mut solver = GaussSeidelSolver::new(self.tol, self.max_it)
                    .with_diagonal_policy(self.diagonal);
                solver.solve(a, b, x0)
            }
            SolverKind::Gradient => {
                let mut solver = GradientSolver::new(self.tol, self.max_it);
                solver.solve(a, b, x0)
            }
            SolverKind::ConjugateGradient => {
                let mut solver = CgSolver::new(self.tol, self.max_it);
                solver.solve(a, b, x0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_names() {
        assert_eq!("cg".parse::<SolverKind>().unwrap(), SolverKind::ConjugateGradient);
        assert_eq!("Gauss-Seidel".parse::<SolverKind>().unwrap(), SolverKind::GaussSeidel);
        assert!(matches!("sor".parse::<SolverKind>(), Err(LsError::UnknownSolver(_))));
    }

    #[test]
    fn relative_test_only_for_sweeping_methods() {
        let relative: Vec<_> = SolverKind::ALL.iter().filter(|k| k.uses_relative_test()).collect();
        assert_eq!(relative, vec![&SolverKind::Jacobi, &SolverKind::GaussSeidel]);
    }
}
