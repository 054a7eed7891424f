//! Iterative solver interfaces.
//!
//! Every solver maps `(A, b, x₀)` plus its stored [`Convergence`] settings to a
//! [`Solved`] value holding the final iterate and [`SolveStats`]. The initial guess is
//! cloned into a private iterate at the call boundary; `A`, `b` and `x₀` are never
//! written to, so one system can be handed to any number of solvers in turn.
//!
//! Running out of iterations is not an error: the last iterate comes back with
//! `converged == false`. Errors are reserved for inputs the method cannot accept
//! (non-square `A`, mismatched lengths, a zero diagonal under [`DiagonalPolicy::Reject`]).

use num_traits::Float;
use tracing::{debug, warn};

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::LsError;
use crate::utils::convergence::SolveStats;

/// Common interface for the iterative solvers.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd + From<f64>;
    /// Solve A·x = b starting from `x0`.
    /// Returns the final iterate and iteration stats (including convergence info).
    fn solve(
        &mut self,
        a: &M,
        b: &V,
        x0: &V,
    ) -> Result<Solved<V, <Self as LinearSolver<M, V>>::Scalar>, Self::Error>;
}

/// Final iterate plus the stats of the run that produced it.
#[derive(Clone, Debug)]
pub struct Solved<V, T> {
    pub x: V,
    pub stats: SolveStats<T>,
}

/// What Jacobi and Gauss-Seidel do with a zero on the diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagonalPolicy {
    /// Fail with [`LsError::ZeroPivot`] before the first sweep.
    #[default]
    Reject,
    /// Divide anyway. The iterate turns non-finite and the run ends unconverged.
    Propagate,
}

/// Checks that `a` is square and that `b` and `x0` match it. Returns `n`.
pub(crate) fn check_system<M: MatShape>(a: &M, b: usize, x0: usize) -> Result<usize, LsError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LsError::dimension_mismatch("square matrix", n, a.ncols()));
    }
    if b != n {
        return Err(LsError::dimension_mismatch("right-hand side", n, b));
    }
    if x0 != n {
        return Err(LsError::dimension_mismatch("initial guess", n, x0));
    }
    Ok(n)
}

/// First row whose diagonal entry is exactly zero.
pub(crate) fn check_diagonal<M, T>(a: &M, n: usize) -> Result<(), LsError>
where
    M: MatrixGet<T>,
    T: Float,
{
    match (0..n).find(|&i| a.entry(i, i) == T::zero()) {
        Some(i) => Err(LsError::ZeroPivot(i)),
        None => Ok(()),
    }
}

pub(crate) fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

pub(crate) fn log_outcome<T: Float>(method: &'static str, stats: &SolveStats<T>) {
    let residual = to_f64(stats.final_residual);
    if stats.converged {
        debug!(method, iterations = stats.iterations, residual, "converged");
    } else if !residual.is_finite() {
        warn!(method, iterations = stats.iterations, "iterate became non-finite");
    } else {
        warn!(method, iterations = stats.iterations, residual, "did not converge");
    }
}

pub mod jacobi;
pub use jacobi::JacobiSolver;

pub mod gauss_seidel;
pub use gauss_seidel::GaussSeidelSolver;

pub mod gradient;
pub use gradient::GradientSolver;

pub mod cg;
pub use cg::CgSolver;
