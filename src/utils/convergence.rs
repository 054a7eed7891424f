//! Convergence tracking & tolerance checks for iterative solvers.
//!
//! Two stopping measures are in use. Jacobi and Gauss-Seidel compare the relative
//! residual `‖Ax − b‖₂ / ‖b‖₂` against the tolerance after every sweep. Gradient and
//! conjugate gradient compare the unnormalized `‖r‖₂` of the residual they already
//! carry. The two are not numerically identical, so iteration counts from the two
//! families are not comparable at the tolerance boundary.

use num_traits::Float;

use crate::core::traits::{MatShape, MatVec};
use crate::core::wrappers::{norm2, residual, sub};

/// Stopping criteria & stats.
#[derive(Clone, Copy, Debug)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    /// Completed iterations. The initial guess is tested before the first one, so an
    /// `x0` that already passes reports 0 rather than 1.
    pub iterations: usize,
    pub final_residual: T,
    pub converged: bool,
}

impl<T: Copy + Float> Convergence<T> {
    /// Returns (should_stop, stats) given the current stopping measure and 1-based iteration `i`.
    pub fn check(&self, measure: T, i: usize) -> (bool, SolveStats<T>) {
        let converged = measure < self.tol;
        (
            converged || i >= self.max_iters,
            SolveStats {
                iterations: i,
                final_residual: measure,
                converged,
            },
        )
    }
}

/// `‖Ax − b‖₂ / ‖b‖₂`, or the absolute residual norm when `b` is zero.
pub fn relative_residual<M, T>(a: &M, x: &[T], b: &[T]) -> T
where
    M: MatVec<Vec<T>> + MatShape,
    T: Float,
{
    let r = norm2(&residual(a, x, b));
    let nb = norm2(b);
    if nb == T::zero() { r } else { r / nb }
}

/// True when the relative residual of `x` is strictly below `tol`.
pub fn converged<M, T>(a: &M, x: &[T], b: &[T], tol: T) -> bool
where
    M: MatVec<Vec<T>> + MatShape,
    T: Float,
{
    relative_residual(a, x, b) < tol
}

/// `‖x − x*‖₂ / ‖x*‖₂`.
pub fn relative_error<T: Float>(x: &[T], x_star: &[T]) -> T {
    norm2(&sub(x, x_star)) / norm2(x_star)
}
