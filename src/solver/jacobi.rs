//! Jacobi iteration.
//!
//! Each sweep computes every component from the previous full iterate:
//! `x[i] = (b[i] − Σ_{j≠i} A[i][j]·x_old[j]) / A[i][i]`.
//! Convergence is tested on the relative residual after each sweep.

use tracing::{debug, trace};

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::LsError;
use crate::solver::{
    DiagonalPolicy, LinearSolver, Solved, check_diagonal, check_system, log_outcome, to_f64,
};
use crate::utils::convergence::{Convergence, relative_residual};

pub struct JacobiSolver<T> {
    pub conv: Convergence<T>,
    pub diagonal: DiagonalPolicy,
}

impl<T: Copy + num_traits::Float> JacobiSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters }, diagonal: DiagonalPolicy::default() }
    }
    pub fn with_diagonal_policy(mut self, diagonal: DiagonalPolicy) -> Self {
        self.diagonal = diagonal;
        self
    }
}

impl<M, V, T> LinearSolver<M, V> for JacobiSolver<T>
where
    M: MatVec<Vec<T>> + MatShape + MatrixGet<T>,
    V: AsRef<[T]> + From<Vec<T>>,
    T: num_traits::Float + From<f64>,
{
    type Error = LsError;
    type Scalar = T;

    fn solve(&mut self, a: &M, b: &V, x0: &V) -> Result<Solved<V, T>, LsError> {
        let b = b.as_ref();
        let n = check_system(a, b.len(), x0.as_ref().len())?;
        if self.diagonal == DiagonalPolicy::Reject {
            check_diagonal::<M, T>(a, n)?;
        }
        debug!(n, tol = to_f64(self.conv.tol), max_iters = self.conv.max_iters, "jacobi start");

        let mut x = x0.as_ref().to_vec();
        let (mut stop, mut stats) = self.conv.check(relative_residual(a, &x, b), 0);
        let mut x_old = vec![T::zero(); n];
        let mut k = 0;
        while !stop {
            k += 1;
            x_old.copy_from_slice(&x);
            for i in 0..n {
                let mut sum = T::zero();
                for (j, &xj) in x_old.iter().enumerate() {
                    if j != i {
                        sum = sum + a.entry(i, j) * xj;
                    }
                }
                x[i] = (b[i] - sum) / a.entry(i, i);
            }
            let rel = relative_residual(a, &x, b);
            trace!(iteration = k, residual = to_f64(rel), "jacobi sweep");
            (stop, stats) = self.conv.check(rel, k);
        }
        log_outcome("jacobi", &stats);
        Ok(Solved { x: V::from(x), stats })
    }
}
