//! Gauss-Seidel iteration.
//!
//! Same update as Jacobi, but in place: row `i` reads the components `0..i` already
//! updated in the current sweep. Forward ordering, no relaxation.

use tracing::{debug, trace};

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::LsError;
use crate::solver::{
    DiagonalPolicy, LinearSolver, Solved, check_diagonal, check_system, log_outcome, to_f64,
};
use crate::utils::convergence::{Convergence, relative_residual};

pub struct GaussSeidelSolver<T> {
    pub conv: Convergence<T>,
    pub diagonal: DiagonalPolicy,
}

impl<T: Copy + num_traits::Float> GaussSeidelSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters }, diagonal: DiagonalPolicy::default() }
    }
    pub fn with_diagonal_policy(mut self, diagonal: DiagonalPolicy) -> Self {
        self.diagonal = diagonal;
        self
    }
}

impl<M, V, T> LinearSolver<M, V> for GaussSeidelSolver<T>
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
        debug!(
            n,
            tol = to_f64(self.conv.tol),
            max_iters = self.conv.max_iters,
            "gauss-seidel start"
        );

        let mut x = x0.as_ref().to_vec();
        let (mut stop, mut stats) = self.conv.check(relative_residual(a, &x, b), 0);
        let mut k = 0;
        while !stop {
            k += 1;
            for i in 0..n {
                let mut sum = T::zero();
                for j in (0..n).filter(|&j| j != i) {
                    sum = sum + a.entry(i, j) * x[j];
                }
                x[i] = (b[i] - sum) / a.entry(i, i);
            }
            let rel = relative_residual(a, &x, b);
            trace!(iteration = k, residual = to_f64(rel), "gauss-seidel sweep");
            (stop, stats) = self.conv.check(rel, k);
        }
        log_outcome("gauss-seidel", &stats);
        Ok(Solved { x: V::from(x), stats })
    }
}
