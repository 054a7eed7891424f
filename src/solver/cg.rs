//! Conjugate Gradient (unpreconditioned) per Saad §6.1.
//!
//! Stops on the absolute residual norm `√(r·r) < tol`. For symmetric positive-definite
//! `A` it terminates in at most `n` iterations in exact arithmetic; round-off can move
//! that either way.

use tracing::{debug, trace};

use crate::core::traits::{MatShape, MatVec};
use crate::core::wrappers::{axpy, dot, residual};
use crate::error::LsError;
use crate::solver::{LinearSolver, Solved, check_system, log_outcome, to_f64};
use crate::utils::convergence::Convergence;

pub struct CgSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Copy + num_traits::Float> CgSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }
}

impl<M, V, T> LinearSolver<M, V> for CgSolver<T>
where
    M: MatVec<Vec<T>> + MatShape,
    V: AsRef<[T]> + From<Vec<T>>,
    T: num_traits::Float + From<f64>,
{
    type Error = LsError;
    type Scalar = T;

    fn solve(&mut self, a: &M, b: &V, x0: &V) -> Result<Solved<V, T>, LsError> {
        let n = check_system(a, b.as_ref().len(), x0.as_ref().len())?;
        debug!(n, tol = to_f64(self.conv.tol), max_iters = self.conv.max_iters, "cg start");

        let mut x = x0.as_ref().to_vec();
        let mut r = residual(a, &x, b.as_ref());
        let mut p = r.clone();
        let mut ap = vec![T::zero(); n];
        let mut rsold = dot(&r, &r);
        let (mut stop, mut stats) = self.conv.check(rsold.sqrt(), 0);
        let mut k = 0;
        while !stop {
            k += 1;
            a.matvec(&p, &mut ap);
            let alpha = rsold / dot(&p, &ap);
            axpy(&mut x, alpha, &p);
            axpy(&mut r, -alpha, &ap);
            let rsnew = dot(&r, &r);
            trace!(iteration = k, residual = to_f64(rsnew.sqrt()), "cg step");
            (stop, stats) = self.conv.check(rsnew.sqrt(), k);
            if stop {
                break;
            }
            let beta = rsnew / rsold;
            for (pj, &rj) in p.iter_mut().zip(&r) {
                *pj = rj + beta * *pj;
            }
            rsold = rsnew;
        }
        log_outcome("cg", &stats);
        Ok(Solved { x: V::from(x), stats })
    }
}
