//! Gradient method with a residual-driven direction update.
//!
//! ```text
//! r = b − A x,  p = r
//! loop:
//!     α = (r·r) / (p·Ap)
//!     x ← x + α p
//!     r ← r − α Ap
//!     stop if ‖r‖₂ < tol
//!     β = (r·r) / (p·p)
//!     p ← r + β p
//! ```
//!
//! This is not steepest descent (which would reset `p = r`) and not conjugate gradient
//! either: β is normalized by `p·p` rather than the previous `r·r`, so successive
//! directions are not A-orthogonal. The stopping test is the absolute `‖r‖₂`.
//!
//! `Ap` is formed once per iteration and reused for the residual update; `A` and `p`
//! do not change between the two uses.

use tracing::{debug, trace};

use crate::core::traits::{MatShape, MatVec};
use crate::core::wrappers::{axpy, dot, norm2, residual, scale};
use crate::error::LsError;
use crate::solver::{LinearSolver, Solved, check_system, log_outcome, to_f64};
use crate::utils::convergence::Convergence;

pub struct GradientSolver<T> {
    pub conv: Convergence<T>,
}

impl<T: Copy + num_traits::Float> GradientSolver<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { conv: Convergence { tol, max_iters } }
    }
}

impl<M, V, T> LinearSolver<M, V> for GradientSolver<T>
where
    M: MatVec<Vec<T>> + MatShape,
    V: AsRef<[T]> + From<Vec<T>>,
    T: num_traits::Float + From<f64>,
{
    type Error = LsError;
    type Scalar = T;

    fn solve(&mut self, a: &M, b: &V, x0: &V) -> Result<Solved<V, T>, LsError> {
        let n = check_system(a, b.as_ref().len(), x0.as_ref().len())?;
        debug!(n, tol = to_f64(self.conv.tol), max_iters = self.conv.max_iters, "gradient start");

        let mut x = x0.as_ref().to_vec();
        let mut r = residual(a, &x, b.as_ref());
        let mut p = r.clone();
        let mut ap = vec![T::zero(); n];
        let (mut stop, mut stats) = self.conv.check(norm2(&r), 0);
        let mut k = 0;
        while !stop {
            k += 1;
            a.matvec(&p, &mut ap);
            let alpha = dot(&r, &r) / dot(&p, &ap);
            axpy(&mut x, alpha, &p);
            axpy(&mut r, -alpha, &ap);
            let res_norm = norm2(&r);
            trace!(
                iteration = k,
                residual = to_f64(res_norm),
                alpha = to_f64(alpha),
                "gradient step"
            );
            (stop, stats) = self.conv.check(res_norm, k);
            if stop {
                break;
            }
            let beta = dot(&r, &r) / dot(&p, &p);
            scale(&mut p, beta);
            axpy(&mut p, T::one(), &r);
        }
        log_outcome("gradient", &stats);
        Ok(Solved { x: V::from(x), stats })
    }
}
