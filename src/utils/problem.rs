//! Manufactured test problems with a known exact solution.
//!
//! Every benchmark run builds its own ground truth: `x*` is the all-ones vector and
//! `b = A · x*`, so the relative error of each solver's answer is always computable.

use num_traits::Float;

use crate::core::traits::{MatShape, MatVec};
use crate::core::wrappers::mat_vec;

/// `A`, the exact solution `x*`, and `b = A · x*`.
#[derive(Clone, Debug)]
pub struct ManufacturedProblem<M, T> {
    pub a: M,
    pub x_star: Vec<T>,
    pub b: Vec<T>,
}

impl<M, T> ManufacturedProblem<M, T>
where
    M: MatVec<Vec<T>> + MatShape,
    T: Float,
{
    /// Problem with `x* = [1, …, 1]`.
    pub fn with_unit_solution(a: M) -> Self {
        let x_star = ones(a.ncols());
        Self::with_solution(a, x_star)
    }

    pub fn with_solution(a: M, x_star: Vec<T>) -> Self {
        let b = mat_vec(&a, &x_star);
        Self { a, x_star, b }
    }

    /// The zero initial guess used by the benchmark.
    pub fn zero_guess(&self) -> Vec<T> {
        vec![T::zero(); self.a.ncols()]
    }

    pub fn dim(&self) -> usize {
        self.a.nrows()
    }
}

pub fn ones<T: Float>(n: usize) -> Vec<T> {
    vec![T::one(); n]
}
