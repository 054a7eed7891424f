//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module implements the core linear algebra traits for `faer::Mat`,
//! and provides the slice-level primitives the iterative solvers are written against:
//! dot product, Euclidean norm, scaled addition (`dst += a * src`), scaling, subtraction
//! and an allocating matrix-vector product.
//!
//! All primitives require conforming lengths. A mismatch is a programming error and
//! panics with a dimension message; solvers validate shapes before calling them.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{MatShape, MatVec, MatrixGet, MatrixSet};
use faer::Mat;
use num_traits::Float;

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            let mut acc = T::zero();
            for j in 0..self.ncols() {
                acc = acc + self[(i, j)] * x[j];
            }
            y[i] = acc;
        }
    }
}

impl<T: Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Float> MatrixGet<T> for Mat<T> {
    fn entry(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Float> MatrixSet<T> for Mat<T> {
    fn set_entry(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }
}

/// `u · v`.
pub fn dot<T: Float>(u: &[T], v: &[T]) -> T {
    assert_eq!(u.len(), v.len(), "Vectors must have the same length");
    u.iter()
        .zip(v.iter())
        .fold(T::zero(), |acc, (&ui, &vi)| acc + ui * vi)
}

/// `‖v‖₂`.
pub fn norm2<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &vi| acc + vi * vi).sqrt()
}

/// In-place scaled addition: `dst ← dst + a · src`.
pub fn axpy<T: Float>(dst: &mut [T], a: T, src: &[T]) {
    assert_eq!(dst.len(), src.len(), "Vectors must have the same length");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = *d + a * s;
    }
}

/// In-place scaling: `v ← a · v`.
pub fn scale<T: Float>(v: &mut [T], a: T) {
    for vi in v.iter_mut() {
        *vi = a * *vi;
    }
}

/// `u - v` as a new vector.
pub fn sub<T: Float>(u: &[T], v: &[T]) -> Vec<T> {
    assert_eq!(u.len(), v.len(), "Vectors must have the same length");
    u.iter().zip(v).map(|(&ui, &vi)| ui - vi).collect()
}

/// Allocating matrix-vector product `A · v`.
pub fn mat_vec<M, T>(a: &M, v: &[T]) -> Vec<T>
where
    M: MatVec<Vec<T>> + MatShape,
    T: Float,
{
    let mut y = vec![T::zero(); a.nrows()];
    a.matvec(&v.to_vec(), &mut y);
    y
}

/// Residual `b - A x`.
pub fn residual<M, T>(a: &M, x: &[T], b: &[T]) -> Vec<T>
where
    M: MatVec<Vec<T>> + MatShape,
    T: Float,
{
    sub(b, &mat_vec(a, x))
}
