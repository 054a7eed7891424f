//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from raw column-major storage, from row slices, or as a zero matrix
//! that a reader fills entry by entry.

use crate::core::traits::{MatShape, MatVec, MatrixGet, MatrixSet};
use crate::error::{LsError, Result};
use faer::Mat;
use num_traits::Float;

/// Upper bound on the storage of one dense matrix (2 GiB).
pub const MAX_DENSE_BYTES: usize = 1 << 31;

/// Number of entries in an `nrows × ncols` matrix of `T`, or `None` when the count or
/// its byte size overflows or exceeds [`MAX_DENSE_BYTES`].
pub fn dense_len<T>(nrows: usize, ncols: usize) -> Option<usize> {
    let len = nrows.checked_mul(ncols)?;
    let bytes = len.checked_mul(size_of::<T>())?;
    (bytes <= MAX_DENSE_BYTES).then_some(len)
}

/// Construction of dense matrices with checked dimensions.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + MatShape + MatrixGet<T> + MatrixSet<T> + Sized {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self>;
    /// Construct from a list of equal-length rows.
    fn from_rows(rows: &[Vec<T>]) -> Result<Self>;
    /// An `nrows × ncols` matrix of zeros. Fails with [`LsError::TooLarge`] past
    /// [`MAX_DENSE_BYTES`].
    fn zeros(nrows: usize, ncols: usize) -> Result<Self>;
}

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
impl<T: Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        match nrows.checked_mul(ncols) {
            Some(len) if len == data.len() => {}
            Some(len) => return Err(LsError::dimension_mismatch("from_raw", len, data.len())),
            None => return Err(LsError::TooLarge { nrows, ncols }),
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i]))
    }

    fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(LsError::dimension_mismatch("from_rows", ncols, bad.len()));
        }
        Ok(Mat::from_fn(nrows, ncols, |i, j| rows[i][j]))
    }

    fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        if dense_len::<T>(nrows, ncols).is_none() {
            return Err(LsError::TooLarge { nrows, ncols });
        }
        Ok(Mat::from_fn(nrows, ncols, |_, _| T::zero()))
    }
}
