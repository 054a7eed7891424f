//! Core linear-algebra traits for lsbench.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Row and column counts of a matrix.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Read access to entry (i, j), 0-based.
pub trait MatrixGet<T> {
    fn entry(&self, i: usize, j: usize) -> T;
}

/// Write access to entry (i, j), 0-based.
pub trait MatrixSet<T> {
    fn set_entry(&mut self, i: usize, j: usize, value: T);
}
