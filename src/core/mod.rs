//! Dense linear-algebra traits and the vector primitives the solvers share.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatVec, MatrixGet, MatrixSet};
pub use wrappers::{axpy, dot, mat_vec, norm2, residual, scale, sub};
