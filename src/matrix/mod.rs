//! Matrix module: dense matrix construction and the Matrix Market reader.

pub mod dense;
pub use dense::DenseMatrix;
pub mod market;
pub use market::{parse_matrix_market, read_matrix_market};
