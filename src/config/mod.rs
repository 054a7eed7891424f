//! Run configuration.

pub mod options;
pub use options::{DEFAULT_MATRIX_DIR, DEFAULT_MAX_ITERS, RunOptions, TOLERANCES};
