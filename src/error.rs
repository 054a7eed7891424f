use thiserror::Error;

// Unified error type for lsbench

#[derive(Error, Debug)]
pub enum LsError {
    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid selection `{input}`: expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },
    #[error("unknown solver `{0}` (expected jacobi, gauss-seidel, gradient or cg)")]
    UnknownSolver(String),
    #[error("matrix of {nrows} x {ncols} entries is too large to store densely")]
    TooLarge { nrows: usize, ncols: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl LsError {
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { context, expected, found }
    }

    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse { line, msg: msg.into() }
    }
}

pub type Result<T> = std::result::Result<T, LsError>;
