//! Matrix Market coordinate reader.
//!
//! Parses the `coordinate` flavor of the Matrix Market exchange format into a dense
//! `faer::Mat<f64>`. Storage is always dense regardless of how sparse the input is.
//!
//! ```text
//! %%MatrixMarket matrix coordinate real symmetric
//! % any number of comment lines
//! 3 3 4
//! 1 1 4.0
//! 2 1 -1.0
//! 2 2 4.0
//! 3 3 4.0
//! ```
//!
//! The size line holds `rows cols nnz`; entries hold 1-based `row col value`.
//! `nnz` is only used to warn when the entry count disagrees with it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use faer::Mat;
use tracing::{debug, warn};

use crate::core::traits::MatrixSet;
use crate::error::{LsError, Result};
use crate::matrix::dense::{DenseMatrix, dense_len};

/// Entry symmetry declared in the banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
}

/// Field type declared in the banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Real,
    Integer,
    Pattern,
}

/// Parsed banner. Files without one are read as `real general`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub field: Field,
    pub symmetry: Symmetry,
}

impl Default for Header {
    fn default() -> Self {
        Self { field: Field::Real, symmetry: Symmetry::General }
    }
}

impl Header {
    fn parse(line: &str, lineno: usize) -> Result<Self> {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_ascii_lowercase).collect();
        if tokens.len() < 5 || tokens[1] != "matrix" {
            return Err(LsError::parse(lineno, "malformed %%MatrixMarket banner"));
        }
        if tokens[2] != "coordinate" {
            return Err(LsError::Unsupported("only coordinate Matrix Market files are supported"));
        }
        let field = match tokens[3].as_str() {
            "real" | "double" => Field::Real,
            "integer" => Field::Integer,
            "pattern" => Field::Pattern,
            "complex" => {
                return Err(LsError::Unsupported(
                    "complex Matrix Market files are not supported",
                ));
            }
            other => return Err(LsError::parse(lineno, format!("unknown field type `{other}`"))),
        };
        let symmetry = match tokens[4].as_str() {
            "general" => Symmetry::General,
            "symmetric" | "hermitian" => Symmetry::Symmetric,
            "skew-symmetric" => Symmetry::SkewSymmetric,
            other => return Err(LsError::parse(lineno, format!("unknown symmetry `{other}`"))),
        };
        Ok(Self { field, symmetry })
    }
}

/// Read a coordinate-format file into a dense matrix.
pub fn read_matrix_market<P: AsRef<Path>>(path: P) -> Result<Mat<f64>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading matrix");
    let file = File::open(path)?;
    parse_matrix_market(BufReader::new(file))
}

/// Parse coordinate-format text from any buffered reader.
pub fn parse_matrix_market<R: BufRead>(reader: R) -> Result<Mat<f64>> {
    let mut header = Header::default();
    let mut size: Option<(usize, usize, usize)> = None;
    let mut matrix: Option<Mat<f64>> = None;
    let mut entries = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let trimmed = line.trim();
        if trimmed.starts_with("%%MatrixMarket") && size.is_none() {
            header = Header::parse(trimmed, lineno)?;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();

        let Some((rows, cols, _)) = size else {
            if fields.len() != 3 {
                return Err(LsError::parse(lineno, "expected size line `rows cols nnz`"));
            }
            let rows = parse_usize(fields[0], lineno)?;
            let cols = parse_usize(fields[1], lineno)?;
            let nnz = parse_usize(fields[2], lineno)?;
            if dense_len::<f64>(rows, cols).is_none() {
                return Err(LsError::parse(
                    lineno,
                    format!("matrix size {rows} x {cols} too large"),
                ));
            }
            size = Some((rows, cols, nnz));
            matrix = Some(<Mat<f64> as DenseMatrix<f64>>::zeros(rows, cols)?);
            continue;
        };

        let expected = if header.field == Field::Pattern { 2 } else { 3 };
        if fields.len() != expected {
            return Err(LsError::parse(
                lineno,
                format!("expected {expected} fields, found {}", fields.len()),
            ));
        }
        let i = parse_index(fields[0], rows, lineno)?;
        let j = parse_index(fields[1], cols, lineno)?;
        let value = match header.field {
            Field::Pattern => 1.0,
            _ => fields[2]
                .parse::<f64>()
                .map_err(|_| LsError::parse(lineno, format!("invalid value `{}`", fields[2])))?,
        };

        if let Some(m) = matrix.as_mut() {
            m.set_entry(i, j, value);
            if i != j {
                match header.symmetry {
                    Symmetry::General => {}
                    Symmetry::Symmetric => m.set_entry(j, i, value),
                    Symmetry::SkewSymmetric => m.set_entry(j, i, -value),
                }
            }
        }
        entries += 1;
    }

    let (Some((rows, cols, nnz)), Some(matrix)) = (size, matrix) else {
        return Err(LsError::parse(0, "missing size line"));
    };
    if entries != nnz {
        warn!(entries, nnz, "entry count differs from declared nnz");
    }
    debug!(rows, cols, entries, "matrix loaded");
    Ok(matrix)
}

fn parse_usize(s: &str, lineno: usize) -> Result<usize> {
    s.parse::<usize>()
        .map_err(|_| LsError::parse(lineno, format!("invalid integer `{s}`")))
}

// 1-based on disk, 0-based in memory.
fn parse_index(s: &str, bound: usize, lineno: usize) -> Result<usize> {
    let k = parse_usize(s, lineno)?;
    if k == 0 || k > bound {
        return Err(LsError::parse(lineno, format!("index {k} out of range 1..={bound}")));
    }
    Ok(k - 1)
}
