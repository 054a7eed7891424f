//! Interactive selection of a matrix file and a tolerance.
//!
//! Prompts are written to any `Write` and answers read from any `BufRead`, so the binary
//! passes stdin/stdout and tests pass byte slices. Choices are 1-based on screen.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LsError, Result};

/// Regular files in `dir`, sorted by file name.
pub fn list_matrices(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = files.len(), "listed matrices");
    Ok(files)
}

/// Parses a 1-based choice among `max` items into a 0-based index.
pub fn parse_selection(input: &str, max: usize) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(k) if (1..=max).contains(&k) => Ok(k - 1),
        _ => Err(LsError::InvalidSelection { input: trimmed.to_string(), max }),
    }
}

/// Prints `title` and a numbered list, then reads one line and returns the 0-based choice.
pub fn prompt_index<R, W>(
    input: &mut R,
    out: &mut W,
    title: &str,
    items: &[String],
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{title}")?;
    for (i, item) in items.iter().enumerate() {
        writeln!(out, " {}. {}", i + 1, item)?;
    }
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_selection(&line, items.len())
}

pub fn select_matrix<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    files: &[PathBuf],
) -> Result<PathBuf> {
    let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();
    let idx = prompt_index(input, out, "Available matrices (enter a number):", &names)?;
    Ok(files[idx].clone())
}

pub fn select_tolerance<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tolerances: &[f64],
) -> Result<f64> {
    let labels: Vec<String> = tolerances.iter().map(|t| format!("{t:e}")).collect();
    let idx = prompt_index(input, out, "Select the tolerance:", &labels)?;
    Ok(tolerances[idx])
}

/// Resolves a `--matrix` argument: a 1-based index into `files`, or a file name among them.
pub fn resolve_matrix(files: &[PathBuf], choice: &str) -> Result<PathBuf> {
    if let Some(p) = files.iter().find(|p| display_name(p) == choice) {
        return Ok(p.clone());
    }
    parse_selection(choice, files.len()).map(|i| files[i].clone())
}

fn display_name(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.display().to_string())
}
