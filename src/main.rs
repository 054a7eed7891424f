//! CLI for lsbench

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lsbench::config::{DEFAULT_MATRIX_DIR, DEFAULT_MAX_ITERS, RunOptions, TOLERANCES};
use lsbench::context::SolverKind;
use lsbench::matrix::read_matrix_market;
use lsbench::menu::{
    list_matrices, parse_selection, resolve_matrix, select_matrix, select_tolerance,
};
use lsbench::report::{render, run_all};
use lsbench::solver::DiagonalPolicy;
use lsbench::utils::ManufacturedProblem;

#[derive(Parser)]
#[command(name = "lsbench")]
#[command(
    about = "Compare Jacobi, Gauss-Seidel, gradient and CG on a Matrix Market system",
    long_about = None
)]
struct Cli {
    /// Directory holding matrix files
    #[arg(short, long, default_value = DEFAULT_MATRIX_DIR)]
    dir: PathBuf,

    /// Matrix to load: 1-based index into the listing, or a file name (prompted if absent)
    #[arg(short, long)]
    matrix: Option<String>,

    /// Tolerance: 1-based index into 1e-4, 1e-6, 1e-8, 1e-10 (prompted if absent)
    #[arg(short, long)]
    tol: Option<String>,

    /// Iteration bound shared by all solvers
    #[arg(long, default_value_t = DEFAULT_MAX_ITERS)]
    max_iters: usize,

    /// Solver to run; repeat to pick several (default: all four)
    #[arg(short, long = "solver")]
    solvers: Vec<SolverKind>,

    /// Let Jacobi and Gauss-Seidel divide by a zero diagonal instead of refusing the matrix
    #[arg(long)]
    allow_zero_diagonal: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let diagonal = if cli.allow_zero_diagonal {
        DiagonalPolicy::Propagate
    } else {
        DiagonalPolicy::Reject
    };
    let opts = RunOptions::default()
        .with_matrix_dir(cli.dir)
        .with_max_iters(cli.max_iters)
        .with_solvers(cli.solvers)
        .with_diagonal_policy(diagonal);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let files = list_matrices(&opts.matrix_dir)
        .with_context(|| format!("reading matrix directory {}", opts.matrix_dir.display()))?;
    if files.is_empty() {
        bail!("no matrix files in {}", opts.matrix_dir.display());
    }
    let path = match cli.matrix.as_deref() {
        Some(choice) => resolve_matrix(&files, choice)?,
        None => select_matrix(&mut input, &mut out, &files)?,
    };
    let a = read_matrix_market(&path).with_context(|| format!("loading {}", path.display()))?;
    writeln!(out, "Matrix {}: {} x {}", path.display(), a.nrows(), a.ncols())?;
    if a.nrows() != a.ncols() {
        bail!("matrix must be square, got {} x {}", a.nrows(), a.ncols());
    }

    let tolerance = match cli.tol.as_deref() {
        Some(choice) => TOLERANCES[parse_selection(choice, TOLERANCES.len())?],
        None => select_tolerance(&mut input, &mut out, &TOLERANCES)?,
    };
    writeln!(out, "Selected tolerance: {tolerance:e}")?;
    let opts = opts.with_tolerance(tolerance);

    let problem = ManufacturedProblem::with_unit_solution(a);
    let runs = run_all(&problem, &opts);
    render(&mut out, &runs)?;
    Ok(())
}
