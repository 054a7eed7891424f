//! Timed solver runs and their console rendering.
//!
//! A run hands one manufactured problem to each selected solver in turn, times it, and
//! produces a [`SolverReport`]: name, elapsed time, iterations, whether the test was met,
//! and the relative error against `x*` when it was.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::RunOptions;
use crate::context::{SolveContext, SolverKind};
use crate::core::traits::{MatShape, MatVec, MatrixGet};
use crate::error::Result;
use crate::utils::convergence::relative_error;
use crate::utils::problem::ManufacturedProblem;

#[derive(Debug, Clone)]
pub struct SolverReport {
    pub kind: SolverKind,
    pub elapsed: Duration,
    pub iterations: usize,
    pub converged: bool,
    /// The measure the method compared against the tolerance on its last check.
    pub final_residual: f64,
    /// `‖x − x*‖₂ / ‖x*‖₂`, present only for converged runs.
    pub relative_error: Option<f64>,
}

/// One solver on one problem. Non-convergence is a normal report; `Err` means the
/// solver refused the input.
pub fn run_solver<M>(
    kind: SolverKind,
    problem: &ManufacturedProblem<M, f64>,
    opts: &RunOptions,
) -> Result<SolverReport>
where
    M: MatVec<Vec<f64>> + MatShape + MatrixGet<f64>,
{
    let ctx = SolveContext::new(kind, opts.tolerance, opts.max_iters)
        .with_diagonal_policy(opts.diagonal);
    let x0 = problem.zero_guess();
    let start = Instant::now();
    let out = ctx.solve_context(&problem.a, &problem.b, &x0)?;
    let elapsed = start.elapsed();
    let stats = out.stats;
    let rel_err = stats.converged.then(|| relative_error(&out.x, &problem.x_star));
    info!(
        solver = kind.name(),
        iterations = stats.iterations,
        converged = stats.converged,
        ?elapsed,
        "run finished"
    );
    Ok(SolverReport {
        kind,
        elapsed,
        iterations: stats.iterations,
        converged: stats.converged,
        final_residual: stats.final_residual,
        relative_error: rel_err,
    })
}

/// Every solver in `opts.solvers`, sequentially, on the same read-only problem.
pub fn run_all<M>(
    problem: &ManufacturedProblem<M, f64>,
    opts: &RunOptions,
) -> Vec<(SolverKind, Result<SolverReport>)>
where
    M: MatVec<Vec<f64>> + MatShape + MatrixGet<f64>,
{
    opts.solvers
        .iter()
        .map(|&kind| (kind, run_solver(kind, problem, opts)))
        .collect()
}

impl fmt::Display for SolverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.kind)?;
        if self.converged {
            writeln!(f, "  time taken:           {:?}", self.elapsed)?;
            writeln!(f, "  iterations:           {}", self.iterations)?;
            match self.relative_error {
                Some(e) => write!(f, "  relative error:       {e:e}"),
                None => write!(f, "  relative error:       n/a"),
            }
        } else {
            writeln!(f, "  {} did not converge", self.kind)?;
            writeln!(f, "  time taken:           {:?}", self.elapsed)?;
            writeln!(f, "  iterations:           {}", self.iterations)?;
            write!(f, "  final residual:       {:e}", self.final_residual)
        }
    }
}

/// Writes each run, separated by blank lines. Rejected runs print their error.
pub fn render<W: Write>(
    out: &mut W,
    runs: &[(SolverKind, Result<SolverReport>)],
) -> std::io::Result<()> {
    for (kind, run) in runs {
        writeln!(out)?;
        match run {
            Ok(report) => writeln!(out, "{report}")?,
            Err(e) => writeln!(out, "{kind}:\n  rejected: {e}")?,
        }
    }
    Ok(())
}
