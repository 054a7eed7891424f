//! Behavioral tests for the four iterative solvers.
//!
//! Systems are manufactured from a known solution so the relative error is always
//! available. Random matrices use a seeded `StdRng` so failures reproduce.

use approx::assert_abs_diff_eq;
use faer::Mat;
use lsbench::context::{SolveContext, SolverKind};
use lsbench::solver::{
    CgSolver, DiagonalPolicy, GaussSeidelSolver, GradientSolver, JacobiSolver, LinearSolver,
};
use lsbench::utils::{ManufacturedProblem, relative_error};
use lsbench::LsError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random SPD matrix `A = MᵀM + n·I` with entries of `M` in [0, 1).
///
/// The shift keeps the condition number small so CG reaches tight tolerances well
/// inside `n` iterations in floating point.
fn random_spd(n: usize, seed: u64) -> Mat<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    let m = Mat::from_fn(n, n, |i, j| data[j * n + i]);
    Mat::from_fn(n, n, |i, j| {
        let mut s = 0.0;
        for k in 0..n {
            s += m[(k, i)] * m[(k, j)];
        }
        if i == j { s + n as f64 } else { s }
    })
}

/// Tridiagonal `[-1, 4, -1]`: symmetric, strictly diagonally dominant, non-positive off-diagonal.
fn tridiag(n: usize) -> Mat<f64> {
    Mat::from_fn(n, n, |i, j| {
        if i == j {
            4.0
        } else if i.abs_diff(j) == 1 {
            -1.0
        } else {
            0.0
        }
    })
}

fn strictly_dominant_4x4() -> Mat<f64> {
    let rows = [
        [10.0, -1.0, 2.0, 0.0],
        [-1.0, 11.0, -1.0, 3.0],
        [2.0, -1.0, 10.0, -1.0],
        [0.0, 3.0, -1.0, 8.0],
    ];
    Mat::from_fn(4, 4, |i, j| rows[i][j])
}

fn unit_problem(a: Mat<f64>) -> ManufacturedProblem<Mat<f64>, f64> {
    ManufacturedProblem::with_unit_solution(a)
}

#[test]
fn cg_two_by_two_scenario() {
    let p = unit_problem(Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 3.0]][i][j]));
    assert_eq!(p.b, vec![5.0, 4.0]);
    let out = CgSolver::new(1e-10, 20_000).solve(&p.a, &p.b, &p.zero_guess()).unwrap();
    assert!(out.stats.converged);
    assert!(out.stats.iterations <= 2, "iterations = {}", out.stats.iterations);
    assert!(relative_error(&out.x, &p.x_star) < 1e-10);
}

#[test]
fn cg_converges_within_dimension_on_random_spd() {
    for (n, seed) in [(5, 1), (10, 2), (20, 3)] {
        let p = unit_problem(random_spd(n, seed));
        for tol in [1e-4, 1e-6, 1e-8] {
            let out = CgSolver::new(tol, 20_000).solve(&p.a, &p.b, &p.zero_guess()).unwrap();
            assert!(out.stats.converged, "n = {n}, tol = {tol:e}");
            assert!(out.stats.iterations <= n, "n = {n}, iterations = {}", out.stats.iterations);
        }
    }
}

#[test]
fn cg_relative_error_does_not_grow() {
    for (a, n) in [(tridiag(6), 6), (random_spd(8, 5), 8)] {
        let p = unit_problem(a);
        let x0 = p.zero_guess();
        let mut prev = relative_error(&x0, &p.x_star);
        for k in 1..=n {
            let out = CgSolver::new(1e-30, k).solve(&p.a, &p.b, &x0).unwrap();
            let err = relative_error(&out.x, &p.x_star);
            assert!(err <= prev + 1e-12, "n = {n}, step {k}: {err:e} > {prev:e}");
            prev = err;
        }
        assert!(prev < 1e-10, "n = {n}, final error {prev:e}");
    }
}

#[test]
fn jacobi_and_gauss_seidel_four_by_four_scenario() {
    let p = unit_problem(strictly_dominant_4x4());
    let x0 = p.zero_guess();
    let jac = JacobiSolver::new(1e-6, 20_000).solve(&p.a, &p.b, &x0).unwrap();
    let gs = GaussSeidelSolver::new(1e-6, 20_000).solve(&p.a, &p.b, &x0).unwrap();
    assert!(jac.stats.converged && gs.stats.converged);
    assert!(
        gs.stats.iterations <= jac.stats.iterations,
        "gs = {}, jacobi = {}",
        gs.stats.iterations,
        jac.stats.iterations
    );
    for i in 0..4 {
        assert_abs_diff_eq!(jac.x[i], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(gs.x[i], 1.0, epsilon = 1e-5);
    }
}

#[test]
fn gauss_seidel_needs_fewer_sweeps_on_dominant_tridiagonal() {
    for n in [8, 32, 64] {
        let p = unit_problem(tridiag(n));
        let x0 = p.zero_guess();
        for tol in [1e-4, 1e-8] {
            let jac = JacobiSolver::new(tol, 20_000).solve(&p.a, &p.b, &x0).unwrap();
            let gs = GaussSeidelSolver::new(tol, 20_000).solve(&p.a, &p.b, &x0).unwrap();
            assert!(jac.stats.converged && gs.stats.converged);
            assert!(gs.stats.iterations <= jac.stats.iterations);
        }
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let p = unit_problem(strictly_dominant_4x4());
    let x0 = p.zero_guess();
    for kind in SolverKind::ALL {
        let ctx = SolveContext::new(kind, 1e-8, 500);
        let first = ctx.solve_context(&p.a, &p.b, &x0).unwrap();
        let second = ctx.solve_context(&p.a, &p.b, &x0).unwrap();
        assert_eq!(first.stats, second.stats, "{kind}");
        let same_bits = first.x.iter().zip(&second.x).all(|(u, v)| u.to_bits() == v.to_bits());
        assert!(same_bits, "{kind} produced different iterates");
    }
    assert_eq!(x0, vec![0.0; 4]);
}

#[test]
fn zero_max_iters_returns_initial_guess_for_every_kind() {
    let p = unit_problem(strictly_dominant_4x4());
    let x0 = vec![0.25; 4];
    for kind in SolverKind::ALL {
        let out = SolveContext::new(kind, 1e-6, 0).solve_context(&p.a, &p.b, &x0).unwrap();
        assert_eq!(out.x, x0, "{kind}");
        assert_eq!(out.stats.iterations, 0);
        assert!(!out.stats.converged);

        let exact = SolveContext::new(kind, 1e-6, 0).solve_context(&p.a, &p.b, &p.x_star).unwrap();
        assert!(exact.stats.converged, "{kind} should accept the exact solution");
        assert_eq!(exact.stats.iterations, 0);
    }
}

#[test]
fn exhausted_bound_returns_last_iterate() {
    let p = unit_problem(tridiag(50));
    let out = JacobiSolver::new(1e-12, 3).solve(&p.a, &p.b, &p.zero_guess()).unwrap();
    assert!(!out.stats.converged);
    assert_eq!(out.stats.iterations, 3);
    assert!(out.x.iter().all(|v| v.is_finite() && *v != 0.0));
}

#[test]
fn every_kind_solves_small_spd() {
    let p = unit_problem(Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 3.0]][i][j]));
    for kind in SolverKind::ALL {
        let out = SolveContext::new(kind, 1e-10, 20_000)
            .solve_context(&p.a, &p.b, &p.zero_guess())
            .unwrap();
        assert!(out.stats.converged, "{kind}");
        assert!(relative_error(&out.x, &p.x_star) < 1e-8, "{kind}");
    }
}

#[test]
fn gradient_matches_cg_for_two_steps() {
    // With p₀ = r₀ the first β of both recurrences coincide, so a 2×2 system
    // follows the CG path exactly.
    let p = unit_problem(Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 3.0]][i][j]));
    let x0 = p.zero_guess();
    let gd = GradientSolver::new(1e-30, 2).solve(&p.a, &p.b, &x0).unwrap();
    let cg = CgSolver::new(1e-30, 2).solve(&p.a, &p.b, &x0).unwrap();
    for i in 0..2 {
        assert_abs_diff_eq!(gd.x[i], cg.x[i], epsilon = 1e-14);
    }
}

#[test]
fn zero_diagonal_scenario() {
    let a = Mat::from_fn(3, 3, |i, j| match (i == j, i) {
        (true, 1) => 0.0,
        (true, _) => 3.0,
        (false, _) => 1.0,
    });
    let p = unit_problem(a);
    let x0 = p.zero_guess();

    let err = JacobiSolver::new(1e-6, 100).solve(&p.a, &p.b, &x0).unwrap_err();
    assert!(matches!(err, LsError::ZeroPivot(1)));
    let err = GaussSeidelSolver::new(1e-6, 100).solve(&p.a, &p.b, &x0).unwrap_err();
    assert!(matches!(err, LsError::ZeroPivot(1)));

    let out = JacobiSolver::new(1e-6, 100)
        .with_diagonal_policy(DiagonalPolicy::Propagate)
        .solve(&p.a, &p.b, &x0)
        .unwrap();
    assert!(!out.stats.converged);
    assert_eq!(out.stats.iterations, 100);
    assert!(out.x.iter().any(|v| !v.is_finite()));
}
