//! Tests for core dense matrix operations: matrix-vector multiplication, dot product, norm,
//! and the in-place vector updates the solvers are built from.

use approx::assert_abs_diff_eq;
use faer::Mat;
use lsbench::core::traits::{MatShape, MatVec, MatrixGet, MatrixSet};
use lsbench::core::wrappers::{axpy, dot, mat_vec, norm2, scale, sub};
use lsbench::matrix::DenseMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test matrix-vector multiplication for a small random dense matrix.
///
/// This test constructs a random 5x5 matrix and a random vector, computes the matrix-vector
/// product using the MatVec trait, and checks the result against a manual computation.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = StdRng::seed_from_u64(11);
    let vals: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let a = <Mat<f64> as DenseMatrix<f64>>::from_raw(n, n, vals.clone()).unwrap();
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut y = vec![0.0; n];
    a.matvec(&x, &mut y);

    // check y[i] == sum_j A[i,j]*x[j]
    for i in 0..n {
        let expected = (0..n).map(|j| vals[j * n + i] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
    assert_eq!(mat_vec(&a, &x), y);
}

/// Test dot product and Euclidean norm for small vectors.
#[test]
fn dot_and_norm() {
    let x = vec![1.0, 2.0, 3.0];
    let y = vec![4.0, -5.0, 6.0];
    let d: f64 = dot(&x, &y);
    assert_abs_diff_eq!(d, 1.0 * 4.0 + 2.0 * (-5.0) + 3.0 * 6.0, epsilon = 1e-12);
    let norm_x: f64 = norm2(&x);
    let expected_norm = ((1.0f64).powi(2) + 2.0f64.powi(2) + 3.0f64.powi(2)).sqrt();
    assert_abs_diff_eq!(norm_x, expected_norm, epsilon = 1e-12);
}

/// `y + a·x`, `a·v` and `u − v` on fixed data.
#[test]
fn scaled_updates() {
    let mut y = vec![1.0, -1.0];
    axpy(&mut y, 0.5, &[2.0, 4.0]);
    assert_eq!(y, vec![2.0, 1.0]);
    scale(&mut y, 3.0);
    assert_eq!(y, vec![6.0, 3.0]);
    assert_eq!(sub(&y, &[1.0, 1.0]), vec![5.0, 2.0]);
}

/// Entry access is 0-based (row, col).
#[test]
fn entry_access() {
    let mut a = <Mat<f64> as DenseMatrix<f64>>::zeros(2, 3).unwrap();
    a.set_entry(1, 2, 4.5);
    assert_eq!(a.entry(1, 2), 4.5);
    assert_eq!(MatShape::nrows(&a), 2);
    assert_eq!(MatShape::ncols(&a), 3);
}

#[test]
#[should_panic(expected = "incorrect length")]
fn matvec_panics_on_mismatch() {
    let a = <Mat<f64> as DenseMatrix<f64>>::zeros(2, 2).unwrap();
    let mut y = vec![0.0; 2];
    a.matvec(&vec![1.0; 3], &mut y);
}
