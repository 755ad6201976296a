//! Property tests for vector and matrix algebra.

use gauss::math::{Matrix, Vector};
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn vec3() -> impl Strategy<Value = Vector<f64>> {
    prop::collection::vec(component(), 3).prop_map(Vector::from_vec)
}

fn square(max_n: usize) -> impl Strategy<Value = Matrix<f64>> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(component(), n * n)
            .prop_map(move |data| Matrix::from_shape_vec((n, n), data).unwrap())
    })
}

proptest! {
    #[test]
    fn dot_is_commutative(
        (u, v) in (0..16usize).prop_flat_map(|n| (
            prop::collection::vec(component(), n),
            prop::collection::vec(component(), n),
        ))
    ) {
        let u = Vector::from_vec(u);
        let v = Vector::from_vec(v);
        prop_assert_eq!(u.dot(&v).unwrap(), v.dot(&u).unwrap());
    }

    #[test]
    fn cross_is_anticommutative(u in vec3(), v in vec3()) {
        let uv = u.cross(&v).unwrap();
        let vu = v.cross(&u).unwrap();
        for i in 0..3 {
            prop_assert!((uv[i] + vu[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn cross_is_orthogonal_to_operands(u in vec3(), v in vec3()) {
        let w = u.cross(&v).unwrap();
        // Scale the tolerance with the magnitudes involved.
        let scale = 1.0 + u.norm() * u.norm() * v.norm();
        prop_assert!(u.dot(&w).unwrap().abs() < 1e-9 * scale);
        prop_assert!(v.dot(&w).unwrap().abs() < 1e-9 * scale);
    }

    #[test]
    fn row_and_column_swaps_are_involutions(m in square(6), a in 0..6usize, b in 0..6usize) {
        let n = m.nrows();
        let (a, b) = (a % n, b % n);
        let mut t = m.clone();
        t.swap_rows(a, b).unwrap();
        prop_assert_eq!(t.shape(), m.shape());
        t.swap_rows(a, b).unwrap();
        prop_assert_eq!(&t, &m);
        t.swap_columns(a, b).unwrap();
        prop_assert_eq!(t.shape(), m.shape());
        t.swap_columns(a, b).unwrap();
        prop_assert_eq!(&t, &m);
    }

    #[test]
    fn row_swap_negates_determinant(m in square(5), a in 0..5usize, b in 0..5usize) {
        let n = m.nrows();
        let (a, b) = (a % n, b % n);
        prop_assume!(a != b);
        let mut t = m.clone();
        t.swap_rows(a, b).unwrap();
        let det = m.determinant().unwrap();
        let swapped = t.determinant().unwrap();
        let tol = 1e-9 * (1.0 + det.abs());
        prop_assert!((det + swapped).abs() <= tol, "{} vs {}", det, swapped);
    }

    #[test]
    fn determinant_of_diagonal_is_product(d in prop::collection::vec(1.0..10.0f64, 1..8)) {
        let expected: f64 = d.iter().product();
        let m = Matrix::from_diagonal(&Vector::from_vec(d));
        let det = m.determinant().unwrap();
        prop_assert!((det - expected).abs() <= 1e-9 * expected.abs());
    }

    #[test]
    fn par_matmul_is_bit_identical(
        (a, b) in (1..8usize, 1..8usize, 1..8usize).prop_flat_map(|(m, n, p)| (
            prop::collection::vec(component(), m * n)
                .prop_map(move |data| Matrix::from_shape_vec((m, n), data).unwrap()),
            prop::collection::vec(component(), n * p)
                .prop_map(move |data| Matrix::from_shape_vec((n, p), data).unwrap()),
        ))
    ) {
        prop_assert_eq!(a.par_matmul(&b).unwrap(), a.matmul(&b).unwrap());
    }
}
