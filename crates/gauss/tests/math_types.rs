//! Integration tests for the Vector and Matrix containers and swap primitives.

use gauss::math::{Matrix, Vector};
use gauss::{Axis, LinalgError, ShapeError};

// ---------------------------------------------------------------------------
// Vector basics
// ---------------------------------------------------------------------------

#[test]
fn vector_from_vec_and_len() {
    let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
    assert_eq!(v[1], 2.0);
}

#[test]
fn vector_zeros_and_ones() {
    let z: Vector<f64> = Vector::zeros(4);
    assert!(z.iter().all(|&x| x == 0.0));
    let o: Vector<f64> = Vector::ones(2);
    assert_eq!(o.to_vec(), vec![1.0, 1.0]);
}

#[test]
fn vector_display() {
    let v = Vector::from_vec(vec![1.5, -2.0]);
    assert_eq!(v.to_string(), "[1.5, -2]");
}

// ---------------------------------------------------------------------------
// Matrix construction
// ---------------------------------------------------------------------------

#[test]
fn matrix_filled_12_by_10() {
    let m = Matrix::filled(12, 10, 55.0);
    assert_eq!(m.nrows(), 12);
    for r in 0..m.nrows() {
        let row = m.row_slice(r);
        assert_eq!(row.len(), 10);
        assert!(row.iter().all(|&v| v == 55.0));
    }
}

#[test]
fn matrix_zeros_has_zero_fill() {
    let m: Matrix<f64> = Matrix::zeros(3, 2);
    assert_eq!(m.shape(), (3, 2));
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn matrix_zero_extent_is_empty() {
    let no_rows: Matrix<f64> = Matrix::zeros(0, 5);
    assert_eq!(no_rows.shape(), (0, 5));
    assert!(no_rows.is_empty());

    let no_cols: Matrix<f64> = Matrix::zeros(4, 0);
    assert_eq!(no_cols.shape(), (4, 0));
    assert!(no_cols.is_empty());
    assert_eq!(no_cols.row_slice(3), &[] as &[f64]);
}

#[test]
fn matrix_identity() {
    let m: Matrix<f64> = Matrix::identity(3);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(m[(i, j)], expected);
        }
    }
}

#[test]
fn matrix_from_diagonal() {
    let m = Matrix::from_diagonal(&Vector::from_vec(vec![2.0, -1.0, 7.0]));
    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m[(0, 0)], 2.0);
    assert_eq!(m[(1, 1)], -1.0);
    assert_eq!(m[(2, 2)], 7.0);
    assert_eq!(m[(0, 2)], 0.0);
    assert_eq!(m[(2, 1)], 0.0);
}

#[test]
fn matrix_from_rows_and_back() {
    let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
    let m = Matrix::from_rows(rows.clone()).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row_slice(1), &[4, 5, 6]);
    assert_eq!(m.column(2).to_vec(), vec![3, 6]);
    assert_eq!(m.to_rows(), rows);
}

#[test]
fn matrix_from_rows_rejects_ragged() {
    let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        ShapeError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn matrix_try_from_nested_vec() {
    let m = Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m[(1, 0)], 3.0);

    let err = Matrix::try_from(vec![vec![1.0], vec![2.0, 3.0]]).unwrap_err();
    assert_eq!(
        err,
        ShapeError::RaggedRow {
            row: 1,
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn matrix_from_shape_vec_rejects_bad_length() {
    assert!(Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]).is_err());
}

#[test]
fn matrix_from_empty_rows_is_0x0() {
    let m: Matrix<f64> = Matrix::from_rows(vec![]).unwrap();
    assert_eq!(m.shape(), (0, 0));
    assert_eq!(m, Matrix::empty());
}

// ---------------------------------------------------------------------------
// Row / column swaps
// ---------------------------------------------------------------------------

fn sample() -> Matrix<f64> {
    Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
        vec![10.0, 11.0, 12.0],
    ])
    .unwrap()
}

#[test]
fn swap_rows_exchanges_whole_rows() {
    let mut m = sample();
    m.swap_rows(0, 3).unwrap();
    assert_eq!(m.row_slice(0), &[10.0, 11.0, 12.0]);
    assert_eq!(m.row_slice(3), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.shape(), (4, 3));
}

#[test]
fn swap_rows_argument_order_does_not_matter() {
    let mut a = sample();
    let mut b = sample();
    a.swap_rows(1, 2).unwrap();
    b.swap_rows(2, 1).unwrap();
    assert_eq!(a, b);
}

#[test]
fn swap_columns_exchanges_every_row() {
    let mut m = sample();
    m.swap_columns(0, 2).unwrap();
    assert_eq!(m.column(0).to_vec(), vec![3.0, 6.0, 9.0, 12.0]);
    assert_eq!(m.column(2).to_vec(), vec![1.0, 4.0, 7.0, 10.0]);
    assert_eq!(m.shape(), (4, 3));
}

#[test]
fn swaps_are_involutions() {
    let original = sample();
    let mut m = original.clone();
    m.swap_rows(0, 2).unwrap();
    m.swap_rows(0, 2).unwrap();
    assert_eq!(m, original);
    m.swap_columns(1, 2).unwrap();
    m.swap_columns(1, 2).unwrap();
    assert_eq!(m, original);
}

#[test]
fn swap_same_index_is_noop() {
    let mut m = sample();
    m.swap_rows(1, 1).unwrap();
    m.swap_columns(2, 2).unwrap();
    assert_eq!(m, sample());
}

#[test]
fn swap_out_of_range_errors_and_leaves_matrix_untouched() {
    let mut m = sample();
    assert_eq!(
        m.swap_rows(0, 4),
        Err(LinalgError::IndexOutOfBounds {
            axis: Axis::Row,
            index: 4,
            len: 4
        })
    );
    assert_eq!(
        m.swap_columns(3, 0),
        Err(LinalgError::IndexOutOfBounds {
            axis: Axis::Column,
            index: 3,
            len: 3
        })
    );
    assert_eq!(m, sample());
}

#[test]
fn swap_on_empty_matrix_errors() {
    let mut m: Matrix<f64> = Matrix::empty();
    assert!(m.swap_rows(0, 0).is_err());
    assert!(m.swap_columns(0, 0).is_err());
}
