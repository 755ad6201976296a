use rayon::prelude::*;

use crate::error::LinalgError;
use crate::math::matrix::Matrix;

impl Matrix<f64> {
    /// Dense product `self * rhs`.
    ///
    /// If either operand has no rows the product is the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] when `self.ncols()` differs
    /// from `rhs.nrows()`.
    pub fn matmul(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>, LinalgError> {
        let Some((m, p)) = product_shape(self, rhs)? else {
            return Ok(Matrix::empty());
        };
        let mut data = vec![0.0; m * p];
        if p > 0 {
            for (i, out) in data.chunks_exact_mut(p).enumerate() {
                product_row(self, rhs, i, out);
            }
        }
        Ok(Matrix::from_shape_vec((m, p), data)?)
    }

    /// Same as [`Matrix::matmul`] with output rows computed in parallel.
    ///
    /// Each entry is summed in the same order as the sequential version, so
    /// the two agree bit for bit.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] when `self.ncols()` differs
    /// from `rhs.nrows()`.
    pub fn par_matmul(&self, rhs: &Matrix<f64>) -> Result<Matrix<f64>, LinalgError> {
        let Some((m, p)) = product_shape(self, rhs)? else {
            return Ok(Matrix::empty());
        };
        let mut data = vec![0.0; m * p];
        if p > 0 {
            data.par_chunks_mut(p)
                .enumerate()
                .for_each(|(i, out)| product_row(self, rhs, i, out));
        }
        Ok(Matrix::from_shape_vec((m, p), data)?)
    }
}

/// Shape of `lhs * rhs`, or `None` when the product is degenerate.
fn product_shape(
    lhs: &Matrix<f64>,
    rhs: &Matrix<f64>,
) -> Result<Option<(usize, usize)>, LinalgError> {
    if lhs.nrows() == 0 || rhs.nrows() == 0 {
        log::debug!(
            "Empty operand in product of {:?} and {:?}",
            lhs.shape(),
            rhs.shape()
        );
        return Ok(None);
    }
    if lhs.ncols() != rhs.nrows() {
        return Err(LinalgError::DimensionMismatch {
            left: lhs.shape(),
            right: rhs.shape(),
        });
    }
    log::debug!(
        "Multiplying {}x{} by {}x{}",
        lhs.nrows(),
        lhs.ncols(),
        rhs.nrows(),
        rhs.ncols()
    );
    Ok(Some((lhs.nrows(), rhs.ncols())))
}

fn product_row(lhs: &Matrix<f64>, rhs: &Matrix<f64>, i: usize, out: &mut [f64]) {
    let a = lhs.row_slice(i);
    for (j, cell) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (k, a_ik) in a.iter().enumerate() {
            sum += a_ik * rhs[(k, j)];
        }
        *cell = sum;
    }
}
