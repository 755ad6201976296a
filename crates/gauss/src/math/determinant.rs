//! Determinant by Gaussian elimination with partial pivoting.
//!
//! The elimination runs on a private copy of the input. At step `i` a pivot
//! row is chosen, swapped into place (flipping the sign of the running
//! product), the pivot row is normalised to the right of the diagonal, and
//! column `i` is cleared from every other row. The determinant is the product
//! of the pivots, signed by the parity of the interchanges.

use crate::config::{EliminationConfig, PivotRule};
use crate::error::LinalgError;
use crate::math::matrix::Matrix;

/// Outcome of a determinant elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elimination {
    pub determinant: f64,
    /// Row interchanges performed before the elimination finished or stopped.
    pub row_swaps: usize,
    /// Set when a pivot fell below the singular threshold.
    pub singular: bool,
}

impl Elimination {
    fn degenerate() -> Self {
        Self {
            determinant: 0.0,
            row_swaps: 0,
            singular: false,
        }
    }
}

impl Matrix<f64> {
    /// Determinant with the default [`EliminationConfig`].
    ///
    /// A singular matrix yields `Ok(0.0)`, as does the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a non-empty, non-square matrix.
    ///
    /// ```
    /// use gauss::math::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -1.0);
    /// ```
    pub fn determinant(&self) -> Result<f64, LinalgError> {
        self.determinant_with(&EliminationConfig::default())
            .map(|e| e.determinant)
    }

    /// Runs the elimination with explicit settings and reports how it went.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a non-empty, non-square matrix.
    pub fn determinant_with(&self, config: &EliminationConfig) -> Result<Elimination, LinalgError> {
        if self.is_empty() {
            return Ok(Elimination::degenerate());
        }
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(eliminate(self.clone(), config))
    }
}

fn eliminate(mut t: Matrix<f64>, config: &EliminationConfig) -> Elimination {
    let n = t.nrows();
    let threshold = config.singular_threshold;
    let mut det = 1.0;
    let mut row_swaps = 0;

    for i in 0..n {
        let jj = select_pivot(&t, i, config.pivot_rule);

        if t[(jj, i)].abs() < threshold {
            log::debug!(
                "Pivot {} below threshold {:e} at column {}, matrix is singular",
                t[(jj, i)],
                threshold,
                i
            );
            return Elimination {
                determinant: 0.0,
                row_swaps,
                singular: true,
            };
        }

        if jj != i {
            log::trace!("Swapping rows {} and {} at column {}", i, jj, i);
            t.swap_rows_unchecked(i, jj);
            det = -det;
            row_swaps += 1;
        }

        let pivot = t[(i, i)];
        let data = t.as_mut_slice();

        for value in &mut data[i * n + i + 1..(i + 1) * n] {
            *value /= pivot;
        }

        for j in (0..n).filter(|&j| j != i) {
            let factor = data[j * n + i];
            if factor.abs() <= threshold {
                continue;
            }
            for k in i + 1..n {
                data[j * n + k] -= data[i * n + k] * factor;
            }
        }

        det *= pivot;
    }

    Elimination {
        determinant: det,
        row_swaps,
        singular: false,
    }
}

fn select_pivot(t: &Matrix<f64>, i: usize, rule: PivotRule) -> usize {
    let mut jj = i;
    for j in i..t.nrows() {
        let candidate = match rule {
            PivotRule::Partial => t[(j, i)].abs(),
            PivotRule::Legacy => t[(j, j)].abs(),
        };
        if candidate > t[(jj, i)].abs() {
            jj = j;
        }
    }
    jj
}
