use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::error::{Axis, LinalgError};
use crate::math::vector::Vector;

/// Dense row-major matrix.
///
/// Every row has `cols` entries; the buffer always holds `rows * cols`
/// values. A matrix with no rows or no columns is *empty*.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    ///
    /// An empty outer `Vec` yields the `0x0` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: ncols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// The `0x0` matrix.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn column(&self, col: usize) -> Vector<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|row| self.row_slice(row).to_vec()).collect()
    }

    /// Exchanges rows `r1` and `r2` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if either index is not a
    /// valid row.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<(), LinalgError> {
        self.check_index(Axis::Row, r1)?;
        self.check_index(Axis::Row, r2)?;
        self.swap_rows_unchecked(r1, r2);
        Ok(())
    }

    /// Exchanges columns `c1` and `c2` in place, one row at a time.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if either index is not a
    /// valid column.
    pub fn swap_columns(&mut self, c1: usize, c2: usize) -> Result<(), LinalgError> {
        self.check_index(Axis::Column, c1)?;
        self.check_index(Axis::Column, c2)?;
        if c1 == c2 {
            return Ok(());
        }
        for row in self.data.chunks_exact_mut(self.cols) {
            row.swap(c1, c2);
        }
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    fn check_index(&self, axis: Axis, index: usize) -> Result<(), LinalgError> {
        let len = match axis {
            Axis::Row => self.rows,
            Axis::Column => self.cols,
        };
        if index >= len {
            return Err(LinalgError::IndexOutOfBounds { axis, index, len });
        }
        Ok(())
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// A `rows x cols` matrix with every entry set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Square matrix with `diagonal[i]` at `(i, i)` and zero elsewhere.
    pub fn from_diagonal(diagonal: &Vector<T>) -> Self {
        let n = diagonal.len();
        let mut m = Self::zeros(n, n);
        for (i, value) in diagonal.iter().enumerate() {
            m[(i, i)] = value.clone();
        }
        m
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    pub fn identity(n: usize) -> Self {
        Self::from_diagonal(&Vector::ones(n))
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    BufferLength { rows: usize, cols: usize, len: usize },
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            ShapeError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
        }
    }
}

impl Error for ShapeError {}
