use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Axis of a matrix, used to report which index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Failures raised by vector and matrix operations.
///
/// Only caller misuse ends up here. Outcomes that are mathematically valid but
/// trivial (a singular determinant, an empty product) are returned as `Ok`.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Vectors of different lengths passed to an element-wise operation.
    LengthMismatch { left: usize, right: usize },
    /// Cross product on something other than two 3-vectors.
    NotThreeDimensional { left: usize, right: usize },
    /// Angle requested against a zero-length (zero-norm) vector.
    ZeroNorm,
    /// Angle requested for a vector with an infinite or NaN component.
    NonFinite,
    /// Inner dimensions of a matrix product disagree.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    NotSquare { rows: usize, cols: usize },
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },
    Shape(ShapeError),
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::LengthMismatch { left, right } => write!(
                f,
                "vectors must have equal length (got {} and {})",
                left, right
            ),
            LinalgError::NotThreeDimensional { left, right } => write!(
                f,
                "cross product requires two 3-dimensional vectors (got {} and {})",
                left, right
            ),
            LinalgError::ZeroNorm => write!(f, "angle is undefined for a zero-norm vector"),
            LinalgError::NonFinite => {
                write!(f, "angle is undefined for a vector with non-finite components")
            }
            LinalgError::DimensionMismatch { left, right } => write!(
                f,
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                left.0, left.1, right.0, right.1
            ),
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square (got {}x{})", rows, cols)
            }
            LinalgError::IndexOutOfBounds { axis, index, len } => write!(
                f,
                "{} index {} out of bounds for matrix with {} {}s",
                axis, index, len, axis
            ),
            LinalgError::Shape(err) => write!(f, "{}", err),
        }
    }
}

impl Error for LinalgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinalgError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for LinalgError {
    fn from(err: ShapeError) -> Self {
        LinalgError::Shape(err)
    }
}
