//! Dense vector and matrix types and the numeric routines built on them.
//!
//! `Vector` and `Matrix` are small owned containers over a contiguous buffer.
//! Shape checks happen at the API boundary and are reported as
//! [`LinalgError`](crate::error::LinalgError); everything below that boundary
//! indexes directly.
pub mod determinant;
pub mod matrix;
pub mod multiply;
pub mod vector;

pub use determinant::Elimination;
pub use matrix::{Matrix, ShapeError};
pub use vector::{AngleUnit, Vector};

/// Smallest positive normal `f64`. Default near-zero cutoff for pivots.
pub const MIN_PIVOT: f64 = f64::MIN_POSITIVE;
