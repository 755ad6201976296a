//! gauss: dense vector and matrix primitives.
//!
//! This crate provides owned `Vector`/`Matrix` containers, the usual vector
//! products, dense matrix multiplication, in-place row/column swaps and a
//! determinant computed by Gaussian elimination with partial pivoting.
//!
//! Caller misuse (mismatched shapes, out-of-range indices, zero-norm angles)
//! is reported as a [`LinalgError`]. Results that are trivial but valid, such
//! as the determinant of a singular matrix, come back as `Ok`.
pub mod config;
pub mod error;
pub mod math;

pub use config::{EliminationConfig, PivotRule};
pub use error::{Axis, LinalgError};
pub use math::{AngleUnit, Elimination, Matrix, ShapeError, Vector};
