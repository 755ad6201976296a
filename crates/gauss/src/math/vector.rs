use std::f64::consts::PI;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use num_traits::{One, Zero};

use crate::error::LinalgError;

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

/// Unit in which [`Vector::angle`] reports its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T> Vector<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Vector::from_vec(vec![T::one(); len])
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Vector<f64> {
    /// Inner product `Σ u[i] * v[i]`.
    ///
    /// Two empty vectors have a dot product of `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector<f64>) -> Result<f64, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(dot_scalar_f64(self.as_slice(), other.as_slice()))
    }

    /// Cross product `u × v` of two 3-vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotThreeDimensional`] unless both operands have
    /// exactly three components.
    pub fn cross(&self, other: &Vector<f64>) -> Result<Vector<f64>, LinalgError> {
        match (self.as_slice(), other.as_slice()) {
            ([u0, u1, u2], [v0, v1, v2]) => Ok(Vector::from_vec(vec![
                u1 * v2 - u2 * v1,
                u2 * v0 - u0 * v2,
                u0 * v1 - u1 * v0,
            ])),
            _ => Err(LinalgError::NotThreeDimensional {
                left: self.len(),
                right: other.len(),
            }),
        }
    }

    /// Euclidean norm. The empty vector has norm `0.0`.
    pub fn norm(&self) -> f64 {
        dot_scalar_f64(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Angle between two vectors, `acos(u·v / (|u| |v|))`.
    ///
    /// Both operands are scaled by their largest absolute component first, so
    /// finite inputs never overflow the norms. The cosine is then clamped to
    /// `[-1, 1]`; rounding on (anti)parallel inputs cannot leave the domain of
    /// `acos`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::LengthMismatch`] for vectors of different
    /// lengths, [`LinalgError::NonFinite`] when a component is infinite or NaN
    /// and [`LinalgError::ZeroNorm`] when either vector has zero norm.
    pub fn angle(&self, other: &Vector<f64>, unit: AngleUnit) -> Result<f64, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let u = unit_scaled(self.as_slice())?;
        let v = unit_scaled(other.as_slice())?;
        let denom = dot_scalar_f64(&u, &u).sqrt() * dot_scalar_f64(&v, &v).sqrt();
        let radians = (dot_scalar_f64(&u, &v) / denom).clamp(-1.0, 1.0).acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * 180.0 / PI,
        })
    }
}

/// Divides every component by the largest absolute one.
fn unit_scaled(values: &[f64]) -> Result<Vec<f64>, LinalgError> {
    if values.iter().any(|x| !x.is_finite()) {
        return Err(LinalgError::NonFinite);
    }
    let scale = values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if scale == 0.0 {
        return Err(LinalgError::ZeroNorm);
    }
    Ok(values.iter().map(|x| x / scale).collect())
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
