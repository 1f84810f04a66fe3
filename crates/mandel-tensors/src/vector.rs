//! 3-component Cartesian vectors.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::TensorError;
use crate::linalg::{dot_flat, mat3_vec, vec_mat3};
use crate::mandel::{skew_to_full, sym_to_full};
use crate::ops::Dot;
use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::storage::{tensor_type, Data, DataMut, Owned};

/// A vector in 3-D Cartesian space.
///
/// # Example
///
/// ```
/// use mandel_tensors::Vector;
///
/// let a = Vector::new([1.0, 0.0, 0.0]);
/// let b = Vector::new([0.0, 1.0, 0.0]);
/// assert_eq!(a.cross(&b), Vector::new([0.0, 0.0, 1.0]));
/// assert_eq!((&a + &b).norm(), 2.0_f64.sqrt());
/// ```
pub struct Vector<D: Data = Owned> {
    data: D,
}

tensor_type!(Vector, 3);

impl<D: Data> Vector<D> {
    /// Standard 3-D cross product.
    pub fn cross<E: Data>(&self, other: &Vector<E>) -> Vector {
        let a = self.data();
        let b = other.data();
        Vector::new([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])
    }

    /// Outer product `a_i b_j`, producing a full rank-2 tensor.
    pub fn outer<E: Data>(&self, other: &Vector<E>) -> RankTwo {
        let a = self.data();
        let b = other.data();
        let mut out = [0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                out[3 * i + j] = a[i] * b[j];
            }
        }
        RankTwo::new(out)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        dot_flat(self.data(), self.data()).sqrt()
    }
}

impl<D: DataMut> Vector<D> {
    /// Scale in place to unit length.
    ///
    /// # Errors
    ///
    /// `TensorError::ZeroNorm` if the vector has zero length; the
    /// components are left untouched in that case.
    pub fn normalize(&mut self) -> Result<(), TensorError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(TensorError::ZeroNorm);
        }
        *self /= n;
        Ok(())
    }
}

impl<D: Data> Index<usize> for Vector<D> {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data()[i]
    }
}

impl<D: DataMut> IndexMut<usize> for Vector<D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data_mut()[i]
    }
}

impl<D: Data> fmt::Display for Vector<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data();
        write!(f, "[{}, {}, {}]", d[0], d[1], d[2])
    }
}

/// Standard Euclidean inner product.
impl<D: Data, E: Data> Dot<Vector<E>> for Vector<D> {
    type Output = f64;

    fn dot(&self, rhs: &Vector<E>) -> f64 {
        dot_flat(self.data(), rhs.data())
    }
}

/// `v^T A`, the left product against a full rank-2 tensor.
impl<D: Data, E: Data> Dot<RankTwo<E>> for Vector<D> {
    type Output = Vector;

    fn dot(&self, rhs: &RankTwo<E>) -> Vector {
        Vector::new(vec_mat3(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for Vector<D> {
    type Output = Vector;

    fn dot(&self, rhs: &Symmetric<E>) -> Vector {
        // S is symmetric, so v^T S = S v.
        Vector::new(mat3_vec(&sym_to_full(rhs.data()), self.data()))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for Vector<D> {
    type Output = Vector;

    fn dot(&self, rhs: &Skew<E>) -> Vector {
        Vector::new(vec_mat3(self.data(), &skew_to_full(rhs.data())))
    }
}
