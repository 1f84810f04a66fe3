//! General (unsymmetric) rank-2 tensors.

use std::fmt;
use std::ops::{AddAssign, Index, IndexMut, SubAssign};

use crate::error::TensorError;
use crate::linalg::{dot_flat, mat3_det, mat3_inv, mat3_mul, mat3_vec};
use crate::mandel::{skew_to_full, sym_to_full};
use crate::ops::{Contract, Dot};
use crate::rank2::{Skew, Symmetric};
use crate::storage::{tensor_type, Data, DataMut, Owned};
use crate::vector::Vector;

/// A general 3x3 tensor stored row-major.
///
/// # Example
///
/// ```
/// use mandel_tensors::{Dot, RankTwo, Vector};
///
/// let a = RankTwo::from_rows([[0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
/// let v = Vector::new([1.0, 2.0, 3.0]);
/// assert_eq!(a.dot(&v), Vector::new([2.0, 3.0, 1.0]));
/// assert_eq!(a.trace(), 0.0);
/// ```
pub struct RankTwo<D: Data = Owned> {
    data: D,
}

tensor_type!(RankTwo, 9);

impl RankTwo {
    /// Construct from rows `[[A00, A01, A02], ...]`.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let mut data = [0.0; 9];
        for i in 0..3 {
            data[3 * i..3 * i + 3].copy_from_slice(&rows[i]);
        }
        Self::new(data)
    }

    /// The identity tensor.
    pub fn id() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }
}

impl<D: Data> RankTwo<D> {
    /// Deep copy; the full class is its own promotion target.
    pub fn to_full(&self) -> RankTwo {
        self.to_owned()
    }

    /// Symmetric part, `(A + A^T) / 2`, projected into Mandel storage.
    pub fn to_sym(&self) -> Symmetric {
        Symmetric::from_rank_two(self)
    }

    /// Antisymmetric part, `(A - A^T) / 2`, in axial storage.
    pub fn to_skew(&self) -> Skew {
        Skew::from_rank_two(self)
    }

    /// `A^T`.
    pub fn transpose(&self) -> RankTwo {
        let a = self.data();
        let mut out = [0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                out[3 * i + j] = a[3 * j + i];
            }
        }
        RankTwo::new(out)
    }

    /// `A00 + A11 + A22`.
    pub fn trace(&self) -> f64 {
        let a = self.data();
        a[0] + a[4] + a[8]
    }

    /// Determinant.
    pub fn det(&self) -> f64 {
        mat3_det(self.data())
    }

    /// Matrix inverse.
    ///
    /// # Errors
    ///
    /// `TensorError::SingularMatrix` if the determinant is zero or
    /// non-finite.
    pub fn inverse(&self) -> Result<RankTwo, TensorError> {
        Ok(RankTwo::new(mat3_inv(self.data())?))
    }

    /// Frobenius norm.
    pub fn norm(&self) -> f64 {
        dot_flat(self.data(), self.data()).sqrt()
    }
}

impl<D: Data> From<&Symmetric<D>> for RankTwo {
    fn from(s: &Symmetric<D>) -> Self {
        s.to_full()
    }
}

impl<D: Data> From<&Skew<D>> for RankTwo {
    fn from(w: &Skew<D>) -> Self {
        w.to_full()
    }
}

impl<D: Data> Index<(usize, usize)> for RankTwo<D> {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data()[3 * i + j]
    }
}

impl<D: DataMut> IndexMut<(usize, usize)> for RankTwo<D> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data_mut()[3 * i + j]
    }
}

impl<D: Data> fmt::Display for RankTwo<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.data();
        write!(
            f,
            "[[{}, {}, {}], [{}, {}, {}], [{}, {}, {}]]",
            a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8]
        )
    }
}

// Reduced-class sums with a full tensor accumulate through the
// expansion, so the target keeps its general storage.

impl<'r, D: DataMut, E: Data> AddAssign<&'r Symmetric<E>> for RankTwo<D> {
    fn add_assign(&mut self, other: &'r Symmetric<E>) {
        let full = sym_to_full(other.data());
        for (x, y) in self.data_mut().iter_mut().zip(full) {
            *x += y;
        }
    }
}

impl<'r, D: DataMut, E: Data> SubAssign<&'r Symmetric<E>> for RankTwo<D> {
    fn sub_assign(&mut self, other: &'r Symmetric<E>) {
        let full = sym_to_full(other.data());
        for (x, y) in self.data_mut().iter_mut().zip(full) {
            *x -= y;
        }
    }
}

impl<'r, D: DataMut, E: Data> AddAssign<&'r Skew<E>> for RankTwo<D> {
    fn add_assign(&mut self, other: &'r Skew<E>) {
        let full = skew_to_full(other.data());
        for (x, y) in self.data_mut().iter_mut().zip(full) {
            *x += y;
        }
    }
}

impl<'r, D: DataMut, E: Data> SubAssign<&'r Skew<E>> for RankTwo<D> {
    fn sub_assign(&mut self, other: &'r Skew<E>) {
        let full = skew_to_full(other.data());
        for (x, y) in self.data_mut().iter_mut().zip(full) {
            *x -= y;
        }
    }
}

impl<D: Data, E: Data> Dot<Vector<E>> for RankTwo<D> {
    type Output = Vector;

    fn dot(&self, rhs: &Vector<E>) -> Vector {
        Vector::new(mat3_vec(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for RankTwo<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(mat3_mul(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for RankTwo<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Symmetric<E>) -> RankTwo {
        RankTwo::new(mat3_mul(self.data(), &sym_to_full(rhs.data())))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for RankTwo<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Skew<E>) -> RankTwo {
        RankTwo::new(mat3_mul(self.data(), &skew_to_full(rhs.data())))
    }
}

impl<D: Data, E: Data> Contract<RankTwo<E>> for RankTwo<D> {
    fn contract(&self, rhs: &RankTwo<E>) -> f64 {
        dot_flat(self.data(), rhs.data())
    }
}

impl<D: Data, E: Data> Contract<Symmetric<E>> for RankTwo<D> {
    fn contract(&self, rhs: &Symmetric<E>) -> f64 {
        dot_flat(self.data(), &sym_to_full(rhs.data()))
    }
}

impl<D: Data, E: Data> Contract<Skew<E>> for RankTwo<D> {
    fn contract(&self, rhs: &Skew<E>) -> f64 {
        dot_flat(self.data(), &skew_to_full(rhs.data()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> RankTwo {
        RankTwo::from_rows([[2.0, 1.0, 0.0], [1.0, 3.0, -1.0], [0.0, -1.0, 4.0]])
    }

    #[test]
    fn test_from_rows_layout() {
        let a = sample();
        assert_eq!(a[(0, 1)], 1.0);
        assert_eq!(a[(2, 1)], -1.0);
        assert_eq!(a[(2, 2)], 4.0);
    }

    #[test]
    fn test_identity_dot() {
        let a = sample();
        let id = RankTwo::id();
        assert_eq!(&id * &a, a);
        assert_eq!(&a * &id, a);
    }

    #[test]
    fn test_transpose_trace() {
        let a = RankTwo::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let at = a.transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(at[(i, j)], a[(j, i)]);
            }
        }
        assert_eq!(a.trace(), 15.0);
    }

    #[test]
    fn test_inverse_round_trip() {
        let a = sample();
        let inv = a.inverse().unwrap();
        let prod = &a * &inv;
        let id = RankTwo::id();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(prod[(i, j)], id[(i, j)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_singular() {
        let a = RankTwo::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]);
        assert_eq!(a.inverse().unwrap_err(), TensorError::SingularMatrix);
    }

    #[test]
    fn test_contract() {
        let a = sample();
        assert_relative_eq!(a.contract(&a), a.norm() * a.norm(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_reduced_classes() {
        let s = Symmetric::id();
        assert_eq!(RankTwo::from(&s), RankTwo::id());
        let w = Skew::new([0.0, 0.0, -1.0]);
        let full = RankTwo::from(&w);
        assert_eq!(full[(0, 1)], 1.0);
        assert_eq!(full[(1, 0)], -1.0);
    }

    #[test]
    fn test_mixed_add_promotes() {
        let a = sample();
        let s = Symmetric::id();
        let sum = &a + &s;
        for i in 0..3 {
            let expected = a[(i, i)] + 1.0;
            assert_relative_eq!(sum[(i, i)], expected, epsilon = 1e-15);
        }
        assert_eq!(sum[(0, 1)], a[(0, 1)]);
    }
}
