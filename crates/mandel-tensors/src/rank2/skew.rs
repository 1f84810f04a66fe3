//! Antisymmetric rank-2 tensors in axial form.

use std::fmt;

use crate::linalg::{dot_flat, mat3_mul, mat3_vec};
use crate::mandel::{axial_coeff, axial_index, full_to_skew, skew_to_full, sym_to_full};
use crate::ops::{Contract, Dot};
use crate::rank2::{RankTwo, Symmetric};
use crate::storage::{tensor_type, Data, DataMut, Owned};
use crate::vector::Vector;

/// An antisymmetric 3x3 tensor stored as 3 axial components
/// `(-W12, W02, -W01)`.
///
/// With this sign convention `W v` equals the cross product of the
/// stored axial vector with `v`, which is the form spin tensors take in
/// the kinematics of large rotations.
///
/// # Example
///
/// ```
/// use mandel_tensors::{Dot, Skew, Vector};
///
/// let w = Skew::new([0.0, 0.0, 1.0]);
/// let v = Vector::new([1.0, 0.0, 0.0]);
/// assert_eq!(w.dot(&v), Vector::new([0.0, 1.0, 0.0]));
/// ```
pub struct Skew<D: Data = Owned> {
    data: D,
}

tensor_type!(Skew, 3);

impl Skew {
    /// Antisymmetric part of a general tensor, `(A - A^T) / 2`.
    pub fn from_rank_two<E: Data>(a: &RankTwo<E>) -> Self {
        Self::new(full_to_skew(a.data()))
    }
}

impl<D: Data> Skew<D> {
    /// Tensor component `W_ij`; zero on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        axial_coeff(i, j) * self.data()[axial_index(i, j)]
    }

    /// Expand to the full 9-component representation.
    pub fn to_full(&self) -> RankTwo {
        RankTwo::new(skew_to_full(self.data()))
    }

    /// `W^T = -W`.
    pub fn transpose(&self) -> Skew {
        -self
    }

    /// Frobenius norm of the represented tensor.
    pub fn norm(&self) -> f64 {
        (2.0 * dot_flat(self.data(), self.data())).sqrt()
    }
}

impl<D: DataMut> Skew<D> {
    /// Set tensor component `W_ij` (and `W_ji = -W_ij`).
    ///
    /// # Panics
    ///
    /// If `i == j`; an antisymmetric tensor has no diagonal freedom.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert_ne!(i, j, "antisymmetric tensors are zero on the diagonal");
        self.data_mut()[axial_index(i, j)] = axial_coeff(i, j) * value;
    }
}

impl<D: Data> fmt::Display for Skew<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.data();
        write!(f, "Skew[{}, {}, {}]", w[0], w[1], w[2])
    }
}

/// `W v`, the cross product of the axial vector with `v`.
impl<D: Data, E: Data> Dot<Vector<E>> for Skew<D> {
    type Output = Vector;

    fn dot(&self, rhs: &Vector<E>) -> Vector {
        Vector::new(mat3_vec(&skew_to_full(self.data()), rhs.data()))
    }
}

/// Antisymmetric projection of `W1 W2`.
///
/// The plain product of two antisymmetric tensors has a symmetric part;
/// this impl keeps the closed form, discarding it.
impl<D: Data, E: Data> Dot<Skew<E>> for Skew<D> {
    type Output = Skew;

    fn dot(&self, rhs: &Skew<E>) -> Skew {
        let prod = mat3_mul(&skew_to_full(self.data()), &skew_to_full(rhs.data()));
        Skew::new(full_to_skew(&prod))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for Skew<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(mat3_mul(&skew_to_full(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for Skew<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Symmetric<E>) -> RankTwo {
        RankTwo::new(mat3_mul(&skew_to_full(self.data()), &sym_to_full(rhs.data())))
    }
}

impl<D: Data, E: Data> Contract<Skew<E>> for Skew<D> {
    fn contract(&self, rhs: &Skew<E>) -> f64 {
        // Each axial slot stands for an (i, j)/(j, i) pair; the signs
        // cancel, the pair doubles.
        2.0 * dot_flat(self.data(), rhs.data())
    }
}

impl<D: Data, E: Data> Contract<RankTwo<E>> for Skew<D> {
    fn contract(&self, rhs: &RankTwo<E>) -> f64 {
        dot_flat(&skew_to_full(self.data()), rhs.data())
    }
}

/// An antisymmetric and a symmetric tensor are orthogonal.
impl<D: Data, E: Data> Contract<Symmetric<E>> for Skew<D> {
    fn contract(&self, _rhs: &Symmetric<E>) -> f64 {
        0.0
    }
}
