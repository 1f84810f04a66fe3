//! Symmetric rank-2 tensors in Mandel notation.

use std::fmt;

use crate::error::TensorError;
use crate::linalg::{dot_flat, mat3_inv, mat3_mul, mat3_vec};
use crate::mandel::{
    full_to_sym, mandel_index, skew_to_full, sym_to_full, MANDEL_FACTORS,
};
use crate::ops::{Contract, Dot};
use crate::rank2::{RankTwo, Skew};
use crate::storage::{tensor_type, Data, DataMut, Owned};
use crate::vector::Vector;

/// A symmetric 3x3 tensor stored as 6 Mandel components.
///
/// Storage order is `(00, 11, 22, 12, 02, 01)` with the off-diagonal
/// slots scaled by `sqrt(2)`, so `dot_flat` of two stored buffers is the
/// full double contraction. [`Symmetric::get`] and [`Symmetric::set`]
/// speak in true tensor components and apply the scaling internally.
///
/// # Example
///
/// ```
/// use mandel_tensors::{Contract, Symmetric};
///
/// let mut s = Symmetric::zeros();
/// s.set(0, 0, 2.0);
/// s.set(0, 1, 3.0);
/// assert_eq!(s.get(1, 0), 3.0);
/// // 2*2 + 3*3 over each of the (0,1) and (1,0) slots.
/// assert!((s.contract(&s) - 22.0).abs() < 1e-12);
/// ```
pub struct Symmetric<D: Data = Owned> {
    data: D,
}

tensor_type!(Symmetric, 6);

impl Symmetric {
    /// The identity tensor.
    pub fn id() -> Self {
        Self::new([1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
    }

    /// Symmetric part of a general tensor, `(A + A^T) / 2`.
    pub fn from_rank_two<E: Data>(a: &RankTwo<E>) -> Self {
        Self::new(full_to_sym(a.data()))
    }
}

impl<D: Data> Symmetric<D> {
    /// Tensor component `S_ij`, unscaled.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let idx = mandel_index(i, j);
        self.data()[idx] / MANDEL_FACTORS[idx]
    }

    /// Expand to the full 9-component representation.
    pub fn to_full(&self) -> RankTwo {
        RankTwo::new(sym_to_full(self.data()))
    }

    /// `S00 + S11 + S22`.
    pub fn trace(&self) -> f64 {
        let s = self.data();
        s[0] + s[1] + s[2]
    }

    /// Deviatoric part, `S - tr(S)/3 * I`.
    pub fn dev(&self) -> Symmetric {
        let mut out = self.to_owned();
        let mean = self.trace() / 3.0;
        for x in &mut out.data_mut()[..3] {
            *x -= mean;
        }
        out
    }

    /// A symmetric tensor is its own transpose.
    pub fn transpose(&self) -> Symmetric {
        self.to_owned()
    }

    /// Matrix inverse; symmetry is preserved.
    ///
    /// # Errors
    ///
    /// `TensorError::SingularMatrix` if the determinant is zero or
    /// non-finite.
    pub fn inverse(&self) -> Result<Symmetric, TensorError> {
        let inv = mat3_inv(&sym_to_full(self.data()))?;
        Ok(Symmetric::new(full_to_sym(&inv)))
    }

    /// Frobenius norm of the represented tensor.
    pub fn norm(&self) -> f64 {
        dot_flat(self.data(), self.data()).sqrt()
    }
}

impl<D: DataMut> Symmetric<D> {
    /// Set tensor component `S_ij` (and `S_ji`), unscaled.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = mandel_index(i, j);
        self.data_mut()[idx] = MANDEL_FACTORS[idx] * value;
    }
}

impl<D: Data> fmt::Display for Symmetric<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.data();
        write!(
            f,
            "Symmetric[{}, {}, {}, {}, {}, {}]",
            s[0], s[1], s[2], s[3], s[4], s[5]
        )
    }
}

impl<D: Data, E: Data> Dot<Vector<E>> for Symmetric<D> {
    type Output = Vector;

    fn dot(&self, rhs: &Vector<E>) -> Vector {
        Vector::new(mat3_vec(&sym_to_full(self.data()), rhs.data()))
    }
}

/// Symmetrized product `(S1 S2 + S2 S1) / 2` of two symmetric tensors.
///
/// The plain product of two symmetric tensors is not symmetric unless
/// they commute; this impl keeps the closed form used throughout the
/// mechanics update equations.
impl<D: Data, E: Data> Dot<Symmetric<E>> for Symmetric<D> {
    type Output = Symmetric;

    fn dot(&self, rhs: &Symmetric<E>) -> Symmetric {
        let prod = mat3_mul(&sym_to_full(self.data()), &sym_to_full(rhs.data()));
        Symmetric::new(full_to_sym(&prod))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for Symmetric<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(mat3_mul(&sym_to_full(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for Symmetric<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Skew<E>) -> RankTwo {
        RankTwo::new(mat3_mul(&sym_to_full(self.data()), &skew_to_full(rhs.data())))
    }
}

impl<D: Data, E: Data> Contract<Symmetric<E>> for Symmetric<D> {
    fn contract(&self, rhs: &Symmetric<E>) -> f64 {
        dot_flat(self.data(), rhs.data())
    }
}

impl<D: Data, E: Data> Contract<RankTwo<E>> for Symmetric<D> {
    fn contract(&self, rhs: &RankTwo<E>) -> f64 {
        dot_flat(&sym_to_full(self.data()), rhs.data())
    }
}

/// A symmetric and an antisymmetric tensor are orthogonal.
impl<D: Data, E: Data> Contract<Skew<E>> for Symmetric<D> {
    fn contract(&self, _rhs: &Skew<E>) -> f64 {
        0.0
    }
}
