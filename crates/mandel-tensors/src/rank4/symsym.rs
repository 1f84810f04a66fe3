//! Minor-symmetric rank-4 tensors as Mandel 6x6 matrices.

use std::ops::{Index, IndexMut};

use crate::linalg::{contract_42, contract_44, mat6_mul, mat6_vec};
use crate::mandel::{mandel_to_full4, skew_to_full, skewsym_to_full4, symskew_to_full4};
use crate::ops::Dot;
use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::rank4::{RankFour, SkewSym, SymSkew};
use crate::storage::{tensor_type, Data, DataMut, Owned};

/// A rank-4 tensor symmetric in both index pairs, stored as a row-major
/// 6x6 Mandel matrix.
///
/// This is the class of elastic stiffness and algorithmic tangent
/// operators. With the Mandel scaling, applying the operator to a
/// [`Symmetric`] tensor and composing two operators are plain matrix
/// products of the stored arrays.
///
/// # Example
///
/// ```
/// use mandel_tensors::{Dot, Symmetric, SymSym};
///
/// let id = SymSym::id();
/// let mut e = Symmetric::zeros();
/// e.set(0, 0, 0.01);
/// e.set(0, 1, 0.002);
/// assert_eq!(id.dot(&e), e);
/// ```
pub struct SymSym<D: Data = Owned> {
    data: D,
}

tensor_type!(SymSym, 36);

impl SymSym {
    /// Construct from the rows of the Mandel matrix.
    pub fn from_rows(rows: [[f64; 6]; 6]) -> Self {
        let mut data = [0.0; 36];
        for i in 0..6 {
            data[6 * i..6 * i + 6].copy_from_slice(&rows[i]);
        }
        Self::new(data)
    }

    /// The identity on symmetric tensors (the symmetrizer in full form).
    pub fn id() -> Self {
        let mut data = [0.0; 36];
        for i in 0..6 {
            data[6 * i + i] = 1.0;
        }
        Self::new(data)
    }

    /// Outer product `C_ijkl = a_ij b_kl` of two symmetric tensors.
    ///
    /// In Mandel storage this is exactly the outer product of the stored
    /// 6-vectors, so `douter(id, id) / 3` is the hydrostatic projector.
    pub fn douter<D: Data, E: Data>(a: &Symmetric<D>, b: &Symmetric<E>) -> SymSym {
        let mut data = [0.0; 36];
        for i in 0..6 {
            for j in 0..6 {
                data[6 * i + j] = a.data()[i] * b.data()[j];
            }
        }
        SymSym::new(data)
    }
}

impl<D: Data> SymSym<D> {
    /// Expand to the full 81-component representation.
    pub fn to_full(&self) -> RankFour {
        RankFour::new(mandel_to_full4(self.data()))
    }
}

/// Stored Mandel matrix entry at `(row, col)`; both indices run 0..6.
impl<D: Data> Index<(usize, usize)> for SymSym<D> {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data()[6 * i + j]
    }
}

impl<D: DataMut> IndexMut<(usize, usize)> for SymSym<D> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data_mut()[6 * i + j]
    }
}

/// Composition of two minor-symmetric operators stays minor-symmetric.
impl<D: Data, E: Data> Dot<SymSym<E>> for SymSym<D> {
    type Output = SymSym;

    fn dot(&self, rhs: &SymSym<E>) -> SymSym {
        SymSym::new(mat6_mul(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for SymSym<D> {
    type Output = Symmetric;

    fn dot(&self, rhs: &Symmetric<E>) -> Symmetric {
        Symmetric::new(mat6_vec(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<RankFour<E>> for SymSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &RankFour<E>) -> RankFour {
        RankFour::new(contract_44(&mandel_to_full4(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<SymSkew<E>> for SymSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSkew<E>) -> RankFour {
        RankFour::new(contract_44(
            &mandel_to_full4(self.data()),
            &symskew_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<SkewSym<E>> for SymSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SkewSym<E>) -> RankFour {
        RankFour::new(contract_44(
            &mandel_to_full4(self.data()),
            &skewsym_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for SymSym<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(contract_42(&mandel_to_full4(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for SymSym<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Skew<E>) -> RankTwo {
        RankTwo::new(contract_42(
            &mandel_to_full4(self.data()),
            &skew_to_full(rhs.data()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Contract;
    use approx::assert_relative_eq;

    fn sample_sym() -> Symmetric {
        let mut s = Symmetric::zeros();
        s.set(0, 0, 1.0);
        s.set(1, 1, -2.0);
        s.set(2, 2, 0.5);
        s.set(1, 2, 3.0);
        s.set(0, 2, -1.0);
        s.set(0, 1, 2.0);
        s
    }

    #[test]
    fn test_identity_application() {
        let s = sample_sym();
        let id = SymSym::id();
        assert_eq!(id.dot(&s), s);
        assert_eq!(id.dot(&id), id);
    }

    #[test]
    fn test_douter_contraction() {
        // douter(a, b) : c == a * (b : c)
        let a = sample_sym();
        let mut b = Symmetric::zeros();
        b.set(0, 0, 2.0);
        b.set(1, 2, -1.0);
        let mut c = Symmetric::zeros();
        c.set(1, 1, 4.0);
        c.set(1, 2, 0.5);
        let applied = SymSym::douter(&a, &b).dot(&c);
        let expect = &a * b.contract(&c);
        for idx in 0..6 {
            assert_relative_eq!(applied.data()[idx], expect.data()[idx], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reduced_apply_matches_full() {
        let mut m = SymSym::zeros();
        for (idx, x) in m.data_mut().iter_mut().enumerate() {
            *x = (idx as f64) * 0.23 - 4.0;
        }
        let s = sample_sym();
        let reduced = m.dot(&s).to_full();
        let full = m.to_full().dot(&s);
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(reduced[(i, j)], full[(i, j)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_reduced_compose_matches_full() {
        let mut a = SymSym::zeros();
        let mut b = SymSym::zeros();
        for (idx, x) in a.data_mut().iter_mut().enumerate() {
            *x = (idx as f64) * 0.11 - 2.0;
        }
        for (idx, x) in b.data_mut().iter_mut().enumerate() {
            *x = (idx as f64) * -0.07 + 1.0;
        }
        let reduced = a.dot(&b).to_full();
        let full = a.to_full().dot(&b.to_full());
        for idx in 0..81 {
            assert_relative_eq!(reduced.data()[idx], full.data()[idx], epsilon = 1e-11);
        }
    }
}
