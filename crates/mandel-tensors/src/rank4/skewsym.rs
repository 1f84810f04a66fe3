//! Rank-4 tensors antisymmetric in the first pair, symmetric in the
//! second, stored as 3x6 matrices.

use std::ops::{Index, IndexMut};

use crate::linalg::{contract_42, contract_44};
use crate::mandel::{
    mandel_to_full4, skew_to_full, skewsym_to_full4, sym_to_full, symskew_to_full4,
};
use crate::ops::Dot;
use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::rank4::{RankFour, SymSkew, SymSym};
use crate::storage::{tensor_type, Data, DataMut, Owned};

/// A rank-4 tensor antisymmetric in `(i, j)` and symmetric in `(k, l)`,
/// stored as a row-major 3x6 matrix: axial rows, Mandel columns.
///
/// This is the class of the derivative of a spin with respect to a
/// symmetric tensor, the transpose layout of [`SymSkew`].
pub struct SkewSym<D: Data = Owned> {
    data: D,
}

tensor_type!(SkewSym, 18);

impl SkewSym {
    /// Construct from the rows of the stored 3x6 matrix.
    pub fn from_rows(rows: [[f64; 6]; 3]) -> Self {
        let mut data = [0.0; 18];
        for i in 0..3 {
            data[6 * i..6 * i + 6].copy_from_slice(&rows[i]);
        }
        Self::new(data)
    }

    /// Outer product `C_ijkl = w_ij s_kl` of an antisymmetric and a
    /// symmetric tensor.
    ///
    /// In the stored convention this is the outer product of the axial
    /// and Mandel vectors.
    pub fn douter<D: Data, E: Data>(w: &Skew<D>, s: &Symmetric<E>) -> SkewSym {
        let mut data = [0.0; 18];
        for i in 0..3 {
            for j in 0..6 {
                data[6 * i + j] = w.data()[i] * s.data()[j];
            }
        }
        SkewSym::new(data)
    }
}

impl<D: Data> SkewSym<D> {
    /// Expand to the full 81-component representation.
    pub fn to_full(&self) -> RankFour {
        RankFour::new(skewsym_to_full4(self.data()))
    }
}

/// Stored matrix entry at `(axial_row, mandel_col)`.
impl<D: Data> Index<(usize, usize)> for SkewSym<D> {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data()[6 * i + j]
    }
}

impl<D: DataMut> IndexMut<(usize, usize)> for SkewSym<D> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data_mut()[6 * i + j]
    }
}

// As for the transpose layout, no pairing keeps both minor symmetries,
// so all products go through the full representation.

impl<D: Data, E: Data> Dot<RankFour<E>> for SkewSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &RankFour<E>) -> RankFour {
        RankFour::new(contract_44(&skewsym_to_full4(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<SymSym<E>> for SkewSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSym<E>) -> RankFour {
        RankFour::new(contract_44(
            &skewsym_to_full4(self.data()),
            &mandel_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<SymSkew<E>> for SkewSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSkew<E>) -> RankFour {
        RankFour::new(contract_44(
            &skewsym_to_full4(self.data()),
            &symskew_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<SkewSym<E>> for SkewSym<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SkewSym<E>) -> RankFour {
        RankFour::new(contract_44(
            &skewsym_to_full4(self.data()),
            &skewsym_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for SkewSym<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(contract_42(&skewsym_to_full4(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for SkewSym<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Symmetric<E>) -> RankTwo {
        RankTwo::new(contract_42(
            &skewsym_to_full4(self.data()),
            &sym_to_full(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for SkewSym<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Skew<E>) -> RankTwo {
        RankTwo::new(contract_42(
            &skewsym_to_full4(self.data()),
            &skew_to_full(rhs.data()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mandel::t4;
    use crate::ops::Contract;
    use approx::assert_relative_eq;

    fn sample() -> SkewSym {
        let mut n = SkewSym::zeros();
        for (idx, x) in n.data_mut().iter_mut().enumerate() {
            *x = (idx as f64) * -0.29 + 2.0;
        }
        n
    }

    #[test]
    fn test_expansion_symmetries() {
        let full = sample().to_full();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        assert_relative_eq!(
                            full.data()[t4(i, j, k, l)],
                            -full.data()[t4(j, i, k, l)],
                            epsilon = 1e-12
                        );
                        assert_relative_eq!(
                            full.data()[t4(i, j, k, l)],
                            full.data()[t4(i, j, l, k)],
                            epsilon = 1e-12
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply_to_symmetric_matches_stored_product() {
        // The stored matrix applied to the Mandel vector reproduces the
        // full contraction against the represented symmetric tensor.
        let n = sample();
        let mut s = Symmetric::zeros();
        s.set(0, 0, 1.0);
        s.set(1, 1, -0.5);
        s.set(0, 2, 2.0);
        let full = n.to_full().dot(&s);
        let w = Skew::from_rank_two(&full);
        for row in 0..3 {
            let mut acc = 0.0;
            for col in 0..6 {
                acc += n[(row, col)] * s.data()[col];
            }
            assert_relative_eq!(w.data()[row], acc, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_douter_contraction() {
        // douter(w, s) : e == w * (s : e)
        let w = Skew::new([1.0, -2.0, 0.5]);
        let mut s = Symmetric::zeros();
        s.set(0, 1, 3.0);
        s.set(2, 2, 1.0);
        let mut e = Symmetric::zeros();
        e.set(0, 1, -1.0);
        e.set(0, 0, 2.0);
        let applied = SkewSym::douter(&w, &s).dot(&e);
        let expect = (&w * s.contract(&e)).to_full();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(applied[(i, j)], expect[(i, j)], epsilon = 1e-12);
            }
        }
    }
}
