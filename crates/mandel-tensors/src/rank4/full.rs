//! General rank-4 tensors.

use std::ops::{Index, IndexMut};

use crate::linalg::{contract_42, contract_44};
use crate::mandel::{
    full4_to_mandel, full4_to_skewsym, full4_to_symskew, mandel_to_full4, skew_to_full,
    skewsym_to_full4, sym_to_full, symskew_to_full4, t4,
};
use crate::ops::Dot;
use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::rank4::{SkewSym, SymSkew, SymSym};
use crate::storage::{tensor_type, Data, DataMut, Owned};

/// A general 3x3x3x3 tensor stored row-major, 81 components.
///
/// This is the promotion target for every rank-4 pairing whose result
/// has no guaranteed minor symmetry.
pub struct RankFour<D: Data = Owned> {
    data: D,
}

tensor_type!(RankFour, 81);

impl RankFour {
    /// Construct from a nested component array `a[i][j][k][l]`.
    pub fn from_array(a: [[[[f64; 3]; 3]; 3]; 3]) -> Self {
        let mut data = [0.0; 81];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        data[t4(i, j, k, l)] = a[i][j][k][l];
                    }
                }
            }
        }
        Self::new(data)
    }

    /// The rank-4 identity on general rank-2 tensors,
    /// `I_ijkl = delta_ik delta_jl`.
    pub fn id() -> Self {
        let mut data = [0.0; 81];
        for i in 0..3 {
            for j in 0..3 {
                data[t4(i, j, i, j)] = 1.0;
            }
        }
        Self::new(data)
    }
}

impl<D: Data> RankFour<D> {
    /// Project onto the minor-symmetric class, averaging over both index
    /// pair symmetrizations.
    pub fn to_sym(&self) -> SymSym {
        SymSym::new(full4_to_mandel(self.data()))
    }

    /// Project onto the symmetric-antisymmetric class.
    pub fn to_symskew(&self) -> SymSkew {
        SymSkew::new(full4_to_symskew(self.data()))
    }

    /// Project onto the antisymmetric-symmetric class.
    pub fn to_skewsym(&self) -> SkewSym {
        SkewSym::new(full4_to_skewsym(self.data()))
    }
}

impl<D: Data> Index<(usize, usize, usize, usize)> for RankFour<D> {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j, k, l): (usize, usize, usize, usize)) -> &f64 {
        &self.data()[t4(i, j, k, l)]
    }
}

impl<D: DataMut> IndexMut<(usize, usize, usize, usize)> for RankFour<D> {
    #[inline]
    fn index_mut(&mut self, (i, j, k, l): (usize, usize, usize, usize)) -> &mut f64 {
        &mut self.data_mut()[t4(i, j, k, l)]
    }
}

impl<D: Data, E: Data> Dot<RankFour<E>> for RankFour<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &RankFour<E>) -> RankFour {
        RankFour::new(contract_44(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<SymSym<E>> for RankFour<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSym<E>) -> RankFour {
        RankFour::new(contract_44(self.data(), &mandel_to_full4(rhs.data())))
    }
}

impl<D: Data, E: Data> Dot<SymSkew<E>> for RankFour<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSkew<E>) -> RankFour {
        RankFour::new(contract_44(self.data(), &symskew_to_full4(rhs.data())))
    }
}

impl<D: Data, E: Data> Dot<SkewSym<E>> for RankFour<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SkewSym<E>) -> RankFour {
        RankFour::new(contract_44(self.data(), &skewsym_to_full4(rhs.data())))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for RankFour<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(contract_42(self.data(), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for RankFour<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Symmetric<E>) -> RankTwo {
        RankTwo::new(contract_42(self.data(), &sym_to_full(rhs.data())))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for RankFour<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Skew<E>) -> RankTwo {
        RankTwo::new(contract_42(self.data(), &skew_to_full(rhs.data())))
    }
}
