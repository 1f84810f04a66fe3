//! Rank-4 tensors symmetric in the first pair, antisymmetric in the
//! second, stored as 6x3 matrices.

use std::ops::{Index, IndexMut};

use crate::linalg::{contract_42, contract_44};
use crate::mandel::{
    mandel_to_full4, skew_to_full, skewsym_to_full4, sym_to_full, symskew_to_full4,
};
use crate::ops::Dot;
use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::rank4::{RankFour, SkewSym, SymSym};
use crate::storage::{tensor_type, Data, DataMut, Owned};

/// A rank-4 tensor symmetric in `(i, j)` and antisymmetric in `(k, l)`,
/// stored as a row-major 6x3 matrix: Mandel rows, axial columns.
///
/// This is the class of the derivative of a symmetric tensor with
/// respect to a spin, as in the rotational part of crystal plasticity
/// tangents.
pub struct SymSkew<D: Data = Owned> {
    data: D,
}

tensor_type!(SymSkew, 18);

impl SymSkew {
    /// Construct from the rows of the stored 6x3 matrix.
    pub fn from_rows(rows: [[f64; 3]; 6]) -> Self {
        let mut data = [0.0; 18];
        for i in 0..6 {
            data[3 * i..3 * i + 3].copy_from_slice(&rows[i]);
        }
        Self::new(data)
    }
}

impl<D: Data> SymSkew<D> {
    /// Expand to the full 81-component representation.
    pub fn to_full(&self) -> RankFour {
        RankFour::new(symskew_to_full4(self.data()))
    }
}

/// Stored matrix entry at `(mandel_row, axial_col)`.
impl<D: Data> Index<(usize, usize)> for SymSkew<D> {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data()[3 * i + j]
    }
}

impl<D: DataMut> IndexMut<(usize, usize)> for SymSkew<D> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data_mut()[3 * i + j]
    }
}

// Every pairing loses one of the minor symmetries, so all products go
// through the full representation.

impl<D: Data, E: Data> Dot<RankFour<E>> for SymSkew<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &RankFour<E>) -> RankFour {
        RankFour::new(contract_44(&symskew_to_full4(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<SymSym<E>> for SymSkew<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSym<E>) -> RankFour {
        RankFour::new(contract_44(
            &symskew_to_full4(self.data()),
            &mandel_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<SymSkew<E>> for SymSkew<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SymSkew<E>) -> RankFour {
        RankFour::new(contract_44(
            &symskew_to_full4(self.data()),
            &symskew_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<SkewSym<E>> for SymSkew<D> {
    type Output = RankFour;

    fn dot(&self, rhs: &SkewSym<E>) -> RankFour {
        RankFour::new(contract_44(
            &symskew_to_full4(self.data()),
            &skewsym_to_full4(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<RankTwo<E>> for SymSkew<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &RankTwo<E>) -> RankTwo {
        RankTwo::new(contract_42(&symskew_to_full4(self.data()), rhs.data()))
    }
}

impl<D: Data, E: Data> Dot<Symmetric<E>> for SymSkew<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Symmetric<E>) -> RankTwo {
        RankTwo::new(contract_42(
            &symskew_to_full4(self.data()),
            &sym_to_full(rhs.data()),
        ))
    }
}

impl<D: Data, E: Data> Dot<Skew<E>> for SymSkew<D> {
    type Output = RankTwo;

    fn dot(&self, rhs: &Skew<E>) -> RankTwo {
        RankTwo::new(contract_42(
            &symskew_to_full4(self.data()),
            &skew_to_full(rhs.data()),
        ))
    }
}
