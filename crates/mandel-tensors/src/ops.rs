//! The named-method algebra surface.
//!
//! [`Dot`] is the single-index contraction (matrix product against a
//! vector or another tensor); its output type encodes the symmetry
//! promotion rules, so every class pair produces the most specific
//! class the algebra guarantees. [`Contract`] is the full double
//! contraction down to a scalar.
//!
//! `*` between tensor references is sugar for `dot`, mirroring the
//! conventional operator notation for tensor products.

use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::rank4::{RankFour, SkewSym, SymSkew, SymSym};
use crate::storage::Data;
use crate::vector::Vector;

/// Single contraction between two tensor values.
///
/// The output type is the most specific symmetry class the operand
/// classes guarantee; pairs whose product has no representable symmetry
/// promote to the full representation.
pub trait Dot<Rhs: ?Sized> {
    type Output;

    fn dot(&self, rhs: &Rhs) -> Self::Output;
}

/// Full double contraction down to a scalar.
///
/// For reduced operands this is evaluated in Mandel form, so the result
/// equals the true tensor double contraction of the represented 3x3
/// tensors.
pub trait Contract<Rhs: ?Sized> {
    fn contract(&self, rhs: &Rhs) -> f64;
}

macro_rules! impl_mul_as_dot {
    ($($lhs:ident * $rhs:ident),* $(,)?) => {
        $(
            impl<'a, 'b, D: Data, E: Data> std::ops::Mul<&'b $rhs<E>> for &'a $lhs<D>
            where
                $lhs<D>: Dot<$rhs<E>>,
            {
                type Output = <$lhs<D> as Dot<$rhs<E>>>::Output;

                fn mul(self, rhs: &'b $rhs<E>) -> Self::Output {
                    self.dot(rhs)
                }
            }
        )*
    };
}

impl_mul_as_dot!(
    // Rank 2 against vectors, both sides.
    Vector * RankTwo,
    Vector * Symmetric,
    Vector * Skew,
    RankTwo * Vector,
    Symmetric * Vector,
    Skew * Vector,
    // Rank 2 against rank 2.
    RankTwo * RankTwo,
    RankTwo * Symmetric,
    RankTwo * Skew,
    Symmetric * RankTwo,
    Symmetric * Symmetric,
    Symmetric * Skew,
    Skew * RankTwo,
    Skew * Symmetric,
    Skew * Skew,
    // Rank 4 against rank 4.
    RankFour * RankFour,
    RankFour * SymSym,
    RankFour * SymSkew,
    RankFour * SkewSym,
    SymSym * RankFour,
    SymSym * SymSym,
    SymSym * SymSkew,
    SymSym * SkewSym,
    SymSkew * RankFour,
    SymSkew * SymSym,
    SymSkew * SymSkew,
    SymSkew * SkewSym,
    SkewSym * RankFour,
    SkewSym * SymSym,
    SkewSym * SymSkew,
    SkewSym * SkewSym,
    // Rank 4 against rank 2.
    RankFour * RankTwo,
    RankFour * Symmetric,
    RankFour * Skew,
    SymSym * RankTwo,
    SymSym * Symmetric,
    SymSym * Skew,
    SymSkew * RankTwo,
    SymSkew * Symmetric,
    SymSkew * Skew,
    SkewSym * RankTwo,
    SkewSym * Symmetric,
    SkewSym * Skew,
);
