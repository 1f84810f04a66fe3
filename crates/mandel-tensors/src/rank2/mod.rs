//! Rank-2 tensors over 3-D space.
//!
//! Three storage classes cover the symmetries that show up in continuum
//! mechanics:
//!
//! - [`RankTwo`] — a general 3x3 tensor, 9 components,
//! - [`Symmetric`] — a symmetric tensor in Mandel notation, 6 components,
//! - [`Skew`] — an antisymmetric tensor in axial form, 3 components.
//!
//! Operations between two values of the same class stay in that class
//! whenever the result provably keeps the symmetry; mixed-class sums and
//! products promote to [`RankTwo`].

mod full;
mod skew;
mod symmetric;

pub use full::RankTwo;
pub use skew::Skew;
pub use symmetric::Symmetric;

use crate::storage::Data;

// Mixed-class sums lose the operands' symmetry in general, so they
// promote to the full representation.
macro_rules! impl_promoting_add_sub {
    ($($lhs:ident + $rhs:ident),* $(,)?) => {
        $(
            impl<'a, 'b, D: Data, E: Data> std::ops::Add<&'b $rhs<E>> for &'a $lhs<D> {
                type Output = RankTwo;

                fn add(self, rhs: &'b $rhs<E>) -> RankTwo {
                    &self.to_full() + &rhs.to_full()
                }
            }

            impl<'a, 'b, D: Data, E: Data> std::ops::Sub<&'b $rhs<E>> for &'a $lhs<D> {
                type Output = RankTwo;

                fn sub(self, rhs: &'b $rhs<E>) -> RankTwo {
                    &self.to_full() - &rhs.to_full()
                }
            }
        )*
    };
}

impl_promoting_add_sub!(
    RankTwo + Symmetric,
    RankTwo + Skew,
    Symmetric + RankTwo,
    Symmetric + Skew,
    Skew + RankTwo,
    Skew + Symmetric,
);
