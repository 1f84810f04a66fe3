//! Rank-4 tensors over 3-D space.
//!
//! Four storage classes, mirroring the rank-2 split per index pair:
//!
//! - [`RankFour`] — a general 3x3x3x3 tensor, 81 components,
//! - [`SymSym`] — minor-symmetric in both pairs, a Mandel 6x6 matrix,
//! - [`SymSkew`] — symmetric first pair, antisymmetric second, 6x3,
//! - [`SkewSym`] — antisymmetric first pair, symmetric second, 3x6.
//!
//! The reduced classes are scaled so that the contractions that stay
//! reduced (`SymSym` against `SymSym` or [`Symmetric`]) are plain matrix
//! products of the stored arrays; every other pairing expands to the
//! full representation.
//!
//! [`Symmetric`]: crate::rank2::Symmetric

mod full;
mod skewsym;
mod symskew;
mod symsym;

pub use full::RankFour;
pub use skewsym::SkewSym;
pub use symskew::SymSkew;
pub use symsym::SymSym;
