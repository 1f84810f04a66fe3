//! Fixed-size tensor algebra for 3-D continuum mechanics.
//!
//! Eight tensor classes, each a fixed number of `f64` components over a
//! pluggable storage backend:
//!
//! - [`Vector`] — 3 components,
//! - [`RankTwo`], [`Symmetric`], [`Skew`] — general, symmetric and
//!   antisymmetric rank-2 tensors (9, 6 and 3 components),
//! - [`RankFour`], [`SymSym`], [`SymSkew`], [`SkewSym`] — general and
//!   minor-symmetry-reduced rank-4 tensors (81, 36, 18 and 18
//!   components).
//!
//! The reduced classes use Mandel notation: symmetric pairs are stored
//! in the order `(00, 11, 22, 12, 02, 01)` with `sqrt(2)`-scaled
//! off-diagonals, antisymmetric pairs as axial triples. The scaling is
//! chosen so that the contractions that matter in constitutive updates
//! (stiffness times strain, operator composition, double contractions)
//! are plain products of the stored arrays.
//!
//! Products are written `a.dot(&b)` or `&a * &b`; the [`Dot`] impl for
//! each class pair fixes the result class, staying reduced when the
//! symmetry provably survives and promoting to the full representation
//! otherwise. [`AnyTensor`] offers the same table for operands chosen at
//! runtime.
//!
//! Every class can also wrap caller-owned memory as a view
//! (`view`/`view_mut`) instead of allocating, for in-place work on
//! externally managed state blocks.
//!
//! # Example
//!
//! Isotropic linear elasticity, assembled from the hydrostatic and
//! deviatoric projectors:
//!
//! ```
//! use mandel_tensors::{Dot, SymSym, Symmetric};
//!
//! let (bulk, shear) = (150.0e3, 75.0e3);
//! let id = Symmetric::id();
//! let vol = &SymSym::douter(&id, &id) * (1.0 / 3.0);
//! let dev = &SymSym::id() - &vol;
//! let stiffness = &(&vol * (3.0 * bulk)) + &(&dev * (2.0 * shear));
//!
//! let mut strain = Symmetric::zeros();
//! strain.set(0, 0, 1.0e-3);
//! let stress = stiffness.dot(&strain);
//! let axial = (bulk + 4.0 * shear / 3.0) * 1.0e-3;
//! assert!((stress.get(0, 0) - axial).abs() < 1e-9);
//! ```

pub mod dispatch;
pub mod error;
mod linalg;
mod mandel;
pub mod ops;
pub mod rank2;
pub mod rank4;
pub mod special;
pub mod storage;
pub mod vector;

pub use dispatch::AnyTensor;
pub use error::TensorError;
pub use ops::{Contract, Dot};
pub use rank2::{RankTwo, Skew, Symmetric};
pub use rank4::{RankFour, SkewSym, SymSkew, SymSym};
pub use special::{skewsym_sym_commutator, symsym_skew_commutator, symsym_sym_skew_part};
pub use storage::{Data, DataMut, Owned};
pub use vector::Vector;
