//! Runtime-tagged tensor values.
//!
//! [`AnyTensor`] is a closed sum over the eight concrete classes, for
//! callers that pick operands at runtime (drivers, interpreters, state
//! blocks holding heterogeneous tensors). Each operation matches on the
//! class pair and forwards to the statically typed impl, so the
//! promotion rules here are exactly the ones the [`Dot`](crate::Dot)
//! and operator tables encode; pairs with no defined result report
//! `TensorError::IncompatibleOperands` instead of being rejected at
//! compile time.

use crate::error::TensorError;
use crate::ops::{Contract, Dot};
use crate::rank2::{RankTwo, Skew, Symmetric};
use crate::rank4::{RankFour, SkewSym, SymSkew, SymSym};
use crate::storage::Owned;
use crate::vector::Vector;

/// A tensor of any of the eight classes, owning its storage.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyTensor {
    Vector(Vector),
    RankTwo(RankTwo),
    Symmetric(Symmetric),
    Skew(Skew),
    RankFour(RankFour),
    SymSym(SymSym),
    SymSkew(SymSkew),
    SkewSym(SkewSym),
}

impl AnyTensor {
    /// Human-readable class name, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyTensor::Vector(_) => "vector",
            AnyTensor::RankTwo(_) => "rank-two",
            AnyTensor::Symmetric(_) => "symmetric",
            AnyTensor::Skew(_) => "skew",
            AnyTensor::RankFour(_) => "rank-four",
            AnyTensor::SymSym(_) => "sym-sym",
            AnyTensor::SymSkew(_) => "sym-skew",
            AnyTensor::SkewSym(_) => "skew-sym",
        }
    }

    /// Number of stored components.
    pub fn size(&self) -> usize {
        match self {
            AnyTensor::Vector(_) => Vector::<Owned>::SIZE,
            AnyTensor::RankTwo(_) => RankTwo::<Owned>::SIZE,
            AnyTensor::Symmetric(_) => Symmetric::<Owned>::SIZE,
            AnyTensor::Skew(_) => Skew::<Owned>::SIZE,
            AnyTensor::RankFour(_) => RankFour::<Owned>::SIZE,
            AnyTensor::SymSym(_) => SymSym::<Owned>::SIZE,
            AnyTensor::SymSkew(_) => SymSkew::<Owned>::SIZE,
            AnyTensor::SkewSym(_) => SkewSym::<Owned>::SIZE,
        }
    }

    /// The flat component buffer in the class's storage convention.
    pub fn data(&self) -> &[f64] {
        match self {
            AnyTensor::Vector(t) => t.data(),
            AnyTensor::RankTwo(t) => t.data(),
            AnyTensor::Symmetric(t) => t.data(),
            AnyTensor::Skew(t) => t.data(),
            AnyTensor::RankFour(t) => t.data(),
            AnyTensor::SymSym(t) => t.data(),
            AnyTensor::SymSkew(t) => t.data(),
            AnyTensor::SkewSym(t) => t.data(),
        }
    }

    /// Sum of two tensors.
    ///
    /// Same-class sums stay in the class; mixed rank-2 sums promote to
    /// the full representation. Everything else is incompatible.
    pub fn add(&self, other: &AnyTensor) -> Result<AnyTensor, TensorError> {
        use AnyTensor::*;
        Ok(match (self, other) {
            (Vector(a), Vector(b)) => Vector(a + b),
            (RankTwo(a), RankTwo(b)) => RankTwo(a + b),
            (Symmetric(a), Symmetric(b)) => Symmetric(a + b),
            (Skew(a), Skew(b)) => Skew(a + b),
            (RankTwo(a), Symmetric(b)) => RankTwo(a + b),
            (RankTwo(a), Skew(b)) => RankTwo(a + b),
            (Symmetric(a), RankTwo(b)) => RankTwo(a + b),
            (Symmetric(a), Skew(b)) => RankTwo(a + b),
            (Skew(a), RankTwo(b)) => RankTwo(a + b),
            (Skew(a), Symmetric(b)) => RankTwo(a + b),
            (RankFour(a), RankFour(b)) => RankFour(a + b),
            (SymSym(a), SymSym(b)) => SymSym(a + b),
            (SymSkew(a), SymSkew(b)) => SymSkew(a + b),
            (SkewSym(a), SkewSym(b)) => SkewSym(a + b),
            _ => {
                return Err(TensorError::IncompatibleOperands {
                    op: "add",
                    lhs: self.kind(),
                    rhs: other.kind(),
                })
            }
        })
    }

    /// Difference of two tensors, with the same class rules as
    /// [`AnyTensor::add`].
    pub fn sub(&self, other: &AnyTensor) -> Result<AnyTensor, TensorError> {
        use AnyTensor::*;
        Ok(match (self, other) {
            (Vector(a), Vector(b)) => Vector(a - b),
            (RankTwo(a), RankTwo(b)) => RankTwo(a - b),
            (Symmetric(a), Symmetric(b)) => Symmetric(a - b),
            (Skew(a), Skew(b)) => Skew(a - b),
            (RankTwo(a), Symmetric(b)) => RankTwo(a - b),
            (RankTwo(a), Skew(b)) => RankTwo(a - b),
            (Symmetric(a), RankTwo(b)) => RankTwo(a - b),
            (Symmetric(a), Skew(b)) => RankTwo(a - b),
            (Skew(a), RankTwo(b)) => RankTwo(a - b),
            (Skew(a), Symmetric(b)) => RankTwo(a - b),
            (RankFour(a), RankFour(b)) => RankFour(a - b),
            (SymSym(a), SymSym(b)) => SymSym(a - b),
            (SymSkew(a), SymSkew(b)) => SymSkew(a - b),
            (SkewSym(a), SkewSym(b)) => SkewSym(a - b),
            _ => {
                return Err(TensorError::IncompatibleOperands {
                    op: "sub",
                    lhs: self.kind(),
                    rhs: other.kind(),
                })
            }
        })
    }

    /// Single contraction, with the class promotion rules of the
    /// [`Dot`] table.
    ///
    /// The vector-vector pairing is scalar-valued; use
    /// [`AnyTensor::contract`] for it.
    pub fn dot(&self, other: &AnyTensor) -> Result<AnyTensor, TensorError> {
        use AnyTensor::*;
        Ok(match (self, other) {
            // Rank 2 against vectors.
            (Vector(a), RankTwo(b)) => Vector(a.dot(b)),
            (Vector(a), Symmetric(b)) => Vector(a.dot(b)),
            (Vector(a), Skew(b)) => Vector(a.dot(b)),
            (RankTwo(a), Vector(b)) => Vector(a.dot(b)),
            (Symmetric(a), Vector(b)) => Vector(a.dot(b)),
            (Skew(a), Vector(b)) => Vector(a.dot(b)),
            // Rank 2 against rank 2.
            (RankTwo(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (RankTwo(a), Symmetric(b)) => RankTwo(a.dot(b)),
            (RankTwo(a), Skew(b)) => RankTwo(a.dot(b)),
            (Symmetric(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (Symmetric(a), Symmetric(b)) => Symmetric(a.dot(b)),
            (Symmetric(a), Skew(b)) => RankTwo(a.dot(b)),
            (Skew(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (Skew(a), Symmetric(b)) => RankTwo(a.dot(b)),
            (Skew(a), Skew(b)) => Skew(a.dot(b)),
            // Rank 4 against rank 4.
            (RankFour(a), RankFour(b)) => RankFour(a.dot(b)),
            (RankFour(a), SymSym(b)) => RankFour(a.dot(b)),
            (RankFour(a), SymSkew(b)) => RankFour(a.dot(b)),
            (RankFour(a), SkewSym(b)) => RankFour(a.dot(b)),
            (SymSym(a), RankFour(b)) => RankFour(a.dot(b)),
            (SymSym(a), SymSym(b)) => SymSym(a.dot(b)),
            (SymSym(a), SymSkew(b)) => RankFour(a.dot(b)),
            (SymSym(a), SkewSym(b)) => RankFour(a.dot(b)),
            (SymSkew(a), RankFour(b)) => RankFour(a.dot(b)),
            (SymSkew(a), SymSym(b)) => RankFour(a.dot(b)),
            (SymSkew(a), SymSkew(b)) => RankFour(a.dot(b)),
            (SymSkew(a), SkewSym(b)) => RankFour(a.dot(b)),
            (SkewSym(a), RankFour(b)) => RankFour(a.dot(b)),
            (SkewSym(a), SymSym(b)) => RankFour(a.dot(b)),
            (SkewSym(a), SymSkew(b)) => RankFour(a.dot(b)),
            (SkewSym(a), SkewSym(b)) => RankFour(a.dot(b)),
            // Rank 4 against rank 2.
            (RankFour(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (RankFour(a), Symmetric(b)) => RankTwo(a.dot(b)),
            (RankFour(a), Skew(b)) => RankTwo(a.dot(b)),
            (SymSym(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (SymSym(a), Symmetric(b)) => Symmetric(a.dot(b)),
            (SymSym(a), Skew(b)) => RankTwo(a.dot(b)),
            (SymSkew(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (SymSkew(a), Symmetric(b)) => RankTwo(a.dot(b)),
            (SymSkew(a), Skew(b)) => RankTwo(a.dot(b)),
            (SkewSym(a), RankTwo(b)) => RankTwo(a.dot(b)),
            (SkewSym(a), Symmetric(b)) => RankTwo(a.dot(b)),
            (SkewSym(a), Skew(b)) => RankTwo(a.dot(b)),
            _ => {
                return Err(TensorError::IncompatibleOperands {
                    op: "dot",
                    lhs: self.kind(),
                    rhs: other.kind(),
                })
            }
        })
    }

    /// Full contraction down to a scalar.
    pub fn contract(&self, other: &AnyTensor) -> Result<f64, TensorError> {
        use AnyTensor::*;
        Ok(match (self, other) {
            (Vector(a), Vector(b)) => a.dot(b),
            (RankTwo(a), RankTwo(b)) => a.contract(b),
            (RankTwo(a), Symmetric(b)) => a.contract(b),
            (RankTwo(a), Skew(b)) => a.contract(b),
            (Symmetric(a), RankTwo(b)) => a.contract(b),
            (Symmetric(a), Symmetric(b)) => a.contract(b),
            (Symmetric(a), Skew(b)) => a.contract(b),
            (Skew(a), RankTwo(b)) => a.contract(b),
            (Skew(a), Symmetric(b)) => a.contract(b),
            (Skew(a), Skew(b)) => a.contract(b),
            _ => {
                return Err(TensorError::IncompatibleOperands {
                    op: "contract",
                    lhs: self.kind(),
                    rhs: other.kind(),
                })
            }
        })
    }

    /// Multiply every component by `s`, staying in the class.
    pub fn scale(&self, s: f64) -> AnyTensor {
        match self {
            AnyTensor::Vector(t) => AnyTensor::Vector(t * s),
            AnyTensor::RankTwo(t) => AnyTensor::RankTwo(t * s),
            AnyTensor::Symmetric(t) => AnyTensor::Symmetric(t * s),
            AnyTensor::Skew(t) => AnyTensor::Skew(t * s),
            AnyTensor::RankFour(t) => AnyTensor::RankFour(t * s),
            AnyTensor::SymSym(t) => AnyTensor::SymSym(t * s),
            AnyTensor::SymSkew(t) => AnyTensor::SymSkew(t * s),
            AnyTensor::SkewSym(t) => AnyTensor::SkewSym(t * s),
        }
    }

    /// Negate every component, staying in the class.
    pub fn neg(&self) -> AnyTensor {
        self.scale(-1.0)
    }

    /// Transpose; defined for the rank-2 classes.
    pub fn transpose(&self) -> Result<AnyTensor, TensorError> {
        match self {
            AnyTensor::RankTwo(t) => Ok(AnyTensor::RankTwo(t.transpose())),
            AnyTensor::Symmetric(t) => Ok(AnyTensor::Symmetric(t.transpose())),
            AnyTensor::Skew(t) => Ok(AnyTensor::Skew(t.transpose())),
            _ => Err(TensorError::Unsupported {
                op: "transpose",
                kind: self.kind(),
            }),
        }
    }

    /// Matrix inverse; defined for the invertible rank-2 classes.
    ///
    /// A skew operand is rejected up front: an antisymmetric 3x3 matrix
    /// always has zero determinant.
    pub fn inverse(&self) -> Result<AnyTensor, TensorError> {
        match self {
            AnyTensor::RankTwo(t) => Ok(AnyTensor::RankTwo(t.inverse()?)),
            AnyTensor::Symmetric(t) => Ok(AnyTensor::Symmetric(t.inverse()?)),
            AnyTensor::Skew(_) => Err(TensorError::SingularOperand { kind: "skew" }),
            _ => Err(TensorError::Unsupported {
                op: "inverse",
                kind: self.kind(),
            }),
        }
    }
}

macro_rules! impl_from_any {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyTensor {
                fn from(t: $variant) -> Self {
                    AnyTensor::$variant(t)
                }
            }
        )*
    };
}

impl_from_any!(Vector, RankTwo, Symmetric, Skew, RankFour, SymSym, SymSkew, SkewSym);
