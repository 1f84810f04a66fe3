//! Error types for the tensor algebra.

use thiserror::Error;

/// Errors that can occur in tensor operations.
///
/// Every failure is detected at the offending operation and reported
/// synchronously; nothing is recovered or deferred internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// Buffer length does not match the fixed component count of the type.
    #[error("shape mismatch: expected {expected} components, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Matrix inverse requested for a numerically singular operand.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// Inverse requested for a class that is singular by construction
    /// (a 3x3 skew matrix always has zero determinant).
    #[error("{kind} tensors are structurally singular and have no inverse")]
    SingularOperand { kind: &'static str },

    /// Normalization of a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroNorm,

    /// Binary operation applied to a pair of classes it is not defined for.
    #[error("{op} is not defined between {lhs} and {rhs}")]
    IncompatibleOperands {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Unary operation applied to a class it is not defined for.
    #[error("{op} is not supported for {kind} tensors")]
    Unsupported { op: &'static str, kind: &'static str },
}
