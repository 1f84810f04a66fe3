//! Naive dense kernels for the fixed shapes used by the tensor types.
//!
//! Everything here works on flat row-major slices. The shapes are tiny
//! (3x3, 6x6, 3x3x3x3 pairs), so plain index loops are both the
//! simplest and an entirely adequate backend.

use crate::error::TensorError;
use crate::mandel::t4;

/// `out = a * b` for row-major 3x3 matrices.
pub(crate) fn mat3_mul(a: &[f64], b: &[f64]) -> [f64; 9] {
    let mut out = [0.0; 9];
    for i in 0..3 {
        for j in 0..3 {
            let mut acc = 0.0;
            for k in 0..3 {
                acc += a[3 * i + k] * b[3 * k + j];
            }
            out[3 * i + j] = acc;
        }
    }
    out
}

/// `out = a * v` for a row-major 3x3 matrix and a 3-vector.
pub(crate) fn mat3_vec(a: &[f64], v: &[f64]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for i in 0..3 {
        let mut acc = 0.0;
        for j in 0..3 {
            acc += a[3 * i + j] * v[j];
        }
        out[i] = acc;
    }
    out
}

/// `out = v^T * a` for a 3-vector and a row-major 3x3 matrix.
pub(crate) fn vec_mat3(v: &[f64], a: &[f64]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for j in 0..3 {
        let mut acc = 0.0;
        for i in 0..3 {
            acc += v[i] * a[3 * i + j];
        }
        out[j] = acc;
    }
    out
}

/// Determinant of a row-major 3x3 matrix.
pub(crate) fn mat3_det(a: &[f64]) -> f64 {
    a[0] * (a[4] * a[8] - a[5] * a[7]) - a[1] * (a[3] * a[8] - a[5] * a[6])
        + a[2] * (a[3] * a[7] - a[4] * a[6])
}

/// Inverse of a row-major 3x3 matrix by the adjugate formula.
///
/// Fails on an exactly zero (or non-finite) determinant. Near-singular
/// input produces large finite entries; conditioning is the caller's
/// concern.
pub(crate) fn mat3_inv(a: &[f64]) -> Result<[f64; 9], TensorError> {
    let det = mat3_det(a);
    if det == 0.0 || !det.is_finite() {
        return Err(TensorError::SingularMatrix);
    }
    let inv_det = 1.0 / det;
    Ok([
        (a[4] * a[8] - a[5] * a[7]) * inv_det,
        (a[2] * a[7] - a[1] * a[8]) * inv_det,
        (a[1] * a[5] - a[2] * a[4]) * inv_det,
        (a[5] * a[6] - a[3] * a[8]) * inv_det,
        (a[0] * a[8] - a[2] * a[6]) * inv_det,
        (a[2] * a[3] - a[0] * a[5]) * inv_det,
        (a[3] * a[7] - a[4] * a[6]) * inv_det,
        (a[1] * a[6] - a[0] * a[7]) * inv_det,
        (a[0] * a[4] - a[1] * a[3]) * inv_det,
    ])
}

/// `out = a * b` for row-major 6x6 matrices.
pub(crate) fn mat6_mul(a: &[f64], b: &[f64]) -> [f64; 36] {
    let mut out = [0.0; 36];
    for i in 0..6 {
        for j in 0..6 {
            let mut acc = 0.0;
            for k in 0..6 {
                acc += a[6 * i + k] * b[6 * k + j];
            }
            out[6 * i + j] = acc;
        }
    }
    out
}

/// `out = a * v` for a row-major 6x6 matrix and a 6-vector.
pub(crate) fn mat6_vec(a: &[f64], v: &[f64]) -> [f64; 6] {
    let mut out = [0.0; 6];
    for i in 0..6 {
        let mut acc = 0.0;
        for j in 0..6 {
            acc += a[6 * i + j] * v[j];
        }
        out[i] = acc;
    }
    out
}

/// Rank-4 inner-pair contraction: `R_ijkl = sum_mn A_ijmn B_mnkl`.
pub(crate) fn contract_44(a: &[f64], b: &[f64]) -> [f64; 81] {
    let mut out = [0.0; 81];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    let mut acc = 0.0;
                    for m in 0..3 {
                        for n in 0..3 {
                            acc += a[t4(i, j, m, n)] * b[t4(m, n, k, l)];
                        }
                    }
                    out[t4(i, j, k, l)] = acc;
                }
            }
        }
    }
    out
}

/// Rank-4 on rank-2 contraction: `R_ij = sum_kl A_ijkl B_kl`.
pub(crate) fn contract_42(a: &[f64], b: &[f64]) -> [f64; 9] {
    let mut out = [0.0; 9];
    for i in 0..3 {
        for j in 0..3 {
            let mut acc = 0.0;
            for k in 0..3 {
                for l in 0..3 {
                    acc += a[t4(i, j, k, l)] * b[3 * k + l];
                }
            }
            out[3 * i + j] = acc;
        }
    }
    out
}

/// Euclidean inner product of two equal-length flat buffers.
#[inline]
pub(crate) fn dot_flat(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
