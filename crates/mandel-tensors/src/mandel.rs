//! Mandel and axial storage conventions.
//!
//! All scaling conventions used by the reduced tensor classes live in
//! this module, stated once and shared by the rank-2 and rank-4 types.
//!
//! Symmetric 3x3 tensors are stored as 6 components in the order
//! `(00, 11, 22, 12, 02, 01)` with the off-diagonal slots scaled by
//! `sqrt(2)`, so that the Euclidean inner product of two stored vectors
//! equals the full double contraction of the tensors they represent.
//! Antisymmetric 3x3 tensors are stored as 3 axial components
//! `(-A12, A02, -A01)`.
//!
//! For rank-4 tensors the same conventions apply per index pair:
//! a symmetric pair carries a `sqrt(2)` Mandel factor, while a skew pair
//! being *contracted against* carries a factor of 2 (the axial rank-2
//! encoding itself is unscaled, so the rank-4 side absorbs the pair
//! doubling). With these factors every reduced contraction in the crate
//! is an ordinary matrix product of the stored arrays.

use std::f64::consts::SQRT_2;

/// Representative index pairs for the six Mandel slots.
pub(crate) const MANDEL_PAIRS: [(usize, usize); 6] =
    [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Mandel scale factor per slot: 1 on the diagonal, sqrt(2) off it.
pub(crate) const MANDEL_FACTORS: [f64; 6] = [1.0, 1.0, 1.0, SQRT_2, SQRT_2, SQRT_2];

/// Representative index pairs for the three axial slots.
pub(crate) const AXIAL_PAIRS: [(usize, usize); 3] = [(1, 2), (0, 2), (0, 1)];

/// Sign of the stored axial component at its representative pair:
/// `w[J] = AXIAL_SIGNS[J] * A(AXIAL_PAIRS[J])`.
pub(crate) const AXIAL_SIGNS: [f64; 3] = [-1.0, 1.0, -1.0];

/// Mandel slot for the tensor index pair `(i, j)`, either order.
#[inline]
pub(crate) fn mandel_index(i: usize, j: usize) -> usize {
    match (i, j) {
        (0, 0) => 0,
        (1, 1) => 1,
        (2, 2) => 2,
        (1, 2) | (2, 1) => 3,
        (0, 2) | (2, 0) => 4,
        (0, 1) | (1, 0) => 5,
        _ => panic!("tensor index ({i}, {j}) out of range"),
    }
}

/// Axial slot for the off-diagonal index pair `(i, j)`, either order.
#[inline]
pub(crate) fn axial_index(i: usize, j: usize) -> usize {
    match (i, j) {
        (1, 2) | (2, 1) => 0,
        (0, 2) | (2, 0) => 1,
        (0, 1) | (1, 0) => 2,
        _ => panic!("({i}, {j}) is not an off-diagonal index pair"),
    }
}

/// Signed coefficient `c` such that `A(i, j) = c * w[axial_index(i, j)]`
/// for an antisymmetric `A` with axial storage `w`. Zero on the diagonal.
#[inline]
pub(crate) fn axial_coeff(i: usize, j: usize) -> f64 {
    if i == j {
        return 0.0;
    }
    let sign = AXIAL_SIGNS[axial_index(i, j)];
    if (i, j) == AXIAL_PAIRS[axial_index(i, j)] {
        sign
    } else {
        -sign
    }
}

/// Row-major linear index into an 81-component rank-4 buffer.
#[inline]
pub(crate) fn t4(i: usize, j: usize, k: usize, l: usize) -> usize {
    ((i * 3 + j) * 3 + k) * 3 + l
}

/// Expand 6 Mandel components to a full row-major 3x3 matrix.
pub(crate) fn sym_to_full(s: &[f64]) -> [f64; 9] {
    let mut a = [0.0; 9];
    for (idx, &(i, j)) in MANDEL_PAIRS.iter().enumerate() {
        let v = s[idx] / MANDEL_FACTORS[idx];
        a[3 * i + j] = v;
        a[3 * j + i] = v;
    }
    a
}

/// Project a full row-major 3x3 matrix onto 6 Mandel components,
/// symmetrizing in the process.
pub(crate) fn full_to_sym(a: &[f64]) -> [f64; 6] {
    let mut s = [0.0; 6];
    for (idx, &(i, j)) in MANDEL_PAIRS.iter().enumerate() {
        s[idx] = MANDEL_FACTORS[idx] * 0.5 * (a[3 * i + j] + a[3 * j + i]);
    }
    s
}

/// Expand 3 axial components to a full row-major 3x3 matrix.
pub(crate) fn skew_to_full(w: &[f64]) -> [f64; 9] {
    let mut a = [0.0; 9];
    for (idx, &(i, j)) in AXIAL_PAIRS.iter().enumerate() {
        let v = AXIAL_SIGNS[idx] * w[idx];
        a[3 * i + j] = v;
        a[3 * j + i] = -v;
    }
    a
}

/// Project a full row-major 3x3 matrix onto 3 axial components,
/// extracting the antisymmetric part in the process.
pub(crate) fn full_to_skew(a: &[f64]) -> [f64; 3] {
    let mut w = [0.0; 3];
    for (idx, &(i, j)) in AXIAL_PAIRS.iter().enumerate() {
        w[idx] = AXIAL_SIGNS[idx] * 0.5 * (a[3 * i + j] - a[3 * j + i]);
    }
    w
}

/// Expand a 36-component Mandel 6x6 matrix to a full 81-component
/// rank-4 tensor.
pub(crate) fn mandel_to_full4(m: &[f64]) -> [f64; 81] {
    let mut c = [0.0; 81];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    let ii = mandel_index(i, j);
                    let jj = mandel_index(k, l);
                    c[t4(i, j, k, l)] =
                        m[6 * ii + jj] / (MANDEL_FACTORS[ii] * MANDEL_FACTORS[jj]);
                }
            }
        }
    }
    c
}

/// Project an 81-component rank-4 tensor onto a Mandel 6x6 matrix,
/// averaging over the minor symmetrizations of both index pairs.
pub(crate) fn full4_to_mandel(c: &[f64]) -> [f64; 36] {
    let mut m = [0.0; 36];
    for (ii, &(i, j)) in MANDEL_PAIRS.iter().enumerate() {
        for (jj, &(k, l)) in MANDEL_PAIRS.iter().enumerate() {
            let avg = 0.25
                * (c[t4(i, j, k, l)]
                    + c[t4(j, i, k, l)]
                    + c[t4(i, j, l, k)]
                    + c[t4(j, i, l, k)]);
            m[6 * ii + jj] = MANDEL_FACTORS[ii] * MANDEL_FACTORS[jj] * avg;
        }
    }
    m
}

/// Expand an 18-component symmetric-skew (6x3) matrix to a full rank-4
/// tensor, symmetric in the first pair and antisymmetric in the second.
pub(crate) fn symskew_to_full4(m: &[f64]) -> [f64; 81] {
    let mut c = [0.0; 81];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    if k == l {
                        continue;
                    }
                    let ii = mandel_index(i, j);
                    let jj = axial_index(k, l);
                    c[t4(i, j, k, l)] =
                        m[3 * ii + jj] * axial_coeff(k, l) / (2.0 * MANDEL_FACTORS[ii]);
                }
            }
        }
    }
    c
}

/// Project an 81-component rank-4 tensor onto the symmetric-skew (6x3)
/// storage: rows are Mandel slots of the first pair, columns axial slots
/// of the second, scaled by 2 so that the stored matrix times an axial
/// vector reproduces the tensor contraction.
pub(crate) fn full4_to_symskew(c: &[f64]) -> [f64; 18] {
    let mut m = [0.0; 18];
    for (ii, &(i, j)) in MANDEL_PAIRS.iter().enumerate() {
        for (jj, &(k, l)) in AXIAL_PAIRS.iter().enumerate() {
            let proj = 0.25
                * (c[t4(i, j, k, l)] + c[t4(j, i, k, l)]
                    - c[t4(i, j, l, k)]
                    - c[t4(j, i, l, k)]);
            m[3 * ii + jj] = 2.0 * MANDEL_FACTORS[ii] * AXIAL_SIGNS[jj] * proj;
        }
    }
    m
}

/// Expand an 18-component skew-symmetric (3x6) matrix to a full rank-4
/// tensor, antisymmetric in the first pair and symmetric in the second.
pub(crate) fn skewsym_to_full4(n: &[f64]) -> [f64; 81] {
    let mut c = [0.0; 81];
    for i in 0..3 {
        for j in 0..3 {
            if i == j {
                continue;
            }
            for k in 0..3 {
                for l in 0..3 {
                    let ii = axial_index(i, j);
                    let jj = mandel_index(k, l);
                    c[t4(i, j, k, l)] =
                        n[6 * ii + jj] * axial_coeff(i, j) / MANDEL_FACTORS[jj];
                }
            }
        }
    }
    c
}

/// Project an 81-component rank-4 tensor onto the skew-symmetric (3x6)
/// storage: rows are axial slots of the first pair (unscaled, matching
/// the rank-2 axial readout), columns Mandel slots of the second.
pub(crate) fn full4_to_skewsym(c: &[f64]) -> [f64; 18] {
    let mut n = [0.0; 18];
    for (ii, &(i, j)) in AXIAL_PAIRS.iter().enumerate() {
        for (jj, &(k, l)) in MANDEL_PAIRS.iter().enumerate() {
            let proj = 0.25
                * (c[t4(i, j, k, l)] - c[t4(j, i, k, l)] + c[t4(i, j, l, k)]
                    - c[t4(j, i, l, k)]);
            n[6 * ii + jj] = AXIAL_SIGNS[ii] * MANDEL_FACTORS[jj] * proj;
        }
    }
    n
}
