//! Mixed-index products used in forming rotational tangent operators.
//!
//! These three contractions fall outside the [`Dot`](crate::ops::Dot)
//! table because they contract over an inner index of a rank-4 operand
//! rather than a trailing pair. They show up when differentiating
//! objective rates and crystal plasticity update equations with respect
//! to the deformation and spin. Each is evaluated over the full
//! representation in one pass and projected back onto the symmetry class
//! the index pattern guarantees.

use crate::mandel::{
    full4_to_mandel, full4_to_symskew, mandel_to_full4, skew_to_full, skewsym_to_full4,
    sym_to_full, t4,
};
use crate::rank2::{Skew, Symmetric};
use crate::rank4::{SkewSym, SymSkew, SymSym};
use crate::storage::Data;

/// `R_klab = S_kmab W_ml - W_km S_mlab` for a minor-symmetric `S` and an
/// antisymmetric `W`.
///
/// The commutator with the spin preserves both minor symmetries, so the
/// result stays in the [`SymSym`] class.
pub fn symsym_skew_commutator<D: Data, E: Data>(s: &SymSym<D>, w: &Skew<E>) -> SymSym {
    let sf = mandel_to_full4(s.data());
    let wf = skew_to_full(w.data());
    let mut r = [0.0; 81];
    for k in 0..3 {
        for l in 0..3 {
            for a in 0..3 {
                for b in 0..3 {
                    let mut acc = 0.0;
                    for m in 0..3 {
                        acc += sf[t4(k, m, a, b)] * wf[3 * m + l]
                            - wf[3 * k + m] * sf[t4(m, l, a, b)];
                    }
                    r[t4(k, l, a, b)] = acc;
                }
            }
        }
    }
    SymSym::new(full4_to_mandel(&r))
}

/// `R_klab = D_km S_mlab - S_kmab D_ml` for a symmetric `D` and an
/// antisymmetric-symmetric `S`.
///
/// The commutator of a symmetric tensor with the antisymmetric leading
/// pair is symmetric, so the result lands in the [`SymSym`] class.
pub fn skewsym_sym_commutator<D: Data, E: Data>(s: &SkewSym<D>, d: &Symmetric<E>) -> SymSym {
    let sf = skewsym_to_full4(s.data());
    let df = sym_to_full(d.data());
    let mut r = [0.0; 81];
    for k in 0..3 {
        for l in 0..3 {
            for a in 0..3 {
                for b in 0..3 {
                    let mut acc = 0.0;
                    for m in 0..3 {
                        acc += df[3 * k + m] * sf[t4(m, l, a, b)]
                            - sf[t4(k, m, a, b)] * df[3 * m + l];
                    }
                    r[t4(k, l, a, b)] = acc;
                }
            }
        }
    }
    SymSym::new(full4_to_mandel(&r))
}

/// `R_ijab = C_ijkb D_ka - C_ijal D_bl` for a minor-symmetric `C` and a
/// symmetric `D`.
///
/// The trailing pair of the result is antisymmetric, so it lands in the
/// [`SymSkew`] class.
pub fn symsym_sym_skew_part<D: Data, E: Data>(c: &SymSym<D>, d: &Symmetric<E>) -> SymSkew {
    let cf = mandel_to_full4(c.data());
    let df = sym_to_full(d.data());
    let mut r = [0.0; 81];
    for i in 0..3 {
        for j in 0..3 {
            for a in 0..3 {
                for b in 0..3 {
                    let mut acc = 0.0;
                    for k in 0..3 {
                        acc += cf[t4(i, j, k, b)] * df[3 * k + a]
                            - cf[t4(i, j, a, k)] * df[3 * b + k];
                    }
                    r[t4(i, j, a, b)] = acc;
                }
            }
        }
    }
    SymSkew::new(full4_to_symskew(&r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Dot;
    use crate::rank2::RankTwo;
    use approx::assert_relative_eq;

    fn sym(vals: [(usize, usize, f64); 4]) -> Symmetric {
        let mut s = Symmetric::zeros();
        for (i, j, v) in vals {
            s.set(i, j, v);
        }
        s
    }

    #[test]
    fn test_symsym_skew_commutator_on_outer_product() {
        // For S = x (x) y the commutator factors:
        // R_klab = (X W - W X)_kl Y_ab, and X W - W X is symmetric.
        let x = sym([(0, 0, 1.0), (1, 1, -2.0), (1, 2, 0.5), (0, 1, 1.5)]);
        let y = sym([(0, 0, 2.0), (2, 2, 1.0), (0, 2, -1.0), (0, 1, 0.25)]);
        let w = Skew::new([0.3, -0.7, 1.1]);
        let got = symsym_skew_commutator(&SymSym::douter(&x, &y), &w);

        let xw = x.dot(&w.to_full());
        let wx = w.dot(&x.to_full());
        let comm = Symmetric::from_rank_two(&(&xw - &wx));
        let expect = SymSym::douter(&comm, &y);
        for idx in 0..36 {
            assert_relative_eq!(got.data()[idx], expect.data()[idx], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_skewsym_sym_commutator_on_outer_product() {
        // For S = w (x) y: R_klab = (D W - W D)_kl Y_ab, symmetric in kl.
        let w = Skew::new([1.0, -0.5, 2.0]);
        let y = sym([(0, 0, 1.0), (1, 1, 3.0), (1, 2, -1.0), (0, 2, 0.5)]);
        let d = sym([(0, 0, 2.0), (2, 2, -1.0), (0, 1, 1.0), (1, 2, 0.25)]);
        let got = skewsym_sym_commutator(&SkewSym::douter(&w, &y), &d);

        let dw: RankTwo = d.dot(&w);
        let wd: RankTwo = w.dot(&d);
        let comm = Symmetric::from_rank_two(&(&dw - &wd));
        let expect = SymSym::douter(&comm, &y);
        for idx in 0..36 {
            assert_relative_eq!(got.data()[idx], expect.data()[idx], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_symsym_sym_skew_part_on_outer_product() {
        // For C = x (x) y: R_ijab = X_ij (D Y - Y D)_ab, antisymmetric
        // in ab.
        let x = sym([(0, 0, 1.0), (1, 1, -1.0), (0, 1, 2.0), (2, 2, 0.5)]);
        let y = sym([(0, 0, 3.0), (1, 2, 1.0), (0, 2, -2.0), (1, 1, 0.5)]);
        let d = sym([(0, 0, 1.0), (1, 1, 2.0), (2, 2, 3.0), (0, 1, -1.0)]);
        let got = symsym_sym_skew_part(&SymSym::douter(&x, &y), &d).to_full();

        // Plain product D Y, not the symmetrized reduced dot: the
        // commutator D Y - Y D is exactly its antisymmetric content and
        // would vanish after symmetrization.
        let dy: RankTwo = d.dot(&y.to_full());
        let comm = Skew::from_rank_two(&(&dy - &dy.transpose()));
        let xf = x.to_full();
        let cf = comm.to_full();
        for i in 0..3 {
            for j in 0..3 {
                for a in 0..3 {
                    for b in 0..3 {
                        assert_relative_eq!(
                            got[(i, j, a, b)],
                            xf[(i, j)] * cf[(a, b)],
                            epsilon = 1e-12
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_commutator_vanishes_for_zero_spin() {
        let mut s = SymSym::zeros();
        for (idx, v) in s.data_mut().iter_mut().enumerate() {
            *v = idx as f64;
        }
        let got = symsym_skew_commutator(&s, &Skew::zeros());
        assert_eq!(got, SymSym::zeros());
    }
}
