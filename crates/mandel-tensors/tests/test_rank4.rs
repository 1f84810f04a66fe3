//! Randomized consistency checks for the rank-4 classes against the
//! full 81-component representation.

use approx::assert_relative_eq;
use mandel_tensors::{Contract, Dot, RankFour, RankTwo, Skew, SkewSym, SymSkew, SymSym, Symmetric};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_symmetric(rng: &mut StdRng) -> Symmetric {
    let mut s = Symmetric::zeros();
    for i in 0..3 {
        for j in i..3 {
            s.set(i, j, rng.random_range(-2.0..2.0));
        }
    }
    s
}

fn random_skew(rng: &mut StdRng) -> Skew {
    let mut w = Skew::zeros();
    for x in w.data_mut() {
        *x = rng.random_range(-2.0..2.0);
    }
    w
}

fn random_symsym(rng: &mut StdRng) -> SymSym {
    let mut m = SymSym::zeros();
    for x in m.data_mut() {
        *x = rng.random_range(-2.0..2.0);
    }
    m
}

fn random_symskew(rng: &mut StdRng) -> SymSkew {
    let mut m = SymSkew::zeros();
    for x in m.data_mut() {
        *x = rng.random_range(-2.0..2.0);
    }
    m
}

fn random_skewsym(rng: &mut StdRng) -> SkewSym {
    let mut m = SkewSym::zeros();
    for x in m.data_mut() {
        *x = rng.random_range(-2.0..2.0);
    }
    m
}

fn assert_rank_four_eq(a: &RankFour, b: &RankFour) {
    for (x, y) in a.data().iter().zip(b.data()) {
        assert_relative_eq!(x, y, epsilon = 1e-11);
    }
}

fn assert_rank_two_eq(a: &RankTwo, b: &RankTwo) {
    for (x, y) in a.data().iter().zip(b.data()) {
        assert_relative_eq!(x, y, epsilon = 1e-11);
    }
}

#[test]
fn reduced_classes_round_trip_through_full() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..10 {
        let m = random_symsym(&mut rng);
        let back = m.to_full().to_sym();
        for (x, y) in back.data().iter().zip(m.data()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }

        let m = random_symskew(&mut rng);
        let back = m.to_full().to_symskew();
        for (x, y) in back.data().iter().zip(m.data()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }

        let m = random_skewsym(&mut rng);
        let back = m.to_full().to_skewsym();
        for (x, y) in back.data().iter().zip(m.data()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
    }
}

#[test]
fn symsym_application_matches_full() {
    let mut rng = StdRng::seed_from_u64(32);
    for _ in 0..10 {
        let c = random_symsym(&mut rng);
        let e = random_symmetric(&mut rng);
        assert_rank_two_eq(&c.dot(&e).to_full(), &c.to_full().dot(&e));
    }
}

#[test]
fn symsym_composition_matches_full() {
    let mut rng = StdRng::seed_from_u64(33);
    for _ in 0..10 {
        let a = random_symsym(&mut rng);
        let b = random_symsym(&mut rng);
        assert_rank_four_eq(&a.dot(&b).to_full(), &a.to_full().dot(&b.to_full()));
    }
}

#[test]
fn mixed_rank_four_products_promote_consistently() {
    let mut rng = StdRng::seed_from_u64(34);
    for _ in 0..5 {
        let c = random_symsym(&mut rng);
        let m = random_symskew(&mut rng);
        let n = random_skewsym(&mut rng);

        assert_rank_four_eq(&c.dot(&m), &c.to_full().dot(&m.to_full()));
        assert_rank_four_eq(&c.dot(&n), &c.to_full().dot(&n.to_full()));
        assert_rank_four_eq(&m.dot(&c), &m.to_full().dot(&c.to_full()));
        assert_rank_four_eq(&n.dot(&c), &n.to_full().dot(&c.to_full()));
        assert_rank_four_eq(&m.dot(&n), &m.to_full().dot(&n.to_full()));
        assert_rank_four_eq(&n.dot(&m), &n.to_full().dot(&m.to_full()));
    }
}

#[test]
fn rank_four_on_rank_two_matches_full() {
    let mut rng = StdRng::seed_from_u64(35);
    for _ in 0..5 {
        let m = random_symskew(&mut rng);
        let n = random_skewsym(&mut rng);
        let s = random_symmetric(&mut rng);
        let w = random_skew(&mut rng);

        assert_rank_two_eq(&m.dot(&s), &m.to_full().dot(&s.to_full()));
        assert_rank_two_eq(&m.dot(&w), &m.to_full().dot(&w.to_full()));
        assert_rank_two_eq(&n.dot(&s), &n.to_full().dot(&s.to_full()));
        assert_rank_two_eq(&n.dot(&w), &n.to_full().dot(&w.to_full()));
    }
}

#[test]
fn symskew_contracts_skew_through_stored_matrix() {
    // The 6x3 storage is scaled so the stored matrix times the axial
    // vector gives the Mandel components of the contraction.
    let mut rng = StdRng::seed_from_u64(36);
    for _ in 0..10 {
        let m = random_symskew(&mut rng);
        let w = random_skew(&mut rng);
        let full = m.to_full().dot(&w);
        let s = Symmetric::from_rank_two(&full);
        for row in 0..6 {
            let mut acc = 0.0;
            for col in 0..3 {
                acc += m[(row, col)] * w.data()[col];
            }
            assert_relative_eq!(s.data()[row], acc, epsilon = 1e-12);
        }
    }
}

#[test]
fn skewsym_contracts_symmetric_through_stored_matrix() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..10 {
        let n = random_skewsym(&mut rng);
        let s = random_symmetric(&mut rng);
        let full = n.to_full().dot(&s);
        let w = Skew::from_rank_two(&full);
        for row in 0..3 {
            let mut acc = 0.0;
            for col in 0..6 {
                acc += n[(row, col)] * s.data()[col];
            }
            assert_relative_eq!(w.data()[row], acc, epsilon = 1e-12);
        }
    }
}

#[test]
fn douter_acts_as_projector() {
    let mut rng = StdRng::seed_from_u64(38);
    for _ in 0..10 {
        let a = random_symmetric(&mut rng);
        let b = random_symmetric(&mut rng);
        let e = random_symmetric(&mut rng);
        let applied = SymSym::douter(&a, &b).dot(&e);
        let expect = &a * b.contract(&e);
        for (x, y) in applied.data().iter().zip(expect.data()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
    }
}

#[test]
fn full_identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(39);
    let id = RankFour::id();
    let c = {
        let mut c = RankFour::zeros();
        for x in c.data_mut() {
            *x = rng.random_range(-2.0..2.0);
        }
        c
    };
    assert_rank_four_eq(&id.dot(&c), &c);
    assert_rank_four_eq(&c.dot(&id), &c);
}
