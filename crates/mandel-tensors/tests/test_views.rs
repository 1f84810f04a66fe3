//! Views over caller-owned state blocks: tensors wrapping external
//! memory must read and write through without copying.

use mandel_tensors::{Dot, Skew, SymSym, Symmetric, TensorError, Vector};

#[test]
fn state_block_partitioned_into_views() {
    // A flat history block holding a stress (6), a backstress (6) and an
    // axial spin (3), as an integrator would lay it out.
    let mut block = vec![0.0; 15];
    block[0] = 100.0;
    block[6] = 25.0;
    block[12] = 0.5;

    let (stress_buf, rest) = block.split_at(6);
    let (back_buf, spin_buf) = rest.split_at(6);
    let stress = Symmetric::view(stress_buf).unwrap();
    let back = Symmetric::view(back_buf).unwrap();
    let spin = Skew::view(spin_buf).unwrap();

    assert!(!stress.owns_buffer());
    let effective = &stress - &back;
    assert_eq!(effective.get(0, 0), 75.0);
    assert_eq!(spin.data(), &[0.5, 0.0, 0.0]);
}

#[test]
fn mutable_view_updates_propagate() {
    let mut block = [0.0; 6];
    {
        let mut stress = Symmetric::view_mut(&mut block).unwrap();
        stress.set(0, 0, 10.0);
        stress.set(0, 1, 2.0);
        stress *= 2.0;
    }
    assert_eq!(block[0], 20.0);
    // Mandel slot, carries the sqrt(2) scale.
    assert_eq!(block[5], 4.0 * 2.0_f64.sqrt());
}

#[test]
fn views_interoperate_with_owned_values() {
    let stiffness_buf = {
        let id = SymSym::id();
        id.data().to_vec()
    };
    let c = SymSym::view(&stiffness_buf).unwrap();
    let mut e = Symmetric::zeros();
    e.set(0, 0, 1.0e-3);
    // Owned result from a view operand.
    let s = c.dot(&e);
    assert!(s.owns_buffer());
    assert_eq!(s, e);
}

#[test]
fn copy_data_into_view_checks_length() {
    let mut buf = [0.0; 3];
    let mut v = Vector::view_mut(&mut buf).unwrap();
    assert_eq!(
        v.copy_data(&[1.0, 2.0]),
        Err(TensorError::ShapeMismatch {
            expected: 3,
            actual: 2
        })
    );
    v.copy_data(&[1.0, 2.0, 3.0]).unwrap();
    drop(v);
    assert_eq!(buf, [1.0, 2.0, 3.0]);
}

#[test]
fn to_owned_detaches_from_the_buffer() {
    let buf = [1.0, 2.0, 3.0];
    let owned = {
        let v = Vector::view(&buf).unwrap();
        v.to_owned()
    };
    assert!(owned.owns_buffer());
    assert_eq!(owned, Vector::new([1.0, 2.0, 3.0]));
}
