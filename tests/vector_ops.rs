//! Integration tests for the sparse vector contract
//!
//! Covers construction, element access, the zero-suppression invariant,
//! slicing and selection, and the arithmetic surface.

use sparsealg::error::Error;
use sparsealg::prelude::*;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn test_construction_and_accessors() {
    let v = SparseVector::new(8, &[2, 5], &[1.0f64, -4.0]).unwrap();
    assert_eq!(v.len(), 8);
    assert_eq!(v.nnz(), 2);
    assert_eq!(v.dtype(), DType::F64);
    assert!(!v.is_empty());

    let empty = SparseVector::<f64>::empty(0);
    assert!(empty.is_empty());
    assert_eq!(empty.nnz(), 0);
}

#[test]
fn test_construction_faults() {
    assert!(matches!(
        SparseVector::new(4, &[0], &[1.0f64, 2.0]),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        SparseVector::new(4, &[4], &[1.0f64]),
        Err(Error::IndexOutOfBounds { index: 4, size: 4 })
    ));
}

#[test]
fn test_get_absent_returns_zero() {
    let v = SparseVector::new(6, &[1, 3], &[2.0f64, 4.0]).unwrap();
    for i in 0..6 {
        let expected = match i {
            1 => 2.0,
            3 => 4.0,
            _ => 0.0,
        };
        assert_eq!(v.get(i).unwrap(), expected);
    }
}

#[test]
fn test_set_zero_always_removes() {
    let mut v = SparseVector::new(6, &[1, 3], &[2.0f64, 4.0]).unwrap();
    v.set(1, 0.0).unwrap();
    assert_eq!(v.locate(1).unwrap(), None);
    assert_eq!(v.nnz(), 1);
    // already absent: still a no-op, still absent
    v.set(1, 0.0).unwrap();
    assert_eq!(v.locate(1).unwrap(), None);
}

#[test]
fn test_set_nnz_bookkeeping() {
    let mut v = SparseVector::<f64>::empty(6);
    let before = v.nnz();
    v.set(2, 1.5).unwrap();
    assert_eq!(v.nnz(), before + 1);
    v.set(2, 2.5).unwrap();
    assert_eq!(v.nnz(), before + 1);
}

#[test]
fn test_duplicate_indices_detected_not_resolved() {
    let v = SparseVector::new(5, &[3, 3], &[1.0f64, 2.0]).unwrap();
    // nnz reflects raw storage; lookup refuses to pick a winner
    assert_eq!(v.nnz(), 2);
    assert!(matches!(v.locate(3), Err(Error::DuplicateIndex { index: 3 })));
    assert!(v.get(3).is_err());
    // untouched positions still read fine
    assert_eq!(v.get(0).unwrap(), 0.0);
}

#[test]
fn test_hand_constructed_zero_is_readable() {
    // the constructor does not enforce zero-suppression
    let v = SparseVector::new(3, &[1], &[0.0f64]).unwrap();
    assert_eq!(v.nnz(), 1);
    assert_eq!(v.get(1).unwrap(), 0.0);
}

#[test]
fn test_slice_resolution_examples() {
    let v = SparseVector::new(10, &[0, 7, 8], &[1.0f64, 2.0, 3.0]).unwrap();

    // [-3:] -> indices [7, 8, 9], re-indexed to positions 0..3
    let tail = v.slice(&SliceSpec::from(-3..)).unwrap();
    assert_eq!(tail.len(), 3);
    assert_eq!(tail.to_dense(), vec![2.0, 3.0, 0.0]);

    // [:-2] -> indices [0..8]
    let head = v.slice(&SliceSpec::from(..-2)).unwrap();
    assert_eq!(head.len(), 8);
    assert_eq!(head.get(0).unwrap(), 1.0);
    assert_eq!(head.get(7).unwrap(), 2.0);

    // stepped slice
    let stepped = v.slice(&SliceSpec::from(0..9).with_step(7)).unwrap();
    assert_eq!(stepped.len(), 2);
    assert_eq!(stepped.to_dense(), vec![1.0, 2.0]);
}

#[test]
fn test_select_list_indexing() {
    let v = SparseVector::new(6, &[0, 5], &[1.0f64, 9.0]).unwrap();
    let s = v.select(&[5, -6, 2]).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.to_dense(), vec![9.0, 1.0, 0.0]);
    // out-of-dimension positions are bounds faults
    assert!(v.select(&[6]).is_err());
}

#[test]
fn test_set_slice_and_set_many() {
    let mut v = SparseVector::<i32>::empty(8);
    v.set_slice(&SliceSpec::from(2..6), 7).unwrap();
    assert_eq!(v.nnz(), 4);
    v.set_many(&[2, 3], 0).unwrap();
    assert_eq!(v.nnz(), 2);
    assert_eq!(v.get(4).unwrap(), 7);
}

#[test]
fn test_addition_commutes() {
    let a = SparseVector::new(6, &[0, 2, 4], &[1.0f64, -2.0, 3.5]).unwrap();
    let b = SparseVector::new(6, &[1, 2], &[4.0f64, 2.0]).unwrap();
    let ab = a.add(&b).unwrap();
    let ba = b.add(&a).unwrap();
    assert!(ab.value_eq(&ba));
    // index 2 cancels exactly and is dropped
    assert_eq!(ab.locate(2).unwrap(), None);
    assert_eq!(ab.to_dense(), vec![1.0, 4.0, 0.0, 0.0, 3.5, 0.0]);
}

#[test]
fn test_scalar_addition_broadcasts() {
    let v = SparseVector::new(4, &[1], &[3.0f64]).unwrap();
    let r = v.add_scalar(1.0).unwrap();
    assert_eq!(r.to_dense(), vec![1.0, 4.0, 1.0, 1.0]);
    assert_eq!(r.nnz(), 4);
}

#[test]
fn test_subtraction() {
    let a = SparseVector::new(3, &[0, 1], &[5.0f64, 2.0]).unwrap();
    let b = SparseVector::new(3, &[1, 2], &[2.0f64, 1.0]).unwrap();
    let d = a.sub(&b).unwrap();
    assert_eq!(d.to_dense(), vec![5.0, 0.0, -1.0]);
    // self - self is all zero with empty storage
    let z = a.sub(&a).unwrap();
    assert_eq!(z.nnz(), 0);
}

#[test]
fn test_multiply_by_scalar_zero_empties_storage() {
    let v = SparseVector::new(5, &[0, 2, 4], &[1.0f64, 2.0, 3.0]).unwrap();
    let z = v.scale(0.0);
    assert_eq!(z.nnz(), 0);
    assert_eq!(z.len(), 5);
}

#[test]
fn test_elementwise_multiply() {
    let a = SparseVector::new(5, &[0, 2, 3], &[2.0f64, 3.0, 4.0]).unwrap();
    let b = SparseVector::new(5, &[2, 3, 4], &[5.0f64, 0.5, 9.0]).unwrap();
    let p = a.mul(&b).unwrap();
    assert_eq!(p.to_dense(), vec![0.0, 0.0, 15.0, 2.0, 0.0]);
    // result support never exceeds the left operand's
    assert!(p.nnz() <= a.nnz());
}

#[test]
fn test_dimension_mismatch_faults() {
    let a = SparseVector::new(4, &[0], &[1.0f64]).unwrap();
    let b = SparseVector::new(5, &[0], &[1.0f64]).unwrap();
    assert!(matches!(a.add(&b), Err(Error::DimensionMismatch { lhs: 4, rhs: 5 })));
    assert!(a.mul(&b).is_err());
    assert!(a.sub(&b).is_err());
}

#[test]
fn test_dot_example_from_dense() {
    // dimension 4, a = {0: 3.0, 2: -1.0}, b = [1, 5, 2, 0]
    let a = SparseVector::new(4, &[0, 2], &[3.0f64, -1.0]).unwrap();
    let b = vec![1.0f64, 5.0, 2.0, 0.0];
    assert!(approx_eq(a.dot(&b).unwrap(), 1.0, 1e-12));
}

#[test]
fn test_dot_bounds_fault_on_short_operand() {
    let a = SparseVector::new(4, &[3], &[1.0f64]).unwrap();
    let short = vec![1.0f64, 2.0];
    assert!(a.dot(&short).is_err());
}
