use crate::sequence::prelude::*;

#[test]
fn set_get_unset() {
    let mut seq = SparseSeq::with_len(3);

    assert_eq!(seq.set(1, 10), Ok(None));
    assert_eq!(seq.get(1), Some(&10));
    assert_eq!(seq.set(1, 20), Ok(Some(10)));
    assert_eq!(seq.unset(1), Ok(Some(20)));
    assert!(!seq.is_present(1));
    assert_eq!(seq.len(), 3); // unset clears, never shrinks
}

#[test]
fn out_of_bounds_writes_err() {
    let mut seq = SparseSeq::<i32>::with_len(2);

    assert_eq!(
        seq.set(2, 1),
        Err(SequenceError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(
        seq.unset(9),
        Err(SequenceError::OutOfBounds { index: 9, len: 2 })
    );
}

#[test]
fn out_of_bounds_reads_are_absent() {
    let seq = SparseSeq::<i32>::with_len(1);
    assert_eq!(seq.get(5), None);
    assert!(!seq.is_present(5));
}

#[test]
fn build_from_options() {
    let seq: SparseSeq<i32> = vec![Some(1), None, Some(3)].into_iter().collect();

    assert_eq!(seq.len(), 3);
    assert_eq!(seq.present(), 2);
    assert_eq!(
        seq.iter_present().collect::<Vec<_>>(),
        vec![(0, &1), (2, &3)]
    );
}

#[test]
fn push_variants() {
    let mut seq = SparseSeq::with_len(0);
    seq.push(1);
    seq.push_absent();
    seq.push(3);

    assert_eq!(seq.snapshot(), vec![Some(1), None, Some(3)]);
}
