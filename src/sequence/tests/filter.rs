use crate::sequence::prelude::*;

#[test]
fn filter_keeps_matching_in_order() {
    let seq = SparseSeq::from(vec![1, 2, 3, 4, 5, 6]);

    let even = seq.filter(|v, _, _| v % 2 == 0);

    assert_eq!(even.snapshot(), vec![Some(2), Some(4), Some(6)]);
}

#[test]
fn filter_result_never_longer_than_input() {
    let seq = SparseSeq::from(vec![1, 2, 3, 4]);

    assert!(seq.filter(|_, _, _| true).len() <= seq.len());
    assert_eq!(seq.filter(|_, _, _| false).len(), 0);
}

#[test]
fn filter_skips_absent_slots() {
    let mut seq = SparseSeq::with_len(6);
    seq.set(1, 10).unwrap();
    seq.set(3, 20).unwrap();
    seq.set(5, 30).unwrap();

    // predicate accepts everything it sees; holes never reach it
    let kept = seq.filter(|_, _, _| true);

    assert_eq!(kept.len(), 3);
    assert_eq!(kept.snapshot(), vec![Some(10), Some(20), Some(30)]);
}

#[test]
fn filter_does_not_mutate_input() {
    let seq = SparseSeq::from(vec![1, 2, 3]);
    let before = seq.clone();

    let _ = seq.filter(|v, _, _| *v > 1);

    assert_eq!(seq, before);
}
