use crate::sequence::prelude::*;

#[test]
fn fold_with_initial_value() {
    let seq = SparseSeq::from(vec![1, 2, 3]);
    assert_eq!(seq.fold(0, |a, v, _, _| a + v), 6);
}

#[test]
fn fold_over_all_absent_returns_initial() {
    let seq = SparseSeq::<i32>::with_len(4);
    assert_eq!(seq.fold(42, |a, v, _, _| a + v), 42);
}

#[test]
fn reduce_seeds_from_first_present() {
    let seq = SparseSeq::from(vec![5]);
    assert_eq!(seq.reduce(|a, v, _, _| a + v), Ok(5));

    let seq = SparseSeq::from(vec![1, 2, 3]);
    assert_eq!(seq.reduce(|a, v, _, _| a + v), Ok(6));
}

#[test]
fn reduce_of_empty_errs() {
    let seq = SparseSeq::<i32>::with_len(0);
    assert_eq!(seq.reduce(|a, v, _, _| a + v), Err(SequenceError::EmptyReduce));

    // slots exist but nothing is present
    let seq = SparseSeq::<i32>::with_len(3);
    assert_eq!(seq.reduce(|a, v, _, _| a + v), Err(SequenceError::EmptyReduce));
}

#[test]
fn reduce_skips_holes_when_seeding_and_iterating() {
    let mut seq = SparseSeq::with_len(6);
    seq.set(2, 10).unwrap();
    seq.set(4, 20).unwrap();

    let mut seen = Vec::new();
    let total = seq.reduce(|a, v, i, _| {
        seen.push(i);
        a + v
    });

    assert_eq!(total, Ok(30));
    // the seed (index 2) produces no callback; only index 4 is visited
    assert_eq!(seen, vec![4]);
}

#[test]
fn for_each_visits_present_only() {
    let mut seq = SparseSeq::with_len(5);
    seq.set(0, 'a').unwrap();
    seq.set(3, 'b').unwrap();

    let mut visited = Vec::new();
    seq.for_each(|v, i, _| visited.push((i, *v)));

    assert_eq!(visited, vec![(0, 'a'), (3, 'b')]);
}
