use crate::sequence::prelude::*;

#[test]
fn map_preserves_length_and_holes() {
    let mut seq = SparseSeq::with_len(5);
    seq.set(0, 1).unwrap();
    seq.set(2, 3).unwrap();
    seq.set(4, 5).unwrap();

    let mapped = seq.map(|v, _, _| v * 10);

    assert_eq!(mapped.len(), seq.len());
    assert_eq!(mapped.get(0), Some(&10));
    assert_eq!(mapped.get(2), Some(&30));
    assert_eq!(mapped.get(4), Some(&50));
    assert!(!mapped.is_present(1));
    assert!(!mapped.is_present(3));
}

#[test]
fn map_passes_index_and_sequence() {
    let seq = SparseSeq::from(vec![7, 7, 7]);

    let mapped = seq.map(|v, i, s| {
        assert_eq!(s.len(), 3);
        v + i as i32
    });

    assert_eq!(mapped.snapshot(), vec![Some(7), Some(8), Some(9)]);
}

#[test]
fn map_does_not_mutate_input() {
    let seq = SparseSeq::from(vec![1, 2, 3]);
    let before = seq.clone();

    let _ = seq.map(|v, _, _| v * 2);

    assert_eq!(seq, before);
}

#[test]
fn map_length_property_random_sparsity() {
    for _ in 0..100 {
        let len = (rand::random::<u32>() % 64) as usize;
        let mut seq = SparseSeq::with_len(len);
        for i in 0..len {
            if rand::random::<bool>() {
                seq.set(i, i as u64).unwrap();
            }
        }

        let mapped = seq.map(|v, _, _| v + 1);
        assert_eq!(mapped.len(), seq.len());
        assert_eq!(mapped.present(), seq.present());
        for i in 0..len {
            assert_eq!(mapped.is_present(i), seq.is_present(i), "index: {}", i);
        }
    }
}

#[test]
fn map_empty_sequence() {
    let seq = SparseSeq::<i32>::with_len(0);
    let mapped = seq.map(|v, _, _| v + 1);
    assert!(mapped.is_empty());
}
