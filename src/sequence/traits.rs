use super::{SequenceError, SparseSeq};

/// ### -> `HigherOrder<T> Trait`.
///
/// Provides the higher-order traversals over a sparse sequence. Every
/// callback receives `(element, index, sequence)` and is invoked once per
/// *present* index, in ascending index order; absent indices never reach a
/// callback.
///
/// Traversals take `&self`, so the sequence cannot change length or
/// contents while a walk is in progress, and none of them mutate their
/// input.
///
/// ### -> `Methods`
/// - `map(transform) -> SparseSeq<U>`:
///     - Same `len()` as the input; absent indices stay absent.
///     - `result[i] = transform(input[i], i, input)` for every present `i`.
///
/// - `filter(predicate) -> SparseSeq<T>`:
///     - Dense result holding, in input order, the present elements for
///       which `predicate` returned true. May shrink to empty.
///
/// - `fold(initial, f) -> A`:
///     - Seeds the accumulator with `initial` and visits every present
///       index from 0. Always succeeds; `fold` over an all-absent sequence
///       returns `initial` untouched.
///
/// - `reduce(f) -> Result<T, SequenceError>`:
///     - Seeds the accumulator from the first present element (cloned) and
///       iterates from the next present index onward. A sequence with no
///       present element is an [`SequenceError::EmptyReduce`] error.
///
/// - `for_each(f)`:
///     - Runs `f` for its side effects over every present element.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::sequence::prelude::*;
///
/// let seq = SparseSeq::from(vec![1, 2, 3]);
///
/// assert_eq!(seq.fold(0, |a, v, _, _| a + v), 6);
/// assert_eq!(seq.reduce(|a, v, _, _| a + v), Ok(6));
///
/// let odd = seq.filter(|v, _, _| v % 2 == 1);
/// assert_eq!(odd.present(), 2);
///
/// let empty = SparseSeq::<i32>::with_len(3);
/// assert_eq!(empty.reduce(|a, v, _, _| a + v), Err(SequenceError::EmptyReduce));
/// ```
pub trait HigherOrder<T> {
    /// Transforms every present element, preserving length and absence.
    fn map<U, F>(&self, transform: F) -> SparseSeq<U>
    where
        F: FnMut(&T, usize, &SparseSeq<T>) -> U;

    /// Keeps, in order, the present elements satisfying `predicate`.
    /// The result is dense.
    fn filter<F>(&self, predicate: F) -> SparseSeq<T>
    where
        F: FnMut(&T, usize, &SparseSeq<T>) -> bool,
        T: Clone;

    /// Folds the present elements left-to-right, seeded with `initial`.
    fn fold<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T, usize, &SparseSeq<T>) -> A;

    /// Folds the present elements left-to-right, seeded from the first
    /// present element. Errs when there is nothing to seed from.
    fn reduce<F>(&self, f: F) -> Result<T, SequenceError>
    where
        F: FnMut(T, &T, usize, &SparseSeq<T>) -> T,
        T: Clone;

    /// Visits every present element for its side effects.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T, usize, &SparseSeq<T>);
}
