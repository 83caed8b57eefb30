mod traits;
pub use traits::HigherOrder;

use thiserror::Error;

/// Errors produced by sequence operations.
///
/// User errors (out-of-bounds writes, seedless reduce over nothing) come back
/// as `Err`. Invariant violations inside the sequence itself panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// `reduce` was asked to seed itself from a sequence with no present
    /// elements.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    /// A write addressed a slot outside the sequence.
    #[error("index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// ### -> `SparseSeq<T>` - An ordered, indexable, possibly sparse sequence.
///
/// `SparseSeq<T>` is a fixed-order collection in which any index may be
/// *absent*: a slot that exists positionally but holds no element. Absent
/// slots are first-class: they survive [`map`](HigherOrder::map), are
/// skipped by every traversal, and are distinct from "slot holding a
/// default value".
///
/// ### -> `Presence Explained`
///
/// **Presence** is the property traversals key on:
///
/// - `len()` counts slots, present or not. `map` preserves it exactly.
/// - `present()` counts stored elements. [`filter`](HigherOrder::filter)
///   and [`reduce`](HigherOrder::reduce) operate on these only.
/// - Traversal callbacks receive `(element, index, sequence)` for each
///   *present* index, in ascending index order. Absent indices produce no
///   callback invocation at all.
///
/// ### -> `Invariants`
///
/// 1. **Order is positional**: element order never depends on insertion
///    order, only on index.
/// 2. **Snapshot traversal**: traversals borrow the sequence shared, so the
///    length and contents cannot change mid-walk.
/// 3. **No mutation by traversal**: `map` and `filter` build new sequences;
///    the input is untouched.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::sequence::prelude::*;
///
/// let mut seq = SparseSeq::with_len(4);
/// seq.set(0, 10).unwrap();
/// seq.set(2, 30).unwrap();
///
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.present(), 2);
/// assert!(seq.is_present(0));
/// assert!(!seq.is_present(1));
///
/// let doubled = seq.map(|v, _, _| v * 2);
/// assert_eq!(doubled.len(), 4);
/// assert_eq!(doubled.get(2), Some(&60));
/// assert!(!doubled.is_present(1)); // holes stay holes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseSeq<T> {
    slots: Vec<Option<T>>,
}

impl<T> SparseSeq<T> {
    /// Creates a sequence of `len` slots, all absent.
    pub fn with_len(len: usize) -> Self {
        let mut slots = Vec::with_capacity(len);
        for _ in 0..len {
            slots.push(None);
        }
        Self { slots }
    }

    /// Number of slots, present or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the sequence has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of present elements.
    pub fn present(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when the slot at `index` holds an element.
    /// Out-of-bounds indices are simply not present.
    pub fn is_present(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Returns the element at `index`, or `None` when the slot is absent
    /// or out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Stores `value` at `index`, returning the displaced element if the
    /// slot was present. The index must address an existing slot.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, SequenceError> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.replace(value)),
            None => Err(SequenceError::OutOfBounds { index, len }),
        }
    }

    /// Clears the slot at `index`, returning the element it held. The slot
    /// itself remains (the sequence keeps its length).
    pub fn unset(&mut self, index: usize) -> Result<Option<T>, SequenceError> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.take()),
            None => Err(SequenceError::OutOfBounds { index, len }),
        }
    }

    /// Appends a present slot holding `value`.
    pub fn push(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// Appends an absent slot.
    pub fn push_absent(&mut self) {
        self.slots.push(None);
    }

    /// Iterates `(index, element)` over present slots in index order.
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    /// Creates an independent `Vec` snapshot, one entry per slot.
    pub fn snapshot(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.slots.clone()
    }
}

impl<T> From<Vec<T>> for SparseSeq<T> {
    /// A plain `Vec` becomes a fully present sequence.
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T> FromIterator<T> for SparseSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<T> FromIterator<Option<T>> for SparseSeq<T> {
    /// Builds a sequence slot-by-slot; `None` entries become absent slots.
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T> HigherOrder<T> for SparseSeq<T> {
    fn map<U, F>(&self, mut transform: F) -> SparseSeq<U>
    where
        F: FnMut(&T, usize, &SparseSeq<T>) -> U,
    {
        let mut slots = Vec::with_capacity(self.slots.len());
        for (index, slot) in self.slots.iter().enumerate() {
            slots.push(slot.as_ref().map(|value| transform(value, index, self)));
        }
        SparseSeq { slots }
    }

    fn filter<F>(&self, mut predicate: F) -> SparseSeq<T>
    where
        F: FnMut(&T, usize, &SparseSeq<T>) -> bool,
        T: Clone,
    {
        let mut slots = Vec::new();
        for (index, value) in self.iter_present() {
            if predicate(value, index, self) {
                slots.push(Some(value.clone()));
            }
        }
        SparseSeq { slots }
    }

    fn fold<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &T, usize, &SparseSeq<T>) -> A,
    {
        let mut accumulator = initial;
        for (index, value) in self.iter_present() {
            accumulator = f(accumulator, value, index, self);
        }
        accumulator
    }

    fn reduce<F>(&self, mut f: F) -> Result<T, SequenceError>
    where
        F: FnMut(T, &T, usize, &SparseSeq<T>) -> T,
        T: Clone,
    {
        let mut present = self.iter_present();
        let (_, seed) = present.next().ok_or(SequenceError::EmptyReduce)?;
        let mut accumulator = seed.clone();
        for (index, value) in present {
            accumulator = f(accumulator, value, index, self);
        }
        Ok(accumulator)
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &SparseSeq<T>),
    {
        for (index, value) in self.iter_present() {
            f(value, index, self);
        }
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
