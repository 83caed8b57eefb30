//! Memoization with a pluggable cache.
//!
//! [`memoize`] wraps a function so repeated calls with the same argument
//! value return the cached result instead of recomputing. Keys are derived
//! deterministically from the argument (`bincode` serialization by
//! default), and hits are decided by cache *presence*, never by inspecting
//! the cached value, so results like `0`, `false` or `None` cache correctly.
//!
//! The cache lives inside the wrapper and is mutated only through
//! `&mut self`: single writer, no external mutation. It is unbounded by
//! default; callers needing eviction plug in their own [`Cache`].

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::{trace, warn};

/// Storage collaborator for [`Memo`]. Keyed by the derived argument key.
///
/// `lookup` answering `Some` is what makes a hit; implementations must not
/// conflate "absent" with any particular stored value.
pub trait Cache<R> {
    fn lookup(&self, key: &[u8]) -> Option<&R>;

    fn store(&mut self, key: Vec<u8>, value: R);

    fn contains(&self, key: &[u8]) -> bool {
        self.lookup(key).is_some()
    }
}

/// The default unbounded cache.
#[derive(Debug, Default)]
pub struct HashCache<R> {
    entries: HashMap<Vec<u8>, R>,
}

impl<R> HashCache<R> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R> Cache<R> for HashCache<R> {
    fn lookup(&self, key: &[u8]) -> Option<&R> {
        self.entries.get(key)
    }

    fn store(&mut self, key: Vec<u8>, value: R) {
        self.entries.insert(key, value);
    }
}

/// ### -> `Memo` - A memoizing wrapper around a function.
///
/// Built by [`memoize`] or [`memoize_with`]. On each [`call`](Memo::call):
/// derive the key, return the cached value on presence, otherwise compute,
/// store and return. The wrapped function runs at most once per distinct
/// key for as long as the cache keeps the entry.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::memo::memoize;
///
/// let mut calls = 0u32;
/// let mut square = memoize(|n: &u64| {
///     calls += 1;
///     n * n
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144); // served from cache
/// assert_eq!(square.hits(), 1);
/// assert_eq!(square.misses(), 1);
/// ```
pub struct Memo<A, R, F, K, C = HashCache<R>> {
    func: F,
    key_fn: K,
    cache: C,
    hits: u64,
    misses: u64,
    _call: PhantomData<fn(&A) -> R>,
}

/// Wraps `func` with the default key derivation (`bincode` serialization of
/// the argument) and an unbounded [`HashCache`].
pub fn memoize<A, R, F>(
    func: F,
) -> Memo<A, R, F, impl Fn(&A) -> Option<Vec<u8>>, HashCache<R>>
where
    A: Serialize,
    F: FnMut(&A) -> R,
{
    memoize_with(func, |args: &A| bincode::serialize(args).ok(), HashCache::new())
}

/// Wraps `func` with a caller-supplied key derivation and cache. A key
/// function answering `None` declares the argument unkeyable; such calls
/// compute uncached.
pub fn memoize_with<A, R, F, K, C>(func: F, key_fn: K, cache: C) -> Memo<A, R, F, K, C>
where
    F: FnMut(&A) -> R,
    K: Fn(&A) -> Option<Vec<u8>>,
    C: Cache<R>,
{
    Memo {
        func,
        key_fn,
        cache,
        hits: 0,
        misses: 0,
        _call: PhantomData,
    }
}

impl<A, R, F, K, C> Memo<A, R, F, K, C>
where
    F: FnMut(&A) -> R,
    K: Fn(&A) -> Option<Vec<u8>>,
    R: Clone,
    C: Cache<R>,
{
    /// Invokes the wrapped function through the cache.
    ///
    /// A key-derivation failure is not an error: the call computes
    /// uncached and the event is logged.
    pub fn call(&mut self, args: A) -> R {
        let key = match (self.key_fn)(&args) {
            Some(key) => key,
            None => {
                warn!("memo key derivation failed, computing uncached");
                return (self.func)(&args);
            }
        };

        if let Some(value) = self.cache.lookup(&key) {
            self.hits += 1;
            trace!(hits = self.hits, "memo hit");
            return value.clone();
        }

        let value = (self.func)(&args);
        self.cache.store(key, value.clone());
        self.misses += 1;
        trace!(misses = self.misses, "memo miss, stored");
        value
    }

    /// Calls served from the cache so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Calls that had to compute (and were stored) so far.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// The cache collaborator, for inspection.
    pub fn cache(&self) -> &C {
        &self.cache
    }
}
