//! ### -> `slipstream` - Higher-order call utilities.
//!
//! A small library of leaf-level building blocks for call composition:
//!
//! - [`sequence`]: a sparse, indexable [`SparseSeq`](sequence::SparseSeq)
//!   with higher-order traversals (`map`, `filter`, `fold`, `reduce`,
//!   `for_each`) that skip absent indices.
//! - [`bind`]: context-fixing partial application. Fix a context value and
//!   preset arguments now, supply the rest at call time.
//! - [`combine`]: future combinators (`all`, `all_settled`, `race`, `any`)
//!   over ordered collections of fallible futures.
//! - [`memo`]: a memoization wrapper with a pluggable cache and
//!   serialization-derived keys.
//! - [`limit`]: call-rate limiting with a trailing-edge `Debounce` and a
//!   leading-edge `Throttle` over tokio timers.
//!
//! Every utility is independent; they share no state and compose freely.

/// Runs an asynchronous expression blockingly. Mainly used to execute
/// async code inside doctests (doctest does not support async natively).
#[macro_export]
macro_rules! future {
    ($coroutine: expr) => {
        futures::executor::block_on($coroutine)
    };
}

pub mod bind;
pub mod combine;
pub mod limit;
pub mod memo;
pub mod sequence;
