//! Call-rate limiting over tokio timers.
//!
//! Two policies, both wrapping an `FnMut` action:
//!
//! - [`Debounce`]: delay-and-collapse. Every call re-arms a timer; only the
//!   last call inside a window executes, with that call's arguments.
//! - [`Throttle`]: leading-edge rate limit. The first call runs
//!   immediately, later calls inside the interval are dropped.
//!
//! The scheduler collaborator is the tokio runtime: a pending debounced
//! invocation is a spawned task sleeping out its delay, and its
//! `JoinHandle` is the cancel token.

use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use arc_swap::ArcSwapOption;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::trace;

/// Errors raised synchronously at wrapper construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Delays and intervals must be non-zero. (`Duration` already rules
    /// out negative values; zero is the remaining degenerate case.)
    #[error("delay must be non-zero")]
    InvalidDelay,
}

type Action<A> = Arc<Mutex<Box<dyn FnMut(A) + Send>>>;

/// ### -> `Debounce` - Keep only the last call in a window.
///
/// Each [`call`](Debounce::call) schedules the wrapped action `delay` in
/// the future and aborts whatever was previously scheduled. A burst of
/// calls therefore collapses into a single execution, carrying the
/// arguments of the burst's final call.
///
/// The pending invocation is cancellable through [`cancel`](Debounce::cancel);
/// cancelling when nothing is pending is a no-op, and dropping the wrapper
/// cancels implicitly. `call` must run inside a tokio runtime.
///
/// ### -> `Usage`
///
/// ```no_run
/// use slipstream::limit::Debounce;
/// use std::time::Duration;
///
/// # async fn example() {
/// let search = Debounce::new(
///     |query: String| println!("searching {query}"),
///     Duration::from_millis(300),
/// ).unwrap();
///
/// search.call("r".to_string());
/// search.call("ru".to_string());
/// search.call("rust".to_string()); // only this one executes, 300ms later
/// # }
/// ```
pub struct Debounce<A> {
    delay: Duration,
    action: Action<A>,
    pending: ArcSwapOption<JoinHandle<()>>,
}

impl<A: Send + 'static> Debounce<A> {
    /// Wraps `action`. Fails synchronously on a zero delay.
    pub fn new<F>(action: F, delay: Duration) -> Result<Self, LimitError>
    where
        F: FnMut(A) + Send + 'static,
    {
        if delay.is_zero() {
            return Err(LimitError::InvalidDelay);
        }
        Ok(Self {
            delay,
            action: Arc::new(Mutex::new(Box::new(action))),
            pending: ArcSwapOption::empty(),
        })
    }

    /// Schedules the action with `args` after the delay, superseding any
    /// previously pending call.
    pub fn call(&self, args: A) {
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            let mut action = action.lock().await;
            (*action)(args);
        });

        if let Some(previous) = self.pending.swap(Some(Arc::new(handle))) {
            previous.abort();
            trace!("debounce superseded a pending call");
        }
    }

    /// Aborts the pending call, if any. Idempotent: the handle leaves the
    /// slot on the first cancel, so a second cancel finds nothing.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.swap(None) {
            previous.abort();
            trace!("debounce cancelled the pending call");
        }
    }
}

impl<A> Drop for Debounce<A> {
    fn drop(&mut self) {
        if let Some(previous) = self.pending.swap(None) {
            previous.abort();
        }
    }
}

struct ThrottleInner<A> {
    action: Box<dyn FnMut(A) + Send>,
    last_run: Option<Instant>,
}

/// ### -> `Throttle` - At most one call per interval, leading edge.
///
/// The first [`call`](Throttle::call) executes immediately. Calls arriving
/// within `interval` of the last *executed* call are dropped; once the
/// interval has elapsed, the next call again executes immediately.
/// Trailing-edge variants are deliberately not offered.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::limit::Throttle;
/// use std::time::Duration;
///
/// let mut frames = 0u32;
/// let on_scroll = Throttle::new(move |_: ()| frames += 1, Duration::from_millis(100)).unwrap();
///
/// assert!(on_scroll.call(()));  // executes
/// assert!(!on_scroll.call(())); // inside the interval, dropped
/// ```
pub struct Throttle<A> {
    interval: Duration,
    inner: StdMutex<ThrottleInner<A>>,
}

impl<A: 'static> Throttle<A> {
    /// Wraps `action`. Fails synchronously on a zero interval.
    pub fn new<F>(action: F, interval: Duration) -> Result<Self, LimitError>
    where
        F: FnMut(A) + Send + 'static,
    {
        if interval.is_zero() {
            return Err(LimitError::InvalidDelay);
        }
        Ok(Self {
            interval,
            inner: StdMutex::new(ThrottleInner {
                action: Box::new(action),
                last_run: None,
            }),
        })
    }

    /// Invokes the action if the interval has elapsed since the last
    /// executed call; drops the call otherwise. Returns whether the call
    /// was admitted.
    pub fn call(&self, args: A) -> bool {
        let mut inner = self.inner.lock().expect("throttle state poisoned!");
        let now = Instant::now();
        let admitted = inner
            .last_run
            .map_or(true, |last| now.duration_since(last) >= self.interval);

        if admitted {
            inner.last_run = Some(now);
            (inner.action)(args);
        } else {
            trace!("throttle dropped a call inside the interval");
        }

        admitted
    }
}
