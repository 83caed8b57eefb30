use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{ready, Ready};
use thiserror::Error;

/// The terminal state of a single future, as reported by
/// [`all_settled`]. A future settles exactly once, into exactly one of
/// these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// The fulfillment value, if any.
    pub fn fulfilled(self) -> Option<T> {
        match self {
            Outcome::Fulfilled(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejected(self) -> Option<E> {
        match self {
            Outcome::Fulfilled(_) => None,
            Outcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Carries every rejection reason, in input order, when [`any`] finds no
/// fulfillment. `any` over an empty collection rejects with an empty
/// reason list.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("all futures rejected ({} rejection reasons)", .reasons.len())]
pub struct AggregateError<E> {
    pub reasons: Vec<E>,
}

/// Adapts a plain value into an already-fulfilled future, the way the
/// combinators expect their inputs.
pub fn fulfilled<T, E>(value: T) -> Ready<Result<T, E>> {
    ready(Ok(value))
}

/// Adapts an error into an already-rejected future.
pub fn rejected<T, E>(reason: E) -> Ready<Result<T, E>> {
    ready(Err(reason))
}

/// ### -> `all` - Fulfill with every result, reject with the first failure.
///
/// Resolves to `Ok` of the fulfillment values **in input order** once every
/// input future fulfills. Resolves to the first rejection observed
/// otherwise. An empty collection resolves immediately with an empty vec.
///
/// The combinator never signals cancellation; once it resolves, whatever
/// unsettled futures it still owns are dropped with it. Callers who need
/// the rest to keep running should spawn them first and pass handles.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::combine::{all, fulfilled, rejected};
///
/// async fn example() {
///     let values = all(vec![fulfilled::<_, String>(1), fulfilled(2), fulfilled(3)]).await;
///     assert_eq!(values, Ok(vec![1, 2, 3]));
///
///     let failed = all(vec![fulfilled(1), rejected("boom".to_string()), fulfilled(2)]).await;
///     assert_eq!(failed, Err("boom".to_string()));
/// }
///
/// // to run asynchronous code blockingly in doctest (as doctest does not support async natively)
/// slipstream::future!(example());
/// ```
pub fn all<I, T, E>(futures: I) -> All<I::Item, T>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    All {
        slots: futures
            .into_iter()
            .map(|future| AllSlot {
                future: Some(Box::pin(future)),
                value: None,
            })
            .collect(),
    }
}

pub struct All<F, T> {
    slots: Vec<AllSlot<F, T>>,
}

struct AllSlot<F, T> {
    future: Option<Pin<Box<F>>>,
    value: Option<T>,
}

// every child is heap-pinned, so moving the combinator is always fine
impl<F, T> Unpin for All<F, T> {}

impl<F, T, E> Future for All<F, T>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let mut pending = 0;
        for slot in this.slots.iter_mut() {
            if let Some(future) = slot.future.as_mut() {
                match future.as_mut().poll(cx) {
                    Poll::Ready(Ok(value)) => {
                        slot.future = None;
                        slot.value = Some(value);
                    }
                    Poll::Ready(Err(reason)) => return Poll::Ready(Err(reason)),
                    Poll::Pending => pending += 1,
                }
            }
        }

        if pending > 0 {
            return Poll::Pending;
        }

        let values = this
            .slots
            .iter_mut()
            .map(|slot| slot.value.take().expect("settled slot lost its value!"))
            .collect();
        Poll::Ready(Ok(values))
    }
}

/// ### -> `all_settled` - Wait for everyone, never reject.
///
/// Resolves once every input has settled, to one [`Outcome`] per input
/// future, **in input order**. Rejections are recorded, not propagated, so
/// the combinator itself always fulfills. An empty collection resolves
/// immediately with an empty vec.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::combine::{all_settled, fulfilled, rejected, Outcome};
///
/// async fn example() {
///     let outcomes = all_settled(vec![fulfilled(1), rejected("late".to_string()), fulfilled(3)]).await;
///     assert_eq!(outcomes[0], Outcome::Fulfilled(1));
///     assert_eq!(outcomes[1], Outcome::Rejected("late".to_string()));
///     assert_eq!(outcomes[2], Outcome::Fulfilled(3));
/// }
///
/// // to run asynchronous code blockingly in doctest (as doctest does not support async natively)
/// slipstream::future!(example());
/// ```
pub fn all_settled<I, T, E>(futures: I) -> AllSettled<I::Item, T, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    AllSettled {
        slots: futures
            .into_iter()
            .map(|future| SettledSlot {
                future: Some(Box::pin(future)),
                outcome: None,
            })
            .collect(),
    }
}

pub struct AllSettled<F, T, E> {
    slots: Vec<SettledSlot<F, T, E>>,
}

struct SettledSlot<F, T, E> {
    future: Option<Pin<Box<F>>>,
    outcome: Option<Outcome<T, E>>,
}

impl<F, T, E> Unpin for AllSettled<F, T, E> {}

impl<F, T, E> Future for AllSettled<F, T, E>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Vec<Outcome<T, E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let mut pending = 0;
        for slot in this.slots.iter_mut() {
            if let Some(future) = slot.future.as_mut() {
                match future.as_mut().poll(cx) {
                    Poll::Ready(Ok(value)) => {
                        slot.future = None;
                        slot.outcome = Some(Outcome::Fulfilled(value));
                    }
                    Poll::Ready(Err(reason)) => {
                        slot.future = None;
                        slot.outcome = Some(Outcome::Rejected(reason));
                    }
                    Poll::Pending => pending += 1,
                }
            }
        }

        if pending > 0 {
            return Poll::Pending;
        }

        let outcomes = this
            .slots
            .iter_mut()
            .map(|slot| slot.outcome.take().expect("settled slot lost its outcome!"))
            .collect();
        Poll::Ready(outcomes)
    }
}

/// ### -> `race` - Settle like whoever settles first.
///
/// Resolves with the output of the first input future to settle, fulfilled
/// or rejected. Ties within a single wakeup go to the lowest input index;
/// otherwise settlement order decides, not input order.
///
/// An empty collection would never settle, so `race` refuses it up front
/// with a panic rather than handing back a future that never wakes.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::combine::{race, fulfilled, rejected};
///
/// async fn example() {
///     let winner = race(vec![fulfilled::<_, String>("first"), fulfilled("second")]).await;
///     assert_eq!(winner, Ok("first"));
///
///     let lost = race(vec![rejected::<&str, _>("err"), fulfilled("ok")]).await;
///     assert_eq!(lost, Err("err"));
/// }
///
/// // to run asynchronous code blockingly in doctest (as doctest does not support async natively)
/// slipstream::future!(example());
/// ```
pub fn race<I>(futures: I) -> Race<I::Item>
where
    I: IntoIterator,
    I::Item: Future,
{
    let futures: Vec<_> = futures.into_iter().map(|future| Box::pin(future)).collect();
    assert!(!futures.is_empty(), "race over an empty collection would never settle!");
    Race { futures }
}

pub struct Race<F> {
    futures: Vec<Pin<Box<F>>>,
}

impl<F> Future for Race<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        for future in this.futures.iter_mut() {
            if let Poll::Ready(output) = future.as_mut().poll(cx) {
                return Poll::Ready(output);
            }
        }

        Poll::Pending
    }
}

/// ### -> `any` - First fulfillment wins, rejections aggregate.
///
/// Resolves with the value of the first input future to fulfill; a single
/// fulfillment anywhere short-circuits the wait. If every input rejects,
/// resolves to an [`AggregateError`] carrying each rejection reason **in
/// input order**. An empty collection rejects immediately with an empty
/// aggregate, mirroring what it is: zero chances to fulfill.
///
/// ### -> `Usage`
///
/// ```
/// use slipstream::combine::{any, fulfilled, rejected, AggregateError};
///
/// async fn example() {
///     let value = any(vec![rejected("a".to_string()), fulfilled(5)]).await;
///     assert_eq!(value, Ok(5));
///
///     let failure = any(vec![rejected::<i32, _>("a".to_string()), rejected("b".to_string())]).await;
///     assert_eq!(
///         failure,
///         Err(AggregateError { reasons: vec!["a".to_string(), "b".to_string()] })
///     );
/// }
///
/// // to run asynchronous code blockingly in doctest (as doctest does not support async natively)
/// slipstream::future!(example());
/// ```
pub fn any<I, T, E>(futures: I) -> Any<I::Item, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Result<T, E>>,
{
    Any {
        slots: futures
            .into_iter()
            .map(|future| AnySlot {
                future: Some(Box::pin(future)),
                reason: None,
            })
            .collect(),
    }
}

pub struct Any<F, E> {
    slots: Vec<AnySlot<F, E>>,
}

struct AnySlot<F, E> {
    future: Option<Pin<Box<F>>>,
    reason: Option<E>,
}

impl<F, E> Unpin for Any<F, E> {}

impl<F, T, E> Future for Any<F, E>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, AggregateError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        let mut pending = 0;
        for slot in this.slots.iter_mut() {
            if let Some(future) = slot.future.as_mut() {
                match future.as_mut().poll(cx) {
                    Poll::Ready(Ok(value)) => return Poll::Ready(Ok(value)),
                    Poll::Ready(Err(reason)) => {
                        slot.future = None;
                        slot.reason = Some(reason);
                    }
                    Poll::Pending => pending += 1,
                }
            }
        }

        if pending > 0 {
            return Poll::Pending;
        }

        let reasons = this
            .slots
            .iter_mut()
            .map(|slot| slot.reason.take().expect("rejected slot lost its reason!"))
            .collect();
        Poll::Ready(Err(AggregateError { reasons }))
    }
}

#[cfg(test)]
mod tests;
