mod any;

use std::future::Future;
use std::pin::Pin;

/// Input futures of mixed shapes, unified for the combinators.
pub(crate) type BoxFut<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;
