//! Panic containment for asynchronous continuations.

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::FutureExt;

use crate::fault::Fault;

/// Run an async continuation, converting a panic into an error through
/// `on_fault`.
///
/// Async sibling of [`protect`](crate::fault::protect). Two panic sites
/// are covered by the same single conversion: the synchronous call that
/// constructs the future, and the future itself while being polled.
/// Whichever fires first is mapped through `on_fault`; there is no
/// double-catching because construction and polling are disjoint phases.
///
/// As with `protect`, the mapper runs outside the protected region, so a
/// panic raised by the mapper itself propagates to the caller.
///
/// # Example
///
/// ```rust
/// use clearwater::future::protect_future;
///
/// # tokio_test::block_on(async {
/// let ok: Result<i32, String> =
///     protect_future(|| async { 21 * 2 }, |fault| fault.message().to_string()).await;
/// assert_eq!(ok, Ok(42));
///
/// let caught: Result<i32, String> = protect_future(
///     || async { panic!("boom") },
///     |fault| fault.message().to_string(),
/// )
/// .await;
/// assert_eq!(caught, Err("boom".to_string()));
/// # });
/// ```
pub async fn protect_future<R, E, F, Fut, H>(make: F, on_fault: H) -> Result<R, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = R>,
    H: FnOnce(Fault) -> E,
{
    let future = match catch_unwind(AssertUnwindSafe(make)) {
        Ok(future) => future,
        Err(payload) => return Err(on_fault(Fault::new(payload))),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Ok(value),
        Err(payload) => Err(on_fault(Fault::new(payload))),
    }
}
