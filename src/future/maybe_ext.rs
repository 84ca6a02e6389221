//! Combinators over futures that resolve to a [`Maybe`].
//!
//! [`MaybeFutureExt`] is blanket-implemented for every
//! `Future<Output = Maybe<T>>`. As with the outcome flavor, each method
//! suspends on the source first and only then decides whether its
//! continuation runs, so the short-circuit contract is uniform across
//! zero, one, or two suspensions.

use std::future::Future;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Extension trait providing combinator methods for futures of maybes.
///
/// Automatically implemented for every `Future<Output = Maybe<T>>`;
/// import the trait to use the methods.
///
/// # Example
///
/// ```rust
/// use clearwater::future::MaybeFutureExt;
/// use clearwater::Maybe;
///
/// # tokio_test::block_on(async {
/// let m = async { Maybe::present(21) }.map(|x| x * 2).await;
/// assert_eq!(m, Maybe::present(42));
/// # });
/// ```
#[allow(async_fn_in_trait)]
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    // ========== Synchronous continuations ==========

    /// Transform the contained value once the source resolves.
    async fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map(f)
    }

    /// Chain a dependent computation once the source resolves.
    async fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.await.and_then(f)
    }

    /// Perform a side effect on the contained value, passing the maybe
    /// through.
    async fn tap<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&T),
    {
        self.await.tap(f)
    }

    /// Perform a side effect only when no value is present.
    async fn tap_absent<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(),
    {
        self.await.tap_absent(f)
    }

    /// Gate the contained value through a predicate once the source
    /// resolves.
    async fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.await.filter(predicate)
    }

    /// Fold both branches into a single value once the source resolves.
    async fn fold<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        self.await.fold(on_present, on_absent)
    }

    /// Replace `Absent` with an already-evaluated fallback.
    async fn or(self, fallback: Maybe<T>) -> Maybe<T> {
        self.await.or(fallback)
    }

    /// Replace `Absent` with a lazily-produced fallback.
    ///
    /// The factory is invoked exactly once on `Absent` and never when a
    /// value is present.
    async fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        self.await.or_else(f)
    }

    /// Lift the resolved maybe into an [`Outcome`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::future::MaybeFutureExt;
    /// use clearwater::{Maybe, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let out = async { Maybe::<i32>::absent() }.to_outcome("missing").await;
    /// assert_eq!(out, Outcome::failure("missing"));
    /// # });
    /// ```
    async fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        self.await.to_outcome(error)
    }

    /// Lift the resolved maybe into an [`Outcome`], constructing the
    /// error lazily.
    async fn to_outcome_else<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        self.await.to_outcome_else(f)
    }

    /// Transform the contained value inside a protected region.
    async fn map_safe<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map_safe(f)
    }

    /// Chain a dependent computation inside a protected region.
    async fn and_then_safe<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.await.and_then_safe(f)
    }

    /// Perform a protected side effect on the contained value.
    async fn tap_safe<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&T),
    {
        self.await.tap_safe(f)
    }

    // ========== Asynchronous continuations ==========

    /// Transform the contained value through an async continuation.
    async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.map_async(f).await
    }

    /// Chain a dependent async computation, flattening the nested maybe.
    async fn and_then_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        self.await.and_then_async(f).await
    }

    /// Perform an async side effect on the contained value.
    async fn tap_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.tap_async(f).await
    }

    /// Perform an async side effect only when no value is present.
    async fn tap_absent_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.tap_absent_async(f).await
    }

    /// Gate the contained value through an async predicate.
    async fn filter_async<P, Fut>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.await.filter_async(predicate).await
    }

    /// Replace `Absent` with an async lazily-produced fallback.
    async fn or_else_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<T>>,
    {
        self.await.or_else_async(f).await
    }

    /// Fold both branches through async handlers.
    async fn fold_async<U, P, FutP, A, FutA>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> FutP,
        FutP: Future<Output = U>,
        A: FnOnce() -> FutA,
        FutA: Future<Output = U>,
    {
        self.await.fold_async(on_present, on_absent).await
    }

    /// Transform the contained value through a protected async
    /// continuation.
    async fn map_safe_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.map_safe_async(f).await
    }

    /// Chain a dependent async computation inside a protected region.
    async fn and_then_safe_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        self.await.and_then_safe_async(f).await
    }

    /// Perform a protected async side effect on the contained value.
    async fn tap_safe_async<F, Fut>(self, f: F) -> Maybe<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.tap_safe_async(f).await
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallCounter;

    fn present(value: i32) -> impl Future<Output = Maybe<i32>> {
        async move { Maybe::present(value) }
    }

    fn absent() -> impl Future<Output = Maybe<i32>> {
        async { Maybe::Absent }
    }

    #[tokio::test]
    async fn map_awaits_source_then_applies() {
        assert_eq!(present(5).map(|x| x * 2).await, Maybe::present(10));
        assert_eq!(absent().map(|x| x * 2).await, Maybe::absent());
    }

    #[tokio::test]
    async fn filter_gates_resolved_value() {
        assert_eq!(present(10).filter(|x| *x > 5).await, Maybe::present(10));
        assert_eq!(present(3).filter(|x| *x > 5).await, Maybe::absent());
    }

    #[tokio::test]
    async fn to_outcome_lifts_resolved_maybe() {
        assert_eq!(present(1).to_outcome("missing").await, Outcome::success(1));
        assert_eq!(
            absent().to_outcome("missing").await,
            Outcome::failure("missing")
        );
    }

    #[tokio::test]
    async fn or_else_factory_counts_across_suspension() {
        let calls = CallCounter::new();
        let m = present(1)
            .or_else(|| {
                calls.tick();
                Maybe::present(0)
            })
            .await;
        assert_eq!(m, Maybe::present(1));
        assert_eq!(calls.count(), 0);

        let m = absent()
            .or_else(|| {
                calls.tick();
                Maybe::present(0)
            })
            .await;
        assert_eq!(m, Maybe::present(0));
        assert_eq!(calls.count(), 1);
    }

    #[tokio::test]
    async fn and_then_async_skips_continuation_on_absent() {
        let calls = CallCounter::new();
        let m = absent()
            .and_then_async(|x| {
                calls.tick();
                async move { Maybe::present(x) }
            })
            .await;
        assert_eq!(m, Maybe::absent());
        assert_eq!(calls.count(), 0);
    }

    #[tokio::test]
    async fn safe_variants_convert_panics_to_absent() {
        let m = present(1).map_safe(|_| -> i32 { panic!("sync") }).await;
        assert_eq!(m, Maybe::absent());

        let m = present(1)
            .map_safe_async(|_| async move { panic!("async") })
            .await;
        assert_eq!(m, Maybe::<i32>::absent());
    }
}
