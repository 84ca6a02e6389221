//! Asynchronous continuations for an already-evaluated [`Maybe`].
//!
//! Sync-source/async-continuation shapes, mirroring the `Outcome`
//! surface with `Absent` as the short-circuiting branch. On `Absent` the
//! continuation future is never constructed and no suspension occurs.

use std::future::Future;

use crate::future::protect::protect_future;
use crate::maybe::Maybe;

impl<T> Maybe<T> {
    /// Transform the contained value through an async continuation.
    ///
    /// Async sibling of [`map`](Maybe::map).
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Maybe;
    ///
    /// # tokio_test::block_on(async {
    /// let m = Maybe::present(5).map_async(|x| async move { x * 2 }).await;
    /// assert_eq!(m, Maybe::present(10));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value).await),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a dependent async computation, flattening the nested maybe.
    ///
    /// Async sibling of [`and_then`](Maybe::and_then).
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Maybe::Present(value) => f(value).await,
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Perform an async side effect on the contained value, returning
    /// self unchanged.
    ///
    /// Async sibling of [`tap`](Maybe::tap). The continuation receives a
    /// reference and must return a future that owns everything it needs.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Maybe::Present(value) = &self {
            f(value).await;
        }
        self
    }

    /// Perform an async side effect only when no value is present.
    ///
    /// Async sibling of [`tap_absent`](Maybe::tap_absent).
    pub async fn tap_absent_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_absent() {
            f().await;
        }
        self
    }

    /// Gate the contained value through an async predicate.
    ///
    /// Async sibling of [`filter`](Maybe::filter).
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Maybe::Present(value) => {
                if predicate(&value).await {
                    Maybe::Present(value)
                } else {
                    Maybe::Absent
                }
            }
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Replace `Absent` with an async lazily-produced fallback.
    ///
    /// Async sibling of [`or_else`](Maybe::or_else); the factory is
    /// invoked exactly once on `Absent` and never when a value is
    /// present.
    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<T>>,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => f().await,
        }
    }

    /// Fold both branches into a single value through async handlers.
    ///
    /// Async sibling of [`fold`](Maybe::fold).
    pub async fn fold_async<U, P, FutP, A, FutA>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> FutP,
        FutP: Future<Output = U>,
        A: FnOnce() -> FutA,
        FutA: Future<Output = U>,
    {
        match self {
            Maybe::Present(value) => on_present(value).await,
            Maybe::Absent => on_absent().await,
        }
    }

    /// Transform the contained value through a protected async
    /// continuation.
    ///
    /// Async sibling of [`map_safe`](Maybe::map_safe): a panic raised
    /// while constructing or polling the continuation yields `Absent`.
    pub async fn map_safe_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Maybe::Present(value) => match protect_future(move || f(value), |_| ()).await {
                Ok(mapped) => Maybe::Present(mapped),
                Err(()) => Maybe::Absent,
            },
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a dependent async computation inside a protected region.
    ///
    /// Async sibling of [`and_then_safe`](Maybe::and_then_safe).
    pub async fn and_then_safe_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Maybe::Present(value) => match protect_future(move || f(value), |_| ()).await {
                Ok(maybe) => maybe,
                Err(()) => Maybe::Absent,
            },
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Perform a protected async side effect on the contained value.
    ///
    /// Async sibling of [`tap_safe`](Maybe::tap_safe): a panic raised by
    /// the action turns the whole maybe into `Absent`.
    pub async fn tap_safe_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        match self {
            Maybe::Present(value) => match protect_future(|| f(&value), |_| ()).await {
                Ok(()) => Maybe::Present(value),
                Err(()) => Maybe::Absent,
            },
            Maybe::Absent => Maybe::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallCounter;

    #[tokio::test]
    async fn map_async_skips_continuation_on_absent() {
        let calls = CallCounter::new();
        let m = Maybe::<i32>::absent()
            .map_async(|x| {
                calls.tick();
                async move { x * 2 }
            })
            .await;
        assert_eq!(m, Maybe::absent());
        assert_eq!(calls.count(), 0);
    }

    #[tokio::test]
    async fn and_then_async_flattens() {
        let m = Maybe::present(2)
            .and_then_async(|x| async move { Maybe::present(x + 1) })
            .await;
        assert_eq!(m, Maybe::present(3));
    }

    #[tokio::test]
    async fn filter_async_gates_present() {
        let m = Maybe::present(10)
            .filter_async(|x| {
                let x = *x;
                async move { x > 5 }
            })
            .await;
        assert_eq!(m, Maybe::present(10));

        let m = Maybe::present(3)
            .filter_async(|x| {
                let x = *x;
                async move { x > 5 }
            })
            .await;
        assert_eq!(m, Maybe::absent());
    }

    #[tokio::test]
    async fn or_else_async_factory_counts() {
        let calls = CallCounter::new();
        let m = Maybe::present(1)
            .or_else_async(|| {
                calls.tick();
                async { Maybe::present(0) }
            })
            .await;
        assert_eq!(m, Maybe::present(1));
        assert_eq!(calls.count(), 0);

        let m = Maybe::<i32>::absent()
            .or_else_async(|| {
                calls.tick();
                async { Maybe::present(0) }
            })
            .await;
        assert_eq!(m, Maybe::present(0));
        assert_eq!(calls.count(), 1);
    }

    #[tokio::test]
    async fn fold_async_selects_one_handler() {
        let merged = Maybe::present(2)
            .fold_async(|v| async move { v * 10 }, || async { -1 })
            .await;
        assert_eq!(merged, 20);

        let merged = Maybe::<i32>::absent()
            .fold_async(|v| async move { v * 10 }, || async { -1 })
            .await;
        assert_eq!(merged, -1);
    }

    #[tokio::test]
    async fn safe_async_variants_convert_panics_to_absent() {
        let m = Maybe::present(1)
            .map_safe_async(|_| async move { panic!("boom") })
            .await;
        assert_eq!(m, Maybe::<i32>::absent());

        let m = Maybe::present(1)
            .and_then_safe_async(|_| async move { panic!("boom") })
            .await;
        assert_eq!(m, Maybe::<i32>::absent());

        let m = Maybe::present(1)
            .tap_safe_async(|_| async { panic!("boom") })
            .await;
        assert_eq!(m, Maybe::absent());
    }

    #[tokio::test]
    async fn tap_absent_async_runs_only_on_absent() {
        let calls = CallCounter::new();
        let _ = Maybe::present(1)
            .tap_absent_async(|| {
                calls.tick();
                async {}
            })
            .await;
        let _ = Maybe::<i32>::absent()
            .tap_absent_async(|| {
                calls.tick();
                async {}
            })
            .await;
        assert_eq!(calls.count(), 1);
    }
}
