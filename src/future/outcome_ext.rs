//! Combinators over futures that resolve to an [`Outcome`].
//!
//! [`OutcomeFutureExt`] is blanket-implemented for every
//! `Future<Output = Outcome<T, E>>`, covering the async-source shapes:
//! each method suspends on the source first, and only once the
//! discriminant is known decides whether to run (and possibly await) its
//! continuation. The bodies delegate to the synchronous and `*_async`
//! surfaces on `Outcome`, so all four source/continuation shapes share
//! one set of semantics.

use std::future::Future;

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Extension trait providing combinator methods for futures of outcomes.
///
/// Automatically implemented for every `Future<Output = Outcome<T, E>>`;
/// import the trait to use the methods. Continuations observe the same
/// contract as the synchronous surface: invoked at most once, only when
/// their branch is selected, with failures short-circuiting past every
/// downstream step.
///
/// # Example
///
/// ```rust
/// use clearwater::future::OutcomeFutureExt;
/// use clearwater::Outcome;
///
/// # tokio_test::block_on(async {
/// let out = async { Outcome::<_, String>::success(21) }
///     .map(|x| x * 2)
///     .await;
/// assert_eq!(out, Outcome::success(42));
/// # });
/// ```
#[allow(async_fn_in_trait)]
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    // ========== Synchronous continuations ==========

    /// Transform the success value once the source resolves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::future::OutcomeFutureExt;
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = async { Outcome::<_, String>::success(5) }.map(|x| x * 2).await;
    /// assert_eq!(out, Outcome::success(10));
    /// # });
    /// ```
    async fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.await.map(f)
    }

    /// Transform the error payload once the source resolves.
    async fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.await.map_err(f)
    }

    /// Chain a dependent computation once the source resolves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::future::OutcomeFutureExt;
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = async { Outcome::<_, String>::success(2) }
    ///     .and_then(|x| Outcome::success(x + 1))
    ///     .await;
    /// assert_eq!(out, Outcome::success(3));
    /// # });
    /// ```
    async fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.await.and_then(f)
    }

    /// Perform a side effect on the success value, passing the outcome
    /// through.
    async fn tap<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&T),
    {
        self.await.tap(f)
    }

    /// Perform a side effect on the error payload, passing the outcome
    /// through.
    async fn tap_err<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&E),
    {
        self.await.tap_err(f)
    }

    /// Gate the success value through a predicate once the source
    /// resolves.
    async fn ensure<P>(self, predicate: P, error: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
    {
        self.await.ensure(predicate, error)
    }

    /// Gate the success value, constructing the error lazily from the
    /// rejected value.
    async fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        self.await.ensure_with(predicate, error_fn)
    }

    /// Fold both branches into a single value once the source resolves.
    async fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        self.await.fold(on_success, on_failure)
    }

    /// Replace a `Failure` with an already-evaluated fallback.
    async fn or(self, fallback: Outcome<T, E>) -> Outcome<T, E> {
        self.await.or(fallback)
    }

    /// Replace a `Failure` with a lazily-produced fallback.
    ///
    /// The factory is invoked exactly once on `Failure` and never on
    /// `Success`, regardless of how many suspensions preceded it.
    async fn or_else<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> Outcome<T, E>,
    {
        self.await.or_else(f)
    }

    /// Merge both branches through an unconditional terminal function.
    async fn finally<U, F>(self, f: F) -> U
    where
        F: FnOnce(Outcome<T, E>) -> U,
    {
        self.await.finally(f)
    }

    /// Transform the success value inside a protected region.
    async fn map_safe<U, F, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(Fault) -> E,
    {
        self.await.map_safe(f, on_fault)
    }

    /// Chain a dependent computation inside a protected region.
    async fn and_then_safe<U, F, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        H: FnOnce(Fault) -> E,
    {
        self.await.and_then_safe(f, on_fault)
    }

    /// Perform a protected side effect on the success value.
    async fn tap_safe<F, H>(self, f: F, on_fault: H) -> Outcome<T, E>
    where
        F: FnOnce(&T),
        H: FnOnce(Fault) -> E,
    {
        self.await.tap_safe(f, on_fault)
    }

    // ========== Asynchronous continuations ==========

    /// Transform the success value through an async continuation.
    ///
    /// Suspends up to twice: once for the source, and once for the
    /// continuation when the source succeeded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::future::OutcomeFutureExt;
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = async { Outcome::<_, String>::success(5) }
    ///     .map_async(|x| async move { x * 2 })
    ///     .await;
    /// assert_eq!(out, Outcome::success(10));
    /// # });
    /// ```
    async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.map_async(f).await
    }

    /// Transform the error payload through an async continuation.
    async fn map_err_async<E2, F, Fut>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        self.await.map_err_async(f).await
    }

    /// Chain a dependent async computation, flattening the nested
    /// outcome.
    async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        self.await.and_then_async(f).await
    }

    /// Perform an async side effect on the success value.
    async fn tap_async<F, Fut>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.tap_async(f).await
    }

    /// Perform an async side effect on the error payload.
    async fn tap_err_async<F, Fut>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.tap_err_async(f).await
    }

    /// Gate the success value through an async predicate.
    async fn ensure_async<P, Fut>(self, predicate: P, error: E) -> Outcome<T, E>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.await.ensure_async(predicate, error).await
    }

    /// Replace a `Failure` with an async lazily-produced fallback.
    async fn or_else_async<F, Fut>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, E>>,
    {
        self.await.or_else_async(f).await
    }

    /// Fold both branches through async handlers.
    async fn fold_async<U, S, FutS, F, FutF>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> FutS,
        FutS: Future<Output = U>,
        F: FnOnce(E) -> FutF,
        FutF: Future<Output = U>,
    {
        self.await.fold_async(on_success, on_failure).await
    }

    /// Merge both branches through an unconditional async terminal
    /// function.
    async fn finally_async<U, F, Fut>(self, f: F) -> U
    where
        F: FnOnce(Outcome<T, E>) -> Fut,
        Fut: Future<Output = U>,
    {
        self.await.finally_async(f).await
    }

    /// Transform the success value through a protected async
    /// continuation.
    async fn map_safe_async<U, F, Fut, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
        H: FnOnce(Fault) -> E,
    {
        self.await.map_safe_async(f, on_fault).await
    }

    /// Chain a dependent async computation inside a protected region.
    async fn and_then_safe_async<U, F, Fut, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
        H: FnOnce(Fault) -> E,
    {
        self.await.and_then_safe_async(f, on_fault).await
    }

    /// Perform a protected async side effect on the success value.
    async fn tap_safe_async<F, Fut, H>(self, f: F, on_fault: H) -> Outcome<T, E>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
        H: FnOnce(Fault) -> E,
    {
        self.await.tap_safe_async(f, on_fault).await
    }
}

impl<T, E, Fut> OutcomeFutureExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}
