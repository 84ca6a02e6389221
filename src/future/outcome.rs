//! Asynchronous continuations for an already-evaluated [`Outcome`].
//!
//! These are the sync-source/async-continuation shapes: the discriminant
//! is already known, so each method decides immediately whether to
//! suspend awaiting its continuation. The short-circuit rules are
//! identical to the synchronous surface - a `Failure` passes through and
//! the continuation future is never even constructed.

use std::future::Future;

use crate::fault::Fault;
use crate::future::protect::protect_future;
use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Transform the success value through an async continuation.
    ///
    /// Async sibling of [`map`](Outcome::map): on `Failure` the
    /// continuation is never invoked and no suspension occurs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = Outcome::<_, String>::success(5)
    ///     .map_async(|x| async move { x * 2 })
    ///     .await;
    /// assert_eq!(out, Outcome::success(10));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value).await),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error payload through an async continuation.
    ///
    /// Async sibling of [`map_err`](Outcome::map_err).
    pub async fn map_err_async<E2, F, Fut>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error).await),
        }
    }

    /// Chain a dependent async computation, flattening the nested outcome.
    ///
    /// Async sibling of [`and_then`](Outcome::and_then).
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = Outcome::<_, String>::success(8)
    ///     .and_then_async(|x| async move {
    ///         if x % 2 == 0 {
    ///             Outcome::success(x / 2)
    ///         } else {
    ///             Outcome::failure("odd".to_string())
    ///         }
    ///     })
    ///     .await;
    /// assert_eq!(out, Outcome::success(4));
    /// # });
    /// ```
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Success(value) => f(value).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Perform an async side effect on the success value, returning self
    /// unchanged.
    ///
    /// Async sibling of [`tap`](Outcome::tap). The continuation receives
    /// a reference and must return a future that owns everything it
    /// needs; clone inside the closure before constructing the future.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Outcome::Success(value) = &self {
            f(value).await;
        }
        self
    }

    /// Perform an async side effect on the error payload, returning self
    /// unchanged.
    ///
    /// Async sibling of [`tap_err`](Outcome::tap_err).
    pub async fn tap_err_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Outcome::Failure(error) = &self {
            f(error).await;
        }
        self
    }

    /// Gate the success value through an async predicate.
    ///
    /// Async sibling of [`ensure`](Outcome::ensure); a `Failure` input
    /// bypasses the predicate entirely.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = Outcome::<_, &str>::success(10)
    ///     .ensure_async(|x| {
    ///         let x = *x;
    ///         async move { x > 5 }
    ///     }, "too small")
    ///     .await;
    /// assert_eq!(out, Outcome::success(10));
    /// # });
    /// ```
    pub async fn ensure_async<P, Fut>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Outcome::Success(value) => {
                if predicate(&value).await {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(error)
                }
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Replace a `Failure` with an async lazily-produced fallback.
    ///
    /// Async sibling of [`or_else`](Outcome::or_else); the factory is
    /// invoked exactly once on `Failure` and never on `Success`.
    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, E>>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error).await,
        }
    }

    /// Fold both branches into a single value through async handlers.
    ///
    /// Async sibling of [`fold`](Outcome::fold); exactly one of the two
    /// continuations is constructed and awaited.
    pub async fn fold_async<U, S, FutS, F, FutF>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> FutS,
        FutS: Future<Output = U>,
        F: FnOnce(E) -> FutF,
        FutF: Future<Output = U>,
    {
        match self {
            Outcome::Success(value) => on_success(value).await,
            Outcome::Failure(error) => on_failure(error).await,
        }
    }

    /// Merge both branches through an unconditional async terminal
    /// function.
    ///
    /// Async sibling of [`finally`](Outcome::finally); `f` is invoked
    /// exactly once with the outcome itself.
    pub async fn finally_async<U, F, Fut>(self, f: F) -> U
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = U>,
    {
        f(self).await
    }

    /// Transform the success value through a protected async
    /// continuation.
    ///
    /// Async sibling of [`map_safe`](Outcome::map_safe): a panic raised
    /// while constructing or polling the continuation becomes
    /// `Failure(on_fault(fault))`. A `Failure` input passes through
    /// without invoking either closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = Outcome::<i32, String>::success(1)
    ///     .map_safe_async(
    ///         |_| async move { panic!("remote call blew up") },
    ///         |fault| fault.message().to_string(),
    ///     )
    ///     .await;
    /// assert_eq!(out, Outcome::<i32, String>::failure("remote call blew up".to_string()));
    /// # });
    /// ```
    pub async fn map_safe_async<U, F, Fut, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Outcome::Success(value) => match protect_future(move || f(value), on_fault).await {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a dependent async computation inside a protected region.
    ///
    /// Async sibling of [`and_then_safe`](Outcome::and_then_safe): the
    /// protection covers constructing and polling the continuation, not
    /// the outcome it resolves to.
    pub async fn and_then_safe_async<U, F, Fut, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Outcome::Success(value) => match protect_future(move || f(value), on_fault).await {
                Ok(outcome) => outcome,
                Err(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Perform a protected async side effect on the success value.
    ///
    /// Async sibling of [`tap_safe`](Outcome::tap_safe): a panic raised
    /// by the action converts the whole outcome into a `Failure` and the
    /// original success value is lost.
    pub async fn tap_safe_async<F, Fut, H>(self, f: F, on_fault: H) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Outcome::Success(value) => match protect_future(|| f(&value), on_fault).await {
                Ok(()) => Outcome::Success(value),
                Err(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
