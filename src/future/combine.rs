//! N-ary combination of futures-of-outcome with first-failure
//! short-circuit.
//!
//! [`CombineAllAsync`] mirrors [`CombineAll`](crate::combine::CombineAll)
//! for tuples of futures, arities 1 through 8. Inputs are awaited
//! strictly in argument order; once an input resolves to `Failure`, the
//! remaining futures are dropped without being awaited. Their *use* is
//! skipped - an already-started task passed in keeps whatever host-level
//! concurrency it has, but a plain future that has not been polled yet
//! never runs.
//!
//! # Examples
//!
//! ```rust
//! use clearwater::future::CombineAllAsync;
//! use clearwater::Outcome;
//!
//! # tokio_test::block_on(async {
//! let combined = (
//!     async { Outcome::<_, String>::success(1) },
//!     async { Outcome::<_, String>::success("two") },
//! )
//!     .combine_values()
//!     .await;
//! assert_eq!(combined, Outcome::success((1, "two")));
//! # });
//! ```

use std::future::Future;

use crate::outcome::Outcome;

/// Combine a tuple of futures-of-outcome into a single outcome.
///
/// Implemented for tuples of `Future<Output = Outcome<_, E>>` with
/// arities 1 through 8. All elements must share the error type; the
/// success types may differ freely.
#[allow(async_fn_in_trait)]
pub trait CombineAllAsync<E> {
    /// Tuple of the unwrapped success values.
    type Values;

    /// Await each input in argument order, keeping the unwrapped success
    /// values.
    ///
    /// Returns the first `Failure` encountered; later futures are
    /// dropped unawaited at that point.
    async fn combine_values(self) -> Outcome<Self::Values, E>;

    /// Await each input in argument order, discarding the success
    /// values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::future::CombineAllAsync;
    /// use clearwater::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let out = (
    ///     async { Outcome::<_, String>::success(1) },
    ///     async { Outcome::<_, String>::success(2) },
    /// )
    ///     .combine()
    ///     .await;
    /// assert_eq!(out, Outcome::success(()));
    /// # });
    /// ```
    async fn combine(self) -> Outcome<(), E>
    where
        Self: Sized,
    {
        self.combine_values().await.map(|_| ())
    }
}

macro_rules! impl_combine_all_async {
    ($(($F:ident, $T:ident)),+) => {
        impl<E, $($T,)+ $($F,)+> CombineAllAsync<E> for ($($F,)+)
        where
            $($F: Future<Output = Outcome<$T, E>>,)+
        {
            type Values = ($($T,)+);

            #[allow(non_snake_case)]
            async fn combine_values(self) -> Outcome<Self::Values, E> {
                let ($($F,)+) = self;
                $(
                    let $F = match $F.await {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($F,)+))
            }
        }
    };
}

impl_combine_all_async!((F1, T1));
impl_combine_all_async!((F1, T1), (F2, T2));
impl_combine_all_async!((F1, T1), (F2, T2), (F3, T3));
impl_combine_all_async!((F1, T1), (F2, T2), (F3, T3), (F4, T4));
impl_combine_all_async!((F1, T1), (F2, T2), (F3, T3), (F4, T4), (F5, T5));
impl_combine_all_async!((F1, T1), (F2, T2), (F3, T3), (F4, T4), (F5, T5), (F6, T6));
impl_combine_all_async!(
    (F1, T1),
    (F2, T2),
    (F3, T3),
    (F4, T4),
    (F5, T5),
    (F6, T6),
    (F7, T7)
);
impl_combine_all_async!(
    (F1, T1),
    (F2, T2),
    (F3, T3),
    (F4, T4),
    (F5, T5),
    (F6, T6),
    (F7, T7),
    (F8, T8)
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallCounter;

    #[tokio::test]
    async fn all_success_yields_value_tuple() {
        let out = (
            async { Outcome::<_, String>::success(1) },
            async { Outcome::<_, String>::success(2) },
            async { Outcome::<_, String>::success(3) },
        )
            .combine_values()
            .await;
        assert_eq!(out, Outcome::success((1, 2, 3)));
    }

    #[tokio::test]
    async fn first_failure_wins() {
        let out = (
            async { Outcome::<i32, _>::success(1) },
            async { Outcome::<i32, _>::failure("e1".to_string()) },
            async { Outcome::<i32, _>::failure("e2".to_string()) },
        )
            .combine_values()
            .await;
        assert_eq!(out, Outcome::failure("e1".to_string()));
    }

    #[tokio::test]
    async fn later_futures_are_not_polled_after_a_failure() {
        let polled = CallCounter::new();
        let out = (
            async { Outcome::<i32, String>::success(1) },
            async { Outcome::<i32, String>::failure("e".to_string()) },
            async {
                polled.tick();
                Outcome::<i32, String>::success(3)
            },
        )
            .combine_values()
            .await;
        assert_eq!(out, Outcome::failure("e".to_string()));
        assert_eq!(polled.count(), 0);
    }

    #[tokio::test]
    async fn combine_discards_values() {
        let out = (
            async { Outcome::<_, String>::success(1) },
            async { Outcome::<_, String>::success("two") },
        )
            .combine()
            .await;
        assert_eq!(out, Outcome::success(()));
    }

    #[tokio::test]
    async fn single_element_tuple() {
        let out = (async { Outcome::<_, String>::success(7) },)
            .combine_values()
            .await;
        assert_eq!(out, Outcome::success((7,)));
    }
}
