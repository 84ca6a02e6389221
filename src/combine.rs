//! N-ary combination of outcomes with first-failure short-circuit.
//!
//! This module provides the [`CombineAll`] trait, implemented for tuples of
//! [`Outcome`] values up to arity 12. Inputs are inspected strictly in
//! left-to-right order; the first `Failure` becomes the overall result and
//! later elements are never inspected.
//!
//! Two entry points cover the two shapes callers need:
//! - [`combine_values`](CombineAll::combine_values) keeps the unwrapped
//!   success values as a tuple;
//! - [`combine`](CombineAll::combine) discards them, yielding
//!   `Success(())` when every input succeeded.
//!
//! For tuples of futures-of-outcome, see `CombineAllAsync` in the `future`
//! module (feature `async`).
//!
//! # Examples
//!
//! ```rust
//! use clearwater::{CombineAll, Outcome};
//!
//! let combined = (
//!     Outcome::<_, String>::success(1),
//!     Outcome::<_, String>::success(2.5),
//!     Outcome::<_, String>::success("three"),
//! )
//!     .combine_values();
//! assert_eq!(combined, Outcome::success((1, 2.5, "three")));
//!
//! let first_failure = (
//!     Outcome::<i32, _>::success(1),
//!     Outcome::<i32, _>::failure("e1"),
//!     Outcome::<i32, _>::failure("e2"),
//! )
//!     .combine_values();
//! assert_eq!(first_failure, Outcome::failure("e1"));
//! ```

use crate::outcome::Outcome;

/// Combine a tuple of outcomes into a single outcome.
///
/// Implemented for tuples of `Outcome<_, E>` with arities 1 through 12.
/// All elements must share the error type; the success types may differ
/// freely.
pub trait CombineAll<E> {
    /// Tuple of the unwrapped success values.
    type Values;

    /// Combine, keeping the unwrapped success values.
    ///
    /// Returns the first `Failure` in left-to-right order, or `Success`
    /// wrapping the tuple of all values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{CombineAll, Outcome};
    ///
    /// let out = (
    ///     Outcome::<_, String>::success(1),
    ///     Outcome::<_, String>::success(2),
    /// )
    ///     .combine_values();
    /// assert_eq!(out, Outcome::success((1, 2)));
    /// ```
    fn combine_values(self) -> Outcome<Self::Values, E>;

    /// Combine, discarding the success values.
    ///
    /// Returns the first `Failure` in left-to-right order, or
    /// `Success(())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{CombineAll, Outcome};
    ///
    /// let out = (
    ///     Outcome::<_, &str>::success(1),
    ///     Outcome::<_, &str>::success("two"),
    /// )
    ///     .combine();
    /// assert_eq!(out, Outcome::success(()));
    /// ```
    fn combine(self) -> Outcome<(), E>
    where
        Self: Sized,
    {
        self.combine_values().map(|_| ())
    }
}

impl<T, E> Outcome<T, E> {
    /// Combine a tuple of outcomes, keeping the unwrapped success values.
    ///
    /// Associated-function form of
    /// [`CombineAll::combine_values`]; the first `Failure` in
    /// left-to-right order wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::combine_values((
    ///     Outcome::<_, String>::success(1),
    ///     Outcome::<_, String>::success(2),
    ///     Outcome::<_, String>::success(3),
    /// ));
    /// assert_eq!(out, Outcome::success((1, 2, 3)));
    /// ```
    pub fn combine_values<C>(outcomes: C) -> Outcome<T, E>
    where
        C: CombineAll<E, Values = T>,
    {
        outcomes.combine_values()
    }
}

impl<E> Outcome<(), E> {
    /// Combine a tuple of outcomes, discarding the success values.
    ///
    /// Associated-function form of [`CombineAll::combine`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::combine((
    ///     Outcome::<_, String>::success(1),
    ///     Outcome::<_, String>::success("two"),
    /// ));
    /// assert_eq!(out, Outcome::success(()));
    /// ```
    pub fn combine<C>(outcomes: C) -> Outcome<(), E>
    where
        C: CombineAll<E>,
    {
        outcomes.combine()
    }
}

macro_rules! impl_combine_all {
    ($($T:ident),+) => {
        impl<E, $($T),+> CombineAll<E> for ($(Outcome<$T, E>,)+) {
            type Values = ($($T,)+);

            #[allow(non_snake_case)]
            fn combine_values(self) -> Outcome<Self::Values, E> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($T,)+))
            }
        }
    };
}

impl_combine_all!(T1);
impl_combine_all!(T1, T2);
impl_combine_all!(T1, T2, T3);
impl_combine_all!(T1, T2, T3, T4);
impl_combine_all!(T1, T2, T3, T4, T5);
impl_combine_all!(T1, T2, T3, T4, T5, T6);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);
