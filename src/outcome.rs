//! Outcome type for short-circuiting success/failure composition.
//!
//! This module provides the `Outcome` type, a two-variant sum representing
//! either a successful value or a failure payload. Unlike validation-style
//! types that accumulate errors, `Outcome` is railway-oriented: the first
//! failure wins and every downstream step is skipped.
//!
//! # Outcome vs Result
//!
//! `Outcome<T, E>` carries the same information as `Result<T, E>` and
//! converts losslessly both ways. It exists to host a richer combinator
//! surface - `tap`, `ensure`, `fold`, `finally`, n-ary `combine`, and the
//! panic-containing `*_safe` variants - with identical semantics whether
//! the source is an already-evaluated value or an awaitable (see the
//! `future` module, feature `async`).
//!
//! # Short-circuit discipline
//!
//! Every combinator observes the same rules:
//! - a continuation runs at most once, and only when its branch is selected;
//! - a `Failure` passes through `map`/`and_then`/`tap`/`ensure` untouched,
//!   and the supplied closure is never invoked;
//! - lazy fallbacks (`or_else`) are invoked exactly once on `Failure` and
//!   never on `Success`.
//!
//! # Examples
//!
//! ```rust
//! use clearwater::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from(raw.parse::<u16>().map_err(|e| e.to_string()))
//! }
//!
//! let port = parse_port("8080")
//!     .ensure(|p| *p >= 1024, "reserved port".to_string())
//!     .map(|p| p + 1);
//! assert_eq!(port, Outcome::success(8081));
//!
//! let bad = parse_port("80")
//!     .ensure(|p| *p >= 1024, "reserved port".to_string())
//!     .map(|p| p + 1);
//! assert_eq!(bad, Outcome::failure("reserved port".to_string()));
//! ```

use crate::fault::{protect, Fault};
use crate::maybe::Maybe;

/// A value that is either `Success(T)` or `Failure(E)`.
///
/// `Outcome` is the success/failure half of this crate's combinator
/// algebra. Exactly one payload is meaningful; reading the wrong one
/// through [`value`](Outcome::value) or [`error`](Outcome::error) is a
/// programming error and panics immediately rather than silently
/// defaulting. Use [`into_value`](Outcome::into_value) /
/// [`into_error`](Outcome::into_error) for non-panicking access.
///
/// Equality and hashing are structural: two outcomes are equal iff both
/// are `Success` with equal values or both `Failure` with equal errors.
///
/// # Example
///
/// ```rust
/// use clearwater::Outcome;
///
/// let hit: Outcome<i32, String> = Outcome::success(42);
/// let miss: Outcome<i32, String> = Outcome::failure("not found".to_string());
///
/// assert!(hit.is_success());
/// assert_eq!(hit, Outcome::success(42));
/// assert_ne!(hit, miss);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error payload.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<i32, String>::success(42);
    /// assert!(out.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<i32, String>::failure("nope".to_string());
    /// assert!(out.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Create an outcome from a `Result`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// assert_eq!(Outcome::from_result(Ok::<_, String>(1)), Outcome::success(1));
    /// assert_eq!(
    ///     Outcome::from_result(Err::<i32, _>("e".to_string())),
    ///     Outcome::failure("e".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Convert this outcome into a `Result`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<_, String>::success(1);
    /// assert_eq!(out.into_result(), Ok(1));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Accessors ==========

    /// Returns a reference to the success value.
    ///
    /// Reading the value of a `Failure` is a programming error: this
    /// accessor panics loudly instead of returning a default, so misuse
    /// surfaces immediately during development. Use
    /// [`into_value`](Outcome::into_value) when the variant is not known.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<_, String>::success(42);
    /// assert_eq!(*out.value(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => panic!("called `Outcome::value()` on a `Failure` value"),
        }
    }

    /// Returns a reference to the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<i32, _>::failure("broken");
    /// assert_eq!(*out.error(), "broken");
    /// ```
    #[inline]
    #[track_caller]
    pub fn error(&self) -> &E {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::error()` on a `Success` value"),
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the success value if present, consuming self. Never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// assert_eq!(Outcome::<_, String>::success(1).into_value(), Some(1));
    /// assert_eq!(Outcome::<i32, _>::failure("e").into_value(), None);
    /// ```
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the error payload if present, consuming self. Never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, _>::failure("e").into_error(), Some("e"));
    /// assert_eq!(Outcome::<_, String>::success(1).into_error(), None);
    /// ```
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Returns the success value or the supplied default.
    ///
    /// The default is already evaluated at the call site; use
    /// [`value_or_else`](Outcome::value_or_else) when computing it is
    /// expensive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// assert_eq!(Outcome::<_, String>::success(7).value_or(0), 7);
    /// assert_eq!(Outcome::<i32, _>::failure("e").value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<usize, _>::failure("boom");
    /// assert_eq!(out.value_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Convert to `Outcome<&T, &E>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(out.as_ref(), Outcome::success(&42));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    // ========== Combinators ==========

    /// Transform the success value. A `Failure` passes through unchanged
    /// and `f` is never invoked.
    ///
    /// A panic raised by `f` propagates to the caller; use
    /// [`map_safe`](Outcome::map_safe) to convert it into a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<_, String>::success(5).map(|x| x * 2);
    /// assert_eq!(out, Outcome::success(10));
    ///
    /// let out = Outcome::<i32, _>::failure("e").map(|x| x * 2);
    /// assert_eq!(out, Outcome::failure("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success value inside a protected region.
    ///
    /// As [`map`](Outcome::map), but a panic raised by `f` is caught and
    /// converted into a `Failure` through `on_fault`. A `Failure` input
    /// passes through without invoking either closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<_, String>::success("42")
    ///     .map_safe(|s| s.parse::<i32>().unwrap(), |f| f.message().to_string());
    /// assert_eq!(out, Outcome::success(42));
    ///
    /// let out = Outcome::<_, String>::success("x")
    ///     .map_safe(|s| s.parse::<i32>().unwrap(), |f| f.message().to_string());
    /// assert!(out.is_failure());
    /// ```
    pub fn map_safe<U, F, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Outcome::Success(value) => match protect(move || f(value), on_fault) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error payload. A `Success` passes through unchanged
    /// and `f` is never invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<i32, _>::failure(404).map_err(|code| format!("http {}", code));
    /// assert_eq!(out, Outcome::failure("http 404".to_string()));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a dependent computation, flattening the nested outcome.
    ///
    /// If this is a `Success`, `f` is invoked with the value and its
    /// outcome is returned directly. A `Failure` short-circuits without
    /// invoking `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure(format!("{} is odd", x))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<_, String>::success(8).and_then(half), Outcome::success(4));
    /// assert_eq!(
    ///     Outcome::<_, String>::success(3).and_then(half),
    ///     Outcome::failure("3 is odd".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a dependent computation inside a protected region.
    ///
    /// The protection covers the invocation of `f` only, not the outcome
    /// it returns - that outcome is taken as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<_, String>::success(1).and_then_safe(
    ///     |_| -> Outcome<i32, String> { panic!("binder broke") },
    ///     |f| f.message().to_string(),
    /// );
    /// assert_eq!(out, Outcome::failure("binder broke".to_string()));
    /// ```
    pub fn and_then_safe<U, F, H>(self, f: F, on_fault: H) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        H: FnOnce(Fault) -> E,
    {
        match self {
            Outcome::Success(value) => match protect(move || f(value), on_fault) {
                Ok(outcome) => outcome,
                Err(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Perform a side effect on the success value, returning self
    /// unchanged. The action never runs on a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let mut seen = None;
    /// let out = Outcome::<_, String>::success(3).tap(|v| seen = Some(*v));
    /// assert_eq!(out, Outcome::success(3));
    /// assert_eq!(seen, Some(3));
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Perform a side effect on the error payload, returning self
    /// unchanged. The action never runs on a `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let mut seen = None;
    /// let out = Outcome::<i32, _>::failure("e").tap_err(|e| seen = Some(*e));
    /// assert_eq!(out, Outcome::failure("e"));
    /// assert_eq!(seen, Some("e"));
    /// ```
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Perform a side effect on the success value inside a protected
    /// region.
    ///
    /// As [`tap`](Outcome::tap), but a panic raised by the action converts
    /// the whole outcome into a `Failure` through `on_fault` - the original
    /// success value is lost in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<i32, String>::success(3)
    ///     .tap_safe(|_| panic!("audit log down"), |f| f.message().to_string());
    /// assert_eq!(out, Outcome::failure("audit log down".to_string()));
    /// ```
    pub fn tap_safe<F, H>(self, f: F, on_fault: H) -> Self
    where
        F: FnOnce(&T),
        H: FnOnce(Fault) -> E,
    {
        match self {
            Outcome::Success(value) => match protect(|| f(&value), on_fault) {
                Ok(()) => Outcome::Success(value),
                Err(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Gate the success value through a predicate.
    ///
    /// A `Success` survives only if `predicate` holds for its value;
    /// otherwise it becomes `Failure(error)`. A `Failure` input bypasses
    /// the predicate entirely and keeps its original error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// assert_eq!(
    ///     Outcome::<_, &str>::success(10).ensure(|x| *x > 5, "too small"),
    ///     Outcome::success(10),
    /// );
    /// assert_eq!(
    ///     Outcome::<_, &str>::success(10).ensure(|x| *x > 20, "too small"),
    ///     Outcome::failure("too small"),
    /// );
    /// assert_eq!(
    ///     Outcome::<i32, _>::failure("orig").ensure(|_| true, "too small"),
    ///     Outcome::failure("orig"),
    /// );
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(error)
                }
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Gate the success value through a predicate, constructing the error
    /// lazily from the rejected value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<_, String>::success(-5)
    ///     .ensure_with(|x| *x > 0, |x| format!("{} is not positive", x));
    /// assert_eq!(out, Outcome::failure("-5 is not positive".to_string()));
    /// ```
    #[inline]
    pub fn ensure_with<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    let error = error_fn(&value);
                    Outcome::Failure(error)
                }
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Fold both branches into a single value.
    ///
    /// Exactly one of the two handlers is invoked, chosen by the
    /// discriminant, and its return value becomes the overall result.
    /// A panic raised by whichever handler runs propagates to the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let msg = Outcome::<_, String>::success(2)
    ///     .fold(|v| format!("got {}", v), |e| format!("failed: {}", e));
    /// assert_eq!(msg, "got 2");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Replace a `Failure` with an already-evaluated fallback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let fallback = Outcome::<_, String>::success(0);
    /// assert_eq!(Outcome::success(7).or(fallback.clone()), Outcome::success(7));
    /// assert_eq!(
    ///     Outcome::failure("e".to_string()).or(fallback),
    ///     Outcome::success(0),
    /// );
    /// ```
    #[inline]
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => fallback,
        }
    }

    /// Replace a `Failure` with a lazily-produced fallback.
    ///
    /// The factory receives the error and is invoked exactly once on
    /// `Failure` - and never on `Success`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let out = Outcome::<i32, String>::failure("miss".to_string())
    ///     .or_else(|_| Outcome::success(0));
    /// assert_eq!(out, Outcome::success(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Merge both branches through an unconditional terminal function.
    ///
    /// `f` is invoked exactly once with the outcome itself, and whatever
    /// it returns becomes the overall result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::Outcome;
    ///
    /// let exit_code = Outcome::<i32, String>::success(5).finally(|out| {
    ///     if out.is_success() { 0 } else { 1 }
    /// });
    /// assert_eq!(exit_code, 0);
    /// ```
    #[inline]
    pub fn finally<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }

    /// Drop the error channel, keeping only presence information.
    ///
    /// Inverse of [`Maybe::to_outcome`](crate::Maybe::to_outcome).
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::<_, String>::success(1).into_maybe(), Maybe::present(1));
    /// assert_eq!(Outcome::<i32, _>::failure("e").into_maybe(), Maybe::absent());
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<V: Hash>(value: &V) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constructors_and_predicates() {
        assert!(Outcome::<i32, String>::success(1).is_success());
        assert!(!Outcome::<i32, String>::success(1).is_failure());
        assert!(Outcome::<i32, String>::failure("e".to_string()).is_failure());
    }

    #[test]
    fn value_returns_success_payload() {
        let out = Outcome::<_, String>::success(42);
        assert_eq!(*out.value(), 42);
    }

    #[test]
    #[should_panic(expected = "called `Outcome::value()` on a `Failure` value")]
    fn value_panics_on_failure() {
        let out = Outcome::<i32, _>::failure("e");
        let _ = out.value();
    }

    #[test]
    #[should_panic(expected = "called `Outcome::error()` on a `Success` value")]
    fn error_panics_on_success() {
        let out = Outcome::<_, String>::success(1);
        let _ = out.error();
    }

    #[test]
    fn non_panicking_accessors_never_panic() {
        assert_eq!(Outcome::<_, String>::success(1).into_value(), Some(1));
        assert_eq!(Outcome::<_, String>::success(1).into_error(), None);
        assert_eq!(Outcome::<i32, _>::failure("e").into_value(), None);
        assert_eq!(Outcome::<i32, _>::failure("e").into_error(), Some("e"));
        assert_eq!(Outcome::<i32, &str>::failure("e").value_or(9), 9);
    }

    #[test]
    fn map_skips_closure_on_failure() {
        let mut called = false;
        let out = Outcome::<i32, _>::failure("e").map(|x| {
            called = true;
            x * 2
        });
        assert_eq!(out, Outcome::failure("e"));
        assert!(!called);
    }

    #[test]
    fn map_err_skips_closure_on_success() {
        let mut called = false;
        let out = Outcome::<_, String>::success(1).map_err(|e| {
            called = true;
            e
        });
        assert_eq!(out, Outcome::success(1));
        assert!(!called);
    }

    #[test]
    fn and_then_flattens() {
        let out = Outcome::<_, String>::success(2).and_then(|x| Outcome::success(x + 1));
        assert_eq!(out, Outcome::success(3));
    }

    #[test]
    fn and_then_short_circuits() {
        let mut called = false;
        let out = Outcome::<i32, _>::failure("e").and_then(|x| {
            called = true;
            Outcome::<i32, _>::success(x)
        });
        assert_eq!(out, Outcome::failure("e"));
        assert!(!called);
    }

    #[test]
    fn tap_runs_only_on_success() {
        let mut hits = 0;
        let _ = Outcome::<_, String>::success(1).tap(|_| hits += 1);
        let _ = Outcome::<i32, String>::failure("e".to_string()).tap(|_| hits += 1);
        assert_eq!(hits, 1);
    }

    #[test]
    fn tap_err_runs_only_on_failure() {
        let mut hits = 0;
        let _ = Outcome::<_, String>::success(1).tap_err(|_| hits += 1);
        let _ = Outcome::<i32, String>::failure("e".to_string()).tap_err(|_| hits += 1);
        assert_eq!(hits, 1);
    }

    #[test]
    fn ensure_gates_success() {
        assert_eq!(
            Outcome::<_, &str>::success(10).ensure(|x| *x > 5, "err"),
            Outcome::success(10)
        );
        assert_eq!(
            Outcome::<_, &str>::success(10).ensure(|x| *x > 20, "err"),
            Outcome::failure("err")
        );
        assert_eq!(
            Outcome::<i32, &str>::failure("orig").ensure(|_| true, "err"),
            Outcome::failure("orig")
        );
    }

    #[test]
    fn ensure_with_builds_error_lazily() {
        let mut built = 0;
        let out = Outcome::<_, String>::success(10).ensure_with(
            |x| *x > 5,
            |x| {
                built += 1;
                format!("{} too small", x)
            },
        );
        assert_eq!(out, Outcome::success(10));
        assert_eq!(built, 0);
    }

    #[test]
    fn fold_selects_exactly_one_handler() {
        let success = Outcome::<_, String>::success(2).fold(|v| v * 10, |_| -1);
        assert_eq!(success, 20);

        let failure = Outcome::<i32, _>::failure("e").fold(|v| v * 10, |_| -1);
        assert_eq!(failure, -1);
    }

    #[test]
    fn or_else_factory_never_runs_on_success() {
        let mut calls = 0;
        let out = Outcome::<_, String>::success(1).or_else(|_| {
            calls += 1;
            Outcome::success(0)
        });
        assert_eq!(out, Outcome::success(1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn or_else_factory_runs_once_on_failure() {
        let mut calls = 0;
        let out = Outcome::<i32, String>::failure("e".to_string()).or_else(|_| {
            calls += 1;
            Outcome::success(0)
        });
        assert_eq!(out, Outcome::success(0));
        assert_eq!(calls, 1);
    }

    #[test]
    fn finally_runs_exactly_once_on_both_branches() {
        let mut calls = 0;
        let merged = Outcome::<i32, String>::success(1).finally(|out| {
            calls += 1;
            out.is_success()
        });
        assert!(merged);
        let merged = Outcome::<i32, String>::failure("e".to_string()).finally(|out| {
            calls += 1;
            out.is_success()
        });
        assert!(!merged);
        assert_eq!(calls, 2);
    }

    #[test]
    fn map_safe_converts_panic() {
        let out = Outcome::<_, String>::success(1)
            .map_safe(|_| -> i32 { panic!("boom") }, |f| f.message().to_string());
        assert_eq!(out, Outcome::failure("boom".to_string()));
    }

    #[test]
    fn map_safe_passes_failure_through_untouched() {
        let mut handler_called = false;
        let out = Outcome::<i32, _>::failure("orig").map_safe(
            |x| x + 1,
            |_| {
                handler_called = true;
                "converted"
            },
        );
        assert_eq!(out, Outcome::failure("orig"));
        assert!(!handler_called);
    }

    #[test]
    fn and_then_safe_converts_binder_panic() {
        let out = Outcome::<_, String>::success(1).and_then_safe(
            |_| -> Outcome<i32, String> { panic!("binder down") },
            |f| f.message().to_string(),
        );
        assert_eq!(out, Outcome::failure("binder down".to_string()));
    }

    #[test]
    fn and_then_safe_keeps_returned_failure_unconverted() {
        let out = Outcome::<_, String>::success(1).and_then_safe(
            |_| Outcome::<i32, String>::failure("domain".to_string()),
            |_| "fault".to_string(),
        );
        assert_eq!(out, Outcome::failure("domain".to_string()));
    }

    #[test]
    fn tap_safe_converts_action_panic() {
        let out = Outcome::<i32, String>::success(3)
            .tap_safe(|_| panic!("log sink"), |f| f.message().to_string());
        assert_eq!(out, Outcome::failure("log sink".to_string()));
    }

    #[test]
    fn result_round_trip() {
        let ok: Outcome<i32, String> = Ok(1).into();
        assert_eq!(ok, Outcome::success(1));
        assert_eq!(ok.into_result(), Ok(1));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Outcome::<i32, String>::success(42), Outcome::success(42));
        assert_ne!(
            Outcome::<i32, String>::success(42),
            Outcome::failure("x".to_string())
        );
        assert_ne!(Outcome::<i32, String>::success(1), Outcome::success(2));
    }

    #[test]
    fn hash_agrees_with_equality() {
        let a = Outcome::<i32, String>::success(42);
        let b = Outcome::<i32, String>::success(42);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = Outcome::<i32, String>::failure("x".to_string());
        let d = Outcome::<i32, String>::failure("x".to_string());
        assert_eq!(hash_of(&c), hash_of(&d));
    }
}
