//! Tracing probes for outcome chains (feature-gated).
//!
//! This module provides `traced` extension methods that emit a `tracing`
//! event describing the current branch and pass the value through
//! unchanged, so a probe can be dropped between any two combinators
//! without disturbing the chain. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.
//!
//! # Example
//!
//! ```rust
//! use clearwater::Outcome;
//! use clearwater::trace::OutcomeTraceExt;
//!
//! let out = Outcome::<_, String>::success(21)
//!     .traced("fetched")
//!     .map(|x| x * 2)
//!     .traced("doubled");
//! assert_eq!(out, Outcome::success(42));
//! ```

use std::fmt;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Extension trait adding tracing probes to [`Outcome`].
pub trait OutcomeTraceExt: Sized {
    /// Emit a tracing event for the current branch, returning self
    /// unchanged.
    ///
    /// A `Success` is recorded at debug level, a `Failure` at warn level,
    /// both carrying `label` and a debug rendering of the payload.
    fn traced(self, label: &str) -> Self;
}

impl<T, E> OutcomeTraceExt for Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn traced(self, label: &str) -> Self {
        match &self {
            Outcome::Success(value) => tracing::debug!(%label, ?value, "outcome success"),
            Outcome::Failure(error) => tracing::warn!(%label, ?error, "outcome failure"),
        }
        self
    }
}

/// Extension trait adding tracing probes to [`Maybe`].
pub trait MaybeTraceExt: Sized {
    /// Emit a tracing event for the current branch, returning self
    /// unchanged.
    ///
    /// Both branches are recorded at debug level; absence is an expected
    /// state, not a fault.
    fn traced(self, label: &str) -> Self;
}

impl<T> MaybeTraceExt for Maybe<T>
where
    T: fmt::Debug,
{
    fn traced(self, label: &str) -> Self {
        match &self {
            Maybe::Present(value) => tracing::debug!(%label, ?value, "maybe present"),
            Maybe::Absent => tracing::debug!(%label, "maybe absent"),
        }
        self
    }
}
