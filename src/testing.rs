//! Testing utilities and helpers.
//!
//! This module provides assertion macros for the crate's outcome types, a
//! [`CallCounter`] probe for verifying the laziness contracts (how many
//! times a fallback factory or continuation actually ran), and
//! property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ## Assertion macros
//!
//! ```rust
//! use clearwater::{assert_failure, assert_success, Outcome};
//!
//! let ok = Outcome::<_, String>::success(42);
//! assert_success!(ok);
//!
//! let bad = Outcome::<i32, _>::failure("error".to_string());
//! assert_failure!(bad);
//! ```
//!
//! ## Counting calls
//!
//! ```rust
//! use clearwater::testing::CallCounter;
//! use clearwater::Outcome;
//!
//! let calls = CallCounter::new();
//! let out = Outcome::<_, String>::success(1).or_else(|_| {
//!     calls.tick();
//!     Outcome::success(0)
//! });
//! assert_eq!(out, Outcome::success(1));
//! assert_eq!(calls.count(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many times a closure was invoked.
///
/// Backed by an atomic, so it can be shared by reference into closures
/// and futures alike. Used throughout the test suite to pin the laziness
/// contracts: `or_else` factories run zero times on success and exactly
/// once on failure, skipped continuations run zero times.
///
/// # Example
///
/// ```rust
/// use clearwater::testing::CallCounter;
///
/// let calls = CallCounter::new();
/// let f = || calls.tick();
/// f();
/// f();
/// assert_eq!(calls.count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter {
    count: AtomicUsize,
}

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn tick(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// The number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Assert that an outcome is a `Success`.
///
/// Panics with the debug rendering of the error if it is a `Failure`.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_success, Outcome};
///
/// let out = Outcome::<_, String>::success(42);
/// assert_success!(out);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a `Failure`.
///
/// Panics with the debug rendering of the value if it is a `Success`.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_failure, Outcome};
///
/// let out = Outcome::<i32, _>::failure("error".to_string());
/// assert_failure!(out);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a maybe holds a value.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_present, Maybe};
///
/// let m = Maybe::present(42);
/// assert_present!(m);
/// ```
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(_) => {}
            $crate::Maybe::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that a maybe is absent.
///
/// Panics with the debug rendering of the value if one is present.
///
/// # Example
///
/// ```rust
/// use clearwater::{assert_absent, Maybe};
///
/// let m = Maybe::<i32>::absent();
/// assert_absent!(m);
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Absent => {}
            $crate::Maybe::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Maybe, Outcome};

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::success),
            any_with::<E>(e_params).prop_map(Outcome::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        // LazyJust instead of Just: Absent needs no `T: Clone`.
        prop_oneof![
            any_with::<T>(args).prop_map(Maybe::present),
            proptest::strategy::LazyJust::new(|| Maybe::Absent),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maybe, Outcome};

    #[test]
    fn call_counter_counts() {
        let calls = CallCounter::new();
        assert_eq!(calls.count(), 0);
        calls.tick();
        calls.tick();
        assert_eq!(calls.count(), 2);
    }

    #[test]
    fn assert_success_macro() {
        let out = Outcome::<_, String>::success(42);
        assert_success!(out);
    }

    #[test]
    fn assert_failure_macro() {
        let out = Outcome::<i32, _>::failure("error".to_string());
        assert_failure!(out);
    }

    #[test]
    fn assert_present_and_absent_macros() {
        assert_present!(Maybe::present(1));
        assert_absent!(Maybe::<i32>::absent());
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let out = Outcome::<i32, _>::failure("error".to_string());
        assert_success!(out);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let out = Outcome::<_, String>::success(42);
        assert_failure!(out);
    }

    #[test]
    #[should_panic(expected = "Expected Absent, got Present")]
    fn assert_absent_panics_on_present() {
        let m = Maybe::present(42);
        assert_absent!(m);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_valid_instances(
                out in any::<Outcome<i32, String>>()
            ) {
                match out {
                    Outcome::Success(_) => prop_assert!(out.is_success()),
                    Outcome::Failure(_) => prop_assert!(out.is_failure()),
                }
            }

            #[test]
            fn maybe_arbitrary_generates_valid_instances(
                m in any::<Maybe<i32>>()
            ) {
                match m {
                    Maybe::Present(_) => prop_assert!(m.is_present()),
                    Maybe::Absent => prop_assert!(m.is_absent()),
                }
            }
        }
    }
}
