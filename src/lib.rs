//! # Clearwater
//!
//! > *"Clear water finds its own channel"*
//!
//! A Rust library for railway-oriented composition over two canonical
//! outcome types.
//!
//! ## Philosophy
//!
//! **Clearwater** provides [`Outcome`] (success/failure) and [`Maybe`]
//! (present/absent) plus a combinator algebra - map, bind, tap, fold,
//! ensure, fallbacks, error transforms, n-ary combine, sequence helpers -
//! that composes fallible or optional computations without manual
//! branching and without panics as control flow. The same algebra, with
//! the same short-circuit guarantees, is available over futures of these
//! types (feature `async`).
//!
//! ## Quick Example
//!
//! ```rust
//! use clearwater::{MaybeIterExt, Outcome};
//!
//! fn parse_quantity(raw: &str) -> Outcome<u32, String> {
//!     Outcome::from(raw.parse::<u32>().map_err(|e| e.to_string()))
//! }
//!
//! // Railway-oriented pipeline: first failure wins, later steps skipped.
//! let order = parse_quantity("12")
//!     .ensure(|q| *q > 0, "quantity must be positive".to_string())
//!     .map(|q| q * 10);
//! assert_eq!(order, Outcome::success(120));
//!
//! // Maybe-aware sequence filtering.
//! let found: Vec<u32> = ["3", "x", "7"]
//!     .iter()
//!     .map(|raw| parse_quantity(raw).into_maybe())
//!     .choose()
//!     .collect();
//! assert_eq!(found, vec![3, 7]);
//!
//! // Fold both branches to a terminal value.
//! let message = parse_quantity("oops").fold(
//!     |q| format!("ordered {}", q),
//!     |e| format!("rejected: {}", e),
//! );
//! assert!(message.starts_with("rejected"));
//! ```
//!
//! ## Feature flags
//!
//! - `async` - combinators over `Future<Output = Outcome<..>>` /
//!   `Future<Output = Maybe<..>>` in the `future` module.
//! - `tracing` - `traced` probes in the `trace` module.
//! - `serde` - `Serialize`/`Deserialize` for both types, using the std
//!   `Result`/`Option` representations.
//! - `proptest` - `Arbitrary` impls for both types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combine;
pub mod fault;
pub mod maybe;
pub mod outcome;
pub mod seq;
pub mod testing;

#[cfg(feature = "async")]
pub mod future;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use combine::CombineAll;
pub use fault::{protect, Fault};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use seq::{MaybeIterExt, MaybeLookup};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combine::CombineAll;
    pub use crate::fault::{protect, Fault};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::seq::{MaybeIterExt, MaybeLookup};

    #[cfg(feature = "async")]
    pub use crate::future::{protect_future, CombineAllAsync, MaybeFutureExt, OutcomeFutureExt};
    #[cfg(feature = "tracing")]
    pub use crate::trace::{MaybeTraceExt, OutcomeTraceExt};
}
