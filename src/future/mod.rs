//! Asynchronous dispatch layer for [`Outcome`](crate::Outcome) and
//! [`Maybe`](crate::Maybe).
//!
//! The combinator algebra behaves identically whether a computation is
//! already evaluated or still suspended. Every combinator exists in four
//! source/continuation shapes, all written once against the standard
//! `Future` capability rather than duplicated per runtime:
//!
//! 1. sync source, sync continuation - the inherent methods on the types;
//! 2. sync source, async continuation - the `*_async` inherent methods in
//!    this module;
//! 3. async source, sync continuation - [`OutcomeFutureExt`] /
//!    [`MaybeFutureExt`] methods on any future of an outcome;
//! 4. async source, async continuation - the `*_async` methods on those
//!    same traits.
//!
//! The dispatch rule is uniform: suspend on the source first when it is
//! asynchronous; only once the discriminant is known decide whether to
//! suspend again awaiting the continuation. Continuations therefore run
//! at most once, only when their branch is selected, whether suspension
//! happens zero, one, or two times along the call.
//!
//! Nothing here schedules, spawns, or cancels: whatever runtime drives
//! the outer future drives these, and cancellation remains drop-based as
//! with any future.
//!
//! # Example
//!
//! ```rust
//! use clearwater::future::OutcomeFutureExt;
//! use clearwater::Outcome;
//!
//! # tokio_test::block_on(async {
//! let out = async { Outcome::<_, String>::success(20) }
//!     .map(|x| x + 1)
//!     .and_then_async(|x| async move { Outcome::success(x * 2) })
//!     .await;
//! assert_eq!(out, Outcome::success(42));
//! # });
//! ```

mod combine;
mod maybe;
mod maybe_ext;
mod outcome;
mod outcome_ext;
mod protect;

pub use combine::CombineAllAsync;
pub use maybe_ext::MaybeFutureExt;
pub use outcome_ext::OutcomeFutureExt;
pub use protect::protect_future;
