//! Panic containment for user-supplied functions.
//!
//! The `*_safe` combinators on [`Outcome`](crate::Outcome) and
//! [`Maybe`](crate::Maybe) run caller-supplied closures inside a protected
//! region: a panic raised by the closure is caught and handed to a
//! caller-supplied mapper as a [`Fault`] instead of unwinding through the
//! combinator chain. Every safe variant funnels through the single
//! [`protect`] helper in this module, so the catch/convert discipline is
//! defined in exactly one place.
//!
//! Only the user function itself is protected. A panic raised by the fault
//! mapper, or anywhere else in the chain, unwinds normally.
//!
//! # Examples
//!
//! ```rust
//! use clearwater::fault::protect;
//!
//! let ok: Result<i32, String> = protect(|| 21 * 2, |fault| fault.message().to_string());
//! assert_eq!(ok, Ok(42));
//!
//! let caught: Result<i32, String> =
//!     protect(|| panic!("boom"), |fault| format!("caught: {}", fault.message()));
//! assert_eq!(caught, Err("caught: boom".to_string()));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A caught panic from a user-supplied function.
///
/// `Fault` wraps the raw panic payload handed back by
/// `std::panic::catch_unwind` and offers a best-effort textual view of it.
/// The `*_safe` combinators pass a `Fault` to the caller's mapper so the
/// panic can be converted into a domain error.
///
/// # Example
///
/// ```rust
/// use clearwater::Outcome;
///
/// let out = Outcome::<i32, String>::success(1)
///     .map_safe(|_| -> i32 { panic!("selector broke") }, |fault| fault.message().to_string());
/// assert_eq!(out, Outcome::failure("selector broke".to_string()));
/// ```
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Fault { payload }
    }

    /// Best-effort view of the panic message.
    ///
    /// Panics raised with a string literal or a formatted `String` yield
    /// that text. Any other payload type yields a fixed placeholder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearwater::fault::protect;
    ///
    /// let err = protect::<(), _, _, _>(|| panic!("exact text"), |fault| {
    ///     fault.message().to_string()
    /// });
    /// assert_eq!(err.unwrap_err(), "exact text");
    /// ```
    pub fn message(&self) -> &str {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            message
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            message
        } else {
            "unknown panic payload"
        }
    }

    /// The raw panic payload, as produced by `std::panic::catch_unwind`.
    ///
    /// Useful when the panic carried a typed value rather than a message.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Run `f`, converting a panic into an error through `on_fault`.
///
/// Returns `Ok` with the closure's result, or `Err` with the mapped fault
/// if the closure panicked. The mapper runs outside the protected region,
/// so a panic raised by the mapper itself propagates to the caller.
///
/// The closure is wrapped in `AssertUnwindSafe`: it is consumed by the
/// call and its result is discarded on panic, so no partially-updated
/// state owned by the closure remains reachable.
///
/// # Example
///
/// ```rust
/// use clearwater::fault::protect;
///
/// let parsed: Result<i32, String> = protect(
///     || "17".parse::<i32>().unwrap(),
///     |fault| fault.message().to_string(),
/// );
/// assert_eq!(parsed, Ok(17));
/// ```
pub fn protect<R, E, F, H>(f: F, on_fault: H) -> Result<R, E>
where
    F: FnOnce() -> R,
    H: FnOnce(Fault) -> E,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => Err(on_fault(Fault::new(payload))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protect_passes_through_on_success() {
        let result: Result<i32, String> = protect(|| 42, |_| unreachable!());
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn protect_converts_str_panic() {
        let result: Result<i32, String> =
            protect(|| panic!("boom"), |fault| fault.message().to_string());
        assert_eq!(result, Err("boom".to_string()));
    }

    #[test]
    fn protect_converts_formatted_panic() {
        let result: Result<i32, String> = protect(
            || panic!("bad input: {}", 7),
            |fault| fault.message().to_string(),
        );
        assert_eq!(result, Err("bad input: 7".to_string()));
    }

    #[test]
    fn protect_reports_unknown_payload() {
        let result: Result<i32, String> = protect(
            || std::panic::panic_any(1234_u32),
            |fault| fault.message().to_string(),
        );
        assert_eq!(result, Err("unknown panic payload".to_string()));
    }

    #[test]
    fn fault_payload_keeps_typed_panics() {
        let result: Result<(), u32> = protect(
            || std::panic::panic_any(99_u32),
            |fault| *fault.into_payload().downcast::<u32>().unwrap(),
        );
        assert_eq!(result, Err(99));
    }

    #[test]
    fn fault_display_matches_message() {
        let result: Result<(), String> = protect(|| panic!("shown"), |fault| format!("{}", fault));
        assert_eq!(result, Err("shown".to_string()));
    }

    #[test]
    #[should_panic(expected = "mapper blew up")]
    fn mapper_panic_propagates() {
        let _: Result<(), ()> = protect(|| panic!("original"), |_| panic!("mapper blew up"));
    }
}
