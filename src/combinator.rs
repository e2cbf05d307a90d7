//! The railway switch.
//!
//! [`then`] sequences a fallible step after a prior [`Outcome`]. A success is
//! handed to the step, whose own outcome becomes the result; a failure skips
//! the step and is forwarded as is, re-typed only in its success parameter.
//!
//! Chaining is associative: `then(then(r, f), g)` and
//! `then(r, |x| then(f(x), g))` always agree.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{then, Outcome, RailError};
//!
//! fn parse(input: &str) -> Outcome<i64> {
//!     Outcome::from_std_error(input.trim().parse::<i64>())
//! }
//!
//! fn non_negative(value: i64) -> Outcome<u64> {
//!     if value < 0 {
//!         Outcome::failure(RailError::msg("negative input"))
//!     } else {
//!         Outcome::success(value.unsigned_abs())
//!     }
//! }
//!
//! assert_eq!(then(parse(" 17 "), non_negative).into_success(), Some(17));
//! assert!(then(parse("-3"), non_negative).is_failure());
//! assert!(then(parse("abc"), non_negative).is_failure());
//! ```

use crate::types::Outcome;

/// Runs `next` on the payload of a success, or forwards a failure untouched.
///
/// * On `Failure(e)` the result is `Failure(e)` with the very same value, and
///   `next` is never called.
/// * On `Success(v)` the result is exactly `next(v)`; `next` runs once.
///
/// `then` never creates a failure of its own.
///
/// # Examples
///
/// ```
/// use outcome_rail::{then, Outcome, RailError};
///
/// let mut calls = 0;
/// let failed: Outcome<i32> = Outcome::failure(RailError::msg("offline"));
/// let result = then(failed, |x| {
///     calls += 1;
///     Outcome::success(x * 2)
/// });
///
/// assert!(result.is_failure());
/// assert_eq!(calls, 0);
/// ```
#[inline]
pub fn then<TIn, TOut, E, F>(result: Outcome<TIn, E>, next: F) -> Outcome<TOut, E>
where
    F: FnOnce(TIn) -> Outcome<TOut, E>,
{
    match result {
        Outcome::Success(value) => next(value),
        Outcome::Failure(error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("skipping chained step, outcome already failed");
            Outcome::Failure(error)
        },
    }
}
