//! Conversion helpers between `Outcome` and `Result`.
//!
//! These adapters make it straightforward to put existing `Result`-returning
//! code on the rail, and to hand an `Outcome` back to APIs (or to `?`) that
//! expect a `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let back: Result<i32, &str> = outcome_to_result(Outcome::failure("failed"));
//! assert_eq!(back, Err("failed"));
//! ```

use crate::types::Outcome;

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let ok: Result<i32, &str> = Ok(1);
/// assert!(result_to_outcome(ok).is_success());
///
/// let err: Result<i32, &str> = Err("nope");
/// assert_eq!(result_to_outcome(err).into_failure(), Some("nope"));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Converts an `Outcome` to a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if the outcome is a success
/// * `Err(error)` if the outcome is a failure
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let v = Outcome::<i32, &str>::success(9);
/// assert_eq!(outcome_to_result(v), Ok(9));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
