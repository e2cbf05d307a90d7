//! Extension trait for lifting `Result` types onto the rail with context.
//!
//! This module provides [`ResultExt`], which turns a `Result<T, X>` whose error
//! is a concrete [`core::error::Error`] into an `Outcome<T>`, wrapping the error
//! in a [`RailError`] without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::Outcome;
//!
//! fn parse_threads(raw: &str) -> Outcome<usize> {
//!     raw.parse::<usize>().ctx("parsing thread count")
//! }
//!
//! assert!(parse_threads("four").is_failure());
//! ```

use core::error::Error;

use crate::types::alloc_type::{Cow, String};
use crate::types::{Outcome, RailError};

/// Extension trait for putting `Result` types on the rail.
///
/// # Performance
///
/// The [`ctx_with`](ResultExt::ctx_with) method is lazy: the closure only runs
/// when the `Result` is an `Err`.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::Outcome;
///
/// let ok: Outcome<u8> = "7".parse::<u8>().rail();
/// assert_eq!(ok.into_success(), Some(7));
/// ```
///
/// ## Lazy Context
///
/// ```
/// use outcome_rail::traits::ResultExt;
/// use outcome_rail::Outcome;
///
/// let user_id = 42;
/// let failed: Outcome<u8> = "x".parse::<u8>().ctx_with(|| format!("user {user_id}"));
/// assert!(failed.unwrap_failure().to_string().starts_with("user 42 -> "));
/// ```
pub trait ResultExt<T> {
    /// Wraps the error in a [`RailError`] with no context.
    fn rail(self) -> Outcome<T>;

    /// Wraps the error in a [`RailError`] carrying `msg` as context.
    ///
    /// # Arguments
    ///
    /// * `msg` - Describes what operation was being performed.
    fn ctx<C>(self, msg: C) -> Outcome<T>
    where
        C: Into<Cow<'static, str>>;

    /// Wraps the error in a [`RailError`] with a lazily built context.
    ///
    /// # Arguments
    ///
    /// * `f` - A closure that produces the context message.
    fn ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String;
}

impl<T, X> ResultExt<T> for Result<T, X>
where
    X: Error + Send + Sync + 'static,
{
    #[inline]
    fn rail(self) -> Outcome<T> {
        Outcome::from_std_error(self)
    }

    #[inline]
    fn ctx<C>(self, msg: C) -> Outcome<T>
    where
        C: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(RailError::new(error).with_context(msg)),
        }
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(RailError::new(error).with_context(f())),
        }
    }
}
