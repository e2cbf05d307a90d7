use core::error::Error;
use core::fmt;

use crate::types::alloc_type::{Cow, String};
use crate::types::RailError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a fallible step: either a success payload or a failure value.
///
/// `Outcome<T, E>` has exactly two variants and the variant *is* the
/// discriminant, so a success can never expose a failure value and a failure
/// can never expose a payload. Reading the wrong side is either ruled out by
/// pattern matching or, for the force-unwrapping accessors, a panic.
///
/// The failure type defaults to [`RailError`], so every `Outcome<T>` in a
/// program shares one failure representation regardless of `T`.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do and
/// the `serde` feature is enabled.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure value type, [`RailError`] unless stated
///
/// # Variants
///
/// * `Success(T)` - The step produced a value
/// * `Failure(E)` - The step failed
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, RailError};
///
/// let ok: Outcome<i32> = Outcome::success(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.success_ref(), Some(&42));
///
/// let failed: Outcome<i32> = Outcome::failure(RailError::msg("no route"));
/// assert!(failed.is_failure());
/// assert!(failed.success_ref().is_none());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E = RailError> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success carrying `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let v = Outcome::<Option<u8>>::success(None);
    /// assert!(v.is_success());
    /// assert_eq!(v.into_success(), Some(None));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure carrying `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let v = Outcome::<()>::failure(RailError::msg("missing field"));
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` for a `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success payload, or `None` on a failure.
    #[must_use]
    #[inline]
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure value, or `None` on a success.
    #[must_use]
    #[inline]
    pub fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the success payload, discarding a failure.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure value, discarding a success.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Splits the outcome into `(is_success, payload, failure)`.
    ///
    /// Exactly one of the two options is `Some`, and which one always agrees
    /// with the flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let (ok, value, error) = Outcome::<i32>::success(7).decompose();
    /// assert!(ok);
    /// assert_eq!(value, Some(7));
    /// assert!(error.is_none());
    ///
    /// let (ok, value, error) = Outcome::<i32>::failure(RailError::msg("bad")).decompose();
    /// assert!(!ok);
    /// assert!(value.is_none());
    /// assert_eq!(error.unwrap().to_string(), "bad");
    /// ```
    #[must_use]
    #[inline]
    pub fn decompose(self) -> (bool, Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (true, Some(value), None),
            Self::Failure(error) => (false, None, Some(error)),
        }
    }

    /// Borrowing form of [`decompose`](Self::decompose).
    #[must_use]
    #[inline]
    pub fn parts(&self) -> (bool, Option<&T>, Option<&E>) {
        self.as_ref().decompose()
    }

    /// Runs `next` on the payload, or forwards the failure unchanged.
    ///
    /// Method form of [`crate::then`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let result = Outcome::<i32>::success(5)
    ///     .then(|x| Outcome::success(x * 2))
    ///     .then(|x| Outcome::success(x + 1));
    /// assert_eq!(result.into_success(), Some(11));
    /// ```
    #[inline]
    pub fn then<U, F>(self, next: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        crate::combinator::then(self, next)
    }

    /// Maps the success payload, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure value, leaving a success untouched.
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Calls `recovery` on a failure, otherwise returns the success as is.
    ///
    /// The failure-track mirror of [`then`](Self::then).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let v = Outcome::<i32>::failure(RailError::msg("cache miss"));
    /// let recovered: Outcome<i32> = v.recover(|_| Outcome::success(0));
    /// assert_eq!(recovered.into_success(), Some(0));
    /// ```
    #[inline]
    pub fn recover<G, F>(self, recovery: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => recovery(error),
        }
    }

    /// Calls `f` with the payload of a success and returns the outcome unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the value of a failure and returns the outcome unchanged.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the payload, or `default` on a failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the payload, or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with the failure's `Debug` output.
    ///
    /// ```should_panic
    /// use outcome_rail::{Outcome, RailError};
    ///
    /// let v = Outcome::<i32>::failure(RailError::msg("boom"));
    /// v.unwrap();
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                unwrap_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the failure's `Debug` output on a `Failure`.
    #[track_caller]
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => unwrap_failed(msg, &error),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`, with the payload's `Debug` output.
    #[track_caller]
    #[inline]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(value) => {
                unwrap_failed("called `Outcome::unwrap_failure()` on a `Success` value", &value)
            }
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the payload's `Debug` output on a `Success`.
    #[track_caller]
    #[inline]
    pub fn expect_failure(self, msg: &str) -> E {
        match self {
            Self::Success(value) => unwrap_failed(msg, &value),
            Self::Failure(error) => error,
        }
    }
}

impl<T> Outcome<T, RailError> {
    /// Lifts a standard `Result` whose error is a concrete `Error` type,
    /// wrapping that error into a [`RailError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let parsed = Outcome::from_std_error("42".parse::<u16>());
    /// assert_eq!(parsed.into_success(), Some(42));
    ///
    /// let failed = Outcome::from_std_error("x".parse::<u16>());
    /// assert!(failed.unwrap_failure().is::<core::num::ParseIntError>());
    /// ```
    #[inline]
    pub fn from_std_error<X>(result: Result<T, X>) -> Self
    where
        X: Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(RailError::new(error)),
        }
    }

    /// Attaches a context entry to a failure; a success passes through.
    #[inline]
    pub fn context<C>(self, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.map_failure(|error| error.with_context(context))
    }

    /// Lazily attaches a context entry to a failure.
    ///
    /// The closure only runs on the failure track.
    #[inline]
    pub fn context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.map_failure(|error| error.with_context(f()))
    }
}

#[cold]
#[track_caller]
fn unwrap_failed(msg: &str, value: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {value:?}")
}
