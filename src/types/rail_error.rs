//! The system-wide failure value carried by [`Outcome`](crate::Outcome).
//!
//! [`RailError`] wraps any `core::error::Error + Send + Sync` behind a shared
//! pointer. The rail never inspects or builds one on its own; it only moves
//! them from step to step. Callers may attach a context trail explicitly with
//! [`RailError::with_context`].

use core::error::Error;
use core::fmt;

use crate::types::alloc_type::{Arc, Box, Cow, String};
use crate::types::ErrorVec;

type DynError = dyn Error + Send + Sync + 'static;

/// Opaque failure value shared by every `Outcome<T>`.
///
/// Cloning is cheap: clones share the same source allocation. Equality is
/// identity, so two `RailError`s compare equal only when they wrap the very
/// same source and carry the same context trail.
///
/// # Examples
///
/// ```
/// use outcome_rail::RailError;
///
/// let err = RailError::msg("disk full")
///     .with_context("writing snapshot")
///     .with_context("shutting down");
///
/// assert_eq!(err.to_string(), "shutting down -> writing snapshot -> disk full");
/// assert_eq!(err.context().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RailError {
    source: Arc<DynError>,
    context: ErrorVec<Cow<'static, str>>,
}

impl RailError {
    /// Wraps an existing error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::RailError;
    ///
    /// let parse = "x1".parse::<u8>().unwrap_err();
    /// let err = RailError::new(parse);
    /// assert!(err.is::<core::num::ParseIntError>());
    /// ```
    #[inline]
    pub fn new<X>(error: X) -> Self
    where
        X: Error + Send + Sync + 'static,
    {
        Self { source: Arc::new(error), context: ErrorVec::new() }
    }

    /// Creates a message-only error.
    #[inline]
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::new(Message(message.into()))
    }

    /// Appends a context entry. The most recent entry is displayed first.
    #[inline]
    pub fn with_context<C>(mut self, context: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.context.push(context.into());
        self
    }

    /// Returns the context trail, most recent entry first.
    #[inline]
    pub fn context(&self) -> impl Iterator<Item = &str> + '_ {
        self.context.iter().rev().map(|ctx| &**ctx)
    }

    /// Borrows the wrapped error.
    #[inline]
    pub fn source_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Returns `true` if the wrapped error is of type `X`.
    #[inline]
    pub fn is<X>(&self) -> bool
    where
        X: Error + 'static,
    {
        self.source.is::<X>()
    }

    /// Borrows the wrapped error as `X`, if that is its concrete type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::RailError;
    ///
    /// #[derive(Debug)]
    /// struct Timeout;
    ///
    /// impl core::fmt::Display for Timeout {
    ///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    ///         f.write_str("timed out")
    ///     }
    /// }
    ///
    /// impl core::error::Error for Timeout {}
    ///
    /// let err = RailError::new(Timeout);
    /// assert!(err.downcast_ref::<Timeout>().is_some());
    /// ```
    #[inline]
    pub fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: Error + 'static,
    {
        self.source.downcast_ref::<X>()
    }

    /// Returns `true` if both errors share the same source allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }

    /// Consumes the error, dropping the context trail.
    #[inline]
    pub fn into_inner(self) -> Arc<DynError> {
        self.source
    }
}

impl PartialEq for RailError {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) && self.context == other.context
    }
}

impl Eq for RailError {}

impl fmt::Display for RailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Error: {}", self.source)?;
            if !self.context.is_empty() {
                f.write_str("\nContext:\n")?;
                for ctx in self.context() {
                    writeln!(f, "  - {ctx}")?;
                }
            }
            return Ok(());
        }

        for ctx in self.context() {
            write!(f, "{ctx} -> ")?;
        }
        write!(f, "{}", self.source)
    }
}

impl Error for RailError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

impl From<&'static str> for RailError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for RailError {
    #[inline]
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

impl From<Box<DynError>> for RailError {
    #[inline]
    fn from(error: Box<DynError>) -> Self {
        Self { source: Arc::from(error), context: ErrorVec::new() }
    }
}

struct Message(Cow<'static, str>);

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}
