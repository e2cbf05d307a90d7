//! Core value types.
//!
//! This module provides [`Outcome`], the two-track container every fallible
//! step produces, and [`RailError`], the single failure representation an
//! `Outcome<T>` carries unless a caller picks another error type.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, RailError};
//!
//! let failed: Outcome<u32> = Outcome::failure(
//!     RailError::msg("connection refused").with_context("loading profile"),
//! );
//!
//! assert!(failed.is_failure());
//! assert_eq!(
//!     failed.unwrap_failure().to_string(),
//!     "loading profile -> connection refused"
//! );
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod outcome;
pub mod rail_error;

pub use outcome::*;
pub use rail_error::*;

/// SmallVec-backed collection used for the context trail of a [`RailError`].
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case where at most one context is attached.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
