//! A railway-oriented [`Outcome`] type and the [`then`] combinator.
//!
//! An [`Outcome`] is either a `Success` payload or a `Failure` value, never
//! both. [`then`] runs the next fallible step only while the chain is still on
//! the success track; the first failure is forwarded unchanged to the end.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Steps
//!
//! ```
//! use outcome_rail::{then, Outcome};
//!
//! let start: Outcome<i32> = Outcome::success(5);
//! let doubled = then(start, |x| Outcome::success(x * 2));
//! let result = then(doubled, |x| Outcome::success(x + 1));
//!
//! assert_eq!(result.unwrap(), 11);
//! ```
//!
//! ## Short-Circuiting on Failure
//!
//! ```
//! use outcome_rail::{chain, Outcome, RailError};
//!
//! let result: Outcome<i32> = chain!(
//!     Outcome::success(5)
//!     => |_| Outcome::failure(RailError::msg("quota exceeded"))
//!     => |x: i32| Outcome::success(x * 2)
//! );
//!
//! assert!(result.is_failure());
//! assert_eq!(result.unwrap_failure().to_string(), "quota exceeded");
//! ```
//!
//! ## Pattern Matching
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome: Outcome<&str> = Outcome::success("ready");
//! match outcome {
//!     Outcome::Success(value) => assert_eq!(value, "ready"),
//!     Outcome::Failure(error) => panic!("unexpected failure: {error}"),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The `then` combinator that switches between the success and failure tracks
pub mod combinator;
/// Conversions between `Outcome` and `Result`
pub mod convert;
/// Iteration over success payloads and fail-fast collection
pub mod iter;
/// The `chain!` macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for bringing foreign results onto the rail
pub mod traits;
/// `Outcome` and the system-wide `RailError` failure value
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use combinator::then;
pub use convert::*;
pub use traits::*;
pub use types::{ErrorVec, Outcome, RailError};
