//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`]
//! - **Types**: [`Outcome`], [`RailError`]
//! - **Functions**: [`then`]
//! - **Traits**: [`IntoOutcome`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn read_limit(raw: &str) -> Outcome<u32> {
//!     chain!(
//!         raw.parse::<u32>().ctx("parsing limit")
//!         => |limit| if limit > 0 {
//!             Outcome::success(limit)
//!         } else {
//!             Outcome::failure(RailError::msg("limit must be positive"))
//!         }
//!     )
//! }
//!
//! assert_eq!(read_limit("10").into_success(), Some(10));
//! assert!(read_limit("0").is_failure());
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::types::{Outcome, RailError};

// Combinator
pub use crate::combinator::then;

// Traits
pub use crate::traits::{IntoOutcome, ResultExt};
