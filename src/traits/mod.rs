//! Extension traits for moving foreign results onto the rail.
//!
//! - [`IntoOutcome`]: Converts a `Result` (or an `Outcome`) into an [`Outcome`](crate::Outcome)
//!   with the same error type
//! - [`ResultExt`]: Wraps a `Result<T, X: Error>` into an `Outcome<T>`, optionally with context
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, ResultExt};
//! use outcome_rail::{then, Outcome};
//!
//! let port: Outcome<u16> = "8080".parse::<u16>().ctx("reading port");
//! let checked = then(port, |p| Ok::<_, outcome_rail::RailError>(p + 1).into_outcome());
//! assert_eq!(checked.into_success(), Some(8081));
//! ```

pub mod into_outcome;
pub mod result_ext;

pub use into_outcome::IntoOutcome;
pub use result_ext::ResultExt;
