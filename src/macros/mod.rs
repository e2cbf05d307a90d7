//! Macros for writing rails without nesting.
//!
//! - [`macro@crate::chain`] - Threads a starting [`Outcome`](crate::Outcome)
//!   through a sequence of steps with [`then`](crate::then), left to right.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{chain, Outcome};
//!
//! let total: Outcome<u32> = chain!(
//!     Outcome::success(2)
//!     => |x| Outcome::success(x + 3)
//!     => |x| Outcome::success(x * 10)
//! );
//!
//! assert_eq!(total.into_success(), Some(50));
//! ```

/// Threads an [`Outcome`](crate::Outcome) through each step with
/// [`then`](crate::then).
///
/// `chain!(start => f => g)` is `then(then(start, f), g)`. Steps after the
/// first failure are not evaluated.
///
/// # Syntax
///
/// - `chain!(start)` - Returns `start` unchanged
/// - `chain!(start => step => ...)` - Each `step` is any `FnOnce(T) -> Outcome<U, E>`
///
/// # Examples
///
/// ```
/// use outcome_rail::{chain, Outcome, RailError};
///
/// fn halve(x: u32) -> Outcome<u32> {
///     if x % 2 == 0 {
///         Outcome::success(x / 2)
///     } else {
///         Outcome::failure(RailError::msg("odd"))
///     }
/// }
///
/// let even: Outcome<u32> = chain!(Outcome::success(8) => halve => halve);
/// assert_eq!(even.into_success(), Some(2));
///
/// let odd: Outcome<u32> = chain!(Outcome::success(6) => halve => halve);
/// assert!(odd.is_failure());
/// ```
#[macro_export]
macro_rules! chain {
    ($start:expr $(=> $step:expr)* $(,)?) => {{
        let outcome = $start;
        $(
            let outcome = $crate::combinator::then(outcome, $step);
        )*
        outcome
    }};
}
