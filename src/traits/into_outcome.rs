use crate::types::Outcome;

/// Conversion into an [`Outcome`] that keeps the error type.
///
/// Lets a step written against `Result` slot into a rail without a
/// hand-written `match`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::IntoOutcome;
/// use outcome_rail::Outcome;
///
/// fn lookup(id: u32) -> Result<&'static str, &'static str> {
///     if id == 1 { Ok("root") } else { Err("unknown id") }
/// }
///
/// let found = Outcome::<u32, &str>::success(1).then(|id| lookup(id).into_outcome());
/// assert_eq!(found.into_success(), Some("root"));
///
/// let missing = Outcome::<u32, &str>::success(2).then(|id| lookup(id).into_outcome());
/// assert_eq!(missing.into_failure(), Some("unknown id"));
/// ```
pub trait IntoOutcome<T, E> {
    /// Performs the conversion.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}
