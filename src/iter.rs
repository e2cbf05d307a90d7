//! Iteration over an [`Outcome`]'s payload and fail-fast collection.
//!
//! An `Outcome` iterates like a zero-or-one element collection holding its
//! success payload. Collecting an iterator of outcomes stops at the first
//! failure and returns it; later items are never pulled.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Outcome, RailError};
//!
//! let all: Outcome<Vec<i32>> = vec![Outcome::success(1), Outcome::success(2)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(all.into_success(), Some(vec![1, 2]));
//!
//! let first_failure: Outcome<Vec<i32>> = vec![
//!     Outcome::success(1),
//!     Outcome::failure(RailError::msg("second")),
//!     Outcome::failure(RailError::msg("third")),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(first_failure.unwrap_failure().to_string(), "second");
//! ```

use crate::types::Outcome;

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_success() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success payload, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.success_ref() }
    }
}

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
