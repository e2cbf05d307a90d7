//! Tracing integration for outcome-rail.
//!
//! This module provides utilities for integrating outcomes with the
//! `tracing` ecosystem: capturing span information as failure context and
//! logging failures as they leave a step.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Outcome, RailError};

/// Extension trait for `Outcome<T>` that ties failures to tracing spans.
pub trait OutcomeSpanExt<T> {
    /// Adds the current span's name as context to a failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::tracing_ext::OutcomeSpanExt;
    ///
    /// fn load() -> Outcome<Config> {
    ///     read_config().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Outcome<T>;

    /// Adds a specific span's name as context to a failure.
    fn with_span(self, span: &Span) -> Outcome<T>;

    /// Emits a `warn` event naming `step` when the outcome is a failure.
    ///
    /// The outcome is returned unchanged either way.
    fn log_failure(self, step: &str) -> Outcome<T>;
}

impl<T> OutcomeSpanExt<T> for Outcome<T, RailError> {
    fn with_current_span(self) -> Outcome<T> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Outcome<T> {
        self.map_failure(|error| error.with_context(span_to_context(span)))
    }

    fn log_failure(self, step: &str) -> Outcome<T> {
        self.inspect_failure(|error| {
            tracing::warn!(step, error = %error, "step failed");
        })
    }
}

/// Formats a span as a context entry.
///
/// Disabled spans carry no metadata and are reported as `unknown`.
fn span_to_context(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{name}'")
}
