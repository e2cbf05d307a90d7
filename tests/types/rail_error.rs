use std::error::Error;
use std::fmt;
use std::io;

use outcome_rail::RailError;

#[derive(Debug)]
struct Timeout {
    after_ms: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.after_ms)
    }
}

impl Error for Timeout {}

#[test]
fn display_lists_context_most_recent_first() {
    let err = RailError::msg("core error")
        .with_context("ctx1")
        .with_context("ctx2");

    assert_eq!(format!("{}", err), "ctx2 -> ctx1 -> core error");
    assert_eq!(err.context().collect::<Vec<_>>(), vec!["ctx2", "ctx1"]);
}

#[test]
fn alternate_display_prints_context_block() {
    let err = RailError::msg("core error")
        .with_context("ctx1")
        .with_context("ctx2");

    let expected = "Error: core error\nContext:\n  - ctx2\n  - ctx1\n";
    assert_eq!(format!("{:#}", err), expected);
}

#[test]
fn display_without_context_is_the_source_message() {
    let err = RailError::msg("core error");
    assert_eq!(format!("{}", err), "core error");
    assert_eq!(format!("{:#}", err), "Error: core error");
}

#[test]
fn source_exposes_the_wrapped_error() {
    let io_err = io::Error::other("root cause");
    let err = RailError::new(io_err).with_context("context");

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "root cause");
    assert_eq!(err.source_ref().to_string(), "root cause");
}

#[test]
fn downcast_recovers_the_concrete_type() {
    let err = RailError::new(Timeout { after_ms: 250 });

    assert!(err.is::<Timeout>());
    assert!(!err.is::<io::Error>());
    assert_eq!(err.downcast_ref::<Timeout>().unwrap().after_ms, 250);
    assert!(err.downcast_ref::<io::Error>().is_none());
}

#[test]
fn equality_is_identity() {
    let first = RailError::msg("same text");
    let second = RailError::msg("same text");
    let clone = first.clone();

    assert_eq!(first, clone);
    assert!(first.ptr_eq(&clone));
    assert_ne!(first, second);
    assert_ne!(first.clone().with_context("extra"), first);
}

#[test]
fn conversions_from_strings_and_boxed_errors() {
    let from_str: RailError = "static text".into();
    assert_eq!(from_str.to_string(), "static text");

    let from_string: RailError = String::from("owned text").into();
    assert_eq!(from_string.to_string(), "owned text");

    let boxed: Box<dyn Error + Send + Sync> = Box::new(Timeout { after_ms: 5 });
    let from_box: RailError = boxed.into();
    assert!(from_box.is::<Timeout>());
}

#[test]
fn into_inner_returns_the_shared_source() {
    let err = RailError::new(Timeout { after_ms: 1 }).with_context("dropped");
    let inner = err.into_inner();
    assert_eq!(inner.to_string(), "timed out after 1ms");
}
