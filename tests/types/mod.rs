use outcome_rail::{Outcome, RailError};

mod rail_error;

#[test]
fn success_construction_reports_success_and_keeps_payload() {
    for value in [0, 1, -7, i32::MAX] {
        let outcome: Outcome<i32> = Outcome::success(value);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.success_ref(), Some(&value));
        assert!(outcome.failure_ref().is_none());
    }
}

#[test]
fn failure_construction_reports_failure_and_keeps_error() {
    let error = RailError::msg("disk full");
    let outcome: Outcome<i32> = Outcome::failure(error.clone());

    assert!(outcome.is_failure());
    assert!(outcome.success_ref().is_none());
    let stored = outcome.failure_ref().unwrap();
    assert!(stored.ptr_eq(&error));
    assert_eq!(stored, &error);
}

#[test]
fn success_may_wrap_an_empty_marker() {
    let outcome: Outcome<Option<String>> = Outcome::success(None);
    assert!(outcome.is_success());
    assert_eq!(outcome.into_success(), Some(None));
}

#[test]
fn decompose_is_consistent_with_the_variant() {
    let (ok, value, error) = Outcome::<&str>::success("payload").decompose();
    assert!(ok);
    assert_eq!(value, Some("payload"));
    assert!(error.is_none());

    let (ok, value, error) = Outcome::<&str>::failure(RailError::msg("nope")).decompose();
    assert!(!ok);
    assert!(value.is_none());
    assert_eq!(error.unwrap().to_string(), "nope");
}

#[test]
fn parts_borrows_without_consuming() {
    let outcome: Outcome<i32, &str> = Outcome::failure("bad input");
    let (ok, value, error) = outcome.parts();
    assert!(!ok);
    assert!(value.is_none());
    assert_eq!(error, Some(&"bad input"));

    assert!(outcome.is_failure());
}
