use std::cell::Cell;

use outcome_rail::{chain, Outcome, RailError};

#[test]
fn chain_without_steps_returns_start() {
    let start: Outcome<i32> = chain!(Outcome::success(9));
    assert_eq!(start.into_success(), Some(9));
}

#[test]
fn chain_threads_steps_left_to_right() {
    let result: Outcome<String, &str> = chain!(
        Outcome::success(5)
        => |x: i32| Outcome::success(x * 2)
        => |x: i32| Outcome::success(x + 1)
        => |x: i32| Outcome::success(x.to_string()),
    );
    assert_eq!(result.into_success().as_deref(), Some("11"));
}

#[test]
fn chain_stops_evaluating_after_a_failure() {
    let later = Cell::new(0);
    let err1 = RailError::msg("err1");

    let result: Outcome<i32> = chain!(
        Outcome::success(5)
        => |_: i32| Outcome::<i32>::failure(err1.clone())
        => |x: i32| {
            later.set(later.get() + 1);
            Outcome::success(x * 2)
        }
    );

    assert_eq!(later.get(), 0);
    assert!(result.unwrap_failure().ptr_eq(&err1));
}
