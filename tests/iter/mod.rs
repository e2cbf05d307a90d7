use std::cell::Cell;

use outcome_rail::{Outcome, RailError};

#[test]
fn iterating_yields_the_payload_once() {
    let success: Outcome<i32> = Outcome::success(3);
    assert_eq!(success.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!((&success).into_iter().count(), 1);
    assert_eq!(success.into_iter().collect::<Vec<_>>(), vec![3]);

    let failure: Outcome<i32> = Outcome::failure(RailError::msg("x"));
    assert_eq!(failure.iter().count(), 0);
    assert_eq!(failure.into_iter().size_hint(), (0, Some(0)));
}

#[test]
fn collecting_all_successes_builds_the_collection() {
    let collected: Outcome<Vec<i32>> = (1..=3).map(Outcome::success).collect();
    assert_eq!(collected.into_success(), Some(vec![1, 2, 3]));
}

#[test]
fn collecting_stops_at_the_first_failure() {
    let pulled = Cell::new(0);
    let first = RailError::msg("first");
    let second = RailError::msg("second");
    let items = vec![
        Outcome::success(1),
        Outcome::failure(first.clone()),
        Outcome::success(3),
        Outcome::failure(second),
    ];

    let collected: Outcome<Vec<i32>> = items
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .collect();

    assert_eq!(pulled.get(), 2);
    assert!(collected.unwrap_failure().ptr_eq(&first));
}

#[test]
fn collecting_an_empty_iterator_succeeds() {
    let collected: Outcome<Vec<u8>, &str> = Vec::<Outcome<u8, &str>>::new().into_iter().collect();
    assert_eq!(collected, Outcome::Success(Vec::new()));
}
