use outcome_rail::convert::*;
use outcome_rail::Outcome;

#[test]
fn result_to_outcome_preserves_state() {
    let ok: Result<i32, &str> = Ok(3);
    assert_eq!(result_to_outcome(ok), Outcome::Success(3));

    let err: Result<i32, &str> = Err("fail");
    assert_eq!(result_to_outcome(err), Outcome::Failure("fail"));
}

#[test]
fn outcome_to_result_preserves_state() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(7)), Ok(7));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::failure("boom")), Err("boom"));
}

#[test]
fn from_impls_work_both_ways() {
    let outcome: Outcome<u8, String> = Err::<u8, _>("bad".to_string()).into();
    assert!(outcome.is_failure());

    let result: Result<u8, String> = outcome.into();
    assert_eq!(result, Err("bad".to_string()));
}

#[test]
fn outcome_feeds_the_question_mark_operator() {
    fn run(input: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
        let value = input.into_result()?;
        Ok(value + 1)
    }

    assert_eq!(run(Outcome::success(1)), Ok(2));
    assert_eq!(run(Outcome::failure("stop")), Err("stop"));
}
