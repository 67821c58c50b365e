//! Rule violations: every category, with deterministic check order.
//!
//! Each scenario asserts the violated-rule category, the offending frame,
//! and a fragment of the user-facing message.

mod common;

use common::{frame, repeat, verify_rejection};
use kingpin::RuleCategory::{Count, Notation, Physics, Structural};

#[test]
fn count_violations() {
    verify_rejection(
        "eleven frames",
        &repeat(&["0", "0"], 11),
        Count,
        11,
        "more than 10 frames",
    );
}

#[test]
fn physics_violations() {
    verify_rejection(
        "pin count over the rack",
        &[frame(&["12", "0"])],
        Physics,
        1,
        "invalid pin count: 12",
    );
    verify_rejection(
        "eleven on one roll",
        &[frame(&["11"])],
        Physics,
        1,
        "invalid pin count: 11",
    );
    verify_rejection(
        "negative pins",
        &[frame(&["-1", "0"])],
        Physics,
        1,
        "invalid pin count: -1",
    );
    verify_rejection(
        "frame sum over the rack",
        &[frame(&["5", "6"])],
        Physics,
        1,
        "total 11 pins",
    );

    let mut bonus_pair = repeat(&["X"], 9);
    bonus_pair.push(frame(&["X", "5", "6"]));
    verify_rejection(
        "tenth-frame bonus pair over the rack",
        &bonus_pair,
        Physics,
        10,
        "total 11 pins",
    );
}

#[test]
fn structural_violations() {
    verify_rejection(
        "strike with an extra roll",
        &[frame(&["X", "2"])],
        Structural,
        1,
        "extra roll",
    );
    verify_rejection(
        "strike as the second roll",
        &[frame(&["0", "X"])],
        Structural,
        1,
        "must be the first roll",
    );
    verify_rejection(
        "three rolls in a normal frame",
        &[frame(&["3", "3", "3"])],
        Structural,
        1,
        "too many rolls",
    );
    verify_rejection("empty frame", &[frame(&[])], Structural, 1, "no rolls");

    let mut unearned = repeat(&["X"], 9);
    unearned.push(frame(&["5", "3", "1"]));
    verify_rejection(
        "unearned tenth-frame bonus",
        &unearned,
        Structural,
        10,
        "only allowed after a strike or spare",
    );

    let mut four_rolls = repeat(&["X"], 9);
    four_rolls.push(frame(&["X", "X", "X", "X"]));
    verify_rejection(
        "four rolls in the tenth",
        &four_rolls,
        Structural,
        10,
        "too many rolls",
    );
}

#[test]
fn notation_violations() {
    verify_rejection(
        "spare at the start",
        &[frame(&["/", "5"])],
        Notation,
        1,
        "cannot be the first roll",
    );
    verify_rejection(
        "unrecognized symbol",
        &[frame(&["A", "0"])],
        Notation,
        1,
        "invalid symbol",
    );
    verify_rejection(
        "unmarked spare",
        &[frame(&["5", "5"])],
        Notation,
        1,
        "must be marked with '/'",
    );

    let mut tenth_unmarked = repeat(&["X"], 9);
    tenth_unmarked.push(frame(&["X", "5", "5"]));
    verify_rejection(
        "tenth-frame unmarked spare",
        &tenth_unmarked,
        Notation,
        10,
        "must be marked with '/'",
    );

    let mut after_strike = repeat(&["X"], 9);
    after_strike.push(frame(&["X", "/", "X"]));
    verify_rejection(
        "spare after a strike",
        &after_strike,
        Notation,
        10,
        "cannot follow 'X'",
    );

    let mut double_spare = repeat(&["X"], 9);
    double_spare.push(frame(&["5", "/", "/"]));
    verify_rejection(
        "double spare",
        &double_spare,
        Notation,
        10,
        "cannot follow '/'",
    );

    let mut after_two_strikes = repeat(&["X"], 9);
    after_two_strikes.push(frame(&["X", "X", "/"]));
    verify_rejection(
        "spare after two strikes",
        &after_two_strikes,
        Notation,
        10,
        "cannot follow 'X'",
    );
}

#[test]
fn violations_carry_diagnostic_codes() {
    let error = kingpin::score_game(&[frame(&["/", "5"])]).unwrap_err();
    assert_eq!(
        error.diagnostic_info.error_code,
        "kingpin::notation::spare_as_first_roll"
    );

    let error = kingpin::score_game(&[frame(&["5", "6"])]).unwrap_err();
    assert_eq!(
        error.diagnostic_info.error_code,
        "kingpin::physics::frame_exceeds_ten_pins"
    );
}

#[test]
fn validation_never_downgrades_to_a_partial_score() {
    // Frame one is illegal even though frame two would score cleanly.
    let game = vec![frame(&["5", "6"]), frame(&["5", "4"])];
    assert!(kingpin::score_game(&game).is_err());
}
