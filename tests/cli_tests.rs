//! Tests for the mastermind binary: startup validation and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn mastermind() -> Command {
    Command::cargo_bin("mastermind").unwrap()
}

#[test]
fn test_non_digit_argument_is_usage_error() {
    mastermind()
        .arg("abc")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Arguments must be digits."))
        .stderr(predicate::str::contains(
            "[numberOfDigits [maximumDigitSize (2-9)]]",
        ));
}

#[test]
fn test_max_digit_out_of_range_is_usage_error() {
    mastermind()
        .args(["3", "10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Maximum digit argument out of range: 10.",
        ));
}

#[test]
fn test_too_many_arguments_is_usage_error() {
    mastermind()
        .args(["3", "4", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Wrong number of arguments."));
}

#[test]
fn test_oversized_digit_count_is_usage_error() {
    mastermind()
        .arg("18446744073709551615")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Number of digits is too large"))
        .stdout(predicate::str::is_empty());

    mastermind()
        .arg("10000000000")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_flag_usage_matches_usage_line() {
    mastermind()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "[numberOfDigits [maximumDigitSize (2-9)]]",
        ));
}

#[test]
fn test_usage_error_starts_no_game() {
    mastermind()
        .arg("0")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quit_exits_cleanly() {
    mastermind()
        .args(["3", "4"])
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Guess the code: 3 digits between 1 and 4",
        ))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn test_defaults_and_end_of_input() {
    mastermind()
        .write_stdin("12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter 4 digits between 1 and 4",
        ))
        .stdout(predicate::str::contains("Thanks for playing!"));
}
