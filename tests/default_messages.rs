//! Default-message compatibility.
//!
//! The default templates are a compatibility contract: the exact wording is
//! load-bearing for callers that match on messages. These tests pin the
//! literal strings, plus the documented custom-message behaviors.

use affirm::check;
use affirm::foundation::{Fault, FaultKind, Pattern, TypeInfo};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn is_true_custom_message_formats_positionally() {
    let err = check::is_true_msg(false, "Must be {}", &[&true]).unwrap_err();
    assert_eq!(err.kind(), FaultKind::IllegalArgument);
    assert_eq!(err.message(), "Must be true");
}

#[test]
fn not_empty_absent_string_uses_caller_message_with_null_kind() {
    let err = check::not_empty_msg(None::<&str>, "Must not be {}", &[&"empty"]).unwrap_err();
    assert_eq!(err.kind(), FaultKind::NullValue);
    assert_eq!(err.message(), "Must not be empty");
}

#[test]
fn exclusive_between_embeds_value_then_bounds() {
    let err = check::exclusive_between(0, 5, 5).unwrap_err();
    assert_eq!(
        err.message(),
        "The value 5 is not in the specified exclusive range of 0 to 5"
    );
}

#[test]
fn valid_index_returns_array_or_names_index() {
    assert_eq!(check::valid_index(Some(["Hi"]), 0), Ok(["Hi"]));
    let err = check::valid_index(Some(["Hi"]), 1).unwrap_err();
    assert_eq!(err.kind(), FaultKind::IndexOutOfBounds);
    assert_eq!(err.message(), "The validated array index is invalid: 1");
}

#[test]
fn matches_pattern_names_input_and_pattern() {
    let digits = Pattern::new("[0-9]*").unwrap();
    let err = check::matches_pattern("hi", &digits).unwrap_err();
    assert_eq!(
        err.message(),
        "The string hi does not match the pattern [0-9]*"
    );
}

#[test]
fn whole_string_match_covers_every_alternation_branch() {
    // `a` alone would satisfy a leftmost-first search; the check must
    // still accept `ab` through the second branch.
    let pat = Pattern::new("a|ab").unwrap();
    assert_eq!(check::matches_pattern("ab", &pat), Ok("ab"));
    assert_eq!(check::matches_pattern_str("ab", "a|ab"), Ok("ab"));
    assert!(check::matches_pattern("abc", &pat).is_err());
}

#[test]
fn is_assignable_from_names_both_types() {
    let err = check::is_assignable_from(TypeInfo::of::<Vec<String>>(), TypeInfo::of::<String>())
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Cannot assign a alloc::string::String to a alloc::vec::Vec<alloc::string::String>"
    );
}

#[test]
fn not_null_default_message() {
    let err = check::not_null(None::<u8>).unwrap_err();
    assert_eq!(err.kind(), FaultKind::NullValue);
    assert_eq!(err.message(), "The validated object is null");
}

#[rstest]
#[case::is_true(check::is_true(false), "The validated expression is false")]
#[case::is_false(check::is_false(true), "The validated expression is true")]
#[case::valid_state(check::valid_state(false), "The validated state is false")]
fn unit_check_default_messages(
    #[case] result: Result<(), affirm::CheckError>,
    #[case] expected: &str,
) {
    assert_eq!(result.unwrap_err().message(), expected);
}

#[rstest]
#[case::slice(check::not_empty(Some(&[] as &[u8])).unwrap_err(), "The validated array is empty")]
#[case::string(check::not_empty(Some("")).unwrap_err(), "The validated character sequence is empty")]
#[case::vec(check::not_empty(Some(Vec::<u8>::new())).unwrap_err(), "The validated collection is empty")]
fn not_empty_noun_tracks_container(#[case] err: affirm::CheckError, #[case] expected: &str) {
    assert_eq!(err.message(), expected);
}

#[test]
fn no_null_elements_default_message_names_first_index() {
    let err = check::no_null_elements(Some([Some('a'), Some('b'), None])).unwrap_err();
    assert_eq!(
        err.message(),
        "The validated array contains null element at index: 2"
    );
}

#[test]
fn no_null_elements_custom_message_receives_appended_index() {
    let err = check::no_null_elements_msg(
        Some([None::<char>]),
        "nulls in {} at index {}",
        &[&"payload"],
    )
    .unwrap_err();
    assert_eq!(err.message(), "nulls in payload at index 0");
}

#[test]
fn inclusive_between_default_message() {
    let err = check::inclusive_between(2, 4, 9).unwrap_err();
    assert_eq!(
        err.message(),
        "The value 9 is not in the specified inclusive range of 2 to 4"
    );
}

#[test]
fn custom_message_is_never_augmented_elsewhere() {
    // Aside from no_null_elements, templates are used verbatim.
    let err = check::valid_index_msg(Some([1]), 4, "bad index", &[]).unwrap_err();
    assert_eq!(err.message(), "bad index");
    let err = check::not_blank_msg(Some("   "), "blank!", &[]).unwrap_err();
    assert_eq!(err.message(), "blank!");
}

#[test]
fn invalid_pattern_reports_template_and_cause() {
    let err = check::matches_pattern_str("x", "(unclosed").unwrap_err();
    assert_eq!(err.kind(), FaultKind::IllegalArgumentWithCause);
    assert_eq!(err.message(), "The pattern (unclosed is invalid");
    assert!(std::error::Error::source(&err).is_some());
}
