//! Behavioural tests for whole-expression validation through the public API.

#![expect(clippy::expect_used, reason = "tests assert the rejection path")]

use cmdb_filter::{
    FilterConfig, ScanError, Validator, scan_expression, scan_key, scan_negation,
    validate_expression,
};
use rstest::{fixture, rstest};

#[fixture]
fn shallow() -> Validator {
    Validator::new(&FilterConfig::default().with_max_depth(8))
}

fn nested(levels: usize, inner: &str) -> String {
    format!("{}{inner}{}", "(".repeat(levels), ")".repeat(levels))
}

#[test]
fn accepted_expressions_consume_the_whole_window() {
    let input = "attr = 12 and attr2 = 'str' or not(attr3 in [1, 2])";
    assert_eq!(scan_expression(input, 0, input.len()), Ok(input.len()));
}

#[test]
fn keyword_recognizers_keep_their_cursor_contracts() {
    assert_eq!(scan_negation("not()", 0, 5), Ok(3));
    assert!(matches!(
        scan_key("name123", 0, 7),
        Err(ScanError::Syntax { .. })
    ));
}

#[rstest]
#[case("a = 1")]
#[case("a = 1 and b like 'x'")]
#[case("not(a in [1, 2]) or b <> 'y'")]
fn nesting_is_transparent(shallow: Validator, #[case] inner: &str) {
    for levels in 1..8 {
        let input = nested(levels, inner);
        assert!(shallow.is_valid(&input), "{input:?} should be accepted");
    }
}

#[rstest]
fn nesting_past_the_limit_is_not_a_syntax_error(shallow: Validator) {
    let err = shallow
        .validate(&nested(9, "a = 1"))
        .expect_err("nine levels exceed the limit");
    assert!(err.is_too_deep());
}

#[test]
fn pathological_nesting_is_rejected_without_exhausting_the_stack() {
    let input = nested(100_000, "a = 1");
    assert!(!validate_expression(&input));
}

#[rstest]
#[case("a = 1 and b = 2 or c = 3")]
#[case("a = 1 And b = 2 Or c = 3")]
#[case("a = 1 AND b = 2 OR c = 3")]
#[case("a = 1 aNd b = 2 oR c = 3")]
fn connectives_ignore_letter_case(#[case] input: &str) {
    assert!(validate_expression(input));
}

#[rstest]
#[case("a =  1 and b  = 'x'")]
#[case("a   =   1   and    b  =  'x'")]
#[case("( a = 1 )  or  not  ( b in [ 1 , 2 ] )")]
#[case("(a = 1)or(b = 2)")]
#[case("a = 1\tand\nb = 2")]
fn extra_whitespace_does_not_change_acceptance(#[case] input: &str) {
    assert!(validate_expression(input), "{input:?} should be accepted");
}

#[rstest]
#[case(" a = 1")]
#[case(" not(a = 1)")]
#[case("a = 1 ")]
fn whitespace_at_the_window_edges_is_rejected(#[case] input: &str) {
    assert!(!validate_expression(input), "{input:?} should be rejected");
}

#[rstest]
#[case("a = 1 and")]
#[case("and a = 1")]
#[case("a = 1 or or b = 2")]
#[case("a == 1")]
#[case("a = 'unterminated")]
#[case("a in []")]
#[case("(a = 1")]
#[case("a = 1)")]
#[case("not a = 1")]
#[case("a-b = 1")]
#[case("name=12")]
#[case("a >=1")]
#[case("a = 1 and b='x'")]
fn malformed_expressions_are_rejected(#[case] input: &str) {
    let err = Validator::default()
        .validate(input)
        .expect_err("malformed input should be rejected");
    assert!(!err.is_too_deep(), "{input:?} failed with {err}");
}

#[test]
fn validators_are_shareable_across_threads() {
    let validator = Validator::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || validator.is_valid(&format!("attr{i} = {i}")))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap_or(false));
    }
}
