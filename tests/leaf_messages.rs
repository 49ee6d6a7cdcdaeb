//! Message wording for every built-in leaf validator.
//!
//! These pin the exact user-facing strings: lowercase templates, noun
//! pluralization, trait listings and the fixed negated forms.

use pretty_assertions::assert_eq;
use rstest::rstest;
use validus::prelude::*;

fn first_message<V>(validator: &V, input: &V::Input) -> String
where
    V: Validate,
{
    validator
        .validate(input)
        .unwrap_err()
        .messages()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[rstest]
#[case("12", "count: between 3 and 5 characters")]
#[case("123456", "count: between 3 and 5 characters")]
fn count_closed_range(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(first_message(&count(3..=5), input), expected);
}

#[rstest]
#[case(3.., "12", "count: at least 3 characters")]
fn count_at_least(
    #[case] range: std::ops::RangeFrom<usize>,
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(first_message(&count(range), input), expected);
}

#[test]
fn count_at_most() {
    assert_eq!(
        first_message(&count(..=5), "123456"),
        "count: at most 5 characters"
    );
}

#[test]
fn count_half_open_renders_adjusted_upper_bound() {
    assert_eq!(
        first_message(&count(3..5), "12"),
        "count: between 3 and 4 characters"
    );
}

#[test]
fn count_singular_noun() {
    assert_eq!(
        first_message(&count(0..=1), "ab"),
        "count: between 0 and 1 character"
    );
    assert_eq!(
        first_message(&count(0..=1), &["a", "b"][..]),
        "count: between 0 and 1 item"
    );
}

#[test]
fn count_item_noun_for_collections() {
    assert_eq!(
        first_message(&count(2..=5), &[1][..]),
        "count: between 2 and 5 items"
    );
}

#[test]
fn count_measures_characters_not_bytes() {
    // Two chars, four bytes.
    assert!(count::<str>(..=2).validate("éé").is_ok());
}

#[test]
fn in_range_messages() {
    assert_eq!(first_message(&in_range(18..=100), &17), "range: between 18 and 100");
    assert_eq!(first_message(&in_range(18..), &17), "range: at least 18");
    assert_eq!(first_message(&in_range(..=100), &101), "range: at most 100");
    // Half-open upper bound renders as its predecessor.
    assert_eq!(first_message(&in_range(3..5), &5), "range: between 3 and 4");
}

#[test]
fn empty_and_its_negation() {
    assert_eq!(first_message(&empty(), "x"), "empty");
    assert_eq!(
        first_message(&empty().not(), ""),
        "not empty"
    );
}

#[test]
fn never_fails_always_passes() {
    assert!(never_fails().validate("anything").is_ok());
    assert!(never_fails().validate("").is_ok());
    // Its negation always fails, with a fixed text.
    assert_eq!(first_message(&never_fails().not(), "anything"), "never fails");
}

#[test]
fn one_of_lists_candidates_in_declaration_order() {
    let validator = one_of(["foo", "bar"]);
    assert_eq!(first_message(&validator, &"baz"), "in (foo, bar)");
    assert_eq!(
        first_message(&one_of(["root", "admin"]).not(), &"root"),
        "not in (root, admin)"
    );
}

#[rstest]
#[case("foo@bar.com", true)]
#[case("first.last+tag@sub.example.org", true)]
#[case("not an email", false)]
#[case("user@host", false)]
#[case("see foo@bar.com for details", false)]
fn email_shape(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(email().validate(input).is_ok(), valid, "input: {input}");
}

#[test]
fn email_messages() {
    assert_eq!(first_message(&email(), "oops"), "invalid email");
    assert_eq!(first_message(&email().not(), "foo@bar.com"), "valid email");
}

#[rstest]
#[case("http://example.com", true)]
#[case("https://example.com/path?q=1", true)]
#[case("file:///var/log/syslog", true)]
#[case("mailto:user", false)]
#[case("not a url", false)]
fn url_shape(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(url().validate(input).is_ok(), valid, "input: {input}");
}

#[test]
fn url_messages() {
    assert_eq!(first_message(&url(), "oops"), "invalid url");
    assert_eq!(first_message(&url().not(), "http://example.com"), "valid url");
}

#[test]
fn charset_reports_first_offender_and_traits() {
    assert_eq!(
        first_message(&alphanumeric(), "ab_cd"),
        "invalid character: '_' (allowed: A-Z, a-z, 0-9)"
    );
    // ASCII contributes no trait names.
    assert_eq!(first_message(&ascii(), "naïve"), "invalid character: 'ï'");
}

#[test]
fn charset_trait_order_is_fixed() {
    use validus::validators::CharacterSet;

    // Whitespace assembled last still renders before the letter classes.
    let validator = char_set(CharacterSet::alphanumerics() | CharacterSet::whitespace());
    assert_eq!(
        first_message(&validator, "_"),
        "invalid character: '_' (allowed: whitespace, A-Z, a-z, 0-9)"
    );
}

#[test]
fn is_none_messages() {
    let validator = is_none::<String>();
    assert!(validator.validate(&None).is_ok());
    assert_eq!(first_message(&validator, &Some("x".to_string())), "nil");
    assert_eq!(first_message(&validator.not(), &None), "not nil");
}

#[test]
fn predicate_carries_its_own_text() {
    let validator = predicate("is foo", |s: &str| s == "foo");
    assert_eq!(first_message(&validator, "bar"), "is foo");
    assert_eq!(first_message(&validator.not(), "foo"), "not is foo");
}
