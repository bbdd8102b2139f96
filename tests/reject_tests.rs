use rson::{parse, parse_str, ErrorKind};

fn rejected(text: &str) -> rson::Error {
    match parse_str(text) {
        Err(err) => err,
        Ok(value) => panic!("{text:?} unexpectedly parsed to {value:?}"),
    }
}

#[test]
fn bare_underscore_number() {
    rejected("_1");
}

#[test]
fn over_range_digits() {
    assert_eq!(rejected("0b0123").kind(), ErrorKind::BadNumber);
    assert_eq!(rejected("0o999").kind(), ErrorKind::BadNumber);
    assert_eq!(rejected("0xGHij").kind(), ErrorKind::BadNumber);
}

#[test]
fn leading_comma() {
    assert_eq!(rejected("[,]").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("{,}").kind(), ErrorKind::UnexpectedByte);
}

#[test]
fn record_without_colon() {
    assert_eq!(rejected(r#"{"a"}"#).kind(), ErrorKind::UnexpectedByte);
}

#[test]
fn duplicate_record_key() {
    assert_eq!(
        rejected(r#"{"a":1, "a":2}"#).kind(),
        ErrorKind::DuplicateKey
    );
}

#[test]
fn set_and_dict_bracket_styles() {
    assert_eq!(rejected("@set {}").kind(), ErrorKind::TagShape);
    assert_eq!(rejected("@dict []").kind(), ErrorKind::TagShape);
    assert_eq!(rejected("@set {1, 2}").kind(), ErrorKind::TagShape);
}

#[test]
fn nested_tags() {
    assert_eq!(rejected("@object @object {}").kind(), ErrorKind::TagNest);
    assert_eq!(rejected("@a @b 1").kind(), ErrorKind::TagNest);
}

#[test]
fn paired_surrogate_escapes() {
    assert_eq!(rejected(r#""\uD800\uDD01""#).kind(), ErrorKind::BadEscape);
}

#[test]
fn empty_input_is_eof() {
    assert_eq!(rejected("").kind(), ErrorKind::UnexpectedEof);
    assert_eq!(rejected(" \t\n").kind(), ErrorKind::UnexpectedEof);
    assert_eq!(rejected("# only a comment").kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn trailing_content() {
    assert_eq!(rejected("null null").kind(), ErrorKind::TrailingGarbage);
    assert_eq!(rejected("1;").kind(), ErrorKind::TrailingGarbage);
}

#[test]
fn bare_words_are_not_values() {
    assert_eq!(rejected("maybe").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("True").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("[a, b]").kind(), ErrorKind::UnexpectedByte);
}

#[test]
fn slash_comments_are_not_comments() {
    assert_eq!(rejected("// nope\n1").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("/* nope */ 1").kind(), ErrorKind::UnexpectedByte);
}

#[test]
fn tag_grammar_violations() {
    // The whitespace after a tag name is mandatory.
    assert_eq!(rejected("@int(1)").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("@ int 1").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("@foo..bar 1").kind(), ErrorKind::UnexpectedByte);
    assert_eq!(rejected("@foo. 1").kind(), ErrorKind::UnexpectedByte);
}

#[test]
fn reserved_tags_with_wrong_shapes() {
    for text in [
        "@bool 1",
        "@int 1.5",
        "@int \"1\"",
        "@string 1",
        "@list {}",
        "@record []",
        "@float [1]",
        "@duration \"100ms\"",
        "@datetime 100",
        "@datetime \"not a date\"",
        "@base64 \"not base64!\"",
        "@base64 b\"aGk=\"",
        "@bytestring \"\\u0100\"",
        "@complex [1]",
        "@complex [1, 2, 3]",
        "@complex [\"a\", \"b\"]",
        "@unknown 1",
        "@integer 1",
        "@double 1.0",
        "@date \"2020-01-01\"",
        "@time \"12:00\"",
        "@table [1: 2]",
    ] {
        assert_eq!(rejected(text).kind(), ErrorKind::TagShape, "{text}");
    }
}

#[test]
fn duplicate_set_elements_cross_variant() {
    assert_eq!(rejected("{1, 1.0}").kind(), ErrorKind::DuplicateKey);
    assert_eq!(rejected("@set [0.0, -0.0]").kind(), ErrorKind::DuplicateKey);
}

#[test]
fn non_string_record_keys() {
    assert_eq!(rejected("{1: 2}").kind(), ErrorKind::DictKeyType);
    assert_eq!(rejected(r#"{"a": 1, null: 2}"#).kind(), ErrorKind::DictKeyType);
}

#[test]
fn mixed_concatenation_kinds() {
    let err = rejected(r#"("text" b"bytes")"#);
    assert_eq!(err.kind(), ErrorKind::UnexpectedByte);
    assert_eq!(err.message(), "mixed-concat");
}

#[test]
fn misplaced_underscores() {
    for text in ["1_", "1__2", "_1", "0x_FF", "1_.5", "1e_5"] {
        assert!(parse_str(text).is_err(), "{text}");
    }
}

#[test]
fn bom_after_byte_zero() {
    assert_eq!(rejected("[\u{FEFF}]").kind(), ErrorKind::Encoding);
}

#[test]
fn invalid_utf8_bytes() {
    assert_eq!(parse(b"\xFF\xFE").unwrap_err().kind(), ErrorKind::Encoding);
    // CESU-8 style surrogate bytes are not UTF-8.
    assert_eq!(
        parse(b"\"\xED\xA0\x80\"").unwrap_err().kind(),
        ErrorKind::Encoding
    );
}

#[test]
fn control_characters_in_strings() {
    assert_eq!(rejected("\"a\nb\"").kind(), ErrorKind::BadControlChar);
    assert_eq!(rejected("'tab\there'").kind(), ErrorKind::BadControlChar);
}

#[test]
fn error_positions_point_at_the_problem() {
    let err = rejected("[1, 2,\n 0b3]");
    assert_eq!(err.kind(), ErrorKind::BadNumber);
    assert_eq!(err.position().line, 2);

    let err = rejected(r#"{"k": 1, "k": 2}"#);
    assert_eq!(err.position().line, 1);
    assert!(err.position().byte > 0);
}
