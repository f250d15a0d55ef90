//! Tests for diagnostic construction and error formatting.

use super::*;
use rstest::rstest;

#[rstest]
fn context_prefixes_stack_outermost_first() {
    let err = ConversionError::new("value must be a number, found a string")
        .in_member("circle-radius")
        .in_member("paint")
        .in_index(2)
        .in_member("layers");
    assert_eq!(
        err.message(),
        "layers: [2]: paint: circle-radius: value must be a number, found a string"
    );
}

#[rstest]
#[case::missing(ConversionError::missing_member("id"), "missing required member 'id'")]
#[case::expected(
    ConversionError::expected("an object", "an array"),
    "value must be an object, found an array"
)]
#[case::from_str(ConversionError::from("plain"), "plain")]
fn constructors_format_messages(#[case] err: ConversionError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn conversion_errors_wrap_into_style_errors() {
    let err = StyleError::from(ConversionError::new("layers must be an array"));
    assert!(matches!(err, StyleError::Conversion(_)));
    assert_eq!(err.to_string(), "Invalid style: layers must be an array");
}

#[rstest]
fn parse_errors_name_the_format() {
    let err = StyleError::parse("TOML", "expected `=`");
    assert_eq!(err.to_string(), "Failed to parse TOML document: expected `=`");
}

#[rstest]
fn disabled_formats_name_the_feature() {
    let err = StyleError::DisabledFormat {
        format: "YAML",
        feature: "yaml",
    };
    assert_eq!(
        err.to_string(),
        "YAML support is disabled: enable the 'yaml' feature"
    );
}

#[rstest]
fn into_message_returns_the_full_path() {
    let message = ConversionError::new("bad").in_index(0).into_message();
    assert_eq!(message, "[0]: bad");
}
