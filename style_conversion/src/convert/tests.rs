//! Tests for the generic entry point and built-in routines.

use super::*;
use crate::ScalarValue;
use rstest::rstest;
use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Anchor {
    Map,
    Viewport,
}

impl Enumeration for Anchor {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("map", Self::Map), ("viewport", Self::Viewport)];
}

keyword_converter!(Anchor);

/// A routine that needs a caller-supplied scale factor.
#[derive(Debug, PartialEq)]
struct Scaled(f64);

impl Converter<f64> for Scaled {
    #[expect(clippy::float_arithmetic, reason = "test routine scales its input")]
    fn convert(value: &Convertible<'_>, factor: f64) -> Result<Self, ConversionError> {
        convert::<f64>(value).map(|number| Self(number * factor))
    }
}

fn root(doc: &Value) -> Convertible<'_> {
    Convertible::from(doc)
}

#[rstest]
fn primitives_convert_from_matching_nodes() {
    assert!(convert::<bool>(&root(&json!(true))).expect("bool"));
    assert_eq!(convert::<f32>(&root(&json!(2.5))).expect("f32"), 2.5);
    assert_eq!(convert::<f64>(&root(&json!(-4))).expect("f64"), -4.0);
    assert_eq!(convert::<String>(&root(&json!("park"))).expect("string"), "park");
    assert_eq!(
        convert::<ScalarValue>(&root(&json!(7))).expect("scalar"),
        ScalarValue::Unsigned(7)
    );
}

#[rstest]
#[case::bool_from_string(json!("true"), "value must be a boolean, found a string")]
#[case::bool_from_null(json!(null), "value must be a boolean, found null")]
#[case::bool_from_object(json!({}), "value must be a boolean, found an object")]
fn mismatched_kinds_are_reported(#[case] doc: Value, #[case] expected: &str) {
    let err = convert::<bool>(&root(&doc)).expect_err("kind mismatch");
    assert_eq!(err.message(), expected);
}

#[rstest]
fn scalar_rejects_containers() {
    let err = convert::<ScalarValue>(&root(&json!([1]))).expect_err("array is not a scalar");
    assert_eq!(
        err.message(),
        "value must be a boolean, number, or string, found an array"
    );
}

#[rstest]
#[case::absent(json!(null), None)]
#[case::present(json!("x"), Some("x".to_owned()))]
fn optional_values_treat_null_as_absent(#[case] doc: Value, #[case] expected: Option<String>) {
    assert_eq!(convert::<Option<String>>(&root(&doc)).expect("option"), expected);
}

#[rstest]
fn vectors_prefix_failing_indices() {
    let doc = json!(["a", "b", 3]);
    let err = convert::<Vec<String>>(&root(&doc)).expect_err("third element is a number");
    assert_eq!(err.message(), "[2]: value must be a string, found a number");

    let ok = convert::<Vec<String>>(&root(&json!(["a", "b"]))).expect("strings");
    assert_eq!(ok, ["a", "b"]);
}

#[rstest]
#[case::too_short(json!([1]), "value must be an array of two numbers, found 1 elements")]
#[case::not_array(json!({"x": 1}), "value must be an array, found an object")]
#[case::bad_element(json!([1, "y"]), "[1]: value must be a number, found a string")]
fn pairs_require_two_numbers(#[case] doc: Value, #[case] expected: &str) {
    let err = convert::<[f32; 2]>(&root(&doc)).expect_err("invalid pair");
    assert_eq!(err.message(), expected);
}

#[rstest]
fn keywords_convert_and_list_alternatives() {
    assert_eq!(convert::<Anchor>(&root(&json!("viewport"))).expect("keyword"), Anchor::Viewport);
    assert_eq!(Anchor::Map.keyword(), "map");
    assert_eq!(Anchor::from_keyword("nowhere"), None);

    let err = convert::<Anchor>(&root(&json!("nowhere"))).expect_err("unknown keyword");
    assert_eq!(
        err.message(),
        r#"value must be one of "map", "viewport", found "nowhere""#
    );
}

#[rstest]
fn extra_arguments_reach_the_routine() {
    let scaled: Scaled = convert_with(&root(&json!(1.5)), 2.0).expect("scaled");
    assert_eq!(scaled, Scaled(3.0));
}

#[rstest]
fn required_members_report_absence_and_nested_failures() {
    let doc = json!({"id": 4});
    let value = root(&doc);

    let missing = required_member::<String, _>(&value, "source", ()).expect_err("absent");
    assert_eq!(missing.message(), "missing required member 'source'");

    let wrong = required_member::<String, _>(&value, "id", ()).expect_err("number id");
    assert_eq!(wrong.message(), "id: value must be a string, found a number");
}

#[rstest]
fn optional_members_skip_absent_and_null() {
    let doc = json!({"a": null, "b": true});
    let value = root(&doc);
    assert_eq!(optional_member::<bool, _>(&value, "a", ()).expect("null"), None);
    assert_eq!(optional_member::<bool, _>(&value, "c", ()).expect("absent"), None);
    assert_eq!(optional_member::<bool, _>(&value, "b", ()).expect("present"), Some(true));
}

#[rstest]
fn array_given_where_object_expected() {
    let doc = json!([1, 2]);
    let err = expect_object(&root(&doc)).expect_err("array is not an object");
    assert_eq!(err.message(), "value must be an object, found an array");
    assert!(expect_array(&root(&doc)).is_ok());
}
