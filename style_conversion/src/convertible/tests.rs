//! Tests for the type-erased handle.

use super::*;
use figment::value::{Tag, Value as FigmentValue};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn handle_fits_the_inline_budget() {
    assert!(size_of::<Convertible<'static>>() <= PAYLOAD_BUDGET);
}

#[rstest]
fn round_trip_through_json() {
    let doc = json!({"a": [1, 2, 3], "b": "x"});
    let root = Convertible::from(&doc);

    assert!(root.is_object());
    let a = root.object_member("a").expect("member a");
    assert!(a.is_array());
    assert_eq!(a.array_length(), 3);
    let values: Vec<_> = a.array_members().filter_map(|item| item.to_value()).collect();
    assert_eq!(
        values,
        vec![
            ScalarValue::Unsigned(1),
            ScalarValue::Unsigned(2),
            ScalarValue::Unsigned(3),
        ]
    );
    let b = root.object_member("b").expect("member b");
    assert_eq!(b.to_text().as_deref(), Some("x"));
    assert!(root.object_member("c").is_none());
}

#[rstest]
#[case::unsigned(json!(3), ScalarValue::Unsigned(3))]
#[case::signed(json!(-3), ScalarValue::Signed(-3))]
#[case::double(json!(3.5), ScalarValue::Double(3.5))]
#[case::boolean(json!(false), ScalarValue::Bool(false))]
fn scalars_follow_numeric_preference(
    #[case] doc: serde_json::Value,
    #[case] expected: ScalarValue,
) {
    assert_eq!(Convertible::from(&doc).to_value(), Some(expected));
}

#[rstest]
#[case::null(json!(null), NodeKind::Undefined)]
#[case::array(json!([]), NodeKind::Array)]
#[case::object(json!({}), NodeKind::Object)]
#[case::boolean(json!(true), NodeKind::Bool)]
#[case::number(json!(1.5), NodeKind::Number)]
#[case::string(json!("text"), NodeKind::String)]
fn kind_classifies_nodes(#[case] doc: serde_json::Value, #[case] expected: NodeKind) {
    assert_eq!(Convertible::from(&doc).kind(), expected);
}

type Answers = (NodeKind, Option<ScalarValue>, Option<usize>, Option<String>, &'static str);

fn answers(handle: &Convertible<'_>) -> Answers {
    let length = handle.is_array().then(|| handle.array_length());
    (
        handle.kind(),
        handle.to_value(),
        length,
        handle.to_text(),
        handle.representation(),
    )
}

fn take(handle: Convertible<'_>) -> Convertible<'_> {
    handle
}

#[rstest]
#[case::array(json!([1, 2, 3]))]
#[case::scalar(json!(-4))]
#[case::text(json!("circle"))]
#[case::object(json!({"a": 1}))]
#[case::null(json!(null))]
fn moved_handles_answer_like_the_original(#[case] doc: serde_json::Value) {
    let original = Convertible::from(&doc);
    let before = answers(&original);

    let assigned = original;
    assert_eq!(answers(&assigned), before);

    let passed = take(assigned);
    assert_eq!(answers(&passed), before);

    let mut owners = Vec::new();
    owners.push(passed);
    let stored = owners.pop().expect("handle pushed above");
    assert_eq!(answers(&stored), before);
}

#[rstest]
fn moved_figment_handles_answer_like_the_original() {
    let value = FigmentValue::serialize(json!(["a", "b"])).expect("serialise into a figment value");
    let original = Convertible::from(&value);
    let before = answers(&original);
    let moved = take(original);
    assert_eq!(answers(&moved), before);
    assert_eq!(before.2, Some(2));
}

#[rstest]
fn children_outlive_their_parent_handle() {
    let doc = json!({"a": [1, 2, 3]});
    let child = {
        let root = Convertible::from(&doc);
        root.object_member("a").expect("member a")
    };
    assert_eq!(child.array_length(), 3);
    assert_eq!(child.representation(), "json");
}

#[rstest]
fn members_keep_the_parent_representation() {
    let value = FigmentValue::serialize(json!({"outer": {"inner": true}}))
        .expect("serialise into a figment value");
    let root = Convertible::from(&value);
    let mut seen = Vec::new();
    root.each_member(|name, child| {
        seen.push((name.to_owned(), child.representation(), child.kind()));
        Ok(())
    })
    .expect("visitor never fails");
    assert_eq!(seen, vec![("outer".to_owned(), "figment", NodeKind::Object)]);
}

#[rstest]
fn figment_strings_do_not_read_as_booleans() {
    let value = FigmentValue::String(Tag::Default, "yes".to_owned());
    let handle = Convertible::from(&value);
    assert_eq!(handle.to_bool(), None);
    assert_eq!(handle.kind(), NodeKind::String);
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_handles_report_their_representation() {
    let value: toml::Value = toml::from_str("a = 1").expect("parse TOML");
    let root = Convertible::from(&value);
    assert_eq!(root.representation(), "toml");
    let a = root.object_member("a").expect("member a");
    assert_eq!(a.to_value(), Some(ScalarValue::Unsigned(1)));
}

#[rstest]
fn debug_output_names_representation_and_kind() {
    let doc = json!([1]);
    let rendered = format!("{:?}", Convertible::from(&doc));
    assert_eq!(rendered, r#"Convertible { representation: "json", kind: Array }"#);
}
