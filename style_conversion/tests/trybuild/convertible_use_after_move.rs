//! A moved-from handle cannot be queried.

use style_conversion::Convertible;

fn main() {
    let doc = serde_json::json!([1, 2]);
    let first = Convertible::from(&doc);
    let second = first;
    let _kind = first.kind();
    drop(second);
}
