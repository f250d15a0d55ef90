//! Handles cannot be duplicated.

use style_conversion::Convertible;

fn assert_clone<T: Clone>() {}

fn main() {
    assert_clone::<Convertible<'static>>();
}
