//! Contract every native value representation satisfies.
//!
//! A native representation is a concrete type that holds a parsed document
//! node: a `serde_json::Value`, a `toml::Value`, or a figment
//! `Value` produced by the YAML loader or by merged providers. Each one
//! implements [`ValueAdapter`] for a *borrowed* node, so the adapter type is
//! `&'doc R` and every child it hands out is a reference into the same
//! document.
//!
//! Conversion routines never see these types. They work against
//! [`crate::Convertible`], which erases the representation once at the root
//! and forwards each query back to the adapter implemented here.
//!
//! # Preconditions
//!
//! The array and object accessors are only meaningful for nodes that are
//! arrays or objects respectively. Violations trip a `debug_assert!`; release
//! builds answer with the neutral value (`0`, `None`, no visits) instead,
//! except for [`ValueAdapter::array_member`], which has nothing sensible to
//! return and panics.
//!
//! # Member order
//!
//! [`ValueAdapter::each_member`] visits members in the representation's own
//! order. The bundled representations all keep object keys sorted, but that
//! is not part of the contract: callers must not rely on two representations
//! of the "same" document producing identical orders.

use geojson::GeoJson;

use crate::{ConversionError, ScalarValue};

mod figment_value;
mod json;
#[cfg(feature = "toml")]
mod toml_value;


/// Callback invoked once per object member by [`ValueAdapter::each_member`].
///
/// Returning an error stops the iteration and propagates that error.
pub type MemberVisitor<'v, A> = dyn FnMut(&str, A) -> Result<(), ConversionError> + 'v;

/// Uniform query surface over one native node.
///
/// Implementations must be cheap to copy: the bundled adapters are shared
/// references, which also makes them trivially relocatable.
pub trait ValueAdapter: Copy {
    /// `true` for a missing value or an explicit null.
    fn is_undefined(self) -> bool;

    /// `true` when the node is an array.
    fn is_array(self) -> bool;

    /// Number of elements in an array node.
    fn array_length(self) -> usize;

    /// Element `index` of an array node.
    ///
    /// # Panics
    ///
    /// Panics when the node is not an array or `index` is out of range.
    fn array_member(self, index: usize) -> Self;

    /// `true` when the node is an object.
    fn is_object(self) -> bool;

    /// Member `name` of an object node, or `None` when the key is absent.
    fn object_member(self, name: &str) -> Option<Self>;

    /// Visit every member of an object node in representation order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`; no further members are
    /// visited after it.
    fn each_member(self, visit: &mut MemberVisitor<'_, Self>) -> Result<(), ConversionError>;

    /// The node as a boolean, if it is one.
    fn to_bool(self) -> Option<bool>;

    /// The node as a single-precision number, if it is numeric.
    fn to_number(self) -> Option<f32>;

    /// The node as a double-precision number, if it is numeric.
    fn to_double(self) -> Option<f64>;

    /// The node as text, if it is a string.
    fn to_text(self) -> Option<String>;

    /// The node as a generic scalar, if it is a boolean, number or string.
    fn to_value(self) -> Option<ScalarValue>;

    /// Parse the node as GeoJSON.
    ///
    /// # Errors
    ///
    /// Returns a diagnostic when the node does not hold valid GeoJSON.
    fn to_geojson(self) -> Result<GeoJson, ConversionError>;
}

/// Narrow a double to single precision, the precision of style numbers.
#[expect(
    clippy::cast_possible_truncation,
    reason = "style numbers are single precision by definition"
)]
pub(crate) fn narrow(value: f64) -> f32 {
    value as f32
}

/// Run the geometry collaborator over a JSON rendering of a node.
pub(crate) fn geojson_from_json(value: serde_json::Value) -> Result<GeoJson, ConversionError> {
    GeoJson::from_json_value(value)
        .map_err(|err| ConversionError::new(format!("invalid GeoJSON: {err}")))
}

/// Panic raised when [`ValueAdapter::array_member`] is misused.
#[cold]
#[track_caller]
pub(crate) fn array_index_out_of_range(index: usize, length: usize) -> ! {
    panic!("array member {index} requested from a node with {length} elements")
}
