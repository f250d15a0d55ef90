//! Type-erased handle over one native document node.
//!
//! [`Convertible`] is what conversion routines receive. It wraps a borrowed
//! node of whichever representation parsed the document and forwards every
//! query to that representation's [`ValueAdapter`] implementation. Erasure
//! happens once, when the root is wrapped; every routine body is compiled
//! once and serves all representations.
//!
//! The handle is a tagged union stored inline: no allocation happens when a
//! node is wrapped, and the compile-time assertion below keeps the payload
//! within [`PAYLOAD_BUDGET`]. A representation whose node does not fit breaks
//! the build rather than silently growing every handle.
//!
//! Handles are move-only. Children produced by [`Convertible::array_member`],
//! [`Convertible::object_member`] and [`Convertible::each_member`] are fresh
//! handles of the same representation as their parent, borrowing from the
//! same document; they may outlive the parent handle but never the document.

use std::fmt;
use std::mem::size_of;

use geojson::GeoJson;

use crate::{ConversionError, ScalarValue, ValueAdapter};

/// Inline storage budget, in bytes, for one handle.
///
/// Two machine words: one for the representation tag, one for the borrowed
/// node. Revisit this constant whenever a representation is added.
pub const PAYLOAD_BUDGET: usize = 2 * size_of::<usize>();

const _: () = assert!(
    size_of::<Convertible<'static>>() <= PAYLOAD_BUDGET,
    "a native representation exceeds the inline handle budget"
);

#[cfg(test)]
mod tests;

/// Structural kind of a node, as reported in diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// Missing value or explicit null.
    Undefined,
    /// Array node.
    Array,
    /// Object node.
    Object,
    /// Boolean scalar.
    Bool,
    /// Numeric scalar.
    Number,
    /// String scalar.
    String,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undefined => "null",
            Self::Array => "an array",
            Self::Object => "an object",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
        })
    }
}

#[derive(Debug)]
enum Payload<'doc> {
    Json(&'doc serde_json::Value),
    #[cfg(feature = "toml")]
    Toml(&'doc toml::Value),
    Figment(&'doc figment::value::Value),
}

/// Forward a query to the adapter of whichever representation is wrapped.
///
/// Adapter methods are called by path so that inherent methods of the native
/// types, which may share a name but not the semantics, are never picked.
/// The `wrap` forms re-tag an adapter result with the parent's
/// representation.
macro_rules! dispatch {
    (wrap $handle:expr, $method:ident($($arg:expr),*)) => {
        match $handle.payload {
            Payload::Json(node) => Payload::Json(ValueAdapter::$method(node $(, $arg)*)),
            #[cfg(feature = "toml")]
            Payload::Toml(node) => Payload::Toml(ValueAdapter::$method(node $(, $arg)*)),
            Payload::Figment(node) => Payload::Figment(ValueAdapter::$method(node $(, $arg)*)),
        }
    };
    (wrap_optional $handle:expr, $method:ident($($arg:expr),*)) => {
        match $handle.payload {
            Payload::Json(node) => ValueAdapter::$method(node $(, $arg)*).map(Payload::Json),
            #[cfg(feature = "toml")]
            Payload::Toml(node) => ValueAdapter::$method(node $(, $arg)*).map(Payload::Toml),
            Payload::Figment(node) => {
                ValueAdapter::$method(node $(, $arg)*).map(Payload::Figment)
            }
        }
    };
    ($handle:expr, $method:ident($($arg:expr),*)) => {
        match $handle.payload {
            Payload::Json(node) => ValueAdapter::$method(node $(, $arg)*),
            #[cfg(feature = "toml")]
            Payload::Toml(node) => ValueAdapter::$method(node $(, $arg)*),
            Payload::Figment(node) => ValueAdapter::$method(node $(, $arg)*),
        }
    };
}

/// Move-only handle presenting a uniform query surface over a native node.
///
/// # Examples
///
/// ```
/// use style_conversion::{Convertible, ScalarValue};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2, 3], "b": "x"});
/// let root = Convertible::from(&doc);
/// assert!(root.is_object());
///
/// let a = root.object_member("a").expect("member a");
/// assert_eq!(a.array_length(), 3);
/// assert_eq!(a.array_member(0).to_value(), Some(ScalarValue::Unsigned(1)));
/// assert_eq!(root.object_member("b").and_then(|b| b.to_text()).as_deref(), Some("x"));
/// assert!(root.object_member("c").is_none());
/// ```
#[must_use]
pub struct Convertible<'doc> {
    payload: Payload<'doc>,
}

impl<'doc> Convertible<'doc> {
    const fn wrap(payload: Payload<'doc>) -> Self {
        Self { payload }
    }

    /// `true` for a missing value or an explicit null.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        dispatch!(self, is_undefined())
    }

    /// `true` when the node is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        dispatch!(self, is_array())
    }

    /// Number of elements in an array node.
    ///
    /// Only meaningful when [`Convertible::is_array`] holds.
    #[must_use]
    pub fn array_length(&self) -> usize {
        dispatch!(self, array_length())
    }

    /// Element `index` of an array node, as a new handle.
    ///
    /// # Panics
    ///
    /// Panics when the node is not an array or `index` is not below
    /// [`Convertible::array_length`].
    pub fn array_member(&self, index: usize) -> Self {
        Self::wrap(dispatch!(wrap self, array_member(index)))
    }

    /// Iterate over the elements of an array node in index order.
    pub fn array_members(&self) -> impl Iterator<Item = Convertible<'doc>> + '_ {
        let length = if self.is_array() { self.array_length() } else { 0 };
        (0..length).map(|index| self.array_member(index))
    }

    /// `true` when the node is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        dispatch!(self, is_object())
    }

    /// Member `name` of an object node, or `None` when the key is absent.
    ///
    /// Only meaningful when [`Convertible::is_object`] holds.
    #[must_use]
    pub fn object_member(&self, name: &str) -> Option<Self> {
        dispatch!(wrap_optional self, object_member(name)).map(Self::wrap)
    }

    /// Visit every member of an object node in representation order.
    ///
    /// Only meaningful when [`Convertible::is_object`] holds.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`; no members are visited
    /// after it.
    pub fn each_member<F>(&self, mut visit: F) -> Result<(), ConversionError>
    where
        F: FnMut(&str, Convertible<'doc>) -> Result<(), ConversionError>,
    {
        match self.payload {
            Payload::Json(node) => ValueAdapter::each_member(node, &mut |key, child| {
                visit(key, Self::wrap(Payload::Json(child)))
            }),
            #[cfg(feature = "toml")]
            Payload::Toml(node) => ValueAdapter::each_member(node, &mut |key, child| {
                visit(key, Self::wrap(Payload::Toml(child)))
            }),
            Payload::Figment(node) => ValueAdapter::each_member(node, &mut |key, child| {
                visit(key, Self::wrap(Payload::Figment(child)))
            }),
        }
    }

    /// The node as a boolean, if it is one.
    #[must_use]
    pub fn to_bool(&self) -> Option<bool> {
        dispatch!(self, to_bool())
    }

    /// The node as a single-precision number, if it is numeric.
    #[must_use]
    pub fn to_number(&self) -> Option<f32> {
        dispatch!(self, to_number())
    }

    /// The node as a double-precision number, if it is numeric.
    #[must_use]
    pub fn to_double(&self) -> Option<f64> {
        dispatch!(self, to_double())
    }

    /// The node as text, if it is a string.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        dispatch!(self, to_text())
    }

    /// The node as a generic scalar, if it is a boolean, number or string.
    #[must_use]
    pub fn to_value(&self) -> Option<ScalarValue> {
        dispatch!(self, to_value())
    }

    /// Hand the node to the GeoJSON parser.
    ///
    /// # Errors
    ///
    /// Returns a diagnostic when the node is not valid GeoJSON.
    pub fn to_geojson(&self) -> Result<GeoJson, ConversionError> {
        dispatch!(self, to_geojson())
    }

    /// Structural kind of the node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        if self.is_undefined() {
            NodeKind::Undefined
        } else if self.is_array() {
            NodeKind::Array
        } else if self.is_object() {
            NodeKind::Object
        } else if self.to_bool().is_some() {
            NodeKind::Bool
        } else if self.to_double().is_some() {
            NodeKind::Number
        } else {
            NodeKind::String
        }
    }

    /// Name of the representation backing this handle.
    #[must_use]
    pub const fn representation(&self) -> &'static str {
        match self.payload {
            Payload::Json(_) => "json",
            #[cfg(feature = "toml")]
            Payload::Toml(_) => "toml",
            Payload::Figment(_) => "figment",
        }
    }
}

impl fmt::Debug for Convertible<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convertible")
            .field("representation", &self.representation())
            .field("kind", &self.kind())
            .finish()
    }
}

impl<'doc> From<&'doc serde_json::Value> for Convertible<'doc> {
    fn from(node: &'doc serde_json::Value) -> Self {
        Self::wrap(Payload::Json(node))
    }
}

#[cfg(feature = "toml")]
impl<'doc> From<&'doc toml::Value> for Convertible<'doc> {
    fn from(node: &'doc toml::Value) -> Self {
        Self::wrap(Payload::Toml(node))
    }
}

impl<'doc> From<&'doc figment::value::Value> for Convertible<'doc> {
    fn from(node: &'doc figment::value::Value) -> Self {
        Self::wrap(Payload::Figment(node))
    }
}
