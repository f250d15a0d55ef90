//! Generic scalar extracted from a primitive native node.

use std::fmt;

use serde::Serialize;

/// Closed set of primitive values a native node can yield.
///
/// Numbers are classified by preference: a non-negative integer is
/// [`ScalarValue::Unsigned`], a negative integer is [`ScalarValue::Signed`],
/// and anything with a fractional part or outside the integer ranges is
/// [`ScalarValue::Double`]. Consumers must match on the alternative they
/// expect; there are no implicit conversions between them.
///
/// # Examples
///
/// ```
/// use style_conversion::{Convertible, ScalarValue};
/// use serde_json::json;
///
/// let doc = json!([3, -3, 3.5, true, "x"]);
/// let root = Convertible::from(&doc);
/// let scalars: Vec<_> = root.array_members().filter_map(|m| m.to_value()).collect();
/// assert_eq!(
///     scalars,
///     vec![
///         ScalarValue::Unsigned(3),
///         ScalarValue::Signed(-3),
///         ScalarValue::Double(3.5),
///         ScalarValue::Bool(true),
///         ScalarValue::String("x".to_owned()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Boolean literal.
    Bool(bool),
    /// Non-negative integer.
    Unsigned(u64),
    /// Negative integer.
    Signed(i64),
    /// Floating-point number.
    Double(f64),
    /// UTF-8 text.
    String(String),
}

impl ScalarValue {
    /// Classify a signed integer according to the numeric preference order.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        u64::try_from(value).map_or(Self::Signed(value), Self::Unsigned)
    }

    /// Classify a 128-bit integer, falling back to a double when it fits
    /// neither 64-bit alternative.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers beyond 64 bits can only be represented approximately"
    )]
    pub fn from_wide_integer(value: i128) -> Self {
        if let Ok(unsigned) = u64::try_from(value) {
            Self::Unsigned(unsigned)
        } else if let Ok(signed) = i64::try_from(value) {
            Self::Signed(signed)
        } else {
            Self::Double(value as f64)
        }
    }

    /// Human-readable name of the alternative, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Unsigned(_) | Self::Signed(_) | Self::Double(_) => "a number",
            Self::String(_) => "a string",
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Signed(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
        }
    }
}
