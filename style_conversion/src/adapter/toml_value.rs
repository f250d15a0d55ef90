//! Adapter for `toml` documents.
//!
//! TOML has no null, so no TOML node is undefined; absent keys surface as
//! `None` from [`ValueAdapter::object_member`] instead. Datetimes are exposed
//! as their RFC 3339 text.

use geojson::GeoJson;
use toml::Value;

use super::{
    MemberVisitor, ValueAdapter, array_index_out_of_range, geojson_from_json, narrow,
};
use crate::{ConversionError, ScalarValue};

#[expect(
    clippy::cast_precision_loss,
    reason = "TOML integers are accepted wherever a float is expected"
)]
fn as_double(value: &Value) -> Option<f64> {
    match value {
        Value::Float(number) => Some(*number),
        Value::Integer(number) => Some(*number as f64),
        _ => None,
    }
}

impl ValueAdapter for &Value {
    fn is_undefined(self) -> bool {
        false
    }

    fn is_array(self) -> bool {
        Value::is_array(self)
    }

    fn array_length(self) -> usize {
        debug_assert!(Value::is_array(self), "array_length called on a non-array");
        self.as_array().map_or(0, Vec::len)
    }

    fn array_member(self, index: usize) -> Self {
        let items = self.as_array().map_or(&[][..], Vec::as_slice);
        items
            .get(index)
            .unwrap_or_else(|| array_index_out_of_range(index, items.len()))
    }

    fn is_object(self) -> bool {
        self.is_table()
    }

    fn object_member(self, name: &str) -> Option<Self> {
        debug_assert!(self.is_table(), "object_member called on a non-table");
        self.as_table().and_then(|table| table.get(name))
    }

    fn each_member(self, visit: &mut MemberVisitor<'_, Self>) -> Result<(), ConversionError> {
        debug_assert!(self.is_table(), "each_member called on a non-table");
        let Some(table) = self.as_table() else {
            return Ok(());
        };
        for (key, value) in table {
            visit(key, value)?;
        }
        Ok(())
    }

    fn to_bool(self) -> Option<bool> {
        self.as_bool()
    }

    fn to_number(self) -> Option<f32> {
        as_double(self).map(narrow)
    }

    fn to_double(self) -> Option<f64> {
        as_double(self)
    }

    fn to_text(self) -> Option<String> {
        match self {
            Value::String(text) => Some(text.clone()),
            Value::Datetime(datetime) => Some(datetime.to_string()),
            _ => None,
        }
    }

    fn to_value(self) -> Option<ScalarValue> {
        match self {
            Value::Boolean(flag) => Some(ScalarValue::Bool(*flag)),
            Value::Integer(number) => Some(ScalarValue::from_integer(*number)),
            Value::Float(number) => Some(ScalarValue::Double(*number)),
            Value::String(_) | Value::Datetime(_) => ValueAdapter::to_text(self).map(ScalarValue::String),
            Value::Array(_) | Value::Table(_) => None,
        }
    }

    fn to_geojson(self) -> Result<GeoJson, ConversionError> {
        let json = serde_json::to_value(self)
            .map_err(|err| ConversionError::new(format!("invalid GeoJSON: {err}")))?;
        geojson_from_json(json)
    }
}
