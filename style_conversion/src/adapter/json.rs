//! Adapter for `serde_json` documents (and JSON5, which parses into them).

use geojson::GeoJson;
use serde_json::Value;

use super::{
    MemberVisitor, ValueAdapter, array_index_out_of_range, geojson_from_json, narrow,
};
use crate::{ConversionError, ScalarValue};

impl ValueAdapter for &Value {
    fn is_undefined(self) -> bool {
        self.is_null()
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
        Value::is_object(self)
    }

    fn object_member(self, name: &str) -> Option<Self> {
        debug_assert!(Value::is_object(self), "object_member called on a non-object");
        self.as_object().and_then(|map| map.get(name))
    }

    fn each_member(self, visit: &mut MemberVisitor<'_, Self>) -> Result<(), ConversionError> {
        debug_assert!(Value::is_object(self), "each_member called on a non-object");
        let Some(map) = self.as_object() else {
            return Ok(());
        };
        for (key, value) in map {
            visit(key, value)?;
        }
        Ok(())
    }

    fn to_bool(self) -> Option<bool> {
        self.as_bool()
    }

    fn to_number(self) -> Option<f32> {
        self.as_f64().map(narrow)
    }

    fn to_double(self) -> Option<f64> {
        self.as_f64()
    }

    fn to_text(self) -> Option<String> {
        self.as_str().map(str::to_owned)
    }

    fn to_value(self) -> Option<ScalarValue> {
        match self {
            Value::Bool(flag) => Some(ScalarValue::Bool(*flag)),
            Value::Number(number) => number
                .as_u64()
                .map(ScalarValue::Unsigned)
                .or_else(|| number.as_i64().map(ScalarValue::Signed))
                .or_else(|| number.as_f64().map(ScalarValue::Double)),
            Value::String(text) => Some(ScalarValue::String(text.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn to_geojson(self) -> Result<GeoJson, ConversionError> {
        geojson_from_json(self.clone())
    }
}
