//! Adapter for figment's `Value` tree.
//!
//! This is the object-graph representation: YAML documents parsed by
//! `serde-saphyr` and values gathered from figment providers (environment
//! variables, serialised defaults) both arrive in this shape. Numbers keep
//! the width they were produced with, so they are normalised here.

use figment::value::{Empty, Num, Value};
use geojson::GeoJson;

use super::{
    MemberVisitor, ValueAdapter, array_index_out_of_range, geojson_from_json, narrow,
};
use crate::{ConversionError, ScalarValue};

fn as_integer(num: Num) -> Option<i128> {
    match num {
        Num::U8(v) => Some(i128::from(v)),
        Num::U16(v) => Some(i128::from(v)),
        Num::U32(v) => Some(i128::from(v)),
        Num::U64(v) => Some(i128::from(v)),
        Num::U128(v) => i128::try_from(v).ok(),
        Num::USize(v) => i128::try_from(v).ok(),
        Num::I8(v) => Some(i128::from(v)),
        Num::I16(v) => Some(i128::from(v)),
        Num::I32(v) => Some(i128::from(v)),
        Num::I64(v) => Some(i128::from(v)),
        Num::I128(v) => Some(v),
        Num::ISize(v) => i128::try_from(v).ok(),
        Num::F32(_) | Num::F64(_) => None,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "wide integers are accepted wherever a float is expected"
)]
fn as_double(num: Num) -> f64 {
    match num {
        Num::F32(v) => f64::from(v),
        Num::F64(v) => v,
        Num::U128(v) => v as f64,
        other => as_integer(other).map_or(0.0, |v| v as f64),
    }
}

impl ValueAdapter for &Value {
    fn is_undefined(self) -> bool {
        matches!(self, Value::Empty(_, Empty::None | Empty::Unit))
    }

    fn is_array(self) -> bool {
        matches!(self, Value::Array(..))
    }

    fn array_length(self) -> usize {
        debug_assert!(ValueAdapter::is_array(self), "array_length called on a non-array");
        match self {
            Value::Array(_, items) => items.len(),
            _ => 0,
        }
    }

    fn array_member(self, index: usize) -> Self {
        let items: &[Value] = match self {
            Value::Array(_, items) => items.as_slice(),
            _ => &[],
        };
        items
            .get(index)
            .unwrap_or_else(|| array_index_out_of_range(index, items.len()))
    }

    fn is_object(self) -> bool {
        matches!(self, Value::Dict(..))
    }

    fn object_member(self, name: &str) -> Option<Self> {
        debug_assert!(ValueAdapter::is_object(self), "object_member called on a non-dict");
        match self {
            Value::Dict(_, dict) => dict.get(name),
            _ => None,
        }
    }

    fn each_member(self, visit: &mut MemberVisitor<'_, Self>) -> Result<(), ConversionError> {
        debug_assert!(ValueAdapter::is_object(self), "each_member called on a non-dict");
        let Value::Dict(_, dict) = self else {
            return Ok(());
        };
        for (key, value) in dict {
            visit(key, value)?;
        }
        Ok(())
    }

    fn to_bool(self) -> Option<bool> {
        match self {
            Value::Bool(_, flag) => Some(*flag),
            _ => None,
        }
    }

    fn to_number(self) -> Option<f32> {
        ValueAdapter::to_double(self).map(narrow)
    }

    fn to_double(self) -> Option<f64> {
        match self {
            Value::Num(_, num) => Some(as_double(*num)),
            _ => None,
        }
    }

    fn to_text(self) -> Option<String> {
        match self {
            Value::String(_, text) => Some(text.clone()),
            Value::Char(_, ch) => Some(ch.to_string()),
            _ => None,
        }
    }

    fn to_value(self) -> Option<ScalarValue> {
        match self {
            Value::Bool(_, flag) => Some(ScalarValue::Bool(*flag)),
            Value::Num(_, num) => Some(as_integer(*num).map_or_else(
                || ScalarValue::Double(as_double(*num)),
                ScalarValue::from_wide_integer,
            )),
            Value::String(..) | Value::Char(..) => ValueAdapter::to_text(self).map(ScalarValue::String),
            Value::Empty(..) | Value::Dict(..) | Value::Array(..) => None,
        }
    }

    fn to_geojson(self) -> Result<GeoJson, ConversionError> {
        let json = serde_json::to_value(self)
            .map_err(|err| ConversionError::new(format!("invalid GeoJSON: {err}")))?;
        geojson_from_json(json)
    }
}
