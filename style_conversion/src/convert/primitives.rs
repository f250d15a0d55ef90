//! Routines for scalars and simple containers.

use super::{Converter, convert, expect_array};
use crate::{ConversionError, Convertible, ScalarValue};

impl Converter for bool {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        value
            .to_bool()
            .ok_or_else(|| ConversionError::expected("a boolean", value.kind()))
    }
}

impl Converter for f32 {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        value
            .to_number()
            .ok_or_else(|| ConversionError::expected("a number", value.kind()))
    }
}

impl Converter for f64 {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        value
            .to_double()
            .ok_or_else(|| ConversionError::expected("a number", value.kind()))
    }
}

impl Converter for String {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        value
            .to_text()
            .ok_or_else(|| ConversionError::expected("a string", value.kind()))
    }
}

impl Converter for ScalarValue {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        value
            .to_value()
            .ok_or_else(|| ConversionError::expected("a boolean, number, or string", value.kind()))
    }
}

impl<T: Converter> Converter for Option<T> {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        if value.is_undefined() {
            Ok(None)
        } else {
            convert(value).map(Some)
        }
    }
}

impl<T: Converter> Converter for Vec<T> {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        expect_array(value)?;
        value
            .array_members()
            .enumerate()
            .map(|(index, member)| convert(&member).map_err(|err| err.in_index(index)))
            .collect()
    }
}

impl Converter for [f32; 2] {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        expect_array(value)?;
        let length = value.array_length();
        if length != 2 {
            return Err(ConversionError::new(format!(
                "value must be an array of two numbers, found {length} elements"
            )));
        }
        let first = convert(&value.array_member(0)).map_err(|err| err.in_index(0))?;
        let second = convert(&value.array_member(1)).map_err(|err| err.in_index(1))?;
        Ok([first, second])
    }
}
