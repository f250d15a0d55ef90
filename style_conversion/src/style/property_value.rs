//! Property values: constants or zoom/data functions of a typed output.

use serde::Serialize;

use crate::convert::{convert_with, expect_array, optional_member};
use crate::{ConversionError, Converter, Convertible, Enumeration, ScalarValue};

/// Options for converting a [`PropertyValue`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PropertyOptions {
    /// Whether functions may read feature data through a `property` key.
    pub data_driven: bool,
}

impl PropertyOptions {
    /// Options for properties that accept feature-data functions.
    pub const DATA_DRIVEN: Self = Self { data_driven: true };
    /// Options for properties that only accept zoom functions.
    pub const CAMERA: Self = Self { data_driven: false };
}

/// Interpolation behaviour of a [`Function`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    /// Exponential interpolation between stops.
    #[default]
    Exponential,
    /// Step function: the output of the stop at or below the input.
    Interval,
    /// Exact match of the input against stop inputs.
    Categorical,
    /// The input itself is the output.
    Identity,
}

impl Enumeration for FunctionKind {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("exponential", Self::Exponential),
        ("interval", Self::Interval),
        ("categorical", Self::Categorical),
        ("identity", Self::Identity),
    ];
}

crate::convert::keyword_converter!(FunctionKind);

/// Output types a [`PropertyValue`] may carry.
pub trait PropertyType: Converter {
    /// Whether functions may blend outputs between stops.
    ///
    /// Functions without a `type` are exponential over interpolatable
    /// outputs and interval otherwise.
    const INTERPOLATABLE: bool;
}

impl PropertyType for f32 {
    const INTERPOLATABLE: bool = true;
}

impl PropertyType for [f32; 2] {
    const INTERPOLATABLE: bool = true;
}

/// One `[input, output]` pair of a function.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stop<T> {
    /// Zoom level or feature value the stop applies at.
    pub input: ScalarValue,
    /// Output at that input.
    pub output: T,
}

/// A function of zoom level or, when `property` is set, of feature data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Function<T> {
    /// Interpolation behaviour.
    pub kind: FunctionKind,
    /// Feature property the function reads, for data-driven functions.
    pub property: Option<String>,
    /// Exponential base.
    pub base: f32,
    /// Stops in document order.
    pub stops: Vec<Stop<T>>,
    /// Output used when the input matches no stop.
    pub default: Option<T>,
}

/// Value of one style property.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub enum PropertyValue<T> {
    /// Not specified in the document.
    #[default]
    Undefined,
    /// A constant output.
    Constant(T),
    /// A zoom or data function.
    Function(Function<T>),
}

impl<T> PropertyValue<T> {
    /// `true` when the document did not set the property.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `true` when the value reads feature data.
    #[must_use]
    pub const fn is_data_driven(&self) -> bool {
        matches!(self, Self::Function(Function { property: Some(_), .. }))
    }

    /// Replace an undefined value with the constant `default`.
    pub fn fill_default(&mut self, default: T) {
        if self.is_undefined() {
            *self = Self::Constant(default);
        }
    }
}

impl<T: PropertyType> Converter<PropertyOptions> for PropertyValue<T> {
    fn convert(value: &Convertible<'_>, options: PropertyOptions) -> Result<Self, ConversionError> {
        if value.is_undefined() {
            return Ok(Self::Undefined);
        }
        if !value.is_object() {
            return convert_with(value, ()).map(Self::Constant);
        }
        convert_function(value, options).map(Self::Function)
    }
}

impl<T: PropertyType> Converter for PropertyValue<T> {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        convert_with(value, PropertyOptions::default())
    }
}

fn convert_function<T: PropertyType>(
    value: &Convertible<'_>,
    options: PropertyOptions,
) -> Result<Function<T>, ConversionError> {
    let kind = optional_member(value, "type", ())?.unwrap_or(if T::INTERPOLATABLE {
        FunctionKind::Exponential
    } else {
        FunctionKind::Interval
    });
    let property: Option<String> = optional_member(value, "property", ())?;
    if property.is_some() && !options.data_driven {
        return Err(ConversionError::new(
            "data-driven functions are not supported for this property",
        ));
    }
    let base: f32 = optional_member(value, "base", ())?.unwrap_or(1.0);
    let default: Option<T> = optional_member(value, "default", ())?;
    let stops = match value.object_member("stops") {
        Some(stops) => {
            convert_stops(&stops, property.is_some(), kind).map_err(|err| err.in_member("stops"))?
        }
        None if kind == FunctionKind::Identity => Vec::new(),
        None => return Err(ConversionError::missing_member("stops")),
    };
    Ok(Function {
        kind,
        property,
        base,
        stops,
        default,
    })
}

fn convert_stops<T: Converter>(
    stops: &Convertible<'_>,
    data_driven: bool,
    kind: FunctionKind,
) -> Result<Vec<Stop<T>>, ConversionError> {
    expect_array(stops)?;
    if stops.array_length() == 0 {
        return Err(ConversionError::new("function must have at least one stop"));
    }
    stops
        .array_members()
        .enumerate()
        .map(|(index, stop)| convert_stop(&stop, data_driven, kind).map_err(|err| err.in_index(index)))
        .collect()
}

fn convert_stop<T: Converter>(
    stop: &Convertible<'_>,
    data_driven: bool,
    kind: FunctionKind,
) -> Result<Stop<T>, ConversionError> {
    if !stop.is_array() || stop.array_length() != 2 {
        return Err(ConversionError::new(
            "function stop must be an array of [input, output]",
        ));
    }
    let input = convert_input(&stop.array_member(0), data_driven, kind)
        .map_err(|err| err.in_index(0))?;
    let output = convert_with(&stop.array_member(1), ()).map_err(|err| err.in_index(1))?;
    Ok(Stop { input, output })
}

/// Zoom inputs are doubles; data inputs keep their scalar type, and only
/// categorical functions accept booleans or strings.
fn convert_input(
    node: &Convertible<'_>,
    data_driven: bool,
    kind: FunctionKind,
) -> Result<ScalarValue, ConversionError> {
    if !data_driven {
        return node
            .to_double()
            .map(ScalarValue::Double)
            .ok_or_else(|| ConversionError::expected("a zoom level number", node.kind()));
    }
    let input = node
        .to_value()
        .ok_or_else(|| ConversionError::expected("a boolean, number, or string", node.kind()))?;
    match input {
        ScalarValue::Bool(_) | ScalarValue::String(_) if kind != FunctionKind::Categorical => {
            Err(ConversionError::new(format!(
                "{} functions need numeric stop inputs, found {}",
                kind.keyword(),
                input.kind_name()
            )))
        }
        _ => Ok(input),
    }
}
