//! Legacy feature filters: `["==", "class", "park"]` and friends.

use serde::Serialize;

use crate::convert::expect_array;
use crate::{ConversionError, Converter, Convertible, ScalarValue};

/// Comparison operator of a [`Filter::Comparison`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ComparisonOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl ComparisonOp {
    fn from_operator(operator: &str) -> Option<Self> {
        Some(match operator {
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            "<=" => Self::LessEqual,
            ">" => Self::Greater,
            ">=" => Self::GreaterEqual,
            _ => return None,
        })
    }
}

/// A predicate over feature properties.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Filter {
    /// Every child filter matches.
    All(Vec<Filter>),
    /// At least one child filter matches.
    Any(Vec<Filter>),
    /// No child filter matches.
    NoneOf(Vec<Filter>),
    /// The property compares to a value.
    Comparison {
        /// Operator applied.
        op: ComparisonOp,
        /// Feature property, or `$type` / `$id`.
        key: String,
        /// Right-hand side.
        value: ScalarValue,
    },
    /// The property equals one of the values.
    In {
        /// Feature property.
        key: String,
        /// Candidate values.
        values: Vec<ScalarValue>,
    },
    /// The property equals none of the values.
    NotIn {
        /// Feature property.
        key: String,
        /// Excluded values.
        values: Vec<ScalarValue>,
    },
    /// The feature has the property.
    Has(String),
    /// The feature lacks the property.
    NotHas(String),
}

impl Converter for Filter {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        expect_array(value).map_err(|_| ConversionError::new("filter expression must be an array"))?;
        let length = value.array_length();
        if length == 0 {
            return Err(ConversionError::new(
                "filter expression must have at least one element",
            ));
        }
        let operator = value
            .array_member(0)
            .to_text()
            .ok_or_else(|| ConversionError::new("filter operator must be a string"))?;
        match operator.as_str() {
            "all" => children(value).map(Self::All),
            "any" => children(value).map(Self::Any),
            "none" => children(value).map(Self::NoneOf),
            "in" => membership(value, "in").map(|(key, values)| Self::In { key, values }),
            "!in" => membership(value, "!in").map(|(key, values)| Self::NotIn { key, values }),
            "has" => presence(value, "has").map(Self::Has),
            "!has" => presence(value, "!has").map(Self::NotHas),
            other => {
                let op = ComparisonOp::from_operator(other).ok_or_else(|| {
                    ConversionError::new(format!("filter operator \"{other}\" is not supported"))
                })?;
                if length != 3 {
                    return Err(ConversionError::new(format!(
                        "filter \"{other}\" must have exactly 3 elements"
                    )));
                }
                Ok(Self::Comparison {
                    op,
                    key: filter_key(value)?,
                    value: filter_operand(value, 2)?,
                })
            }
        }
    }
}

fn children(value: &Convertible<'_>) -> Result<Vec<Filter>, ConversionError> {
    (1..value.array_length())
        .map(|index| {
            Filter::convert(&value.array_member(index), ()).map_err(|err| err.in_index(index))
        })
        .collect()
}

fn membership(
    value: &Convertible<'_>,
    operator: &str,
) -> Result<(String, Vec<ScalarValue>), ConversionError> {
    if value.array_length() < 2 {
        return Err(ConversionError::new(format!(
            "filter \"{operator}\" must have at least 2 elements"
        )));
    }
    let key = filter_key(value)?;
    let values = (2..value.array_length())
        .map(|index| filter_operand(value, index))
        .collect::<Result<_, _>>()?;
    Ok((key, values))
}

fn presence(value: &Convertible<'_>, operator: &str) -> Result<String, ConversionError> {
    if value.array_length() != 2 {
        return Err(ConversionError::new(format!(
            "filter \"{operator}\" must have exactly 2 elements"
        )));
    }
    filter_key(value)
}

fn filter_key(value: &Convertible<'_>) -> Result<String, ConversionError> {
    value
        .array_member(1)
        .to_text()
        .ok_or_else(|| ConversionError::new("filter key must be a string").in_index(1))
}

fn filter_operand(value: &Convertible<'_>, index: usize) -> Result<ScalarValue, ConversionError> {
    value.array_member(index).to_value().ok_or_else(|| {
        ConversionError::new("filter value must be a boolean, number, or string").in_index(index)
    })
}
