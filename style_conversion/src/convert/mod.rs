//! Generic conversion entry point.
//!
//! Every domain type that can be read from a document implements
//! [`Converter`]. The routine is selected by type at compile time and is
//! written purely against [`Convertible`], so one body serves every native
//! representation.
//!
//! Routines that need extra context take it through the trait's `Args`
//! parameter: a source needs its id, a layer needs to know whether absent
//! paint properties should be filled with defaults. Types without extra
//! context use the default `Args = ()` and are reached through [`convert`].
//!
//! # Examples
//!
//! ```
//! use style_conversion::{Convertible, convert};
//! use serde_json::json;
//!
//! let doc = json!([1.5, 2.5]);
//! let pair: [f32; 2] = convert(&Convertible::from(&doc)).expect("a pair of numbers");
//! assert_eq!(pair, [1.5, 2.5]);
//!
//! let err = convert::<String>(&Convertible::from(&doc)).unwrap_err();
//! assert_eq!(err.message(), "value must be a string, found an array");
//! ```

use crate::{ConversionError, Convertible};

pub(crate) mod enumeration;
mod primitives;

pub use enumeration::Enumeration;
pub(crate) use enumeration::keyword_converter;

#[cfg(test)]
mod tests;

/// Conversion routine from a document node into `Self`.
///
/// Implementations either return a fully built value or a diagnostic; there
/// is no partially converted result.
pub trait Converter<Args = ()>: Sized {
    /// Convert `value`, using `args` as routine-specific context.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] describing why `value` does not describe
    /// a `Self`.
    fn convert(value: &Convertible<'_>, args: Args) -> Result<Self, ConversionError>;
}

/// Convert `value` into `T`.
///
/// # Errors
///
/// Returns the routine's [`ConversionError`] when `value` does not describe a
/// `T`.
pub fn convert<T: Converter>(value: &Convertible<'_>) -> Result<T, ConversionError> {
    convert_with(value, ())
}

/// Convert `value` into `T`, passing routine-specific `args`.
///
/// # Errors
///
/// Returns the routine's [`ConversionError`] when `value` does not describe a
/// `T`.
pub fn convert_with<T, A>(value: &Convertible<'_>, args: A) -> Result<T, ConversionError>
where
    T: Converter<A>,
{
    T::convert(value, args).inspect_err(|err| {
        tracing::trace!(
            target_type = std::any::type_name::<T>(),
            representation = value.representation(),
            error = %err,
            "conversion failed"
        );
    })
}

/// Convert a required object member, prefixing failures with its name.
///
/// # Errors
///
/// Fails when the member is absent or does not convert.
pub fn required_member<T, A>(
    object: &Convertible<'_>,
    name: &str,
    args: A,
) -> Result<T, ConversionError>
where
    T: Converter<A>,
{
    let member = object
        .object_member(name)
        .ok_or_else(|| ConversionError::missing_member(name))?;
    convert_with(&member, args).map_err(|err| err.in_member(name))
}

/// Convert an optional object member, prefixing failures with its name.
///
/// Absent members and explicit nulls both yield `None`.
///
/// # Errors
///
/// Fails when the member is present but does not convert.
pub fn optional_member<T, A>(
    object: &Convertible<'_>,
    name: &str,
    args: A,
) -> Result<Option<T>, ConversionError>
where
    T: Converter<A>,
{
    match object.object_member(name) {
        Some(member) if !member.is_undefined() => convert_with(&member, args)
            .map(Some)
            .map_err(|err| err.in_member(name)),
        _ => Ok(None),
    }
}

/// Fail unless `value` is an object.
///
/// # Errors
///
/// Returns a diagnostic naming the kind that was found instead.
pub fn expect_object(value: &Convertible<'_>) -> Result<(), ConversionError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ConversionError::expected("an object", value.kind()))
    }
}

/// Fail unless `value` is an array.
///
/// # Errors
///
/// Returns a diagnostic naming the kind that was found instead.
pub fn expect_array(value: &Convertible<'_>) -> Result<(), ConversionError> {
    if value.is_array() {
        Ok(())
    } else {
        Err(ConversionError::expected("an array", value.kind()))
    }
}
