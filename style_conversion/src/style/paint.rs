//! Paint property tables for the supported layer types.
//!
//! Each table lists the properties a layer type understands together with
//! the default used when the document leaves a property out and the caller
//! asks for [`PaintDefaults::Fill`].

use serde::Serialize;

use super::{Color, PropertyOptions, PropertyType, PropertyValue};
use crate::convert::{convert_with, expect_object};
use crate::{ConversionError, Convertible, Enumeration};

/// Whether absent paint properties are filled with their defaults.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaintDefaults {
    /// Leave absent properties [`PropertyValue::Undefined`].
    #[default]
    Omit,
    /// Replace absent properties with their documented default constant.
    Fill,
}

/// Frame of reference for a translation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslateAnchor {
    /// Relative to the map.
    #[default]
    Map,
    /// Relative to the viewport.
    Viewport,
}

/// Whether circles shrink with distance when the map is pitched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CirclePitchScale {
    /// Scaled with the map.
    #[default]
    Map,
    /// Constant size in the viewport.
    Viewport,
}

/// Plane a symbol or circle is drawn in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Aligned to the map plane.
    Map,
    /// Aligned to the viewport.
    #[default]
    Viewport,
    /// Chosen from the layer's other settings.
    Auto,
}

impl Enumeration for TranslateAnchor {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("map", Self::Map), ("viewport", Self::Viewport)];
}

impl Enumeration for CirclePitchScale {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("map", Self::Map), ("viewport", Self::Viewport)];
}

impl Enumeration for Alignment {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("map", Self::Map),
        ("viewport", Self::Viewport),
        ("auto", Self::Auto),
    ];
}

crate::convert::keyword_converter!(TranslateAnchor, CirclePitchScale, Alignment);

macro_rules! stepped_property_type {
    ($($ty:ty),+) => {
        $(
            impl PropertyType for $ty {
                const INTERPOLATABLE: bool = false;
            }
        )+
    };
}

stepped_property_type!(TranslateAnchor, CirclePitchScale, Alignment);

/// A layer type's table of paint properties.
pub trait PaintProperties: Default {
    /// Layer type keyword, used in diagnostics.
    const LAYER_TYPE: &'static str;

    /// Convert `value` into the property called `name`.
    ///
    /// # Errors
    ///
    /// Fails when the layer type has no such property or the value does not
    /// convert.
    fn set(&mut self, name: &str, value: &Convertible<'_>) -> Result<(), ConversionError>;

    /// Replace every undefined property with its default.
    fn fill_defaults(&mut self);
}

/// Convert the `paint` member of `layer` into `P`.
pub(super) fn convert_paint<P: PaintProperties>(
    layer: &Convertible<'_>,
    defaults: PaintDefaults,
) -> Result<P, ConversionError> {
    let mut paint = P::default();
    if let Some(value) = layer.object_member("paint").filter(|v| !v.is_undefined()) {
        expect_object(&value)
            .and_then(|()| {
                value.each_member(|name, member| {
                    paint.set(name, &member).map_err(|err| err.in_member(name))
                })
            })
            .map_err(|err| err.in_member("paint"))?;
    }
    if defaults == PaintDefaults::Fill {
        paint.fill_defaults();
    }
    Ok(paint)
}

fn data_driven<T: PropertyType>(value: &Convertible<'_>) -> Result<PropertyValue<T>, ConversionError> {
    convert_with(value, PropertyOptions::DATA_DRIVEN)
}

fn camera<T: PropertyType>(value: &Convertible<'_>) -> Result<PropertyValue<T>, ConversionError> {
    convert_with(value, PropertyOptions::CAMERA)
}

fn unsupported<P: PaintProperties>() -> ConversionError {
    ConversionError::new(format!(
        "property is not supported by {} layers",
        P::LAYER_TYPE
    ))
}

/// Paint properties of a `circle` layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CirclePaint {
    /// `circle-radius`, default 5.
    pub radius: PropertyValue<f32>,
    /// `circle-color`, default black.
    pub color: PropertyValue<Color>,
    /// `circle-blur`, default 0.
    pub blur: PropertyValue<f32>,
    /// `circle-opacity`, default 1.
    pub opacity: PropertyValue<f32>,
    /// `circle-translate`, default `[0, 0]`.
    pub translate: PropertyValue<[f32; 2]>,
    /// `circle-translate-anchor`, default `map`.
    pub translate_anchor: PropertyValue<TranslateAnchor>,
    /// `circle-pitch-scale`, default `map`.
    pub pitch_scale: PropertyValue<CirclePitchScale>,
    /// `circle-pitch-alignment`, default `viewport`.
    pub pitch_alignment: PropertyValue<Alignment>,
    /// `circle-stroke-width`, default 0.
    pub stroke_width: PropertyValue<f32>,
    /// `circle-stroke-color`, default black.
    pub stroke_color: PropertyValue<Color>,
    /// `circle-stroke-opacity`, default 1.
    pub stroke_opacity: PropertyValue<f32>,
}

impl PaintProperties for CirclePaint {
    const LAYER_TYPE: &'static str = "circle";

    fn set(&mut self, name: &str, value: &Convertible<'_>) -> Result<(), ConversionError> {
        match name {
            "circle-radius" => self.radius = data_driven(value)?,
            "circle-color" => self.color = data_driven(value)?,
            "circle-blur" => self.blur = data_driven(value)?,
            "circle-opacity" => self.opacity = data_driven(value)?,
            "circle-translate" => self.translate = camera(value)?,
            "circle-translate-anchor" => self.translate_anchor = camera(value)?,
            "circle-pitch-scale" => self.pitch_scale = camera(value)?,
            "circle-pitch-alignment" => self.pitch_alignment = camera(value)?,
            "circle-stroke-width" => self.stroke_width = data_driven(value)?,
            "circle-stroke-color" => self.stroke_color = data_driven(value)?,
            "circle-stroke-opacity" => self.stroke_opacity = data_driven(value)?,
            _ => return Err(unsupported::<Self>()),
        }
        Ok(())
    }

    fn fill_defaults(&mut self) {
        self.radius.fill_default(5.0);
        self.color.fill_default(Color::BLACK);
        self.blur.fill_default(0.0);
        self.opacity.fill_default(1.0);
        self.translate.fill_default([0.0, 0.0]);
        self.translate_anchor.fill_default(TranslateAnchor::Map);
        self.pitch_scale.fill_default(CirclePitchScale::Map);
        self.pitch_alignment.fill_default(Alignment::Viewport);
        self.stroke_width.fill_default(0.0);
        self.stroke_color.fill_default(Color::BLACK);
        self.stroke_opacity.fill_default(1.0);
    }
}

/// Paint properties of a `heatmap` layer.
///
/// `heatmap-color` is a colour ramp over heatmap density and needs the
/// expression language, so it is not part of this table.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HeatmapPaint {
    /// `heatmap-radius`, default 30.
    pub radius: PropertyValue<f32>,
    /// `heatmap-weight`, default 1.
    pub weight: PropertyValue<f32>,
    /// `heatmap-intensity`, default 1.
    pub intensity: PropertyValue<f32>,
    /// `heatmap-opacity`, default 1.
    pub opacity: PropertyValue<f32>,
}

impl PaintProperties for HeatmapPaint {
    const LAYER_TYPE: &'static str = "heatmap";

    fn set(&mut self, name: &str, value: &Convertible<'_>) -> Result<(), ConversionError> {
        match name {
            "heatmap-radius" => self.radius = data_driven(value)?,
            "heatmap-weight" => self.weight = data_driven(value)?,
            "heatmap-intensity" => self.intensity = camera(value)?,
            "heatmap-opacity" => self.opacity = camera(value)?,
            _ => return Err(unsupported::<Self>()),
        }
        Ok(())
    }

    fn fill_defaults(&mut self) {
        self.radius.fill_default(30.0);
        self.weight.fill_default(1.0);
        self.intensity.fill_default(1.0);
        self.opacity.fill_default(1.0);
    }
}
