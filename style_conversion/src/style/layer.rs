//! Layers: a source, an optional filter, and typed paint properties.

use serde::Serialize;

use super::paint::{CirclePaint, HeatmapPaint, PaintDefaults, convert_paint};
use super::Filter;
use crate::convert::{convert_with, expect_object, optional_member, required_member};
use crate::{ConversionError, Converter, Convertible, Enumeration};

/// Layer type keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// `"circle"`
    Circle,
    /// `"heatmap"`
    Heatmap,
}

/// Whether a layer is drawn.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Drawn.
    #[default]
    Visible,
    /// Hidden.
    None,
}

impl Enumeration for LayerKind {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("circle", Self::Circle), ("heatmap", Self::Heatmap)];
}

impl Enumeration for Visibility {
    const KEYWORDS: &'static [(&'static str, Self)] =
        &[("visible", Self::Visible), ("none", Self::None)];
}

crate::convert::keyword_converter!(LayerKind, Visibility);

/// Paint properties, typed by layer kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    /// Properties of a circle layer.
    Circle(CirclePaint),
    /// Properties of a heatmap layer.
    Heatmap(HeatmapPaint),
}

/// One layer of a style.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    /// Unique layer id.
    pub id: String,
    /// Layer type.
    pub kind: LayerKind,
    /// Id of the source the layer draws from.
    pub source: String,
    /// Layer within a vector source.
    pub source_layer: Option<String>,
    /// Features drawn, when not all of them.
    pub filter: Option<Filter>,
    /// Lowest zoom level the layer is drawn at.
    pub min_zoom: Option<f32>,
    /// Zoom level at and above which the layer is hidden.
    pub max_zoom: Option<f32>,
    /// `layout.visibility`.
    pub visibility: Visibility,
    /// Paint properties matching `kind`.
    pub paint: Paint,
}

impl Converter<PaintDefaults> for Layer {
    fn convert(value: &Convertible<'_>, defaults: PaintDefaults) -> Result<Self, ConversionError> {
        expect_object(value)?;
        let id: String = required_member(value, "id", ())?;
        let kind: LayerKind = required_member(value, "type", ())?;
        let source: String = required_member(value, "source", ())?;
        let paint = match kind {
            LayerKind::Circle => Paint::Circle(convert_paint(value, defaults)?),
            LayerKind::Heatmap => Paint::Heatmap(convert_paint(value, defaults)?),
        };
        Ok(Self {
            id,
            kind,
            source,
            source_layer: optional_member(value, "source-layer", ())?,
            filter: optional_member(value, "filter", ())?,
            min_zoom: optional_member(value, "minzoom", ())?,
            max_zoom: optional_member(value, "maxzoom", ())?,
            visibility: visibility(value)?,
            paint,
        })
    }
}

impl Converter for Layer {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        convert_with(value, PaintDefaults::default())
    }
}

fn visibility(layer: &Convertible<'_>) -> Result<Visibility, ConversionError> {
    let Some(layout) = layer.object_member("layout").filter(|v| !v.is_undefined()) else {
        return Ok(Visibility::default());
    };
    expect_object(&layout)
        .and_then(|()| optional_member(&layout, "visibility", ()))
        .map(Option::unwrap_or_default)
        .map_err(|err| err.in_member("layout"))
}
