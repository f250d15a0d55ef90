//! Map style documents: sources, layers, and the values inside them.
//!
//! Every type here is read from a [`Convertible`] through [`Converter`], so
//! the same routines accept JSON, TOML, YAML, and merged figment documents.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use style_conversion::style::{PaintDefaults, Style};
//! use style_conversion::{Convertible, convert_with};
//!
//! let doc = json!({
//!     "sources": { "points": { "type": "geojson", "data": "points.geojson" } },
//!     "layers": [{ "id": "dots", "type": "circle", "source": "points" }],
//! });
//! let style: Style = convert_with(&Convertible::from(&doc), PaintDefaults::Fill)
//!     .expect("well-formed style");
//! assert_eq!(style.layers[0].id, "dots");
//! ```

use serde::Serialize;

use crate::convert::{convert_with, expect_array, expect_object, optional_member};
use crate::{ConversionError, Converter, Convertible};

mod color;
mod filter;
mod layer;
mod paint;
mod property_value;
mod source;

pub use color::Color;
pub use filter::{ComparisonOp, Filter};
pub use layer::{Layer, LayerKind, Paint, Visibility};
pub use paint::{
    Alignment, CirclePaint, CirclePitchScale, HeatmapPaint, PaintDefaults, PaintProperties,
    TranslateAnchor,
};
pub use property_value::{
    Function, FunctionKind, PropertyOptions, PropertyType, PropertyValue, Stop,
};
pub use source::{
    DEFAULT_TILE_SIZE, GeoJsonData, Source, SourceKind, SourceType, Tileset, TilesetLocation,
};


/// A complete style document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Style {
    /// Human-readable style name.
    pub name: Option<String>,
    /// Sources in the order the document's representation visits them.
    pub sources: Vec<Source>,
    /// Layers in drawing order.
    pub layers: Vec<Layer>,
}

impl Style {
    /// Look up a source by id.
    #[must_use]
    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.iter().find(|source| source.id == id)
    }
}

impl Converter<PaintDefaults> for Style {
    fn convert(value: &Convertible<'_>, defaults: PaintDefaults) -> Result<Self, ConversionError> {
        expect_object(value)?;
        let name = optional_member(value, "name", ())?;
        let sources = convert_sources(value).map_err(|err| err.in_member("sources"))?;
        let layers = convert_layers(value, defaults).map_err(|err| err.in_member("layers"))?;
        for layer in &layers {
            if !sources.iter().any(|source| source.id == layer.source) {
                tracing::debug!(
                    layer = %layer.id,
                    source = %layer.source,
                    "layer references a source the style does not define"
                );
            }
        }
        Ok(Self {
            name,
            sources,
            layers,
        })
    }
}

impl Converter for Style {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        convert_with(value, PaintDefaults::default())
    }
}

fn convert_sources(style: &Convertible<'_>) -> Result<Vec<Source>, ConversionError> {
    let Some(sources) = style.object_member("sources").filter(|v| !v.is_undefined()) else {
        return Ok(Vec::new());
    };
    expect_object(&sources)?;
    let mut converted: Vec<Source> = Vec::new();
    sources.each_member(|id, node| {
        let source: Source = convert_with(&node, id).map_err(|err| err.in_member(id))?;
        converted.push(source);
        Ok(())
    })?;
    Ok(converted)
}

fn convert_layers(
    style: &Convertible<'_>,
    defaults: PaintDefaults,
) -> Result<Vec<Layer>, ConversionError> {
    let Some(layers) = style.object_member("layers").filter(|v| !v.is_undefined()) else {
        return Ok(Vec::new());
    };
    expect_array(&layers)?;
    layers
        .array_members()
        .enumerate()
        .map(|(index, layer)| convert_with(&layer, defaults).map_err(|err| err.in_index(index)))
        .collect()
}
