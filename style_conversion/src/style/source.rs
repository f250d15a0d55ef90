//! Data sources referenced by layers.

use geojson::GeoJson;
use serde::Serialize;

use crate::convert::{expect_object, optional_member, required_member};
use crate::{ConversionError, Converter, Convertible, Enumeration, ScalarValue};

/// Default raster tile size in pixels.
pub const DEFAULT_TILE_SIZE: u16 = 512;

/// Source type keyword.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// `"geojson"`
    GeoJson,
    /// `"vector"`
    Vector,
    /// `"raster"`
    Raster,
}

impl Enumeration for SourceType {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("geojson", Self::GeoJson),
        ("vector", Self::Vector),
        ("raster", Self::Raster),
    ];
}

crate::convert::keyword_converter!(SourceType);

/// Where a GeoJSON source finds its data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GeoJsonData {
    /// Fetched from a URL.
    Url(String),
    /// Embedded in the document.
    Inline(Box<GeoJson>),
}

/// Where a tiled source finds its tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TilesetLocation {
    /// A TileJSON URL.
    Url(String),
    /// Tile URL templates.
    Tiles(Vec<String>),
}

/// Tile pyramid shared by vector and raster sources.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tileset {
    /// Where the tiles come from.
    pub location: TilesetLocation,
    /// Lowest zoom level with tiles.
    pub min_zoom: Option<f32>,
    /// Highest zoom level with tiles.
    pub max_zoom: Option<f32>,
    /// Attribution text shown with the data.
    pub attribution: Option<String>,
}

/// Type-specific part of a [`Source`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SourceKind {
    /// GeoJSON features.
    GeoJson {
        /// Feature data.
        data: GeoJsonData,
        /// Highest zoom level tiles are generated for.
        max_zoom: Option<f32>,
        /// Whether point features are clustered.
        cluster: bool,
    },
    /// Vector tiles.
    Vector(Tileset),
    /// Raster tiles.
    Raster {
        /// Tile pyramid.
        tileset: Tileset,
        /// Tile size in pixels.
        tile_size: u16,
    },
}

impl SourceKind {
    /// Type keyword the source was declared with.
    #[must_use]
    pub const fn source_type(&self) -> SourceType {
        match self {
            Self::GeoJson { .. } => SourceType::GeoJson,
            Self::Vector(_) => SourceType::Vector,
            Self::Raster { .. } => SourceType::Raster,
        }
    }
}

/// A named data source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Source {
    /// Key of the source in the style's `sources` object.
    pub id: String,
    /// Type-specific settings.
    pub kind: SourceKind,
}

impl Converter<&str> for Source {
    fn convert(value: &Convertible<'_>, id: &str) -> Result<Self, ConversionError> {
        expect_object(value)?;
        let source_type: SourceType = required_member(value, "type", ())?;
        let kind = match source_type {
            SourceType::GeoJson => SourceKind::GeoJson {
                data: geojson_data(value)?,
                max_zoom: optional_member(value, "maxzoom", ())?,
                cluster: optional_member(value, "cluster", ())?.unwrap_or(false),
            },
            SourceType::Vector => SourceKind::Vector(tileset(value)?),
            SourceType::Raster => SourceKind::Raster {
                tileset: tileset(value)?,
                tile_size: tile_size(value)?,
            },
        };
        Ok(Self {
            id: id.to_owned(),
            kind,
        })
    }
}

fn geojson_data(value: &Convertible<'_>) -> Result<GeoJsonData, ConversionError> {
    let data = value
        .object_member("data")
        .ok_or_else(|| ConversionError::missing_member("data"))?;
    if let Some(url) = data.to_text() {
        return Ok(GeoJsonData::Url(url));
    }
    data.to_geojson()
        .map(|geojson| GeoJsonData::Inline(Box::new(geojson)))
        .map_err(|err| err.in_member("data"))
}

fn tileset(value: &Convertible<'_>) -> Result<Tileset, ConversionError> {
    let url: Option<String> = optional_member(value, "url", ())?;
    let tiles: Option<Vec<String>> = optional_member(value, "tiles", ())?;
    let location = match (url, tiles) {
        (Some(url), _) => TilesetLocation::Url(url),
        (None, Some(tiles)) => TilesetLocation::Tiles(tiles),
        (None, None) => {
            return Err(ConversionError::new(
                "source must have either a 'url' or 'tiles' member",
            ));
        }
    };
    Ok(Tileset {
        location,
        min_zoom: optional_member(value, "minzoom", ())?,
        max_zoom: optional_member(value, "maxzoom", ())?,
        attribution: optional_member(value, "attribution", ())?,
    })
}

fn tile_size(value: &Convertible<'_>) -> Result<u16, ConversionError> {
    let Some(size) = optional_member::<ScalarValue, _>(value, "tileSize", ())? else {
        return Ok(DEFAULT_TILE_SIZE);
    };
    let pixels = match size {
        ScalarValue::Unsigned(pixels) => u16::try_from(pixels).ok(),
        ScalarValue::Double(pixels) => whole_pixels(pixels),
        _ => None,
    };
    pixels.ok_or_else(|| {
        ConversionError::new(format!("value must be a tile size in pixels, found {size}"))
            .in_member("tileSize")
    })
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is whole and within u16 before the cast"
)]
fn whole_pixels(pixels: f64) -> Option<u16> {
    let in_range = (0.0..=f64::from(u16::MAX)).contains(&pixels);
    (in_range && pixels.fract().abs() < f64::EPSILON).then_some(pixels as u16)
}
