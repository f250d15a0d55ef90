//! One sample style in every supported text format.
//!
//! All three documents describe the same style:
//!
//! - a clustered GeoJSON source `stops` with an empty feature collection;
//! - a vector source `ridership` loaded from a `TileJSON` URL;
//! - a circle layer `stop-dots` with a zoom function radius, a constant
//!   colour, and a filter;
//! - a hidden heatmap layer `heat` with a data-driven weight.

/// Id of the circle layer in the sample style.
pub const CIRCLE_LAYER: &str = "stop-dots";

/// Id of the heatmap layer in the sample style.
pub const HEATMAP_LAYER: &str = "heat";

/// The sample style as JSON.
pub const STYLE_JSON: &str = r##"{
  "name": "Transit",
  "sources": {
    "stops": {
      "type": "geojson",
      "data": { "type": "FeatureCollection", "features": [] },
      "cluster": true
    },
    "ridership": { "type": "vector", "url": "https://tiles.example.com/ridership.json" }
  },
  "layers": [
    {
      "id": "stop-dots",
      "type": "circle",
      "source": "stops",
      "filter": ["==", "kind", "bus"],
      "paint": {
        "circle-radius": { "base": 1.5, "stops": [[10, 2], [16, 8]] },
        "circle-color": "#ff0000"
      }
    },
    {
      "id": "heat",
      "type": "heatmap",
      "source": "ridership",
      "source-layer": "riders",
      "maxzoom": 14,
      "layout": { "visibility": "none" },
      "paint": {
        "heatmap-weight": { "property": "riders", "stops": [[0, 0], [1000, 1]] }
      }
    }
  ]
}
"##;

/// The sample style as TOML.
pub const STYLE_TOML: &str = r##"name = "Transit"

[sources.stops]
type = "geojson"
data = { type = "FeatureCollection", features = [] }
cluster = true

[sources.ridership]
type = "vector"
url = "https://tiles.example.com/ridership.json"

[[layers]]
id = "stop-dots"
type = "circle"
source = "stops"
filter = ["==", "kind", "bus"]

[layers.paint]
circle-radius = { base = 1.5, stops = [[10, 2], [16, 8]] }
circle-color = "#ff0000"

[[layers]]
id = "heat"
type = "heatmap"
source = "ridership"
source-layer = "riders"
maxzoom = 14
layout = { visibility = "none" }

[layers.paint]
heatmap-weight = { property = "riders", stops = [[0, 0], [1000, 1]] }
"##;

/// The sample style as YAML.
pub const STYLE_YAML: &str = r##"name: Transit
sources:
  stops:
    type: geojson
    data:
      type: FeatureCollection
      features: []
    cluster: true
  ridership:
    type: vector
    url: https://tiles.example.com/ridership.json
layers:
  - id: stop-dots
    type: circle
    source: stops
    filter: ["==", kind, bus]
    paint:
      circle-radius:
        base: 1.5
        stops: [[10, 2], [16, 8]]
      circle-color: "#ff0000"
  - id: heat
    type: heatmap
    source: ridership
    source-layer: riders
    maxzoom: 14
    layout:
      visibility: none
    paint:
      heatmap-weight:
        property: riders
        stops: [[0, 0], [1000, 1]]
"##;
