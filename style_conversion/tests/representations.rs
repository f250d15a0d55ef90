//! The same style converts identically from every native representation.
use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use style_conversion::document::{Document, Format};
use style_conversion::style::{Paint, PaintDefaults, PropertyValue, SourceKind, Style, Visibility};
use style_conversion::{ScalarValue, convert_with};
use test_helpers::documents::{CIRCLE_LAYER, HEATMAP_LAYER, STYLE_JSON};

fn convert_style(text: &str, format: Format) -> Result<Style> {
    let document = Document::parse(text, format)?;
    let style: Style = convert_with(&document.root(), PaintDefaults::Fill)?;
    Ok(style)
}

#[fixture]
fn json_style() -> Style {
    convert_style(STYLE_JSON, Format::Json).expect("sample JSON style converts")
}

#[rstest]
fn sample_style_has_expected_shape(json_style: Style) -> Result<()> {
    ensure!(json_style.name.as_deref() == Some("Transit"));
    let stops = json_style
        .source("stops")
        .ok_or_else(|| anyhow!("missing source stops"))?;
    ensure!(matches!(stops.kind, SourceKind::GeoJson { cluster: true, .. }));

    let [circle, heat] = json_style.layers.as_slice() else {
        return Err(anyhow!("expected two layers"));
    };
    ensure!(circle.id == CIRCLE_LAYER);
    ensure!(heat.id == HEATMAP_LAYER);
    ensure!(heat.visibility == Visibility::None);
    ensure!(heat.source_layer.as_deref() == Some("riders"));
    ensure!(heat.max_zoom == Some(14.0));

    let Paint::Circle(paint) = &circle.paint else {
        return Err(anyhow!("stop-dots should be a circle layer"));
    };
    let PropertyValue::Function(radius) = &paint.radius else {
        return Err(anyhow!("circle-radius should be a zoom function"));
    };
    ensure!(radius.base == 1.5);
    let inputs: Vec<_> = radius.stops.iter().map(|stop| stop.input.clone()).collect();
    ensure!(inputs == [ScalarValue::Double(10.0), ScalarValue::Double(16.0)]);
    Ok(())
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_matches_json(json_style: Style) -> Result<()> {
    let style = convert_style(test_helpers::documents::STYLE_TOML, Format::Toml)?;
    ensure!(style == json_style, "TOML style differs: {style:#?}");
    Ok(())
}

#[cfg(feature = "yaml")]
#[rstest]
fn yaml_matches_json(json_style: Style) -> Result<()> {
    let style = convert_style(test_helpers::documents::STYLE_YAML, Format::Yaml)?;
    ensure!(style == json_style, "YAML style differs: {style:#?}");
    Ok(())
}

#[cfg(feature = "json5")]
#[rstest]
fn json5_matches_json(json_style: Style) -> Result<()> {
    let style = convert_style(STYLE_JSON, Format::Json5)?;
    ensure!(style == json_style, "JSON5 style differs: {style:#?}");
    Ok(())
}

fn check_numeric_preference(text: &str, format: Format) -> Result<()> {
    let document = Document::parse(text, format)?;
    let root = document.root();
    let values = root
        .object_member("values")
        .ok_or_else(|| anyhow!("missing member values"))?;
    let scalars: Vec<_> = values.array_members().map(|value| value.to_value()).collect();
    ensure!(
        scalars
            == [
                Some(ScalarValue::Unsigned(3)),
                Some(ScalarValue::Signed(-3)),
                Some(ScalarValue::Double(3.5)),
            ],
        "{} produced {scalars:?}",
        format.name()
    );
    Ok(())
}

#[rstest]
fn json_numbers_prefer_unsigned_then_signed_then_double() -> Result<()> {
    check_numeric_preference(r#"{"values": [3, -3, 3.5]}"#, Format::Json)
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_numbers_prefer_unsigned_then_signed_then_double() -> Result<()> {
    check_numeric_preference("values = [3, -3, 3.5]", Format::Toml)
}

#[cfg(feature = "yaml")]
#[rstest]
fn yaml_numbers_prefer_unsigned_then_signed_then_double() -> Result<()> {
    check_numeric_preference("values: [3, -3, 3.5]", Format::Yaml)
}
