//! Rendering a converted style for the terminal.

use std::fmt::Write as FmtWrite;
use std::io::Write;

use style_conversion::Enumeration;
use style_conversion::style::{Layer, Style, Visibility};

use crate::error::Result;

/// Write a short human-readable summary of `style`.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_summary<W: Write>(out: &mut W, style: &Style) -> Result<()> {
    writeln!(out, "style: {}", style.name.as_deref().unwrap_or("(unnamed)"))?;
    writeln!(out, "sources: {}", style.sources.len())?;
    for source in &style.sources {
        writeln!(out, "  {}: {}", source.id, source.kind.source_type().keyword())?;
    }
    writeln!(out, "layers: {}", style.layers.len())?;
    for layer in &style.layers {
        writeln!(out, "  {}", describe_layer(layer)?)?;
    }
    Ok(())
}

/// Write `style` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialisation or writing fails.
pub fn write_json<W: Write>(out: &mut W, style: &Style) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, style)?;
    writeln!(out)?;
    Ok(())
}

fn describe_layer(layer: &Layer) -> Result<String> {
    let mut line = format!("{}: {} from {}", layer.id, layer.kind.keyword(), layer.source);
    if let Some(source_layer) = &layer.source_layer {
        write!(line, " ({source_layer})")?;
    }
    if layer.visibility == Visibility::None {
        line.push_str(", hidden");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use style_conversion::style::PaintDefaults;
    use style_conversion::{Convertible, convert_with};

    #[rstest]
    fn summaries_list_sources_and_layers() {
        let doc = serde_json::json!({
            "name": "Demo",
            "sources": {"pts": {"type": "geojson", "data": "pts.json"}},
            "layers": [
                {"id": "dots", "type": "circle", "source": "pts"},
                {"id": "heat", "type": "heatmap", "source": "pts", "source-layer": "counts",
                 "layout": {"visibility": "none"}},
            ],
        });
        let style: Style =
            convert_with(&Convertible::from(&doc), PaintDefaults::Omit).expect("valid style");
        let mut out = Vec::new();
        write_summary(&mut out, &style).expect("write to memory");
        let text = String::from_utf8(out).expect("utf-8 summary");
        assert_eq!(
            text,
            "style: Demo\nsources: 1\n  pts: geojson\nlayers: 2\n  dots: circle from pts\n  heat: heatmap from pts (counts), hidden\n"
        );
    }
}
