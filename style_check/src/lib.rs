//! Command-line front end for checking style documents.
//!
//! The binary loads one document, converts it into a
//! [`style_conversion::style::Style`], and prints either a short summary or
//! the converted model as JSON. Conversion failures are reported with the
//! member path that caused them.

pub mod cli;
pub mod error;
pub mod report;

use std::io::Write;

use style_conversion::document::read_document;
use style_conversion::style::Style;
use style_conversion::{StyleResultExt, convert_with};
use tracing_subscriber::EnvFilter;

use crate::cli::StyleCheckCli;
use crate::error::Result;

/// Install the `tracing` subscriber used by the binary.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level: `warn`
/// by default, `debug` for `-v`, and `trace` for `-vv` and above.
pub fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Load, convert, and report on the document named by `cli`.
///
/// # Errors
///
/// Returns an error when the document cannot be loaded or converted, or when
/// writing the report fails.
pub fn run<W: Write>(cli: &StyleCheckCli, out: &mut W) -> Result<()> {
    let document = read_document(&cli.path, cli.format())?;
    let style: Style = convert_with(&document.root(), cli.paint_defaults()).into_style()?;
    tracing::debug!(
        sources = style.sources.len(),
        layers = style.layers.len(),
        "style converted"
    );
    if cli.json {
        report::write_json(out, &style)
    } else {
        report::write_summary(out, &style)
    }
}
