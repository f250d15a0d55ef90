//! Command-line arguments for `style-check`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, ValueEnum};
use style_conversion::document::Format;
use style_conversion::style::PaintDefaults;

/// Check that a style document converts, then summarise it.
#[derive(Debug, Parser)]
#[command(
    name = "style-check",
    about = "Validate a style document and summarise the converted model",
    version
)]
pub struct StyleCheckCli {
    /// Style document to check.
    #[arg(value_name = "PATH")]
    pub path: Utf8PathBuf,
    /// Parse the document as this format instead of guessing from its
    /// extension.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,
    /// Fill paint properties the document leaves out with their defaults.
    #[arg(long, action = ArgAction::SetTrue)]
    pub fill_defaults: bool,
    /// Print the converted style as JSON instead of a summary.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
    /// Log more detail; repeat for trace output. `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl StyleCheckCli {
    /// Format the document is parsed as.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
            .map_or_else(|| Format::from_path(&self.path), Format::from)
    }

    /// Paint default handling requested on the command line.
    #[must_use]
    pub const fn paint_defaults(&self) -> PaintDefaults {
        if self.fill_defaults {
            PaintDefaults::Fill
        } else {
            PaintDefaults::Omit
        }
    }
}

/// Formats accepted by `--format`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    /// Strict JSON.
    Json,
    /// JSON5.
    Json5,
    /// TOML.
    Toml,
    /// YAML.
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Json5 => Self::Json5,
            FormatArg::Toml => Self::Toml,
            FormatArg::Yaml => Self::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::extension(&["style-check", "style.yaml"], Format::Yaml)]
    #[case::fallback(&["style-check", "style"], Format::Toml)]
    #[case::override_(&["style-check", "--format", "json5", "style.toml"], Format::Json5)]
    fn format_prefers_the_flag(#[case] args: &[&str], #[case] expected: Format) {
        let cli = StyleCheckCli::try_parse_from(args).expect("valid arguments");
        assert_eq!(cli.format(), expected);
    }

    #[rstest]
    fn verbosity_counts_repeats() {
        let cli = StyleCheckCli::try_parse_from(["style-check", "-vv", "--fill-defaults", "s.json"])
            .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.paint_defaults(), PaintDefaults::Fill);
    }

    #[rstest]
    fn unknown_formats_are_rejected() {
        assert!(StyleCheckCli::try_parse_from(["style-check", "--format", "xml", "s"]).is_err());
    }
}
