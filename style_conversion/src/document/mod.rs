//! Owned document roots in every supported native representation.
//!
//! A [`Document`] keeps the parsed tree alive; [`Document::root`] borrows it
//! as a [`Convertible`] for the conversion routines.

use camino::Utf8Path;
use figment::Figment;

use crate::{Convertible, StyleError, StyleResult};

mod loader;
mod parser;
#[cfg(feature = "yaml")]
mod yaml;

pub use loader::{load_document, load_style, read_document};


/// Text format of a document file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// Strict JSON.
    Json,
    /// JSON5. Requires the `json5` feature.
    Json5,
    /// TOML. Requires the `toml` feature.
    Toml,
    /// YAML. Requires the `yaml` feature.
    Yaml,
}

impl Format {
    /// Choose the format from a file extension.
    ///
    /// Extensions are matched case-insensitively. Files with an unknown or
    /// missing extension are treated as TOML.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Self {
        let ext = path.extension().map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("json5") => Self::Json5,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }

    /// Display name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }

    /// Cargo feature that provides the format, if any.
    #[must_use]
    pub const fn feature(self) -> Option<&'static str> {
        match self {
            Self::Json => None,
            Self::Json5 => Some("json5"),
            Self::Toml => Some("toml"),
            Self::Yaml => Some("yaml"),
        }
    }
}

#[derive(Debug)]
enum Root {
    Json(serde_json::Value),
    #[cfg(feature = "toml")]
    Toml(toml::Value),
    Figment(figment::value::Value),
}

/// A parsed document that owns its native root.
#[derive(Debug)]
pub struct Document {
    root: Root,
}

impl Document {
    /// Parse `text` as `format`.
    ///
    /// JSON and JSON5 produce a `serde_json` tree, TOML a `toml` tree, and
    /// YAML a figment value tree.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] when the text is malformed and
    /// [`StyleError::DisabledFormat`] when the format's feature is off.
    pub fn parse(text: &str, format: Format) -> StyleResult<Self> {
        parser::parse_document(text, format)
    }

    /// Extract the merged value of `figment` for its selected profile.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Gathering`] when a provider fails.
    pub fn from_figment(figment: &Figment) -> StyleResult<Self> {
        figment
            .extract::<figment::value::Value>()
            .map(Self::from)
            .map_err(|err| std::sync::Arc::new(StyleError::gathering(err)))
    }

    /// Borrow the root node.
    pub fn root(&self) -> Convertible<'_> {
        match &self.root {
            Root::Json(value) => Convertible::from(value),
            #[cfg(feature = "toml")]
            Root::Toml(value) => Convertible::from(value),
            Root::Figment(value) => Convertible::from(value),
        }
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        Self {
            root: Root::Json(value),
        }
    }
}

#[cfg(feature = "toml")]
impl From<toml::Value> for Document {
    fn from(value: toml::Value) -> Self {
        Self {
            root: Root::Toml(value),
        }
    }
}

impl From<figment::value::Value> for Document {
    fn from(value: figment::value::Value) -> Self {
        Self {
            root: Root::Figment(value),
        }
    }
}
