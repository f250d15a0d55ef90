//! Loading documents and styles from disk.

use camino::Utf8Path;

use super::{Document, Format};
use crate::convert::convert_with;
use crate::style::{PaintDefaults, Style};
use crate::{StyleError, StyleResult, StyleResultExt};

use std::sync::Arc;

/// Read and parse the document at `path`, choosing the format from its
/// extension with [`Format::from_path`].
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use style_conversion::document::load_document;
///
/// # fn run() -> style_conversion::StyleResult<()> {
/// let document = load_document(Utf8Path::new("style.json"))?;
/// assert!(document.root().is_object());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StyleError::File`] when the file cannot be read, otherwise the
/// parser's error.
pub fn load_document(path: &Utf8Path) -> StyleResult<Document> {
    read_document(path, Format::from_path(path))
}

/// Read the document at `path` and parse it as `format`, whatever its
/// extension.
///
/// # Errors
///
/// Returns [`StyleError::File`] when the file cannot be read, otherwise the
/// parser's error.
pub fn read_document(path: &Utf8Path, format: Format) -> StyleResult<Document> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        Arc::new(StyleError::File {
            path: path.as_std_path().to_path_buf(),
            source,
        })
    })?;
    tracing::debug!(path = %path, format = format.name(), "loading style document");
    Document::parse(&text, format)
}

/// Load the document at `path` and convert it into a [`Style`].
///
/// # Errors
///
/// Returns the loading error, or [`StyleError::Conversion`] when the document
/// does not describe a valid style.
pub fn load_style(path: &Utf8Path, defaults: PaintDefaults) -> StyleResult<Style> {
    let document = load_document(path)?;
    let style: Style = convert_with(&document.root(), defaults).into_style()?;
    tracing::debug!(
        path = %path,
        sources = style.sources.len(),
        layers = style.layers.len(),
        "converted style"
    );
    Ok(style)
}
