//! Format-specific parsing of document text.

use super::{Document, Format};
use crate::{StyleError, StyleResult};
#[cfg(any(feature = "toml", feature = "json5"))]
use crate::result_ext::ParseResultExt;

use std::sync::Arc;

/// Parse `text` according to `format`.
///
/// # Errors
///
/// Returns [`StyleError::Parse`] when the text is malformed or
/// [`StyleError::DisabledFormat`] when the format was compiled out.
pub(super) fn parse_document(text: &str, format: Format) -> StyleResult<Document> {
    match format {
        Format::Json => serde_json::from_str::<serde_json::Value>(text)
            .map(Document::from)
            .map_err(|err| Arc::new(StyleError::parse(format.name(), err))),
        Format::Json5 => {
            #[cfg(feature = "json5")]
            {
                json5::from_str::<serde_json::Value>(text)
                    .map(Document::from)
                    .into_parse(format.name())
            }
            #[cfg(not(feature = "json5"))]
            {
                Err(disabled(format))
            }
        }
        Format::Toml => {
            #[cfg(feature = "toml")]
            {
                toml::from_str::<toml::Value>(text)
                    .map(Document::from)
                    .into_parse(format.name())
            }
            #[cfg(not(feature = "toml"))]
            {
                Err(disabled(format))
            }
        }
        Format::Yaml => {
            #[cfg(feature = "yaml")]
            {
                super::yaml::parse(text).map(Document::from)
            }
            #[cfg(not(feature = "yaml"))]
            {
                Err(disabled(format))
            }
        }
    }
}

#[cfg(any(not(feature = "toml"), not(feature = "json5"), not(feature = "yaml")))]
fn disabled(format: Format) -> Arc<StyleError> {
    Arc::new(StyleError::DisabledFormat {
        format: format.name(),
        feature: format.feature().unwrap_or_default(),
    })
}
