//! Primary error enum for document loading flows.

use thiserror::Error;

use super::ConversionError;

/// Errors that can occur while loading a style document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyleError {
    /// The document file could not be read.
    #[error("Style document error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the filesystem.
        #[source]
        source: std::io::Error,
    },

    /// The document text is not valid for its format.
    #[error("Failed to parse {format} document: {message}")]
    Parse {
        /// Name of the format the parser expected.
        format: &'static str,
        /// Parser diagnostic.
        message: String,
    },

    /// The requested format was compiled out of this build.
    #[error("{format} support is disabled: enable the '{feature}' feature")]
    DisabledFormat {
        /// Name of the requested format.
        format: &'static str,
        /// Cargo feature that provides it.
        feature: &'static str,
    },

    /// Gathering values from figment providers failed.
    #[error("Failed to gather document values: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// The parsed document does not describe a valid style.
    #[error("Invalid style: {0}")]
    Conversion(#[from] ConversionError),
}

impl StyleError {
    /// Construct a parse error for `format`.
    #[must_use]
    pub fn parse(format: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    #[must_use]
    pub fn gathering(source: figment::Error) -> Self {
        Self::Gathering(Box::new(source))
    }
}
