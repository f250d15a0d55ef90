//! Error type for the `style-check` binary.

use std::sync::Arc;

use style_conversion::StyleError;
use thiserror::Error;

/// Failures reported by `style-check`.
#[derive(Debug, Error)]
pub enum StyleCheckError {
    /// The document could not be loaded or does not describe a style.
    #[error(transparent)]
    Style(#[from] Arc<StyleError>),
    /// Writing the summary failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    /// Formatting a summary line failed.
    #[error("failed to format summary: {0}")]
    Format(#[from] std::fmt::Error),
    /// Rendering the style as JSON failed.
    #[error("failed to render style as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result alias used throughout the binary.
pub type Result<T> = std::result::Result<T, StyleCheckError>;
