//! Extensions for mapping errors to `StyleResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| StyleError::…(e).into())`
//! patterns when converting external error types into the crate's
//! `StyleResult<T>` alias (`Result<T, Arc<StyleError>>`).
//!
//! - Use [`StyleResultExt::into_style`] for error types that implement
//!   `Into<StyleError>` (for example [`ConversionError`]).
//! - Use [`ParseResultExt::into_parse`] for parser errors that should become
//!   [`StyleError::Parse`] for a named format.
//!
//! # Examples
//!
//! ```
//! use style_conversion::{ConversionError, StyleResult, StyleResultExt};
//!
//! fn reject() -> StyleResult<()> {
//!     Err(ConversionError::new("layers must be an array")).into_style()
//! }
//! assert!(reject().is_err());
//! ```
//!
//! [`ConversionError`]: crate::ConversionError

use crate::{StyleError, StyleResult};
use std::fmt::Display;
use std::sync::Arc;

/// Generic extension for mapping any `Result<T, E>` with `E: Into<StyleError>`
/// into a `StyleResult<T>`.
pub trait StyleResultExt<T, E> {
    /// Convert `Result<T, E>` into `StyleResult<T>` using `Into<StyleError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<StyleError>`.
    fn into_style(self) -> StyleResult<T>;
}

impl<T, E> StyleResultExt<T, E> for Result<T, E>
where
    E: Into<StyleError>,
{
    fn into_style(self) -> StyleResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension tailored to mapping parser failures into [`StyleError::Parse`].
pub trait ParseResultExt<T> {
    /// Convert a parser result into `StyleResult<T>` attributed to `format`.
    ///
    /// # Errors
    ///
    /// Returns a `StyleError::Parse` wrapped in `Arc` when the input is `Err`.
    fn into_parse(self, format: &'static str) -> StyleResult<T>;
}

impl<T, E: Display> ParseResultExt<T> for Result<T, E> {
    fn into_parse(self, format: &'static str) -> StyleResult<T> {
        self.map_err(|e| Arc::new(StyleError::parse(format, e)))
    }
}
