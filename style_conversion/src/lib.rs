//! Conversion of map style documents from any native value representation.
//!
//! A style document may arrive as JSON, JSON5, TOML, YAML, or as values
//! merged from figment providers. Each of those parses into its own tree
//! type. This crate wraps a node of any of them in a [`Convertible`] handle
//! and lets one set of conversion routines, selected by target type through
//! [`Converter`], build typed style values from it.
//!
//! - [`adapter`] defines the query contract each representation implements.
//! - [`Convertible`] erases the representation behind a move-only handle.
//! - [`convert()`] and [`convert_with`] are the generic entry points.
//! - [`style`] holds the domain types: sources, layers, filters, colours, and
//!   property values.
//! - [`document`] parses files into owned roots.
//!
//! Failures are reported as a single [`ConversionError`] whose message names
//! the path to the offending member, for example
//! `layers: [0]: paint: circle-radius: value must be a number, found a string`.

use std::sync::Arc;

pub mod adapter;
pub mod convert;
mod convertible;
pub mod document;
mod error;
mod result_ext;
mod scalar;
pub mod style;

pub use adapter::ValueAdapter;
pub use convert::{Converter, Enumeration, convert, convert_with};
pub use convertible::{Convertible, NodeKind, PAYLOAD_BUDGET};
pub use error::{ConversionError, StyleError};
pub use result_ext::{ParseResultExt, StyleResultExt};
pub use scalar::ScalarValue;

/// Result type used by the document loading APIs.
///
/// Errors are shared behind an [`Arc`] so callers can cache or fan out a
/// failure without cloning the underlying I/O or parser error.
pub type StyleResult<T> = Result<T, Arc<StyleError>>;
