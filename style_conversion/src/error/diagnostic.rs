//! Diagnostic raised when a document node cannot be converted.

use std::fmt;

use thiserror::Error;

/// Human-readable explanation of why a conversion failed.
///
/// The message is intended for the author of the document, so it carries no
/// error code or source location beyond what the text itself spells out.
/// Routines that know where they are in the tree add that context with
/// [`ConversionError::in_member`] or [`ConversionError::in_index`] before
/// returning the error to their caller.
///
/// # Examples
///
/// ```
/// use style_conversion::ConversionError;
///
/// let err = ConversionError::new("value must be a number").in_member("circle-radius");
/// assert_eq!(err.message(), "circle-radius: value must be a number");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
}

impl ConversionError {
    /// Construct a diagnostic from a message.
    ///
    /// Empty messages are a contract violation: a failed conversion must
    /// always explain itself.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(!message.is_empty(), "conversion diagnostics must not be empty");
        Self { message }
    }

    /// Diagnostic for a node of the wrong structural kind.
    #[must_use]
    pub fn expected(what: impl fmt::Display, found: impl fmt::Display) -> Self {
        Self::new(format!("value must be {what}, found {found}"))
    }

    /// Diagnostic for a required object member that is absent.
    #[must_use]
    pub fn missing_member(name: &str) -> Self {
        Self::new(format!("missing required member '{name}'"))
    }

    /// Returns the diagnostic text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prefix the message with the object member it was raised under.
    #[must_use]
    pub fn in_member(self, name: &str) -> Self {
        Self {
            message: format!("{name}: {}", self.message),
        }
    }

    /// Prefix the message with the array index it was raised under.
    #[must_use]
    pub fn in_index(self, index: usize) -> Self {
        Self {
            message: format!("[{index}]: {}", self.message),
        }
    }

    /// Consume the diagnostic, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<String> for ConversionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ConversionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
