//! Error types produced while loading and converting style documents.

mod diagnostic;
mod types;

pub use diagnostic::ConversionError;
pub use types::StyleError;

#[cfg(test)]
mod tests;
