//! Test helpers shared across crates in the style-conversion workspace.
//!
//! - [`figment`] wraps [`figment::Jail`] for tests that touch the filesystem
//!   or the environment.
//! - [`documents`] holds one sample style written in each supported text
//!   format, so tests can check that every representation converts to the
//!   same value.

pub mod documents;
pub mod figment;
