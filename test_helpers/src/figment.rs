//! Helpers for running tests inside a [`figment::Jail`].
//!
//! A jail gives each test a scratch working directory and restores the
//! environment afterwards, which is what document loading tests need when
//! they write style files or inject `STYLE_*` variables.

use anyhow::{Result, anyhow};

/// Run `f` inside a [`figment::Jail`] and return its output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Wrap a foreign error so it can be returned from a jail closure.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers hand over owned errors from `map_err`"
)]
pub fn jail_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
