//! YAML parsing backed by `serde-saphyr`.

use figment::value::Value;
use serde_saphyr::Options;

use crate::StyleResult;
use crate::result_ext::ParseResultExt;

/// Parse YAML into a figment value tree using strict boolean semantics.
///
/// Only `true` and `false` are booleans; `yes`, `on`, and friends stay
/// strings.
pub(super) fn parse(text: &str) -> StyleResult<Value> {
    serde_saphyr::from_str_with_options(
        text,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .into_parse("YAML")
}
