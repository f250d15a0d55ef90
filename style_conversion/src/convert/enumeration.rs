//! Keyword enumerations such as `"map"` / `"viewport"`.

use crate::{ConversionError, Convertible};

/// A closed set of values spelled as keywords in documents.
pub trait Enumeration: Copy + PartialEq + 'static {
    /// Every keyword paired with the value it denotes.
    const KEYWORDS: &'static [(&'static str, Self)];

    /// Look up the value spelled by `keyword`.
    #[must_use]
    fn from_keyword(keyword: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(candidate, _)| *candidate == keyword)
            .map(|(_, value)| *value)
    }

    /// The keyword spelling `self`.
    #[must_use]
    fn keyword(self) -> &'static str {
        Self::KEYWORDS
            .iter()
            .find(|(_, value)| *value == self)
            .map_or("", |(keyword, _)| keyword)
    }
}

/// Convert a string node into one of `T`'s keywords.
pub(crate) fn convert_keyword<T: Enumeration>(
    value: &Convertible<'_>,
) -> Result<T, ConversionError> {
    let text = value
        .to_text()
        .ok_or_else(|| ConversionError::expected("a string", value.kind()))?;
    T::from_keyword(&text).ok_or_else(|| {
        let expected = T::KEYWORDS
            .iter()
            .map(|(keyword, _)| format!("\"{keyword}\""))
            .collect::<Vec<_>>()
            .join(", ");
        ConversionError::new(format!("value must be one of {expected}, found \"{text}\""))
    })
}

/// Implement [`crate::Converter`] for keyword enumerations.
macro_rules! keyword_converter {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Converter for $ty {
                fn convert(
                    value: &$crate::Convertible<'_>,
                    (): (),
                ) -> Result<Self, $crate::ConversionError> {
                    $crate::convert::enumeration::convert_keyword(value)
                }
            }
        )+
    };
}

pub(crate) use keyword_converter;
