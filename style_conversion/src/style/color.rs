//! CSS colour strings.
#![expect(
    clippy::float_arithmetic,
    reason = "channels are normalised from byte and percentage notations"
)]

use serde::Serialize;

use super::PropertyType;
use crate::{ConversionError, Converter, Convertible};

/// An RGBA colour with channels normalised to `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
];

impl Color {
    /// Opaque black, the default for most colour properties.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Construct a colour from normalised channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque colour from byte channels.
    #[must_use]
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Parse a CSS colour: a keyword, `#rgb`, `#rgba`, `#rrggbb`,
    /// `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use style_conversion::style::Color;
    ///
    /// assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
    /// assert_eq!(Color::parse("rgba(0, 0, 0, 0)"), Some(Color::TRANSPARENT));
    /// assert_eq!(Color::parse("not a colour"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let normalised = text.trim().to_ascii_lowercase();
        if normalised == "transparent" {
            return Some(Self::TRANSPARENT);
        }
        if let Some((_, rgb)) = NAMED.iter().find(|(name, _)| *name == normalised) {
            return Some(Self::from_rgb8(*rgb));
        }
        if let Some(hex) = normalised.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = normalised
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args, true);
        }
        normalised
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|args| parse_functional(args, false))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex
        .chars()
        .map(|ch| ch.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<Vec<u8>>>()?;
    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|pair| pair.iter().fold(0, |acc, d| acc * 16 + d)).collect(),
        _ => return None,
    };
    match channels.as_slice() {
        [r, g, b] => Some(Color::from_rgb8([*r, *g, *b])),
        [r, g, b, a] => Some(Color {
            a: f32::from(*a) / 255.0,
            ..Color::from_rgb8([*r, *g, *b])
        }),
        _ => None,
    }
}

fn parse_functional(args: &str, has_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let (rgb, alpha) = match (parts.as_slice(), has_alpha) {
        ([r, g, b], false) => ([*r, *g, *b], 1.0),
        ([r, g, b, a], true) => ([*r, *g, *b], parse_finite(a)?.clamp(0.0, 1.0)),
        _ => return None,
    };
    let mut channels = [0.0_f32; 3];
    for (slot, part) in channels.iter_mut().zip(rgb) {
        *slot = parse_channel(part)?;
    }
    let [r, g, b] = channels;
    Some(Color::new(r, g, b, alpha))
}

fn parse_channel(part: &str) -> Option<f32> {
    if let Some(percent) = part.strip_suffix('%') {
        return Some((parse_finite(percent)? / 100.0).clamp(0.0, 1.0));
    }
    Some((parse_finite(part)? / 255.0).clamp(0.0, 1.0))
}

fn parse_finite(text: &str) -> Option<f32> {
    text.parse::<f32>().ok().filter(|number| number.is_finite())
}

impl PropertyType for Color {
    const INTERPOLATABLE: bool = true;
}

impl Converter for Color {
    fn convert(value: &Convertible<'_>, (): ()) -> Result<Self, ConversionError> {
        let text = value
            .to_text()
            .ok_or_else(|| ConversionError::expected("a color string", value.kind()))?;
        Self::parse(&text)
            .ok_or_else(|| ConversionError::new(format!("\"{text}\" is not a valid color")))
    }
}
