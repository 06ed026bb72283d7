// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Identifies one visual text-formatting dimension.
///
/// An [`AttributeSet`](crate::AttributeSet) holds at most one value per key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AttributeKey {
    /// The font used to render the text.
    Font = 0,
    /// Extra space between characters, in points.
    Kerning = 1,
    /// Strikethrough line style.
    StrikethroughStyle = 2,
    /// Underline line style.
    UnderlineStyle = 3,
    /// Color of the glyph outline.
    StrokeColor = 4,
    /// Width of the glyph outline, as a percentage of the font size.
    StrokeWidth = 5,
    /// Text color.
    ForegroundColor = 6,
    /// Color of the area behind the text.
    BackgroundColor = 7,
    /// Paragraph-level formatting.
    ParagraphStyle = 8,
    /// Drop shadow.
    Shadow = 9,
    /// Skew applied to glyphs.
    Obliqueness = 10,
    /// Link target.
    Link = 11,
    /// Vertical offset from the baseline, in points.
    BaselineOffset = 12,
    // NOTICE: If a new value is added, be sure to modify `MAX_VALUE` and `all`.
}

impl AttributeKey {
    /// Returns the maximum numeric value for known keys.
    ///
    /// This is primarily intended for use in fixed-size tables keyed by `AttributeKey`.
    pub const MAX_VALUE: u8 = Self::BaselineOffset as u8;

    /// Returns a slice containing every key, in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Font,
            Self::Kerning,
            Self::StrikethroughStyle,
            Self::UnderlineStyle,
            Self::StrokeColor,
            Self::StrokeWidth,
            Self::ForegroundColor,
            Self::BackgroundColor,
            Self::ParagraphStyle,
            Self::Shadow,
            Self::Obliqueness,
            Self::Link,
            Self::BaselineOffset,
        ]
    }

    /// Returns the attribute name used by host text systems.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::Kerning => "kern",
            Self::StrikethroughStyle => "strikethroughStyle",
            Self::UnderlineStyle => "underlineStyle",
            Self::StrokeColor => "strokeColor",
            Self::StrokeWidth => "strokeWidth",
            Self::ForegroundColor => "foregroundColor",
            Self::BackgroundColor => "backgroundColor",
            Self::ParagraphStyle => "paragraphStyle",
            Self::Shadow => "shadow",
            Self::Obliqueness => "obliqueness",
            Self::Link => "link",
            Self::BaselineOffset => "baselineOffset",
        }
    }

    /// Parses a key from its attribute name.
    ///
    /// ```
    /// use text_attributes::AttributeKey;
    ///
    /// assert_eq!(AttributeKey::parse("kern"), Some(AttributeKey::Kerning));
    /// assert_eq!(AttributeKey::parse("kerning"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all().iter().copied().find(|key| key.name() == s)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error returned when parsing an [`AttributeKey`] fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseAttributeKeyError;

impl fmt::Display for ParseAttributeKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown attribute name")
    }
}

impl core::error::Error for ParseAttributeKeyError {}

impl FromStr for AttributeKey {
    type Err = ParseAttributeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(ParseAttributeKeyError)
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeKey, ParseAttributeKeyError};
    use alloc::string::ToString;

    #[test]
    fn all_is_in_discriminant_order() {
        for (index, key) in AttributeKey::all().iter().enumerate() {
            assert_eq!(*key as usize, index, "{key} is out of order");
        }
        assert_eq!(
            AttributeKey::all().len(),
            usize::from(AttributeKey::MAX_VALUE) + 1,
            "`all` and `MAX_VALUE` disagree"
        );
    }

    #[test]
    fn names_round_trip() {
        for key in AttributeKey::all() {
            assert_eq!(AttributeKey::parse(key.name()), Some(*key));
            assert_eq!(key.to_string(), key.name());
        }
    }

    #[test]
    fn parse_trims_and_rejects_unknown() {
        assert_eq!(
            AttributeKey::parse("  foregroundColor "),
            Some(AttributeKey::ForegroundColor)
        );
        assert_eq!("ForegroundColor".parse::<AttributeKey>(), Err(ParseAttributeKeyError));
        assert_eq!("".parse::<AttributeKey>(), Err(ParseAttributeKeyError));
    }
}
