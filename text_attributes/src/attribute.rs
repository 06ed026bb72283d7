// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Debug;

use crate::{AttributeKey, LineStyle, ParagraphStyle};

/// A payload type supplied by the host text system.
///
/// Payloads are stored and compared, never inspected.
pub trait Payload: Clone + PartialEq + Debug {}

impl<T: Clone + PartialEq + Debug> Payload for T {}

/// The opaque value types of a host text system.
///
/// Fonts, colors and shadows belong to whatever renders the finished attributes. This trait
/// names them so that [`Attribute`] and [`AttributeSet`](crate::AttributeSet) can carry them
/// without knowing what they are.
///
/// ```
/// use text_attributes::Platform;
///
/// #[derive(Debug)]
/// struct Terminal;
///
/// impl Platform for Terminal {
///     type Color = u8;
///     type Font = &'static str;
///     type Shadow = ();
/// }
/// ```
pub trait Platform {
    /// Color handle, used for the foreground, background and stroke.
    type Color: Payload;
    /// Font handle.
    type Font: Payload;
    /// Shadow handle.
    type Shadow: Payload;
}

/// A single attribute value, tagged with the key it belongs to.
///
/// There is one variant per [`AttributeKey`], so a value can never be stored under a key of
/// the wrong type.
pub enum Attribute<P: Platform> {
    /// Font.
    Font(P::Font),
    /// Extra space between characters.
    Kerning(f64),
    /// Strikethrough line style.
    StrikethroughStyle(LineStyle),
    /// Underline line style.
    UnderlineStyle(LineStyle),
    /// Glyph outline color.
    StrokeColor(P::Color),
    /// Glyph outline width.
    StrokeWidth(f64),
    /// Text color.
    ForegroundColor(P::Color),
    /// Background color.
    BackgroundColor(P::Color),
    /// Paragraph-level formatting.
    ParagraphStyle(ParagraphStyle),
    /// Drop shadow.
    Shadow(P::Shadow),
    /// Glyph skew.
    Obliqueness(f64),
    /// Link target.
    Link(String),
    /// Offset from the baseline.
    BaselineOffset(f64),
}

impl<P: Platform> Attribute<P> {
    /// Returns the key this value is stored under.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::Kerning(_) => AttributeKey::Kerning,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::StrokeWidth(_) => AttributeKey::StrokeWidth,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::Shadow(_) => AttributeKey::Shadow,
            Self::Obliqueness(_) => AttributeKey::Obliqueness,
            Self::Link(_) => AttributeKey::Link,
            Self::BaselineOffset(_) => AttributeKey::BaselineOffset,
        }
    }

    /// Returns the paragraph style, if this is a paragraph style value.
    pub fn as_paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self {
            Self::ParagraphStyle(style) => Some(style),
            _ => None,
        }
    }
}

// Derives would bound `P` itself instead of its payload types.
impl<P: Platform> Clone for Attribute<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Font(font) => Self::Font(font.clone()),
            Self::Kerning(value) => Self::Kerning(*value),
            Self::StrikethroughStyle(style) => Self::StrikethroughStyle(*style),
            Self::UnderlineStyle(style) => Self::UnderlineStyle(*style),
            Self::StrokeColor(color) => Self::StrokeColor(color.clone()),
            Self::StrokeWidth(value) => Self::StrokeWidth(*value),
            Self::ForegroundColor(color) => Self::ForegroundColor(color.clone()),
            Self::BackgroundColor(color) => Self::BackgroundColor(color.clone()),
            Self::ParagraphStyle(style) => Self::ParagraphStyle(*style),
            Self::Shadow(shadow) => Self::Shadow(shadow.clone()),
            Self::Obliqueness(value) => Self::Obliqueness(*value),
            Self::Link(link) => Self::Link(link.clone()),
            Self::BaselineOffset(value) => Self::BaselineOffset(*value),
        }
    }
}

impl<P: Platform> PartialEq for Attribute<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Font(a), Self::Font(b)) => a == b,
            (Self::Kerning(a), Self::Kerning(b))
            | (Self::StrokeWidth(a), Self::StrokeWidth(b))
            | (Self::Obliqueness(a), Self::Obliqueness(b))
            | (Self::BaselineOffset(a), Self::BaselineOffset(b)) => a == b,
            (Self::StrikethroughStyle(a), Self::StrikethroughStyle(b))
            | (Self::UnderlineStyle(a), Self::UnderlineStyle(b)) => a == b,
            (Self::StrokeColor(a), Self::StrokeColor(b))
            | (Self::ForegroundColor(a), Self::ForegroundColor(b))
            | (Self::BackgroundColor(a), Self::BackgroundColor(b)) => a == b,
            (Self::ParagraphStyle(a), Self::ParagraphStyle(b)) => a == b,
            (Self::Shadow(a), Self::Shadow(b)) => a == b,
            (Self::Link(a), Self::Link(b)) => a == b,
            _ => false,
        }
    }
}

impl<P: Platform> Debug for Attribute<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Font(font) => f.debug_tuple("Font").field(font).finish(),
            Self::Kerning(value) => f.debug_tuple("Kerning").field(value).finish(),
            Self::StrikethroughStyle(style) => {
                f.debug_tuple("StrikethroughStyle").field(style).finish()
            }
            Self::UnderlineStyle(style) => f.debug_tuple("UnderlineStyle").field(style).finish(),
            Self::StrokeColor(color) => f.debug_tuple("StrokeColor").field(color).finish(),
            Self::StrokeWidth(value) => f.debug_tuple("StrokeWidth").field(value).finish(),
            Self::ForegroundColor(color) => f.debug_tuple("ForegroundColor").field(color).finish(),
            Self::BackgroundColor(color) => f.debug_tuple("BackgroundColor").field(color).finish(),
            Self::ParagraphStyle(style) => f.debug_tuple("ParagraphStyle").field(style).finish(),
            Self::Shadow(shadow) => f.debug_tuple("Shadow").field(shadow).finish(),
            Self::Obliqueness(value) => f.debug_tuple("Obliqueness").field(value).finish(),
            Self::Link(link) => f.debug_tuple("Link").field(link).finish(),
            Self::BaselineOffset(value) => f.debug_tuple("BaselineOffset").field(value).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Attribute;
    use crate::tests::{Color, TestPlatform};
    use crate::{AttributeKey, LineStyle, ParagraphStyle};
    use alloc::format;
    use alloc::string::String;

    type Attr = Attribute<TestPlatform>;

    #[test]
    fn key_matches_variant() {
        let values: [Attr; 13] = [
            Attr::Font("Helvetica"),
            Attr::Kerning(1.0),
            Attr::StrikethroughStyle(LineStyle::SINGLE),
            Attr::UnderlineStyle(LineStyle::DOUBLE),
            Attr::StrokeColor(Color::RED),
            Attr::StrokeWidth(2.0),
            Attr::ForegroundColor(Color::RED),
            Attr::BackgroundColor(Color::BLUE),
            Attr::ParagraphStyle(ParagraphStyle::DEFAULT),
            Attr::Shadow(3),
            Attr::Obliqueness(0.2),
            Attr::Link(String::from("https://example.com")),
            Attr::BaselineOffset(1.5),
        ];
        for (value, key) in values.iter().zip(AttributeKey::all()) {
            assert_eq!(value.key(), *key);
        }
    }

    #[test]
    fn equality_is_tag_then_payload() {
        assert_eq!(Attr::Kerning(1.0), Attr::Kerning(1.0));
        assert_ne!(Attr::Kerning(1.0), Attr::Kerning(2.0));
        // Same payload under a different key is a different value.
        assert_ne!(Attr::Kerning(1.0), Attr::StrokeWidth(1.0));
        assert_ne!(Attr::ForegroundColor(Color::RED), Attr::BackgroundColor(Color::RED));
    }

    #[test]
    fn clone_is_equal() {
        let link = Attr::Link(String::from("a"));
        assert_eq!(link.clone(), link);
        let style = Attr::ParagraphStyle(ParagraphStyle::DEFAULT);
        assert_eq!(style.clone().as_paragraph_style(), Some(&ParagraphStyle::DEFAULT));
        assert_eq!(link.as_paragraph_style(), None);
    }

    #[test]
    fn debug_names_variant() {
        assert_eq!(format!("{:?}", Attr::Kerning(1.5)), "Kerning(1.5)");
    }
}
