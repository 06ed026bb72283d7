// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph-level formatting.
//!
//! A [`ParagraphStyle`] is stored as a single attribute value, but callers usually want to change
//! one of its fields at a time. [`ParagraphStyle::derive`] does that without touching the style
//! it started from: the result is a fresh record equal to the base except for the one field named
//! by the [`ParagraphField`].

use crate::InvalidRawValue;

/// Horizontal alignment of the lines in a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TextAlignment {
    /// Align to the left edge.
    Left = 0,
    /// Center each line.
    Center = 1,
    /// Align to the right edge.
    Right = 2,
    /// Stretch lines to fill the full width, except the last one.
    Justified = 3,
    /// Align according to the writing direction of the text.
    #[default]
    Natural = 4,
}

impl TextAlignment {
    /// Returns the maximum raw value for known variants.
    pub const MAX_VALUE: u8 = Self::Natural as u8;

    /// Returns the raw value used by host text systems.
    pub const fn to_raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TextAlignment {
    type Error = InvalidRawValue;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Justified,
            4 => Self::Natural,
            _ => return Err(InvalidRawValue::new("TextAlignment", raw.into())),
        })
    }
}

/// What happens to a line that does not fit the available width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrapping = 0,
    /// Wrap at any character.
    CharWrapping = 1,
    /// Cut the line off at the edge.
    Clipping = 2,
    /// Elide the start of the line.
    TruncatingHead = 3,
    /// Elide the end of the line.
    TruncatingTail = 4,
    /// Elide the middle of the line.
    TruncatingMiddle = 5,
}

impl LineBreakMode {
    /// Returns the maximum raw value for known variants.
    pub const MAX_VALUE: u8 = Self::TruncatingMiddle as u8;

    /// Returns the raw value used by host text systems.
    pub const fn to_raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LineBreakMode {
    type Error = InvalidRawValue;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Self::WordWrapping,
            1 => Self::CharWrapping,
            2 => Self::Clipping,
            3 => Self::TruncatingHead,
            4 => Self::TruncatingTail,
            5 => Self::TruncatingMiddle,
            _ => return Err(InvalidRawValue::new("LineBreakMode", raw.into())),
        })
    }
}

/// The base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum WritingDirection {
    /// Use the direction implied by the text content.
    #[default]
    Natural = -1,
    /// Left-to-right.
    LeftToRight = 0,
    /// Right-to-left.
    RightToLeft = 1,
}

impl WritingDirection {
    /// Returns the raw value used by host text systems.
    pub const fn to_raw(self) -> i8 {
        self as i8
    }
}

impl TryFrom<i8> for WritingDirection {
    type Error = InvalidRawValue;

    fn try_from(raw: i8) -> Result<Self, Self::Error> {
        Ok(match raw {
            -1 => Self::Natural,
            0 => Self::LeftToRight,
            1 => Self::RightToLeft,
            _ => return Err(InvalidRawValue::new("WritingDirection", raw.into())),
        })
    }
}

/// Paragraph-level formatting, stored under [`AttributeKey::ParagraphStyle`].
///
/// Every field always holds a value; a style that was never customized equals
/// [`ParagraphStyle::DEFAULT`]. The type is `Copy`, so a style read out of one
/// [`AttributeSet`](crate::AttributeSet) can never be changed through another.
///
/// [`AttributeKey::ParagraphStyle`]: crate::AttributeKey::ParagraphStyle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    /// Extra space between lines, in points.
    pub line_spacing: f64,
    /// Space after the paragraph, in points.
    pub paragraph_spacing: f64,
    /// Space before the paragraph, in points.
    pub paragraph_spacing_before: f64,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
    /// Indent of the first line from the leading margin.
    pub first_line_head_indent: f64,
    /// Indent of the other lines from the leading margin.
    pub head_indent: f64,
    /// Trailing indent. Positive values are measured from the leading margin,
    /// zero or negative values from the trailing margin.
    pub tail_indent: f64,
    /// Handling of lines that are too long.
    pub line_break_mode: LineBreakMode,
    /// Lower bound on line height, `0.0` for none.
    pub minimum_line_height: f64,
    /// Upper bound on line height, `0.0` for none.
    pub maximum_line_height: f64,
    /// Multiplier applied to the natural line height, `0.0` for none.
    pub line_height_multiple: f64,
    /// Base writing direction.
    pub base_writing_direction: WritingDirection,
    /// Hyphenation threshold between `0.0` (off) and `1.0`.
    pub hyphenation_factor: f32,
}

impl ParagraphStyle {
    /// The default paragraph style.
    pub const DEFAULT: Self = Self {
        line_spacing: 0.0,
        paragraph_spacing: 0.0,
        paragraph_spacing_before: 0.0,
        alignment: TextAlignment::Natural,
        first_line_head_indent: 0.0,
        head_indent: 0.0,
        tail_indent: 0.0,
        line_break_mode: LineBreakMode::WordWrapping,
        minimum_line_height: 0.0,
        maximum_line_height: 0.0,
        line_height_multiple: 0.0,
        base_writing_direction: WritingDirection::Natural,
        hyphenation_factor: 0.0,
    };

    /// Returns a style equal to `self` except for the one field named by `field`.
    ///
    /// ```
    /// use text_attributes::{ParagraphField, ParagraphStyle, TextAlignment};
    ///
    /// let base = ParagraphStyle::DEFAULT.derive(ParagraphField::LineSpacing(4.0));
    /// let centered = base.derive(ParagraphField::Alignment(TextAlignment::Center));
    ///
    /// assert_eq!(centered.line_spacing, 4.0);
    /// assert_eq!(centered.alignment, TextAlignment::Center);
    /// assert_eq!(base.alignment, TextAlignment::Natural);
    /// ```
    #[must_use]
    pub fn derive(self, field: ParagraphField) -> Self {
        match field {
            ParagraphField::LineSpacing(line_spacing) => Self {
                line_spacing,
                ..self
            },
            ParagraphField::ParagraphSpacing(paragraph_spacing) => Self {
                paragraph_spacing,
                ..self
            },
            ParagraphField::ParagraphSpacingBefore(paragraph_spacing_before) => Self {
                paragraph_spacing_before,
                ..self
            },
            ParagraphField::Alignment(alignment) => Self { alignment, ..self },
            ParagraphField::FirstLineHeadIndent(first_line_head_indent) => Self {
                first_line_head_indent,
                ..self
            },
            ParagraphField::HeadIndent(head_indent) => Self {
                head_indent,
                ..self
            },
            ParagraphField::TailIndent(tail_indent) => Self {
                tail_indent,
                ..self
            },
            ParagraphField::LineBreakMode(line_break_mode) => Self {
                line_break_mode,
                ..self
            },
            ParagraphField::MinimumLineHeight(minimum_line_height) => Self {
                minimum_line_height,
                ..self
            },
            ParagraphField::MaximumLineHeight(maximum_line_height) => Self {
                maximum_line_height,
                ..self
            },
            ParagraphField::LineHeightMultiple(line_height_multiple) => Self {
                line_height_multiple,
                ..self
            },
            ParagraphField::BaseWritingDirection(base_writing_direction) => Self {
                base_writing_direction,
                ..self
            },
            ParagraphField::HyphenationFactor(hyphenation_factor) => Self {
                hyphenation_factor,
                ..self
            },
        }
    }

    /// Applies each field in order, later fields overriding earlier ones.
    #[must_use]
    pub fn derive_all<I>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = ParagraphField>,
    {
        fields.into_iter().fold(self, Self::derive)
    }

    /// Pins both line-height bounds to `line_height`.
    #[must_use]
    pub fn uniform_line_height(self, line_height: f64) -> Self {
        self.derive(ParagraphField::MaximumLineHeight(line_height))
            .derive(ParagraphField::MinimumLineHeight(line_height))
    }

    /// Returns `true` if every field holds its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single paragraph style field together with its new value.
///
/// Used with [`ParagraphStyle::derive`] and [`AttributeSet::paragraph`](crate::AttributeSet::paragraph).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParagraphField {
    /// Sets [`ParagraphStyle::line_spacing`].
    LineSpacing(f64),
    /// Sets [`ParagraphStyle::paragraph_spacing`].
    ParagraphSpacing(f64),
    /// Sets [`ParagraphStyle::paragraph_spacing_before`].
    ParagraphSpacingBefore(f64),
    /// Sets [`ParagraphStyle::alignment`].
    Alignment(TextAlignment),
    /// Sets [`ParagraphStyle::first_line_head_indent`].
    FirstLineHeadIndent(f64),
    /// Sets [`ParagraphStyle::head_indent`].
    HeadIndent(f64),
    /// Sets [`ParagraphStyle::tail_indent`].
    TailIndent(f64),
    /// Sets [`ParagraphStyle::line_break_mode`].
    LineBreakMode(LineBreakMode),
    /// Sets [`ParagraphStyle::minimum_line_height`].
    MinimumLineHeight(f64),
    /// Sets [`ParagraphStyle::maximum_line_height`].
    MaximumLineHeight(f64),
    /// Sets [`ParagraphStyle::line_height_multiple`].
    LineHeightMultiple(f64),
    /// Sets [`ParagraphStyle::base_writing_direction`].
    BaseWritingDirection(WritingDirection),
    /// Sets [`ParagraphStyle::hyphenation_factor`].
    HyphenationFactor(f32),
}

#[cfg(test)]
mod tests {
    use super::{
        LineBreakMode, ParagraphField, ParagraphStyle, TextAlignment, WritingDirection,
    };

    #[test]
    fn derive_changes_only_the_named_field() {
        let style = ParagraphStyle::DEFAULT.derive(ParagraphField::HeadIndent(12.0));
        assert_eq!(
            style,
            ParagraphStyle {
                head_indent: 12.0,
                ..ParagraphStyle::DEFAULT
            }
        );
    }

    #[test]
    fn derive_leaves_base_untouched() {
        let base = ParagraphStyle::DEFAULT.derive(ParagraphField::LineSpacing(3.0));
        let left = base.derive(ParagraphField::Alignment(TextAlignment::Left));
        let right = base.derive(ParagraphField::Alignment(TextAlignment::Right));

        assert_eq!(base.alignment, TextAlignment::Natural);
        assert_eq!(left.alignment, TextAlignment::Left);
        assert_eq!(right.alignment, TextAlignment::Right);
        assert_eq!(left.line_spacing, 3.0);
        assert_eq!(right.line_spacing, 3.0);
        assert!(ParagraphStyle::DEFAULT.is_default());
    }

    #[test]
    fn every_field_is_reachable() {
        let style = ParagraphStyle::DEFAULT.derive_all([
            ParagraphField::LineSpacing(1.0),
            ParagraphField::ParagraphSpacing(2.0),
            ParagraphField::ParagraphSpacingBefore(3.0),
            ParagraphField::Alignment(TextAlignment::Justified),
            ParagraphField::FirstLineHeadIndent(4.0),
            ParagraphField::HeadIndent(5.0),
            ParagraphField::TailIndent(-6.0),
            ParagraphField::LineBreakMode(LineBreakMode::TruncatingTail),
            ParagraphField::MinimumLineHeight(7.0),
            ParagraphField::MaximumLineHeight(8.0),
            ParagraphField::LineHeightMultiple(1.5),
            ParagraphField::BaseWritingDirection(WritingDirection::RightToLeft),
            ParagraphField::HyphenationFactor(0.5),
        ]);
        let expected = ParagraphStyle {
            line_spacing: 1.0,
            paragraph_spacing: 2.0,
            paragraph_spacing_before: 3.0,
            alignment: TextAlignment::Justified,
            first_line_head_indent: 4.0,
            head_indent: 5.0,
            tail_indent: -6.0,
            line_break_mode: LineBreakMode::TruncatingTail,
            minimum_line_height: 7.0,
            maximum_line_height: 8.0,
            line_height_multiple: 1.5,
            base_writing_direction: WritingDirection::RightToLeft,
            hyphenation_factor: 0.5,
        };
        assert_eq!(style, expected);
    }

    #[test]
    fn derive_all_is_last_wins() {
        let style = ParagraphStyle::DEFAULT.derive_all([
            ParagraphField::TailIndent(1.0),
            ParagraphField::TailIndent(2.0),
        ]);
        assert_eq!(style.tail_indent, 2.0);
    }

    #[test]
    fn uniform_line_height_sets_both_bounds() {
        let style = ParagraphStyle::DEFAULT
            .derive(ParagraphField::LineSpacing(2.0))
            .uniform_line_height(20.0);
        assert_eq!(style.minimum_line_height, 20.0);
        assert_eq!(style.maximum_line_height, 20.0);
        assert_eq!(style.line_spacing, 2.0);
    }

    #[test]
    fn raw_values_round_trip() {
        for raw in 0..=TextAlignment::MAX_VALUE {
            let alignment = TextAlignment::try_from(raw).expect("known alignment");
            assert_eq!(alignment.to_raw(), raw);
        }
        for raw in 0..=LineBreakMode::MAX_VALUE {
            let mode = LineBreakMode::try_from(raw).expect("known line break mode");
            assert_eq!(mode.to_raw(), raw);
        }
        for raw in -1..=1_i8 {
            let direction = WritingDirection::try_from(raw).expect("known direction");
            assert_eq!(direction.to_raw(), raw);
        }
    }

    #[test]
    fn unknown_raw_values_are_rejected() {
        let err = TextAlignment::try_from(5).unwrap_err();
        assert_eq!(err.type_name(), "TextAlignment");
        assert_eq!(err.value(), 5);
        assert!(LineBreakMode::try_from(6).is_err());
        assert_eq!(WritingDirection::try_from(-2).unwrap_err().value(), -2);
    }

    #[test]
    fn defaults_match_default_style() {
        let style = ParagraphStyle::default();
        assert_eq!(style.alignment, TextAlignment::default());
        assert_eq!(style.line_break_mode, LineBreakMode::default());
        assert_eq!(style.base_writing_direction, WritingDirection::default());
    }
}
