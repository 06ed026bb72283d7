// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;

use crate::{
    Attribute, AttributeKey, LineBreakMode, LineStyle, ParagraphField, ParagraphStyle, Platform,
    TextAlignment, WritingDirection,
};

/// Baseline offset applied together with [`AttributeSet::strikethrough_style`].
pub const STRIKETHROUGH_BASELINE_OFFSET: f64 = 1.5;

/// An immutable collection of [`Attribute`]s, containing at most one value per key.
///
/// Sets are built by chaining setters, each of which returns a new set with one attribute
/// patched on top of the previous ones:
///
/// ```
/// use text_attributes::{AttributeSet, Platform, TextAlignment};
///
/// #[derive(Debug)]
/// struct Host;
///
/// impl Platform for Host {
///     type Color = &'static str;
///     type Font = &'static str;
///     type Shadow = ();
/// }
///
/// let attributes = AttributeSet::<Host>::build(|a| {
///     a.font("Menlo")
///         .foreground("red")
///         .line_spacing(4.0)
///         .alignment(TextAlignment::Center)
/// });
///
/// assert_eq!(attributes.len(), 3);
/// let paragraph = attributes.paragraph_style().unwrap();
/// assert_eq!(paragraph.line_spacing, 4.0);
/// assert_eq!(paragraph.alignment, TextAlignment::Center);
/// ```
pub struct AttributeSet<P: Platform> {
    attributes: HashMap<AttributeKey, Attribute<P>>,
}

impl<P: Platform> AttributeSet<P> {
    /// Creates a set with no attributes.
    pub fn new() -> Self {
        Self {
            attributes: HashMap::new(),
        }
    }

    /// Creates a set with no attributes.
    ///
    /// This is the identity of [`merge`](Self::merge).
    pub fn empty() -> Self {
        Self::new()
    }

    /// Runs `f` once on an empty set and returns what it produces.
    pub fn build(f: impl FnOnce(Self) -> Self) -> Self {
        f(Self::new())
    }

    /// Creates a set holding just `attribute`.
    pub fn singleton(attribute: Attribute<P>) -> Self {
        let mut attributes = HashMap::with_capacity(1);
        attributes.insert(attribute.key(), attribute);
        Self { attributes }
    }

    /// Creates a set from `attributes`. When a key appears more than once, the last value wins.
    pub fn from_attributes<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = Attribute<P>>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|attribute| (attribute.key(), attribute))
                .collect(),
        }
    }

    /// Combines `self` with `patch`, preferring `patch` where both define a key.
    ///
    /// Merging is associative and has [`empty`](Self::empty) as its identity on both sides.
    /// It is not commutative: the right-hand side always wins on a collision.
    ///
    /// ```
    /// use text_attributes::{Attribute, AttributeKey, AttributeSet, Platform};
    ///
    /// #[derive(Debug)]
    /// struct Host;
    ///
    /// impl Platform for Host {
    ///     type Color = &'static str;
    ///     type Font = ();
    ///     type Shadow = ();
    /// }
    ///
    /// let red = AttributeSet::<Host>::new().foreground("red");
    /// let blue = AttributeSet::<Host>::new().foreground("blue");
    ///
    /// assert_eq!(
    ///     red.merge(&blue).get(AttributeKey::ForegroundColor),
    ///     Some(&Attribute::ForegroundColor("blue"))
    /// );
    /// assert_eq!(
    ///     blue.merge(&red).get(AttributeKey::ForegroundColor),
    ///     Some(&Attribute::ForegroundColor("red"))
    /// );
    /// ```
    #[must_use]
    pub fn merge(&self, patch: &Self) -> Self {
        self.clone().patched(patch.clone())
    }

    /// Returns a set equal to `self` without the value for `key`.
    #[must_use]
    pub fn without(&self, key: AttributeKey) -> Self {
        let mut attributes = self.attributes.clone();
        attributes.remove(&key);
        Self { attributes }
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: AttributeKey) -> Option<&Attribute<P>> {
        self.attributes.get(&key)
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.attributes.contains_key(&key)
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over the attributes in an unspecified order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Attribute<P>> + '_ {
        self.attributes.values()
    }

    /// Iterates over the keys that hold a value, in an unspecified order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = AttributeKey> + '_ {
        self.attributes.keys().copied()
    }

    /// Returns the stored paragraph style, if one has been set.
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        self.get(AttributeKey::ParagraphStyle)
            .and_then(Attribute::as_paragraph_style)
    }

    /// Returns the stored paragraph style, or [`ParagraphStyle::DEFAULT`] if none has been set.
    pub fn current_paragraph_style(&self) -> ParagraphStyle {
        self.paragraph_style()
            .copied()
            .unwrap_or(ParagraphStyle::DEFAULT)
    }

    /// Consumes the set, yielding its attributes in an unspecified order.
    pub fn into_attributes(self) -> impl ExactSizeIterator<Item = Attribute<P>> {
        self.attributes.into_values()
    }

    /// Applies `patch` on top of `self`.
    ///
    /// Only sets owned by the caller reach this, so reusing `self`'s storage is unobservable.
    fn patched(mut self, patch: Self) -> Self {
        let mut overridden = 0_usize;
        for (key, attribute) in patch.attributes {
            if self.attributes.insert(key, attribute).is_some() {
                overridden += 1;
            }
        }
        if overridden > 0 {
            log::trace!("attribute patch overrode {overridden} existing value(s)");
        }
        self
    }

    fn with(self, attribute: Attribute<P>) -> Self {
        self.patched(Self::singleton(attribute))
    }
}

/// Character-level setters.
impl<P: Platform> AttributeSet<P> {
    /// Sets the font.
    #[must_use]
    pub fn font(self, font: P::Font) -> Self {
        self.with(Attribute::Font(font))
    }

    /// Sets the extra space between characters.
    #[must_use]
    pub fn kerning(self, kerning: f64) -> Self {
        self.with(Attribute::Kerning(kerning))
    }

    /// Sets the strikethrough style.
    ///
    /// Also sets the baseline offset to [`STRIKETHROUGH_BASELINE_OFFSET`], replacing any offset
    /// set earlier.
    #[must_use]
    pub fn strikethrough_style(self, style: LineStyle) -> Self {
        self.patched(Self::from_attributes([
            Attribute::StrikethroughStyle(style),
            Attribute::BaselineOffset(STRIKETHROUGH_BASELINE_OFFSET),
        ]))
    }

    /// Sets the underline style.
    #[must_use]
    pub fn underline_style(self, style: LineStyle) -> Self {
        self.with(Attribute::UnderlineStyle(style))
    }

    /// Sets the glyph outline color.
    #[must_use]
    pub fn stroke_color(self, color: P::Color) -> Self {
        self.with(Attribute::StrokeColor(color))
    }

    /// Sets the glyph outline width.
    #[must_use]
    pub fn stroke_width(self, width: f64) -> Self {
        self.with(Attribute::StrokeWidth(width))
    }

    /// Sets the text color.
    #[must_use]
    pub fn foreground(self, color: P::Color) -> Self {
        self.with(Attribute::ForegroundColor(color))
    }

    /// Sets the background color.
    #[must_use]
    pub fn background(self, color: P::Color) -> Self {
        self.with(Attribute::BackgroundColor(color))
    }

    /// Sets the drop shadow.
    #[must_use]
    pub fn shadow(self, shadow: P::Shadow) -> Self {
        self.with(Attribute::Shadow(shadow))
    }

    /// Sets the glyph skew.
    #[must_use]
    pub fn obliqueness(self, obliqueness: f64) -> Self {
        self.with(Attribute::Obliqueness(obliqueness))
    }

    /// Sets the link target.
    #[must_use]
    pub fn link(self, link: impl Into<String>) -> Self {
        self.with(Attribute::Link(link.into()))
    }

    /// Sets the offset from the baseline.
    #[must_use]
    pub fn baseline_offset(self, offset: f64) -> Self {
        self.with(Attribute::BaselineOffset(offset))
    }
}

/// Paragraph setters.
///
/// Each of these updates one field of the stored [`ParagraphStyle`] and keeps the others, so
/// chained calls accumulate. When no style is stored yet, the update starts from
/// [`ParagraphStyle::DEFAULT`].
impl<P: Platform> AttributeSet<P> {
    /// Replaces the whole paragraph style.
    #[must_use]
    pub fn paragraph_style_value(self, style: ParagraphStyle) -> Self {
        self.with(Attribute::ParagraphStyle(style))
    }

    /// Updates one field of the paragraph style.
    #[must_use]
    pub fn paragraph(self, field: ParagraphField) -> Self {
        self.update_paragraph(|style| style.derive(field))
    }

    /// Sets the extra space between lines.
    #[must_use]
    pub fn line_spacing(self, line_spacing: f64) -> Self {
        self.paragraph(ParagraphField::LineSpacing(line_spacing))
    }

    /// Sets the space after the paragraph.
    #[must_use]
    pub fn paragraph_spacing(self, spacing: f64) -> Self {
        self.paragraph(ParagraphField::ParagraphSpacing(spacing))
    }

    /// Sets the space before the paragraph.
    #[must_use]
    pub fn paragraph_spacing_before(self, spacing: f64) -> Self {
        self.paragraph(ParagraphField::ParagraphSpacingBefore(spacing))
    }

    /// Sets the horizontal alignment.
    #[must_use]
    pub fn alignment(self, alignment: TextAlignment) -> Self {
        self.paragraph(ParagraphField::Alignment(alignment))
    }

    /// Sets the indent of the first line.
    #[must_use]
    pub fn first_line_head_indent(self, indent: f64) -> Self {
        self.paragraph(ParagraphField::FirstLineHeadIndent(indent))
    }

    /// Sets the indent of the lines after the first.
    #[must_use]
    pub fn head_indent(self, indent: f64) -> Self {
        self.paragraph(ParagraphField::HeadIndent(indent))
    }

    /// Sets the trailing indent.
    #[must_use]
    pub fn tail_indent(self, indent: f64) -> Self {
        self.paragraph(ParagraphField::TailIndent(indent))
    }

    /// Sets how lines that are too long are handled.
    #[must_use]
    pub fn line_break_mode(self, mode: LineBreakMode) -> Self {
        self.paragraph(ParagraphField::LineBreakMode(mode))
    }

    /// Sets the lower bound on line height.
    #[must_use]
    pub fn minimum_line_height(self, line_height: f64) -> Self {
        self.paragraph(ParagraphField::MinimumLineHeight(line_height))
    }

    /// Sets the upper bound on line height.
    #[must_use]
    pub fn maximum_line_height(self, line_height: f64) -> Self {
        self.paragraph(ParagraphField::MaximumLineHeight(line_height))
    }

    /// Sets both line-height bounds to `line_height`.
    #[must_use]
    pub fn uniform_line_height(self, line_height: f64) -> Self {
        self.maximum_line_height(line_height)
            .minimum_line_height(line_height)
    }

    /// Sets the base writing direction.
    #[must_use]
    pub fn base_writing_direction(self, direction: WritingDirection) -> Self {
        self.paragraph(ParagraphField::BaseWritingDirection(direction))
    }

    /// Sets the line height multiplier.
    #[must_use]
    pub fn line_height_multiple(self, multiple: f64) -> Self {
        self.paragraph(ParagraphField::LineHeightMultiple(multiple))
    }

    /// Sets the hyphenation threshold.
    #[must_use]
    pub fn hyphenation_factor(self, factor: f32) -> Self {
        self.paragraph(ParagraphField::HyphenationFactor(factor))
    }

    fn update_paragraph(self, f: impl FnOnce(ParagraphStyle) -> ParagraphStyle) -> Self {
        let current = match self.paragraph_style() {
            Some(style) => *style,
            None => {
                log::trace!("no paragraph style set, deriving from the default");
                ParagraphStyle::DEFAULT
            }
        };
        self.paragraph_style_value(f(current))
    }
}

impl<P: Platform> Default for AttributeSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> Clone for AttributeSet<P> {
    fn clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
        }
    }
}

impl<P: Platform> PartialEq for AttributeSet<P> {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }
}

impl<P: Platform> fmt::Debug for AttributeSet<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.attributes.values()).finish()
    }
}

impl<P: Platform> FromIterator<Attribute<P>> for AttributeSet<P> {
    fn from_iter<I: IntoIterator<Item = Attribute<P>>>(iter: I) -> Self {
        Self::from_attributes(iter)
    }
}

impl<P: Platform> From<Attribute<P>> for AttributeSet<P> {
    fn from(attribute: Attribute<P>) -> Self {
        Self::singleton(attribute)
    }
}
