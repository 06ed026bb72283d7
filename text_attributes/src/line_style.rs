// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

bitflags! {
    /// Style of an underline or strikethrough line.
    ///
    /// Combines a thickness (`SINGLE`, `THICK`, `DOUBLE`), an optional dash pattern and the
    /// `BY_WORD` modifier. The bit values match the ones host text systems use, so
    /// [`bits`](Self::bits) can be forwarded as-is. The empty set means "no line".
    ///
    /// ```
    /// use text_attributes::LineStyle;
    ///
    /// let style = LineStyle::SINGLE | LineStyle::PATTERN_DOT;
    /// assert_eq!(style.bits(), 0x0101);
    /// assert_eq!(LineStyle::default(), LineStyle::NONE);
    /// ```
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LineStyle: u32 {
        /// A single thin line.
        const SINGLE = 0x01;
        /// A single thick line.
        const THICK = 0x02;
        /// Two thin lines.
        const DOUBLE = 0x09;
        /// Dotted pattern.
        const PATTERN_DOT = 0x0100;
        /// Dashed pattern.
        const PATTERN_DASH = 0x0200;
        /// Alternating dashes and dots.
        const PATTERN_DASH_DOT = 0x0300;
        /// Alternating dashes and pairs of dots.
        const PATTERN_DASH_DOT_DOT = 0x0400;
        /// Draw the line only under or through words, not whitespace.
        const BY_WORD = 0x8000;

        // Host systems may define further bits.
        const _ = !0;
    }
}

impl LineStyle {
    /// No line.
    pub const NONE: Self = Self::empty();

    /// Builds a style from raw bits, keeping bits this crate has no name for.
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Returns the raw bits.
    pub const fn to_raw(self) -> u32 {
        self.bits()
    }
}
