// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable, mergeable sets of rich text attributes.
//!
//! An [`AttributeSet`] maps each [`AttributeKey`] to at most one [`Attribute`]. Sets are never
//! changed in place: every setter returns a new set with one attribute patched on top, and
//! [`AttributeSet::merge`] combines two sets with the right-hand side winning on a collision.
//!
//! Paragraph formatting is a single attribute holding a whole [`ParagraphStyle`]. The paragraph
//! setters on [`AttributeSet`] update one field of the stored style at a time, starting from
//! [`ParagraphStyle::DEFAULT`] only when no style is stored yet, so chained calls accumulate.
//!
//! Fonts, colors and shadows are opaque to this crate. A [`Platform`] names the host types
//! used for them.
//!
//! ## Example
//!
//! ```
//! use text_attributes::{AttributeKey, AttributeSet, LineStyle, Platform, TextAlignment};
//!
//! #[derive(Debug)]
//! struct Host;
//!
//! impl Platform for Host {
//!     type Color = [u8; 4];
//!     type Font = &'static str;
//!     type Shadow = ();
//! }
//!
//! let heading = AttributeSet::<Host>::build(|a| {
//!     a.font("Avenir-Heavy")
//!         .foreground([0x20, 0x20, 0x20, 0xff])
//!         .kerning(1.2)
//! });
//! let body = heading
//!     .merge(&AttributeSet::new().font("Avenir-Book"))
//!     .strikethrough_style(LineStyle::SINGLE)
//!     .uniform_line_height(20.0)
//!     .alignment(TextAlignment::Justified);
//!
//! assert!(body.contains(AttributeKey::BaselineOffset));
//! let paragraph = body.current_paragraph_style();
//! assert_eq!(paragraph.minimum_line_height, 20.0);
//! assert_eq!(paragraph.maximum_line_height, 20.0);
//! assert_eq!(paragraph.alignment, TextAlignment::Justified);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `bytemuck`: Implement traits from `bytemuck` on [`AttributeKey`], [`TextAlignment`],
//!   [`LineBreakMode`] and [`WritingDirection`].
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attribute;
#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod key;
mod line_style;
mod paragraph;
mod raw;
mod set;


pub use crate::attribute::{Attribute, Payload, Platform};
pub use crate::key::{AttributeKey, ParseAttributeKeyError};
pub use crate::line_style::LineStyle;
pub use crate::paragraph::{
    LineBreakMode, ParagraphField, ParagraphStyle, TextAlignment, WritingDirection,
};
pub use crate::raw::InvalidRawValue;
pub use crate::set::{AttributeSet, STRIKETHROUGH_BASELINE_OFFSET};
