// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{AttributeKey, LineBreakMode, TextAlignment, WritingDirection};
use bytemuck::{Contiguous, NoUninit, Zeroable, checked::CheckedBitPattern};

/// Implements the marker traits for a fieldless `repr(u8)` enum whose variants run from `0` to
/// its inherent `MAX_VALUE` without gaps.
macro_rules! impl_contiguous_u8 {
    ($ty:ident, $min:ident) => {
        // Safety: The enum is `repr(u8)` and has only fieldless variants.
        unsafe impl NoUninit for $ty {}

        // Safety: The enum is `repr(u8)` and `0` is a valid value.
        unsafe impl Zeroable for $ty {}

        // Safety: The enum is `repr(u8)`.
        unsafe impl CheckedBitPattern for $ty {
            type Bits = u8;

            fn is_valid_bit_pattern(bits: &u8) -> bool {
                // The minimum is 0, so only the upper bound needs checking.
                *bits <= $ty::MAX_VALUE
            }
        }

        // Safety: The enum is `repr(u8)`. All values are `u8` and fall within
        // the min and max values.
        unsafe impl Contiguous for $ty {
            type Int = u8;
            const MIN_VALUE: u8 = $ty::$min as u8;
            #[allow(
                clippy::use_self,
                reason = "Using `Self::MAX_VALUE` here would refer to `Contiguous::MAX_VALUE` (self-reference)."
            )]
            const MAX_VALUE: u8 = $ty::MAX_VALUE;
        }
    };
}

impl_contiguous_u8!(AttributeKey, Font);
impl_contiguous_u8!(TextAlignment, Left);
impl_contiguous_u8!(LineBreakMode, WordWrapping);

// Safety: The enum is `repr(i8)` and has only fieldless variants.
unsafe impl NoUninit for WritingDirection {}

// Safety: The enum is `repr(i8)` and `0` is `LeftToRight`.
unsafe impl Zeroable for WritingDirection {}

// Safety: The enum is `repr(i8)`.
unsafe impl CheckedBitPattern for WritingDirection {
    type Bits = i8;

    fn is_valid_bit_pattern(bits: &i8) -> bool {
        (-1..=1).contains(bits)
    }
}

// Safety: The enum is `repr(i8)` and its variants cover `-1..=1` without gaps.
unsafe impl Contiguous for WritingDirection {
    type Int = i8;
    const MIN_VALUE: i8 = Self::Natural as i8;
    const MAX_VALUE: i8 = Self::RightToLeft as i8;
}

#[cfg(test)]
mod tests {
    use crate::{AttributeKey, LineBreakMode, TextAlignment, WritingDirection};
    use bytemuck::{Contiguous, Zeroable, checked::try_from_bytes};
    use core::ptr;

    #[test]
    fn checked_bit_pattern() {
        let valid = bytemuck::bytes_of(&8_u8);
        let invalid = bytemuck::bytes_of(&200_u8);

        assert_eq!(
            Ok(&AttributeKey::ParagraphStyle),
            try_from_bytes::<AttributeKey>(valid)
        );
        assert!(try_from_bytes::<AttributeKey>(invalid).is_err());
        assert!(try_from_bytes::<TextAlignment>(bytemuck::bytes_of(&5_u8)).is_err());

        let rtl = bytemuck::bytes_of(&1_i8);
        assert_eq!(
            Ok(&WritingDirection::RightToLeft),
            try_from_bytes::<WritingDirection>(rtl)
        );
        assert!(try_from_bytes::<WritingDirection>(bytemuck::bytes_of(&2_i8)).is_err());
    }

    #[test]
    fn contiguous() {
        let key = AttributeKey::Link;
        assert_eq!(Some(key), AttributeKey::from_integer(key.into_integer()));
        assert_eq!(None, AttributeKey::from_integer(255));

        assert_eq!(
            Some(LineBreakMode::TruncatingMiddle),
            LineBreakMode::from_integer(5)
        );
        assert_eq!(
            Some(WritingDirection::Natural),
            WritingDirection::from_integer(-1)
        );
        assert_eq!(None, WritingDirection::from_integer(-2));
    }

    #[test]
    fn zeroable() {
        assert_eq!(AttributeKey::zeroed(), AttributeKey::Font);
        assert_eq!(TextAlignment::zeroed(), TextAlignment::Left);
        assert_eq!(LineBreakMode::zeroed(), LineBreakMode::WordWrapping);
        assert_eq!(WritingDirection::zeroed(), WritingDirection::LeftToRight);
    }

    /// Tests that the [`Contiguous`] impl for [`AttributeKey`] is not trivially incorrect.
    const _: () = {
        let mut value = 0;
        while value <= AttributeKey::MAX_VALUE {
            // Safety: In a const context, therefore if this makes an invalid AttributeKey, that will be detected.
            let it: AttributeKey = unsafe { ptr::read((&raw const value).cast()) };
            // Evaluate the enum value to ensure it actually has a valid tag.
            if it as u8 != value {
                unreachable!();
            }
            value += 1;
        }
    };
}
