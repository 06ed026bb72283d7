// Copyright 2025 the Text Attributes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An error returned when a raw integer does not name a known enumerated constant.
///
/// Host text systems exchange alignments, line-break modes and writing directions as plain
/// integers; converting one back with `TryFrom` fails with this error for unknown values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRawValue {
    type_name: &'static str,
    value: i64,
}

impl InvalidRawValue {
    pub(crate) const fn new(type_name: &'static str, value: i64) -> Self {
        Self { type_name, value }
    }

    /// The name of the type the conversion targeted.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The rejected raw value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for InvalidRawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid raw {}", self.value, self.type_name)
    }
}

impl core::error::Error for InvalidRawValue {}

#[cfg(test)]
mod tests {
    use super::InvalidRawValue;
    use alloc::format;

    #[test]
    fn display_names_type_and_value() {
        let err = InvalidRawValue::new("TextAlignment", 9);
        assert_eq!(err.type_name(), "TextAlignment");
        assert_eq!(err.value(), 9);
        assert_eq!(format!("{err}"), "9 is not a valid raw TextAlignment");
    }
}
