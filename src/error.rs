//! Error types for malformed calls into the engine.
//!
//! Validation outcomes are never errors: they are reported as
//! [`ValidationResult`](crate::ValidationResult) values. `InputError` covers
//! the cases where the caller handed over something the engine cannot
//! interpret at all, such as an edit range that does not fit the text.

use std::fmt;

/// Errors caused by malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The edit range starts after it ends.
    InvertedRange {
        /// Start offset (in characters).
        start: usize,
        /// End offset (in characters).
        end: usize,
    },

    /// The edit range reaches past the end of the text.
    RangeOutOfBounds {
        /// End offset of the range (in characters).
        end: usize,
        /// Length of the text the range was applied to (in characters).
        length: usize,
    },

    /// A brand name that does not map to a card type.
    UnknownBrandName(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { start, end } => {
                write!(f, "edit range is inverted: start {} is after end {}", start, end)
            }

            Self::RangeOutOfBounds { end, length } => {
                write!(
                    f,
                    "edit range ends at {} but the text only has {} characters",
                    end, length
                )
            }

            Self::UnknownBrandName(name) => {
                write!(f, "unknown card brand name '{}'", name.escape_default())
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            InputError::InvertedRange { start: 4, end: 2 }.to_string(),
            "edit range is inverted: start 4 is after end 2"
        );

        assert_eq!(
            InputError::RangeOutOfBounds { end: 9, length: 5 }.to_string(),
            "edit range ends at 9 but the text only has 5 characters"
        );

        assert_eq!(
            InputError::UnknownBrandName("DINERS".into()).to_string(),
            "unknown card brand name 'DINERS'"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InputError>();
    }
}
