//! Checksum validation entry points.
//!
//! Both validators are stateless free functions. They condense their input
//! (strip every whitespace and newline character) before doing anything
//! else, so `"GB82 WEST\n1234 5698 7654 32"` and `"GB82WEST12345698765432"`
//! always produce the same [`ValidationResult`].

use crate::format::condense;
use crate::{iban, luhn};
use std::fmt;

/// Outcome of a single validation pass.
///
/// Exactly one variant is produced per call. The variants are not ordered
/// by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ValidationResult {
    /// The checksum was verified.
    ValidChecksum,
    /// The input has a length the identifier can never have.
    InvalidLength,
    /// The computed checksum does not match the one in the input.
    InvalidChecksum,
    /// The input contains characters the checksum cannot be computed over.
    InvalidCharacters,
}

impl ValidationResult {
    /// Returns true only for [`ValidationResult::ValidChecksum`].
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::ValidChecksum)
    }

    /// Short machine-friendly name of the outcome.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidChecksum => "validChecksum",
            Self::InvalidLength => "invalidLength",
            Self::InvalidChecksum => "invalidChecksum",
            Self::InvalidCharacters => "invalidCharacters",
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the Luhn check over a card number.
///
/// No length bounds are applied here; use
/// [`CardType::validate`](crate::CardType::validate) for the brand-aware
/// check. An input that is empty after condensing is `InvalidLength`.
///
/// # Example
///
/// ```
/// use payfield::{validate_card_number, ValidationResult};
///
/// assert_eq!(validate_card_number("7992 7398 713"), ValidationResult::ValidChecksum);
/// assert_eq!(validate_card_number("79927398710"), ValidationResult::InvalidChecksum);
/// assert_eq!(validate_card_number("79927398713a"), ValidationResult::InvalidCharacters);
/// ```
#[inline]
pub fn validate_card_number(raw: &str) -> ValidationResult {
    luhn::scan(&condense(raw))
}

/// Runs the ISO 7064 MOD-97-10 check over an IBAN.
///
/// # Example
///
/// ```
/// use payfield::{validate_iban, ValidationResult};
///
/// assert_eq!(validate_iban("DE91 1000 0000 0123 4567 89"), ValidationResult::ValidChecksum);
/// assert_eq!(validate_iban("GB1"), ValidationResult::InvalidLength);
/// ```
#[inline]
pub fn validate_iban(raw: &str) -> ValidationResult {
    iban::checksum(raw)
}
