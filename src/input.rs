//! Value objects produced by the input fields.
//!
//! Each value is an immutable snapshot of one field, rebuilt after every
//! edit. Card numbers and CVVs are masked in `Debug` output and zeroed on
//! drop.

use crate::format::{condense, strip_separator};
use crate::mask;
use crate::{iban, CardType, ValidationResult};
use std::fmt;
use zeroize::Zeroize;

/// Common surface of all field values.
pub trait PaymentInput {
    /// Returns true if the value can be sent to the backend.
    fn is_valid(&self) -> bool;

    /// The value as sent to the backend.
    fn string_value(&self) -> &str;
}

/// A card number as entered by the user.
///
/// # Security
///
/// - Debug output is masked to prevent accidental logging
/// - Memory is zeroed on drop using the `zeroize` crate
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardNumberInput {
    card_type: CardType,
    normalized_number: String,
    formatted_number: String,
    validation_result: ValidationResult,
}

impl CardNumberInput {
    /// Derives the card number input from a displayed `text`.
    ///
    /// Returns `None` if `text` holds nothing but separators and whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use payfield::{CardNumberInput, CardType, ValidationResult};
    ///
    /// let input = CardNumberInput::from_text("4539 2607 8095 2497", " ").unwrap();
    /// assert_eq!(input.card_type(), CardType::Visa);
    /// assert_eq!(input.normalized_number(), "4539260780952497");
    /// assert_eq!(input.validation_result(), ValidationResult::ValidChecksum);
    /// ```
    pub fn from_text(text: &str, separator: &str) -> Option<Self> {
        let normalized_number = strip_separator(text, separator);
        if normalized_number.is_empty() {
            return None;
        }

        let card_type = CardType::classify(&normalized_number);
        let formatted_number = card_type
            .grouping_style()
            .format(&normalized_number, separator);
        let validation_result = card_type.validate(&normalized_number);

        Some(Self {
            card_type,
            normalized_number,
            formatted_number,
            validation_result,
        })
    }

    /// The detected card type.
    #[inline]
    pub const fn card_type(&self) -> CardType {
        self.card_type
    }

    /// The number without separators or whitespace.
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Never log it; use
    /// [`masked`](Self::masked) for display.
    #[inline]
    pub fn normalized_number(&self) -> &str {
        &self.normalized_number
    }

    /// The number grouped for display.
    #[inline]
    pub fn formatted_number(&self) -> &str {
        &self.formatted_number
    }

    /// Result of the length and Luhn checks.
    #[inline]
    pub const fn validation_result(&self) -> ValidationResult {
        self.validation_result
    }

    /// Returns true if the checksum was verified.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.validation_result.is_valid()
    }

    /// The last four digits, empty for shorter numbers.
    #[inline]
    pub fn last_four(&self) -> String {
        mask::last_four(&self.normalized_number)
    }

    /// The number with everything but the last four digits masked.
    #[inline]
    pub fn masked(&self) -> String {
        mask::mask_number(&self.normalized_number)
    }

    /// The number with the BIN and the last four digits visible.
    #[inline]
    pub fn masked_with_bin(&self) -> String {
        mask::mask_with_bin(&self.normalized_number)
    }
}

impl PaymentInput for CardNumberInput {
    fn is_valid(&self) -> bool {
        CardNumberInput::is_valid(self)
    }

    fn string_value(&self) -> &str {
        &self.normalized_number
    }
}

impl PartialEq for CardNumberInput {
    fn eq(&self, other: &Self) -> bool {
        self.card_type == other.card_type
            && self.validation_result == other.validation_result
            && mask::constant_time_eq(
                self.normalized_number.as_bytes(),
                other.normalized_number.as_bytes(),
            )
    }
}

impl Eq for CardNumberInput {}

impl fmt::Debug for CardNumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumberInput")
            .field("card_type", &self.card_type)
            .field("number", &self.masked())
            .field("validation_result", &self.validation_result)
            .finish()
    }
}

impl Drop for CardNumberInput {
    fn drop(&mut self) {
        self.normalized_number.zeroize();
        self.formatted_number.zeroize();
    }
}

/// An IBAN as entered by the user.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IbanInput {
    iban: String,
    validation_result: ValidationResult,
}

impl IbanInput {
    /// Derives the IBAN input from a displayed `text`.
    ///
    /// The stored IBAN is the condensed text, case kept as typed. Returns
    /// `None` for empty text.
    ///
    /// ```
    /// use payfield::IbanInput;
    ///
    /// let input = IbanInput::from_text("DE91 1000 0000 0123 4567 89").unwrap();
    /// assert_eq!(input.iban(), "DE91100000000123456789");
    /// assert!(input.is_valid());
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        let iban = condense(text);
        if iban.is_empty() {
            return None;
        }

        let validation_result = iban::checksum(&iban);
        Some(Self {
            iban,
            validation_result,
        })
    }

    /// The condensed IBAN.
    #[inline]
    pub fn iban(&self) -> &str {
        &self.iban
    }

    /// Result of the length and MOD-97 checks.
    #[inline]
    pub const fn validation_result(&self) -> ValidationResult {
        self.validation_result
    }

    /// Returns true if the checksum was verified.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.validation_result.is_valid()
    }
}

impl PaymentInput for IbanInput {
    fn is_valid(&self) -> bool {
        IbanInput::is_valid(self)
    }

    fn string_value(&self) -> &str {
        &self.iban
    }
}

impl fmt::Debug for IbanInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbanInput")
            .field("iban", &mask::mask_iban(&self.iban))
            .field("validation_result", &self.validation_result)
            .finish()
    }
}

/// A card expiry date as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardExpiryInput {
    expiry_date: String,
    valid: bool,
}

impl CardExpiryInput {
    pub(crate) fn new(expiry_date: String, valid: bool) -> Self {
        Self { expiry_date, valid }
    }

    /// `MM/YY` once complete, otherwise the partial input.
    #[inline]
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// Returns true if the date is complete, well-formed and not in the past.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Month 1-12 of a complete `MM/YY` date.
    pub fn month(&self) -> Option<u32> {
        let (month, _) = self.split()?;
        month.parse().ok().filter(|m| (1..=12).contains(m))
    }

    /// Four-digit year of a complete `MM/YY` date.
    pub fn year(&self) -> Option<u32> {
        let (_, year) = self.split()?;
        year.parse::<u32>().ok().map(|y| 2000 + y)
    }

    fn split(&self) -> Option<(&str, &str)> {
        if self.expiry_date.chars().count() != 5 || !self.expiry_date.is_ascii() {
            return None;
        }
        Some((&self.expiry_date[..2], &self.expiry_date[3..]))
    }
}

impl PaymentInput for CardExpiryInput {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn string_value(&self) -> &str {
        &self.expiry_date
    }
}

/// A card verification code as entered by the user.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardCvvInput {
    cvv: String,
    valid: bool,
}

impl CardCvvInput {
    pub(crate) fn new(cvv: String, valid: bool) -> Self {
        Self { cvv, valid }
    }

    /// The entered code.
    ///
    /// # Security Warning
    ///
    /// Never log this value.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Returns true if the code has the expected length.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

impl PaymentInput for CardCvvInput {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn string_value(&self) -> &str {
        &self.cvv
    }
}

impl fmt::Debug for CardCvvInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardCvvInput")
            .field("cvv", &"***")
            .field("valid", &self.valid)
            .finish()
    }
}

impl Drop for CardCvvInput {
    fn drop(&mut self) {
        self.cvv.zeroize();
    }
}

/// Minimum length of a BIC.
pub const MIN_BIC_LENGTH: usize = 8;

/// A BIC as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BicInput {
    bic: String,
    valid: bool,
}

impl BicInput {
    /// Derives the BIC input from a displayed `text`, `None` if empty.
    ///
    /// ```
    /// use payfield::BicInput;
    ///
    /// assert!(BicInput::from_text("COBA DEFF XXX").unwrap().is_valid());
    /// assert!(!BicInput::from_text("COBA").unwrap().is_valid());
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        let bic = condense(text);
        if bic.is_empty() {
            return None;
        }
        let valid = bic.chars().count() >= MIN_BIC_LENGTH;
        Some(Self { bic, valid })
    }

    /// The condensed BIC.
    #[inline]
    pub fn bic(&self) -> &str {
        &self.bic
    }

    /// Returns true if the BIC has at least [`MIN_BIC_LENGTH`] characters.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

impl PaymentInput for BicInput {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn string_value(&self) -> &str {
        &self.bic
    }
}
