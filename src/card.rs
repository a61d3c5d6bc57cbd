//! Card network identification.
//!
//! [`CardType`] classifies a card number by its first digit and carries the
//! length bounds and grouping style of each network. The classification is a
//! first-digit heuristic rather than a full BIN table.

use crate::error::InputError;
use crate::format::{condense, GroupingStyle};
use crate::{luhn, ValidationResult};
use std::fmt;
use std::str::FromStr;

/// Card networks recognised by the input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CardType {
    /// No network matched; treated as a 16 digit card.
    #[default]
    Unknown,
    /// Visa - first digit 4, length 16
    Visa,
    /// American Express - first digit 3, length 15
    AmericanExpress,
    /// Mastercard - first digit 2 or 5, length 16
    MasterCard,
    /// Maestro - first digit 6, 7 or 9, length 12-19
    Maestro,
}

impl CardType {
    /// All card types, `Unknown` first.
    pub const ALL: [CardType; 5] = [
        Self::Unknown,
        Self::Visa,
        Self::AmericanExpress,
        Self::MasterCard,
        Self::Maestro,
    ];

    /// Maps a first character to its card type.
    #[inline]
    pub const fn from_first_char(c: char) -> Self {
        match c {
            '2' | '5' => Self::MasterCard,
            '3' => Self::AmericanExpress,
            '4' => Self::Visa,
            '6' | '7' | '9' => Self::Maestro,
            _ => Self::Unknown,
        }
    }

    /// Classifies a card number by its first character.
    ///
    /// Nothing but the first character is ever looked at, so a partially
    /// typed number is classified as soon as one digit exists. Leading
    /// whitespace is not skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use payfield::CardType;
    ///
    /// assert_eq!(CardType::classify("4539"), CardType::Visa);
    /// assert_eq!(CardType::classify("37"), CardType::AmericanExpress);
    /// assert_eq!(CardType::classify(""), CardType::Unknown);
    /// ```
    #[inline]
    pub fn classify(number: &str) -> Self {
        number
            .chars()
            .next()
            .map_or(Self::Unknown, Self::from_first_char)
    }

    /// Shortest valid number for this type.
    #[inline]
    pub const fn minimum_length(&self) -> usize {
        self.length_bounds().0
    }

    /// Longest valid number for this type.
    #[inline]
    pub const fn maximum_length(&self) -> usize {
        self.length_bounds().1
    }

    /// `(minimum, maximum)` number of digits, both inclusive.
    #[inline]
    pub const fn length_bounds(&self) -> (usize, usize) {
        match self {
            Self::AmericanExpress => (15, 15),
            Self::Maestro => (12, 19),
            Self::Visa | Self::MasterCard | Self::Unknown => (16, 16),
        }
    }

    /// Grouping used to display numbers of this type.
    pub fn grouping_style(&self) -> GroupingStyle {
        match self {
            Self::AmericanExpress => GroupingStyle::variable([4, 6, 5], self.maximum_length()),
            _ => GroupingStyle::fixed(4, self.maximum_length()),
        }
    }

    /// Validates a card number against this type's length bounds and the
    /// Luhn checksum.
    ///
    /// Whitespace is ignored. The length check comes first, so a number of
    /// the wrong length is `InvalidLength` even if it also has bad
    /// characters.
    ///
    /// # Example
    ///
    /// ```
    /// use payfield::{CardType, ValidationResult};
    ///
    /// let amex = CardType::AmericanExpress;
    /// assert_eq!(amex.validate("3703 554968 76137"), ValidationResult::ValidChecksum);
    /// assert_eq!(amex.validate("3703 554968 7"), ValidationResult::InvalidLength);
    /// ```
    pub fn validate(&self, number: &str) -> ValidationResult {
        let condensed = condense(number);
        let (min, max) = self.length_bounds();
        let length = condensed.chars().count();

        if length < min || length > max {
            return ValidationResult::InvalidLength;
        }

        luhn::scan(&condensed)
    }

    /// Parses a backend brand name, returning `Unknown` for anything else.
    #[inline]
    pub fn from_brand_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Unknown)
    }

    /// Brand name used by the payment backend, if the type has one.
    #[inline]
    pub const fn brand_name(&self) -> Option<&'static str> {
        match self {
            Self::Visa => Some("VISA"),
            Self::MasterCard => Some("MASTER"),
            _ => None,
        }
    }

    /// Human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Visa => "Visa",
            Self::AmericanExpress => "American Express",
            Self::MasterCard => "Mastercard",
            Self::Maestro => "Maestro",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VISA" => Ok(Self::Visa),
            "MASTER" => Ok(Self::MasterCard),
            other => Err(InputError::UnknownBrandName(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_first_digit() {
        assert_eq!(CardType::classify("1"), CardType::Unknown);
        assert_eq!(CardType::classify("2"), CardType::MasterCard);
        assert_eq!(CardType::classify("3"), CardType::AmericanExpress);
        assert_eq!(CardType::classify("4"), CardType::Visa);
        assert_eq!(CardType::classify("5"), CardType::MasterCard);
        assert_eq!(CardType::classify("6"), CardType::Maestro);
        assert_eq!(CardType::classify("7"), CardType::Maestro);
        assert_eq!(CardType::classify("8"), CardType::Unknown);
        assert_eq!(CardType::classify("9"), CardType::Maestro);
        assert_eq!(CardType::classify("0"), CardType::Unknown);
        assert_eq!(CardType::classify("a"), CardType::Unknown);
        assert_eq!(CardType::classify(""), CardType::Unknown);
        assert_eq!(CardType::classify(" 4"), CardType::Unknown);
    }

    #[test]
    fn test_classify_ignores_rest() {
        assert_eq!(CardType::classify("4xyz"), CardType::Visa);
        assert_eq!(CardType::classify("3703 5549 6876 137"), CardType::AmericanExpress);
    }

    #[test]
    fn test_length_bounds() {
        for card_type in CardType::ALL {
            assert!(card_type.minimum_length() <= card_type.maximum_length());
        }
        assert_eq!(CardType::AmericanExpress.length_bounds(), (15, 15));
        assert_eq!(CardType::Maestro.length_bounds(), (12, 19));
        assert_eq!(CardType::Unknown.length_bounds(), (16, 16));
    }

    #[test]
    fn test_grouping_styles() {
        assert_eq!(
            CardType::AmericanExpress.grouping_style(),
            GroupingStyle::variable([4, 6, 5], 15)
        );
        assert_eq!(CardType::Visa.grouping_style(), GroupingStyle::fixed(4, 16));
        assert_eq!(CardType::Maestro.grouping_style(), GroupingStyle::fixed(4, 19));
    }

    #[test]
    fn test_validate_amex() {
        let amex = CardType::AmericanExpress;
        assert_eq!(amex.validate("370355496876137"), ValidationResult::ValidChecksum);
        assert_eq!(amex.validate("37035549687"), ValidationResult::InvalidLength);
        assert_eq!(amex.validate("380355496876137"), ValidationResult::InvalidChecksum);
        assert_eq!(amex.validate("37035549687613a"), ValidationResult::InvalidCharacters);
    }

    #[test]
    fn test_validate_mastercard_and_visa() {
        assert_eq!(
            CardType::MasterCard.validate("5389501247653501"),
            ValidationResult::ValidChecksum
        );
        assert_eq!(
            CardType::Visa.validate("4539 2607 8095 2497"),
            ValidationResult::ValidChecksum
        );
        assert_eq!(CardType::Visa.validate("4539260780952"), ValidationResult::InvalidLength);
    }

    #[test]
    fn test_validate_maestro_lengths() {
        assert_eq!(CardType::Maestro.validate("67891234"), ValidationResult::InvalidLength);
        assert_eq!(
            CardType::Maestro.validate("67891234123412341234"),
            ValidationResult::InvalidLength
        );
        // 6789123412341234129 passes Luhn at 19 digits
        assert_eq!(
            CardType::Maestro.validate("6789123412341234129"),
            ValidationResult::ValidChecksum
        );
    }

    #[test]
    fn test_brand_names() {
        assert_eq!("VISA".parse::<CardType>(), Ok(CardType::Visa));
        assert_eq!("MASTER".parse::<CardType>(), Ok(CardType::MasterCard));
        assert_eq!(
            "AMEX".parse::<CardType>(),
            Err(InputError::UnknownBrandName("AMEX".into()))
        );
        assert_eq!(CardType::from_brand_name("visa"), CardType::Unknown);
        assert_eq!(CardType::Visa.brand_name(), Some("VISA"));
        assert_eq!(CardType::Maestro.brand_name(), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CardType::AmericanExpress.to_string(), "American Express");
        assert_eq!(CardType::default(), CardType::Unknown);
    }
}
