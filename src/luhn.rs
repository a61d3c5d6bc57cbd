//! Luhn algorithm implementation for card numbers.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! [`scan`] works on condensed text and reports a [`ValidationResult`];
//! [`generate_check_digit`] works on an already-parsed digit slice.

use crate::ValidationResult;

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Scans a condensed card number right to left.
///
/// The rightmost character is the check digit. Starting with its left
/// neighbour every second digit is doubled (minus 9 when above 9). The first
/// character that is not an ASCII digit aborts the scan with
/// `InvalidCharacters`; no partial score is ever reported.
///
/// Empty input is `InvalidLength`.
///
/// # Example
///
/// ```
/// use payfield::{luhn, ValidationResult};
///
/// assert_eq!(luhn::scan("79927398713"), ValidationResult::ValidChecksum);
/// assert_eq!(luhn::scan("79927398714"), ValidationResult::InvalidChecksum);
/// ```
pub fn scan(condensed: &str) -> ValidationResult {
    let mut chars = condensed.chars().rev();

    let Some(check) = chars.next() else {
        return ValidationResult::InvalidLength;
    };

    let mut sum: u32 = 0;
    for (position, c) in chars.enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return ValidationResult::InvalidCharacters;
        };
        // position 0 is the check digit's left neighbour
        if position % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize];
        } else {
            sum += digit;
        }
    }

    match check.to_digit(10) {
        Some(check) if (sum + check) % 10 == 0 => ValidationResult::ValidChecksum,
        Some(_) => ValidationResult::InvalidChecksum,
        None => ValidationResult::InvalidCharacters,
    }
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use payfield::luhn::generate_check_digit;
///
/// let partial = [4, 5, 3, 9, 2, 6, 0, 7, 8, 0, 9, 5, 2, 4, 9];
/// assert_eq!(generate_check_digit(&partial), 7);
/// ```
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // every digit moves one position left once the check digit is appended,
    // so the rightmost digit here is the first one to be doubled
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize % 10]
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_valid() {
        assert_eq!(scan("79927398713"), ValidationResult::ValidChecksum);
        assert_eq!(scan("4539260780952497"), ValidationResult::ValidChecksum);
        assert_eq!(scan("370355496876137"), ValidationResult::ValidChecksum);
        assert_eq!(scan("5389501247653501"), ValidationResult::ValidChecksum);
    }

    #[test]
    fn test_scan_invalid_checksum() {
        assert_eq!(scan("4539260780952498"), ValidationResult::InvalidChecksum);
        assert_eq!(scan("380355496876137"), ValidationResult::InvalidChecksum);
    }

    #[test]
    fn test_scan_aborts_on_invalid_character() {
        assert_eq!(scan("453926078095249a"), ValidationResult::InvalidCharacters);
        assert_eq!(scan("a539260780952497"), ValidationResult::InvalidCharacters);
        // non-ASCII digits are not decimal digits here
        assert_eq!(scan("٤539260780952497"), ValidationResult::InvalidCharacters);
    }

    #[test]
    fn test_scan_single_character() {
        assert_eq!(scan("0"), ValidationResult::ValidChecksum);
        assert_eq!(scan("5"), ValidationResult::InvalidChecksum);
        assert_eq!(scan("x"), ValidationResult::InvalidCharacters);
        assert_eq!(scan(""), ValidationResult::InvalidLength);
    }

    #[test]
    fn test_scan_test_numbers() {
        assert_eq!(scan("4111111111111111"), ValidationResult::ValidChecksum);
        assert_eq!(scan("378282246310005"), ValidationResult::ValidChecksum);
        assert_eq!(scan("4111111111111112"), ValidationResult::InvalidChecksum);
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [7, 9, 9, 2, 7, 3, 9, 8, 7, 1];
        assert_eq!(generate_check_digit(&partial), 3);

        let partial = [3, 7, 0, 3, 5, 5, 4, 9, 6, 8, 7, 6, 1, 3];
        assert_eq!(generate_check_digit(&partial), 7);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10u32 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i as usize], expected);
        }
    }
}
