//! IBAN checksum (ISO 7064 MOD-97-10).
//!
//! The IBAN is condensed and upper-cased, its first four characters (country
//! code and check digits) are moved to the end, and every letter is replaced
//! by its two-digit code (`A` = 10 ... `Z` = 35). The resulting decimal
//! string must leave a remainder of 1 when divided by 97.
//!
//! The remainder is computed in chunks: the first 9 digits, then the
//! previous remainder followed by up to 7 more digits, so no intermediate
//! value ever needs more than 9 decimal digits.

use crate::format::condense;
use crate::ValidationResult;

/// Shortest input (after condensing) that is checked at all.
pub const MIN_IBAN_LENGTH: usize = 9;

/// Longest IBAN any country issues.
pub const MAX_IBAN_LENGTH: usize = 34;

/// Characters moved to the end before the remainder is computed.
const ROTATION: usize = 4;

const FIRST_CHUNK: usize = 9;
const NEXT_CHUNK: usize = 7;

/// Validates an IBAN, ignoring all whitespace.
///
/// # Example
///
/// ```
/// use payfield::{iban, ValidationResult};
///
/// assert_eq!(iban::checksum("GB82 WEST 1234 5698 7654 32"), ValidationResult::ValidChecksum);
/// assert_eq!(iban::checksum("GB83 WEST 1234 5698 7654 32"), ValidationResult::InvalidChecksum);
/// ```
pub fn checksum(raw: &str) -> ValidationResult {
    let condensed = condense(raw);

    if condensed.chars().count() < MIN_IBAN_LENGTH {
        return ValidationResult::InvalidLength;
    }

    let Some(numeric) = to_numeric(&condensed) else {
        return ValidationResult::InvalidCharacters;
    };

    if remainder(&numeric) == 1 {
        ValidationResult::ValidChecksum
    } else {
        ValidationResult::InvalidChecksum
    }
}

/// Rotates the condensed IBAN and expands letters into digits.
///
/// Returns `None` when a character is neither an ASCII digit nor a Latin
/// letter.
fn to_numeric(condensed: &str) -> Option<String> {
    let split = condensed
        .char_indices()
        .nth(ROTATION)
        .map_or(condensed.len(), |(i, _)| i);
    let (head, tail) = condensed.split_at(split);

    let mut numeric = String::with_capacity(condensed.len() * 2);
    for c in tail.chars().chain(head.chars()) {
        match c.to_ascii_uppercase() {
            d @ '0'..='9' => numeric.push(d),
            l @ 'A'..='Z' => {
                let code = (l as u8 - b'A') + 10;
                numeric.push((b'0' + code / 10) as char);
                numeric.push((b'0' + code % 10) as char);
            }
            _ => return None,
        }
    }

    Some(numeric)
}

/// Computes `digits mod 97` chunk by chunk.
///
/// `digits` must consist of ASCII digits only.
fn remainder(digits: &str) -> u64 {
    let bytes = digits.as_bytes();
    let (first, rest) = bytes.split_at(FIRST_CHUNK.min(bytes.len()));

    let mut modulo = parse_digits(first) % 97;
    for chunk in rest.chunks(NEXT_CHUNK) {
        // prepending the remainder as text == shifting it left by the chunk width
        modulo = (modulo * 10u64.pow(chunk.len() as u32) + parse_digits(chunk)) % 97;
    }

    modulo
}

fn parse_digits(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &b| acc * 10 + (b - b'0') as u64)
}
