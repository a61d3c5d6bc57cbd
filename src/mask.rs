//! PCI-DSS compliant masking of entered payment data.
//!
//! Input values keep the full number for the request-encoding layer, but
//! anything printed or logged goes through these helpers.
//!
//! PCI-DSS allows displaying:
//! - First 6 digits (BIN) and last 4 digits
//! - Only the last 4 digits (preferred for customer-facing display)
//!
//! Never display or log the full card number or any part of the CVV.

/// Masks all but the last 4 characters, grouping the mask in fours.
///
/// Whitespace is ignored.
///
/// # Example
///
/// ```
/// use payfield::mask::mask_number;
///
/// assert_eq!(mask_number("4539 2607 8095 2497"), "**** **** **** 2497");
/// assert_eq!(mask_number("370355496876137"), "**** **** *** 6137");
/// ```
pub fn mask_number(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let len = chars.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push('*');
    }
    result.push(' ');
    result.extend(&chars[masked_count..]);

    result
}

/// Masks a card number showing the BIN (first 6) and last 4 digits.
///
/// Numbers of 10 characters or fewer fall back to [`mask_number`].
///
/// ```
/// use payfield::mask::mask_with_bin;
///
/// assert_eq!(mask_with_bin("4539260780952497"), "453926******2497");
/// ```
pub fn mask_with_bin(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let len = chars.len();

    if len <= 10 {
        return mask_number(input);
    }

    let mut result = String::with_capacity(len);
    result.extend(&chars[..6]);
    result.extend(std::iter::repeat('*').take(len - 10));
    result.extend(&chars[len - 4..]);
    result
}

/// Masks an IBAN, keeping the country code and the last 4 characters.
///
/// ```
/// use payfield::mask::mask_iban;
///
/// assert_eq!(mask_iban("DE91100000000123456789"), "DE****************6789");
/// ```
pub fn mask_iban(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let len = chars.len();

    if len <= 6 {
        return "*".repeat(len);
    }

    let mut result = String::with_capacity(len);
    result.extend(&chars[..2]);
    result.extend(std::iter::repeat('*').take(len - 6));
    result.extend(&chars[len - 4..]);
    result
}

/// Returns the last 4 characters, or an empty string if there are fewer.
#[inline]
pub fn last_four(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() >= 4 {
        chars[chars.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}

/// Constant-time comparison of two byte slices.
///
/// This function takes the same amount of time regardless of where
/// (or if) the slices differ, preventing timing attacks.
///
/// # Example
///
/// ```
/// use payfield::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4539260780952497", b"4539260780952497"));
/// assert!(!constant_time_eq(b"4539260780952497", b"4539260780952498"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_number_16_digits() {
        assert_eq!(mask_number("4539260780952497"), "**** **** **** 2497");
        assert_eq!(mask_number("4539 2607 8095 2497"), "**** **** **** 2497");
    }

    #[test]
    fn test_mask_number_odd_lengths() {
        assert_eq!(mask_number("6789123412341234129"), "**** **** **** *** 4129");
        assert_eq!(mask_number("45392"), "* 5392");
        assert_eq!(mask_number("4539"), "****");
        assert_eq!(mask_number(""), "");
    }

    #[test]
    fn test_mask_with_bin() {
        assert_eq!(mask_with_bin("5389 5012 4765 3501"), "538950******3501");
        assert_eq!(mask_with_bin("4539260780"), "**** ** 0780");
    }

    #[test]
    fn test_mask_iban() {
        assert_eq!(mask_iban("GB82 WEST 1234 5698 7654 32"), "GB****************5432");
        assert_eq!(mask_iban("DE91"), "****");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("4539 2607 8095 2497"), "2497");
        assert_eq!(last_four("123"), "");
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hell"));
        assert!(constant_time_eq(b"", b""));
    }
}
