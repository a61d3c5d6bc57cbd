//! Card verification codes.
//!
//! Only the length is checked: a CVV is valid when it has exactly
//! [`CVV_LENGTH`] digits. The field accepts digits only and never more than
//! [`CVV_LENGTH`] of them.
//!
//! # Example
//!
//! ```
//! use payfield::cvv::{cvv_input, is_valid_cvv};
//!
//! assert!(is_valid_cvv("123"));
//! assert!(!is_valid_cvv("12"));
//!
//! let input = cvv_input("12").unwrap();
//! assert!(!input.is_valid());
//! assert!(cvv_input("").is_none());
//! ```

use crate::edit::{Alphabet, EditOutcome, TextEdit};
use crate::format::{condense, GroupingStyle};
use crate::input::CardCvvInput;

/// Digits in a CVV.
pub const CVV_LENGTH: usize = 3;

/// Returns true if `cvv` is exactly [`CVV_LENGTH`] characters long.
///
/// Whitespace is ignored.
#[inline]
pub fn is_valid_cvv(cvv: &str) -> bool {
    condense(cvv).chars().count() == CVV_LENGTH
}

/// Builds the CVV input for `text`, or `None` if it is empty.
pub fn cvv_input(text: &str) -> Option<CardCvvInput> {
    let cvv = condense(text);
    if cvv.is_empty() {
        return None;
    }
    let valid = is_valid_cvv(&cvv);
    Some(CardCvvInput::new(cvv, valid))
}

/// Decides how the CVV display `current` reacts to `edit`.
pub fn handle_cvv_edit(current: &str, edit: &TextEdit) -> EditOutcome {
    GroupingStyle::ungrouped(CVV_LENGTH).handle_edit(current, edit, "", Alphabet::Digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_length() {
        assert!(is_valid_cvv("123"));
        assert!(is_valid_cvv("000"));
        assert!(is_valid_cvv(" 1 2 3 "));
        assert!(!is_valid_cvv("12"));
        assert!(!is_valid_cvv("1234"));
        assert!(!is_valid_cvv(""));
    }

    #[test]
    fn test_cvv_input() {
        let input = cvv_input("123").unwrap();
        assert!(input.is_valid());
        assert_eq!(input.cvv(), "123");

        assert!(!cvv_input("1").unwrap().is_valid());
        assert!(cvv_input("  ").is_none());
    }

    #[test]
    fn test_typing_stops_at_three_digits() {
        assert_eq!(handle_cvv_edit("", &TextEdit::insert(0, "1")), EditOutcome::allow());
        assert_eq!(handle_cvv_edit("12", &TextEdit::insert(2, "3")), EditOutcome::allow());
        assert!(handle_cvv_edit("123", &TextEdit::insert(3, "4")).is_rejected());
        assert!(handle_cvv_edit("12", &TextEdit::insert(2, "a")).is_rejected());
        assert_eq!(handle_cvv_edit("123", &TextEdit::delete(2..3)), EditOutcome::allow());
    }

    #[test]
    fn test_paste_is_clamped() {
        assert_eq!(
            handle_cvv_edit("", &TextEdit::insert(0, "12345")),
            EditOutcome::replace_with("123")
        );
        assert!(handle_cvv_edit("", &TextEdit::insert(0, "1x3")).is_rejected());
    }
}
