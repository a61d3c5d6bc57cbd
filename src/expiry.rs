//! Card expiry dates.
//!
//! Expiry dates are entered as `MM/YY`. The display is built keystroke by
//! keystroke with [`handle_expiry_edit`], which keeps the month valid while
//! it is typed:
//!
//! - a first digit of `2`-`9` becomes `0d/`
//! - a completed month of `00` or above `12` is rejected
//! - the `/` is appended as soon as the month is complete and removed
//!   again together with the digit before it
//!
//! [`validate_expiry`] compares a complete date with a reference month,
//! usually [`YearMonth::current`].
//!
//! # Example
//!
//! ```
//! use payfield::edit::TextEdit;
//! use payfield::expiry::{handle_expiry_edit, validate_expiry, YearMonth};
//!
//! let outcome = handle_expiry_edit("", &TextEdit::insert(0, "4"));
//! assert_eq!(outcome.text.as_deref(), Some("04/"));
//!
//! let today = YearMonth::new(2025, 4).unwrap();
//! assert!(validate_expiry("04/25", today).is_valid());
//! assert!(!validate_expiry("03/25", today).is_valid());
//! ```

use crate::edit::{Alphabet, EditKind, EditOutcome, TextEdit};
use crate::format::{condense, strip_separator, GroupingStyle};
use crate::input::CardExpiryInput;
use chrono::{Datelike, Local};
use std::fmt;
use std::str::FromStr;

/// Separator between month and year.
pub const EXPIRY_SEPARATOR: &str = "/";

/// Digits in a complete expiry date.
pub const EXPIRY_DIGITS: usize = 4;

/// Two-digit years are offset by this.
const CENTURY: u16 = 2000;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    // field order gives chronological ordering
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair.
    ///
    /// Returns `None` if the month is not 1-12.
    pub fn new(year: u16, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// The current month in the local time zone.
    pub fn current() -> Self {
        let today = Local::now();
        Self {
            year: u16::try_from(today.year()).unwrap_or(u16::MAX),
            month: today.month() as u8,
        }
    }

    /// Four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns true if a card expiring in this month is unusable in `today`.
    ///
    /// A card is valid through the end of its expiry month.
    #[inline]
    pub fn is_before(&self, today: YearMonth) -> bool {
        *self < today
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Errors from parsing a `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The text is not `YYYY-MM`.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid month format (expected YYYY-MM)"),
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
        }
    }
}

impl std::error::Error for ExpiryError {}

impl FromStr for YearMonth {
    type Err = ExpiryError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.trim().split_once('-').ok_or(ExpiryError::InvalidFormat)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(ExpiryError::InvalidFormat);
        }

        let year: u16 = year.parse().map_err(|_| ExpiryError::InvalidFormat)?;
        let month: u8 = month.parse().map_err(|_| ExpiryError::InvalidFormat)?;

        Self::new(year, month).ok_or(ExpiryError::InvalidMonth(month))
    }
}

/// Grouping of the expiry display: two digits, `/`, two digits.
pub fn expiry_style() -> GroupingStyle {
    GroupingStyle::variable([2, 2], EXPIRY_DIGITS)
}

/// Returns true if `month` is exactly two digits between `01` and `12`.
///
/// ```
/// use payfield::expiry::is_valid_expiry_month;
///
/// assert!(is_valid_expiry_month("09"));
/// assert!(!is_valid_expiry_month("00"));
/// assert!(!is_valid_expiry_month("13"));
/// assert!(!is_valid_expiry_month("9"));
/// ```
pub fn is_valid_expiry_month(month: &str) -> bool {
    month.len() == 2
        && month.bytes().all(|b| b.is_ascii_digit())
        && matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Builds the expiry input for the displayed `text`.
///
/// The stored expiry date is `text` with whitespace removed. The input is
/// valid only if it holds exactly four digits forming a month `01`-`12` and
/// a year `YY` such that `20YY/MM` is not before `today`.
pub fn validate_expiry(text: &str, today: YearMonth) -> CardExpiryInput {
    let expiry_date = condense(text);
    let digits = strip_separator(&expiry_date, EXPIRY_SEPARATOR);

    let valid = parse_digits(&digits).is_some_and(|expiry| !expiry.is_before(today));
    CardExpiryInput::new(expiry_date, valid)
}

/// Parses `MMYY` into a month, `None` for anything else.
fn parse_digits(digits: &str) -> Option<YearMonth> {
    if digits.len() != EXPIRY_DIGITS || !Alphabet::Digits.accepts(digits) {
        return None;
    }

    let month: u8 = digits[..2].parse().ok()?;
    let year: u16 = digits[2..].parse().ok()?;
    YearMonth::new(CENTURY + year, month)
}

/// Decides how the expiry display `current` reacts to `edit`.
///
/// Non-digit characters and edits beyond four digits are rejected. Typing
/// and deleting at the end keep the `/` in step with the month; any other
/// edit is normalised to `MM/YY` with the same month rules and replaces the
/// display.
pub fn handle_expiry_edit(current: &str, edit: &TextEdit) -> EditOutcome {
    let edited = match edit.apply(current) {
        Ok(edited) => edited,
        Err(err) => {
            log_debug!("rejecting expiry edit: {}", err);
            return EditOutcome::reject();
        }
    };

    let digits = strip_separator(&edited, EXPIRY_SEPARATOR);
    if !Alphabet::Digits.accepts(&digits) || digits.len() > EXPIRY_DIGITS {
        log_debug!("rejecting expiry edit of {} characters", digits.len());
        return EditOutcome::reject();
    }

    match EditKind::classify(current, &edited) {
        EditKind::SingleDeletion => {
            if let Some(kept) = current.strip_suffix(EXPIRY_SEPARATOR) {
                let mut kept = kept.to_string();
                kept.pop();
                EditOutcome::replace_with(kept)
            } else if let Some(kept) = edited.strip_suffix(EXPIRY_SEPARATOR) {
                EditOutcome::replace_with(kept)
            } else {
                EditOutcome::allow()
            }
        }

        EditKind::SingleInsertion(c) if c.is_ascii_digit() => match digits.len() {
            1 if c == '0' || c == '1' => EditOutcome::allow(),
            1 => EditOutcome::replace_with(format!("0{}{}", c, EXPIRY_SEPARATOR)),
            2 if !is_valid_expiry_month(&digits) => EditOutcome::reject(),
            2 => EditOutcome::replace_with(format!("{}{}", digits, EXPIRY_SEPARATOR)),
            _ => {
                let grouped = expiry_style().format(&digits, EXPIRY_SEPARATOR);
                if grouped == edited {
                    EditOutcome::allow()
                } else {
                    EditOutcome::replace_with(grouped)
                }
            }
        },

        EditKind::SingleInsertion(_) => match normalize(&digits) {
            Some(grouped) if grouped != current => EditOutcome::replace_with(grouped),
            _ => EditOutcome::reject(),
        },

        EditKind::Bulk => match normalize(&digits) {
            Some(grouped) => EditOutcome::replace_with(grouped),
            None => EditOutcome::reject(),
        },
    }
}

/// Regroups `digits` as `MM/YY`, padding a single-digit month.
fn normalize(digits: &str) -> Option<String> {
    let mut raw = String::with_capacity(EXPIRY_DIGITS + 1);
    if digits.starts_with(|c: char| ('2'..='9').contains(&c)) {
        raw.push('0');
    }
    raw.push_str(digits);
    if raw.len() > EXPIRY_DIGITS {
        return None;
    }

    if raw.len() >= 2 && !is_valid_expiry_month(&raw[..2]) {
        return None;
    }

    Some(expiry_style().format(&raw, EXPIRY_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn april_2025() -> YearMonth {
        YearMonth::new(2025, 4).unwrap()
    }

    fn typed(current: &str, c: &str) -> EditOutcome {
        handle_expiry_edit(current, &TextEdit::append(current, c))
    }

    fn backspace(current: &str) -> EditOutcome {
        handle_expiry_edit(current, &TextEdit::backspace(current).unwrap())
    }

    #[test]
    fn test_month_completion_adds_separator() {
        assert_eq!(typed("0", "1"), EditOutcome::replace_with("01/"));
        assert_eq!(typed("1", "2"), EditOutcome::replace_with("12/"));
        assert_eq!(typed("", "0"), EditOutcome::allow());
        assert_eq!(typed("", "1"), EditOutcome::allow());
    }

    #[test]
    fn test_high_first_digit_is_padded() {
        assert_eq!(typed("", "2"), EditOutcome::replace_with("02/"));
        assert_eq!(typed("", "9"), EditOutcome::replace_with("09/"));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(typed("0", "0").is_rejected());
        assert!(typed("1", "4").is_rejected());
        assert!(typed("1", "3").is_rejected());
    }

    #[test]
    fn test_year_digits() {
        assert_eq!(typed("01/", "2"), EditOutcome::allow());
        assert_eq!(typed("01/2", "5"), EditOutcome::allow());
        assert!(typed("01/25", "3").is_rejected());
        // separator missing after a deletion
        assert_eq!(typed("01", "2"), EditOutcome::replace_with("01/2"));
    }

    #[test]
    fn test_deletion_across_separator() {
        assert_eq!(backspace("02/"), EditOutcome::replace_with("0"));
        assert_eq!(backspace("01/1"), EditOutcome::replace_with("01"));
        assert_eq!(backspace("01/25"), EditOutcome::allow());
        assert_eq!(backspace("0"), EditOutcome::allow());
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(typed("01/", "a").is_rejected());
        assert!(handle_expiry_edit("", &TextEdit::insert(0, "1a/25")).is_rejected());
    }

    #[test]
    fn test_typed_separator() {
        assert_eq!(typed("01", "/"), EditOutcome::replace_with("01/"));
        assert!(typed("01/", "/").is_rejected());
    }

    #[test]
    fn test_paste_is_normalised() {
        let paste = |text: &str| handle_expiry_edit("", &TextEdit::insert(0, text));
        assert_eq!(paste("1225"), EditOutcome::replace_with("12/25"));
        assert_eq!(paste("12/25"), EditOutcome::replace_with("12/25"));
        assert_eq!(paste("525"), EditOutcome::replace_with("05/25"));
        assert_eq!(
            handle_expiry_edit("12/25", &TextEdit::replace_all("12/25", "0")),
            EditOutcome::replace_with("0")
        );
        assert!(paste("1325").is_rejected());
        assert!(paste("0025").is_rejected());
        assert!(paste("122512").is_rejected());
    }

    #[test]
    fn test_padded_paste_beyond_four_digits_rejected() {
        let paste = |text: &str| handle_expiry_edit("", &TextEdit::insert(0, text));
        assert!(paste("5255").is_rejected());
        assert!(paste("5/255").is_rejected());
        assert!(paste("12345").is_rejected());
        assert_eq!(
            handle_expiry_edit("05/2", &TextEdit::replace_all("05/2", "9251")),
            EditOutcome::reject()
        );
    }

    #[test]
    fn test_validate_against_today() {
        let today = april_2025();
        assert!(validate_expiry("04/25", today).is_valid());
        assert!(validate_expiry("12/25", today).is_valid());
        assert!(validate_expiry("01/26", today).is_valid());
        assert!(!validate_expiry("03/25", today).is_valid());
        assert!(!validate_expiry("12/24", today).is_valid());
        assert!(!validate_expiry("00/25", today).is_valid());
        assert!(!validate_expiry("13/26", today).is_valid());
    }

    #[test]
    fn test_validate_partial_input() {
        let input = validate_expiry("01/2", april_2025());
        assert!(!input.is_valid());
        assert_eq!(input.expiry_date(), "01/2");
        assert_eq!(input.month(), None);
    }

    #[test]
    fn test_validate_condenses() {
        let input = validate_expiry(" 04 / 27 ", april_2025());
        assert!(input.is_valid());
        assert_eq!(input.expiry_date(), "04/27");
        assert_eq!(input.month(), Some(4));
        assert_eq!(input.year(), Some(2027));
    }

    #[test]
    fn test_year_month() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
        let today = april_2025();
        assert!(YearMonth::new(2025, 3).unwrap().is_before(today));
        assert!(!YearMonth::new(2025, 4).unwrap().is_before(today));
        assert_eq!(today.to_string(), "2025-04");
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!("2025-04".parse::<YearMonth>(), Ok(april_2025()));
        assert_eq!("2025-13".parse::<YearMonth>(), Err(ExpiryError::InvalidMonth(13)));
        assert_eq!("25-04".parse::<YearMonth>(), Err(ExpiryError::InvalidFormat));
        assert_eq!("april".parse::<YearMonth>(), Err(ExpiryError::InvalidFormat));
    }

    #[test]
    fn test_current_month_is_valid() {
        let now = YearMonth::current();
        assert!((1..=12).contains(&now.month()));
        assert!(now.year() >= 2024);
    }
}
