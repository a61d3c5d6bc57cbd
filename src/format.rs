//! Grouping of identifiers for display.
//!
//! A [`GroupingStyle`] decides where separators go in a display string. The
//! same style drives both full reformatting ([`GroupingStyle::format`]) and
//! keystroke handling ([`GroupingStyle::handle_edit`](crate::edit)).
//!
//! # Format Conventions
//!
//! - **Visa/Mastercard/Maestro/unknown**: `XXXX XXXX XXXX XXXX`, Maestro up to 19 digits
//! - **American Express**: `XXXX XXXXXX XXXXX`
//! - **IBAN**: groups of 4, up to 34 characters
//! - **Expiry**: `MM/YY`
//!
//! # Example
//!
//! ```
//! use payfield::format::{format_card_number, GroupingStyle};
//!
//! assert_eq!(format_card_number("4539260780952497"), "4539 2607 8095 2497");
//! assert_eq!(format_card_number("370355496876137"), "3703 554968 76137");
//!
//! let style = GroupingStyle::fixed(4, 34);
//! assert_eq!(style.format("DE91100000000123456789", " "), "DE91 1000 0000 0123 4567 89");
//! ```

use crate::CardType;

/// Removes every whitespace and newline character from `input`.
///
/// Other separators (dashes, slashes) are kept.
///
/// ```
/// use payfield::format::condense;
///
/// assert_eq!(condense(" 4539 2607\n8095 "), "453926078095");
/// ```
pub fn condense(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Removes every occurrence of `separator`, then condenses the rest.
///
/// This is the canonical form used for length checks on grouped text.
///
/// ```
/// use payfield::format::strip_separator;
///
/// assert_eq!(strip_separator("12/25", "/"), "1225");
/// assert_eq!(strip_separator("4539 2607", " "), "45392607");
/// ```
pub fn strip_separator(input: &str, separator: &str) -> String {
    if separator.is_empty() {
        condense(input)
    } else {
        condense(&input.replace(separator, ""))
    }
}

/// Where separators are inserted into a display string.
///
/// Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupingStyle {
    /// Every group has `group_size` characters; the last one may be shorter.
    FixedGroups {
        /// Characters per group.
        group_size: usize,
        /// Maximum number of condensed characters.
        maximum_length: usize,
    },

    /// The Nth group has `group_sizes[N]` characters. Once the list is
    /// exhausted no further separators are inserted.
    VariableGroups {
        /// Size of each group, in order.
        group_sizes: Vec<usize>,
        /// Maximum number of condensed characters.
        maximum_length: usize,
    },
}

impl GroupingStyle {
    /// Groups of equal size.
    #[inline]
    pub const fn fixed(group_size: usize, maximum_length: usize) -> Self {
        Self::FixedGroups {
            group_size,
            maximum_length,
        }
    }

    /// Groups with individual sizes.
    #[inline]
    pub fn variable(group_sizes: impl Into<Vec<usize>>, maximum_length: usize) -> Self {
        Self::VariableGroups {
            group_sizes: group_sizes.into(),
            maximum_length,
        }
    }

    /// No separators at all, only a length limit.
    #[inline]
    pub const fn ungrouped(maximum_length: usize) -> Self {
        Self::VariableGroups {
            group_sizes: Vec::new(),
            maximum_length,
        }
    }

    /// Maximum number of condensed characters the style accepts.
    #[inline]
    pub fn maximum_length(&self) -> usize {
        match self {
            Self::FixedGroups { maximum_length, .. } => *maximum_length,
            Self::VariableGroups { maximum_length, .. } => *maximum_length,
        }
    }

    /// Size of the group at `index`, or `None` if no separator ever follows it.
    #[inline]
    pub fn group_size(&self, index: usize) -> Option<usize> {
        match self {
            Self::FixedGroups { group_size: 0, .. } => None,
            Self::FixedGroups { group_size, .. } => Some(*group_size),
            Self::VariableGroups { group_sizes, .. } => group_sizes.get(index).copied(),
        }
    }

    /// Rebuilds the display string for `raw` from scratch.
    ///
    /// `raw` may already contain separators and whitespace; both are removed
    /// first. Characters are then appended one by one, and a separator
    /// follows every completed group unless the maximum length has been
    /// reached. Characters beyond the maximum length are dropped.
    ///
    /// The result is idempotent: formatting a formatted string returns it
    /// unchanged.
    ///
    /// ```
    /// use payfield::GroupingStyle;
    ///
    /// let amex = GroupingStyle::variable([4, 6, 5], 15);
    /// assert_eq!(amex.format("370355496876137", " "), "3703 554968 76137");
    /// assert_eq!(amex.format("37035549687", " "), "3703 554968 7");
    /// assert_eq!(amex.format("3703554968", " "), "3703 554968 ");
    /// ```
    pub fn format(&self, raw: &str, separator: &str) -> String {
        let condensed = strip_separator(raw, separator);
        let maximum = self.maximum_length();

        let mut grouped = String::with_capacity(condensed.len() + condensed.len() / 2);
        let mut count = 0;
        let mut group = 0;
        let mut in_group = 0;

        for c in condensed.chars() {
            if count >= maximum {
                break;
            }
            grouped.push(c);
            count += 1;
            in_group += 1;

            if self.group_size(group) == Some(in_group) && count < maximum {
                grouped.push_str(separator);
                group += 1;
                in_group = 0;
            }
        }

        grouped
    }
}

/// Formats a card number with the grouping of its detected card type.
///
/// Uses a single space as separator.
///
/// ```
/// use payfield::format::format_card_number;
///
/// assert_eq!(format_card_number("6789123412341234123"), "6789 1234 1234 1234 123");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_card_number_with_separator(input, " ")
}

/// Formats a card number with a custom separator.
///
/// ```
/// use payfield::format::format_card_number_with_separator;
///
/// assert_eq!(
///     format_card_number_with_separator("4539260780952497", "-"),
///     "4539-2607-8095-2497"
/// );
/// ```
pub fn format_card_number_with_separator(input: &str, separator: &str) -> String {
    let normalized = strip_separator(input, separator);
    CardType::classify(&normalized)
        .grouping_style()
        .format(&normalized, separator)
}
