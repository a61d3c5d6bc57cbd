//! Keystroke handling for grouped text.
//!
//! A text widget reports every change as a [`TextEdit`]: a character range
//! of the currently displayed text plus the replacement typed or pasted into
//! it. [`GroupingStyle::handle_edit`] decides what the widget should do and
//! answers with an [`EditOutcome`]:
//!
//! | `text`      | `allow_default` | widget action                          |
//! |-------------|-----------------|----------------------------------------|
//! | `Some(t)`   | `false`         | replace the whole text with `t`        |
//! | `None`      | `true`          | apply the edit as typed                |
//! | `None`      | `false`         | ignore the edit, keep the current text |
//!
//! Edits are classified by comparing the current text with the edited text
//! (see [`EditKind`]). Removing or adding one character at the end is
//! handled incrementally so the separator appears and disappears as the
//! user types; everything else is regrouped from scratch.
//!
//! # Example
//!
//! ```
//! use payfield::edit::{Alphabet, TextEdit};
//! use payfield::GroupingStyle;
//!
//! let visa = GroupingStyle::fixed(4, 16);
//!
//! let outcome = visa.handle_edit("453", &TextEdit::insert(3, "9"), " ", Alphabet::Digits);
//! assert_eq!(outcome.text.as_deref(), Some("4539 "));
//! assert!(!outcome.allow_default);
//!
//! let outcome = visa.handle_edit("4539 ", &TextEdit::delete(4..5), " ", Alphabet::Digits);
//! assert_eq!(outcome.text.as_deref(), Some("453"));
//! ```

use crate::error::InputError;
use crate::format::{strip_separator, GroupingStyle};
use std::ops::Range;

/// A replacement of a character range, as reported by a text widget.
///
/// Offsets count `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Replaced range of the current text.
    pub range: Range<usize>,
    /// Text inserted in place of the range.
    pub replacement: String,
}

impl TextEdit {
    /// Creates an edit replacing `range` with `replacement`.
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Inserts `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset..offset, text)
    }

    /// Removes `range`.
    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, String::new())
    }

    /// Inserts `text` after the last character of `current`.
    pub fn append(current: &str, text: impl Into<String>) -> Self {
        Self::insert(current.chars().count(), text)
    }

    /// Removes the last character of `current`, or `None` if it is empty.
    pub fn backspace(current: &str) -> Option<Self> {
        let length = current.chars().count();
        length.checked_sub(1).map(|start| Self::delete(start..length))
    }

    /// Replaces all of `current` with `text`.
    pub fn replace_all(current: &str, text: impl Into<String>) -> Self {
        Self::new(0..current.chars().count(), text)
    }

    /// Returns `current` with the edit applied.
    ///
    /// Fails if the range is inverted or reaches past the end of `current`.
    ///
    /// ```
    /// use payfield::edit::TextEdit;
    ///
    /// let edit = TextEdit::new(2..4, "xy");
    /// assert_eq!(edit.apply("12345").unwrap(), "12xy5");
    /// assert!(TextEdit::delete(3..9).apply("12345").is_err());
    /// ```
    pub fn apply(&self, current: &str) -> Result<String, InputError> {
        let Range { start, end } = self.range;
        if start > end {
            return Err(InputError::InvertedRange { start, end });
        }

        let length = current.chars().count();
        if end > length {
            return Err(InputError::RangeOutOfBounds { end, length });
        }

        let start_byte = byte_offset(current, start);
        let end_byte = byte_offset(current, end);

        let mut edited =
            String::with_capacity(current.len() - (end_byte - start_byte) + self.replacement.len());
        edited.push_str(&current[..start_byte]);
        edited.push_str(&self.replacement);
        edited.push_str(&current[end_byte..]);
        Ok(edited)
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

/// What a text widget should do with an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct EditOutcome {
    /// Text that replaces the whole display, if any.
    pub text: Option<String>,
    /// Whether the widget may apply the edit itself.
    pub allow_default: bool,
}

impl EditOutcome {
    /// Let the widget apply the edit as typed.
    #[inline]
    pub const fn allow() -> Self {
        Self {
            text: None,
            allow_default: true,
        }
    }

    /// Ignore the edit.
    #[inline]
    pub const fn reject() -> Self {
        Self {
            text: None,
            allow_default: false,
        }
    }

    /// Replace the display with `text` and veto the edit.
    #[inline]
    pub fn replace_with(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            allow_default: false,
        }
    }

    /// Returns true if the edit leaves the display untouched.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.text.is_none() && !self.allow_default
    }

    /// Returns the text a widget shows after acting on this outcome.
    pub fn resolve(&self, current: &str, edit: &TextEdit) -> Result<String, InputError> {
        match (&self.text, self.allow_default) {
            (Some(text), _) => Ok(text.clone()),
            (None, true) => edit.apply(current),
            (None, false) => Ok(current.to_string()),
        }
    }
}

/// Shape of an edit, judged from the text before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// The last character was removed.
    SingleDeletion,
    /// One character was appended.
    SingleInsertion(char),
    /// Anything else: paste, cut, replacement, or an edit before the end.
    Bulk,
}

impl EditKind {
    /// Classifies the transition from `current` to `edited`.
    ///
    /// ```
    /// use payfield::edit::EditKind;
    ///
    /// assert_eq!(EditKind::classify("4539 ", "4539"), EditKind::SingleDeletion);
    /// assert_eq!(EditKind::classify("453", "4539"), EditKind::SingleInsertion('9'));
    /// assert_eq!(EditKind::classify("453", "4X53"), EditKind::Bulk);
    /// ```
    pub fn classify(current: &str, edited: &str) -> Self {
        let current_length = current.chars().count();
        let edited_length = edited.chars().count();

        if edited_length + 1 == current_length && current.starts_with(edited) {
            return Self::SingleDeletion;
        }

        if edited_length == current_length + 1 {
            if let Some(added) = edited.strip_prefix(current) {
                if let Some(c) = added.chars().next() {
                    return Self::SingleInsertion(c);
                }
            }
        }

        Self::Bulk
    }
}

/// Characters a field accepts, checked on the condensed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// ASCII digits only.
    Digits,
    /// `letters` ASCII letters followed by ASCII digits.
    LettersThenDigits {
        /// Number of leading letters.
        letters: usize,
    },
}

impl Alphabet {
    /// Returns true if every character of `condensed` is allowed at its position.
    ///
    /// ```
    /// use payfield::edit::Alphabet;
    ///
    /// let iban = Alphabet::LettersThenDigits { letters: 2 };
    /// assert!(iban.accepts("DE9110"));
    /// assert!(iban.accepts("D"));
    /// assert!(!iban.accepts("1E"));
    /// assert!(!iban.accepts("DEX"));
    /// ```
    pub fn accepts(&self, condensed: &str) -> bool {
        match self {
            Self::Digits => condensed.chars().all(|c| c.is_ascii_digit()),
            Self::LettersThenDigits { letters } => {
                condensed.chars().enumerate().all(|(i, c)| {
                    if i < *letters {
                        c.is_ascii_alphabetic()
                    } else {
                        c.is_ascii_digit()
                    }
                })
            }
        }
    }
}

impl GroupingStyle {
    /// Decides how a widget showing `current` should react to `edit`.
    ///
    /// The edited text is condensed (separator and whitespace removed) and
    /// checked against `alphabet` first; a single disallowed character
    /// rejects the whole edit. After that:
    ///
    /// - removing the last character of a text ending with `separator` also
    ///   removes the separator and the character before it;
    /// - appending a character is rejected past the maximum length; if it
    ///   completes a group below the maximum length, the separator is
    ///   appended with it; otherwise the edit is allowed as typed;
    /// - every other edit is regrouped with [`GroupingStyle::format`] and the
    ///   result replaces the display.
    ///
    /// A `current` text that is not in the grouping of this style is treated
    /// as a bulk edit, so the result is always regrouped.
    pub fn handle_edit(
        &self,
        current: &str,
        edit: &TextEdit,
        separator: &str,
        alphabet: Alphabet,
    ) -> EditOutcome {
        let edited = match edit.apply(current) {
            Ok(edited) => edited,
            Err(err) => {
                log_debug!("rejecting edit: {}", err);
                return EditOutcome::reject();
            }
        };

        let condensed = strip_separator(&edited, separator);
        if !alphabet.accepts(&condensed) {
            log_debug!("rejecting edit: characters outside {:?}", alphabet);
            return EditOutcome::reject();
        }

        self.handle_edited(current, &edited, &condensed, separator)
    }

    /// Reacts to the transition from `current` to `edited`, whose condensed
    /// form has already passed the alphabet check.
    pub(crate) fn handle_edited(
        &self,
        current: &str,
        edited: &str,
        condensed: &str,
        separator: &str,
    ) -> EditOutcome {
        let kind = if self.format(current, separator) == current {
            EditKind::classify(current, edited)
        } else {
            EditKind::Bulk
        };
        log_trace!("edit classified as {:?}", kind);

        match kind {
            EditKind::SingleDeletion => self.handle_single_deletion(current, separator),
            EditKind::SingleInsertion(c) => {
                self.handle_single_insertion(current, condensed, c, separator)
            }
            EditKind::Bulk => self.regroup(edited, separator),
        }
    }

    fn handle_single_deletion(&self, current: &str, separator: &str) -> EditOutcome {
        match current.strip_suffix(separator) {
            Some(kept) if !separator.is_empty() => {
                let mut kept = kept.to_string();
                kept.pop();
                EditOutcome::replace_with(kept)
            }
            _ => EditOutcome::allow(),
        }
    }

    fn handle_single_insertion(
        &self,
        current: &str,
        condensed: &str,
        added: char,
        separator: &str,
    ) -> EditOutcome {
        let length = condensed.chars().count();
        let maximum = self.maximum_length();

        if length > maximum {
            log_debug!("rejecting insertion past maximum length {}", maximum);
            return EditOutcome::reject();
        }

        if length == strip_separator(current, separator).chars().count() {
            // separator or whitespace typed on its own
            return EditOutcome::reject();
        }

        if length < maximum && self.completes_group(length) {
            let mut text = String::with_capacity(current.len() + added.len_utf8() + separator.len());
            text.push_str(current);
            text.push(added);
            text.push_str(separator);
            return EditOutcome::replace_with(text);
        }

        EditOutcome::allow()
    }

    /// Replaces the display with `edited` regrouped under this style.
    pub(crate) fn regroup(&self, edited: &str, separator: &str) -> EditOutcome {
        let grouped = self.format(edited, separator);
        log_trace!(
            "regrouped bulk edit to {} characters",
            grouped.chars().count()
        );
        EditOutcome::replace_with(grouped)
    }

    /// Returns true if the `length`th condensed character ends a group.
    pub(crate) fn completes_group(&self, length: usize) -> bool {
        let mut remaining = length;
        let mut index = 0;

        while remaining > 0 {
            match self.group_size(index) {
                Some(size) if size > 0 && remaining > size => {
                    remaining -= size;
                    index += 1;
                }
                Some(size) if size > 0 => return remaining == size,
                _ => return false,
            }
        }

        false
    }
}
