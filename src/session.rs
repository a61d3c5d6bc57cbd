//! Caller-side state for one input field.
//!
//! An [`EditSession`] owns the displayed text of a field and applies each
//! [`EditOutcome`] the way a text widget would: substitute the returned
//! text, apply the edit as typed, or keep the current text. It is the
//! single writer of that text.
//!
//! # Example
//!
//! ```
//! use payfield::field::ExpiryField;
//! use payfield::EditSession;
//!
//! let mut session = EditSession::new(ExpiryField::default());
//! session.type_str("425");
//! assert_eq!(session.text(), "04/25");
//!
//! session.backspace();
//! session.backspace();
//! assert_eq!(session.text(), "04");
//! ```

use crate::edit::{EditOutcome, TextEdit};
use crate::field::InputField;
use zeroize::Zeroize;

/// Key standing for backspace in [`EditSession::replay`].
pub const BACKSPACE_KEY: char = '<';

/// The displayed text of one field plus the controller deciding its edits.
pub struct EditSession<F> {
    field: F,
    text: String,
}

impl<F: InputField> EditSession<F> {
    /// Creates a session with an empty display.
    pub fn new(field: F) -> Self {
        Self {
            field,
            text: String::new(),
        }
    }

    /// The controller of this session.
    #[inline]
    pub fn field(&self) -> &F {
        &self.field
    }

    /// The currently displayed text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Applies `edit` and returns the controller's verdict.
    ///
    /// A rejected edit leaves the display untouched.
    pub fn apply(&mut self, edit: &TextEdit) -> EditOutcome {
        let outcome = self.field.handle_edit(&self.text, edit);
        match outcome.resolve(&self.text, edit) {
            Ok(text) => self.set_text(text),
            Err(err) => log_debug!("{} edit could not be applied: {}", self.field.name(), err),
        }
        log_trace!(
            "{} edit at {:?} rejected: {}",
            self.field.name(),
            edit.range,
            outcome.is_rejected()
        );
        outcome
    }

    /// Types `c` at the end of the text. Returns false if it was rejected.
    pub fn type_char(&mut self, c: char) -> bool {
        self.apply_tracked(TextEdit::append(&self.text, c.to_string()))
    }

    /// Types every character of `keys` one by one.
    pub fn type_str(&mut self, keys: &str) {
        for c in keys.chars() {
            self.type_char(c);
        }
    }

    /// Removes the last character. Returns false if there was none or the
    /// removal was rejected.
    pub fn backspace(&mut self) -> bool {
        match TextEdit::backspace(&self.text) {
            Some(edit) => self.apply_tracked(edit),
            None => false,
        }
    }

    /// Inserts `text` at the end as a single edit.
    pub fn paste(&mut self, text: &str) -> bool {
        self.apply_tracked(TextEdit::append(&self.text, text))
    }

    /// Replaces the whole display with `text` as a single edit.
    pub fn replace_all(&mut self, text: &str) -> bool {
        self.apply_tracked(TextEdit::replace_all(&self.text, text))
    }

    /// Empties the display.
    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// Types `keys`, treating [`BACKSPACE_KEY`] as backspace, and returns the
    /// display after every key.
    ///
    /// ```
    /// use payfield::field::CardNumberField;
    /// use payfield::EditSession;
    ///
    /// let mut session = EditSession::new(CardNumberField::default());
    /// let steps = session.replay("4539<");
    /// assert_eq!(steps, ["4", "45", "453", "4539 ", "453"]);
    /// ```
    pub fn replay(&mut self, keys: &str) -> Vec<String> {
        keys.chars()
            .map(|c| {
                if c == BACKSPACE_KEY {
                    self.backspace();
                } else {
                    self.type_char(c);
                }
                self.text.clone()
            })
            .collect()
    }

    /// The field value for the current display.
    pub fn input(&self) -> Option<F::Input> {
        self.field.input(&self.text)
    }

    fn apply_tracked(&mut self, edit: TextEdit) -> bool {
        !self.apply(&edit).is_rejected()
    }

    fn set_text(&mut self, text: String) {
        let mut previous = std::mem::replace(&mut self.text, text);
        previous.zeroize();
    }
}

impl<F: Default + InputField> Default for EditSession<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: std::fmt::Debug> std::fmt::Debug for EditSession<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("field", &self.field)
            .field("length", &self.text.chars().count())
            .finish()
    }
}

impl<F> Drop for EditSession<F> {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}
