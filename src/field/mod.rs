//! Per-field edit controllers.
//!
//! A field controller knows the grouping, alphabet and input value of one
//! kind of payment field. It holds configuration only; the displayed text
//! is owned by the caller (or an [`EditSession`](crate::EditSession)) and
//! passed in on every call, so one controller can serve any number of
//! widgets.
//!
//! # Example
//!
//! ```
//! use payfield::edit::TextEdit;
//! use payfield::field::{CardNumberField, InputField};
//!
//! let field = CardNumberField::default();
//! let outcome = field.handle_edit("", &TextEdit::insert(0, "4539260780952497"));
//! assert_eq!(outcome.text.as_deref(), Some("4539 2607 8095 2497"));
//!
//! let input = field.input("4539 2607 8095 2497").unwrap();
//! assert!(input.is_valid());
//! ```

mod bic;
mod card_number;
mod cvv;
mod expiry;
mod iban;

pub use bic::BicField;
pub use card_number::CardNumberField;
pub use cvv::CvvField;
pub use expiry::ExpiryField;
pub use iban::IbanField;

use crate::edit::{EditOutcome, TextEdit};
use crate::input::PaymentInput;

/// Trait implemented by every field controller.
pub trait InputField {
    /// Value produced from the displayed text.
    type Input: PaymentInput;

    /// Decides how a widget showing `current` reacts to `edit`.
    ///
    /// Never fails: an edit the field cannot interpret is rejected.
    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome;

    /// Builds the value for the displayed `text`, `None` if nothing was entered.
    fn input(&self, text: &str) -> Option<Self::Input>;

    /// Short name of the field, used in logs.
    fn name(&self) -> &'static str;
}

impl<F: InputField + ?Sized> InputField for &F {
    type Input = F::Input;

    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        (**self).handle_edit(current, edit)
    }

    fn input(&self, text: &str) -> Option<Self::Input> {
        (**self).input(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
