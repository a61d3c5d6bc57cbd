use super::InputField;
use crate::edit::{Alphabet, EditOutcome, TextEdit};
use crate::format::GroupingStyle;
use crate::iban::MAX_IBAN_LENGTH;
use crate::input::IbanInput;

/// Letters at the start of an IBAN (the country code).
const COUNTRY_CODE_LENGTH: usize = 2;

/// IBAN field.
///
/// Groups of four up to 34 characters. The first two characters must be
/// letters and the rest digits; letters are upper-cased as they are typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbanField {
    separator: String,
}

impl IbanField {
    /// Creates a field grouping with `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Grouping of the IBAN display.
    pub fn style() -> GroupingStyle {
        GroupingStyle::fixed(4, MAX_IBAN_LENGTH)
    }

    /// Characters accepted by the field.
    pub const fn alphabet() -> Alphabet {
        Alphabet::LettersThenDigits {
            letters: COUNTRY_CODE_LENGTH,
        }
    }
}

impl Default for IbanField {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl InputField for IbanField {
    type Input = IbanInput;

    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        let outcome = Self::style().handle_edit(current, edit, &self.separator, Self::alphabet());

        match outcome.text {
            Some(text) => EditOutcome::replace_with(text.to_ascii_uppercase()),
            None if outcome.allow_default => match edit.apply(current) {
                Ok(edited) if edited.bytes().any(|b| b.is_ascii_lowercase()) => {
                    EditOutcome::replace_with(edited.to_ascii_uppercase())
                }
                _ => outcome,
            },
            None => outcome,
        }
    }

    fn input(&self, text: &str) -> Option<IbanInput> {
        IbanInput::from_text(text)
    }

    fn name(&self) -> &'static str {
        "iban"
    }
}
