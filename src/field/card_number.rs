use super::InputField;
use crate::edit::{Alphabet, EditOutcome, TextEdit};
use crate::format::strip_separator;
use crate::input::CardNumberInput;
use crate::CardType;

/// Card number field.
///
/// The grouping follows the card type of the edited text. When an edit
/// changes the card type's grouping (typing a leading `3` switches to the
/// American Express layout), the whole text is regrouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumberField {
    separator: String,
}

impl CardNumberField {
    /// Creates a field grouping with `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Separator between groups.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for CardNumberField {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl InputField for CardNumberField {
    type Input = CardNumberInput;

    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        let edited = match edit.apply(current) {
            Ok(edited) => edited,
            Err(err) => {
                log_debug!("rejecting card number edit: {}", err);
                return EditOutcome::reject();
            }
        };

        let condensed = strip_separator(&edited, &self.separator);
        if !Alphabet::Digits.accepts(&condensed) {
            log_debug!("rejecting card number edit: non-digit characters");
            return EditOutcome::reject();
        }

        let card_type = CardType::classify(&condensed);
        let style = card_type.grouping_style();
        let previous = CardType::classify(&strip_separator(current, &self.separator));

        if previous.grouping_style() != style {
            log_debug!("card type changed from {} to {}", previous, card_type);
            return style.regroup(&edited, &self.separator);
        }

        style.handle_edited(current, &edited, &condensed, &self.separator)
    }

    fn input(&self, text: &str) -> Option<CardNumberInput> {
        CardNumberInput::from_text(text, &self.separator)
    }

    fn name(&self) -> &'static str {
        "card"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(field: &CardNumberField, keys: &str) -> String {
        let mut text = String::new();
        for c in keys.chars() {
            let edit = TextEdit::append(&text, c.to_string());
            text = field.handle_edit(&text, &edit).resolve(&text, &edit).unwrap();
        }
        text
    }

    #[test]
    fn test_typing_visa() {
        let field = CardNumberField::default();
        assert_eq!(type_keys(&field, "453"), "453");
        assert_eq!(type_keys(&field, "4539"), "4539 ");
        assert_eq!(type_keys(&field, "4539260780952497"), "4539 2607 8095 2497");
        assert_eq!(type_keys(&field, "45392607809524971"), "4539 2607 8095 2497");
    }

    #[test]
    fn test_typing_amex() {
        let field = CardNumberField::default();
        assert_eq!(type_keys(&field, "3703"), "3703 ");
        assert_eq!(type_keys(&field, "3703554968"), "3703 554968 ");
        assert_eq!(type_keys(&field, "370355496876137"), "3703 554968 76137");
    }

    #[test]
    fn test_typing_maestro_to_nineteen() {
        let field = CardNumberField::default();
        assert_eq!(
            type_keys(&field, "67891234123412341299"),
            "6789 1234 1234 1234 129"
        );
    }

    #[test]
    fn test_type_change_regroups() {
        let field = CardNumberField::default();
        // replacing the leading 4 with 3 switches to 4-6-5 grouping
        let outcome = field.handle_edit("4539 2607 80", &TextEdit::new(0..1, "3"));
        assert_eq!(outcome, EditOutcome::replace_with("3539 260780 "));
    }

    #[test]
    fn test_visa_scenarios() {
        let field = CardNumberField::default();
        assert_eq!(
            field.handle_edit("453", &TextEdit::insert(3, "9")),
            EditOutcome::replace_with("4539 ")
        );
        assert_eq!(
            field.handle_edit("4539 ", &TextEdit::delete(4..5)),
            EditOutcome::replace_with("453")
        );
        assert_eq!(
            field.handle_edit("", &TextEdit::insert(0, "4539260780952")),
            EditOutcome::replace_with("4539 2607 8095 2")
        );
    }

    #[test]
    fn test_rejects_letters() {
        let field = CardNumberField::default();
        assert!(field.handle_edit("4539 ", &TextEdit::insert(5, "a")).is_rejected());
        assert!(field
            .handle_edit("", &TextEdit::insert(0, "67891234123412341 abc"))
            .is_rejected());
    }

    #[test]
    fn test_input() {
        let field = CardNumberField::default();
        let input = field.input("5389 5012 4765 3501").unwrap();
        assert_eq!(input.card_type(), CardType::MasterCard);
        assert!(input.is_valid());
        assert!(field.input("").is_none());
    }

    #[test]
    fn test_custom_separator() {
        let field = CardNumberField::new("-");
        assert_eq!(type_keys(&field, "45392607"), "4539-2607-");
        assert_eq!(field.input("4539-2607-").unwrap().normalized_number(), "45392607");
    }
}
