use super::InputField;
use crate::cvv::{cvv_input, handle_cvv_edit};
use crate::edit::{EditOutcome, TextEdit};
use crate::input::CardCvvInput;

/// CVV field: up to three digits, no grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CvvField;

impl InputField for CvvField {
    type Input = CardCvvInput;

    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        handle_cvv_edit(current, edit)
    }

    fn input(&self, text: &str) -> Option<CardCvvInput> {
        cvv_input(text)
    }

    fn name(&self) -> &'static str {
        "cvv"
    }
}
