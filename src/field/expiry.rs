use super::InputField;
use crate::edit::{EditOutcome, TextEdit};
use crate::expiry::{handle_expiry_edit, validate_expiry, YearMonth};
use crate::format::condense;
use crate::input::CardExpiryInput;

/// Card expiry field (`MM/YY`).
///
/// Validity is judged against a reference month: a fixed one set with
/// [`ExpiryField::with_today`], or the local calendar month at the time
/// [`input`](InputField::input) is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpiryField {
    today: Option<YearMonth>,
}

impl ExpiryField {
    /// Creates a field validating against the local calendar month.
    pub const fn new() -> Self {
        Self { today: None }
    }

    /// Creates a field validating against `today`.
    pub const fn with_today(today: YearMonth) -> Self {
        Self { today: Some(today) }
    }

    /// The month expiry dates are compared with.
    pub fn today(&self) -> YearMonth {
        self.today.unwrap_or_else(YearMonth::current)
    }
}

impl InputField for ExpiryField {
    type Input = CardExpiryInput;

    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        handle_expiry_edit(current, edit)
    }

    fn input(&self, text: &str) -> Option<CardExpiryInput> {
        if condense(text).is_empty() {
            return None;
        }
        Some(validate_expiry(text, self.today()))
    }

    fn name(&self) -> &'static str {
        "expiry"
    }
}
