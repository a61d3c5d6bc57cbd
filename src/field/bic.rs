use super::InputField;
use crate::edit::{EditOutcome, TextEdit};
use crate::format::condense;
use crate::input::BicInput;

/// BIC field.
///
/// Every edit is applied with its replacement upper-cased, and the condensed
/// result always replaces the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BicField;

impl InputField for BicField {
    type Input = BicInput;

    fn handle_edit(&self, current: &str, edit: &TextEdit) -> EditOutcome {
        let upper = TextEdit::new(edit.range.clone(), edit.replacement.to_uppercase());
        match upper.apply(current) {
            Ok(text) => EditOutcome::replace_with(condense(&text)),
            Err(err) => {
                log_debug!("rejecting bic edit: {}", err);
                EditOutcome::reject()
            }
        }
    }

    fn input(&self, text: &str) -> Option<BicInput> {
        BicInput::from_text(text)
    }

    fn name(&self) -> &'static str {
        "bic"
    }
}
