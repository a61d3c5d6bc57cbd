//! Fuzz target for keystroke handling.
//!
//! Replays arbitrary edits through every field and checks that no edit
//! panics and that a rejected edit never changes the display.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use payfield::edit::TextEdit;
use payfield::field::{BicField, CardNumberField, CvvField, ExpiryField, IbanField, InputField};

#[derive(Debug, Arbitrary)]
struct Edit {
    start: u8,
    end: u8,
    replacement: String,
}

fn replay<F: InputField>(field: F, edits: &[Edit]) {
    let mut text = String::new();
    for edit in edits {
        let edit = TextEdit::new(
            usize::from(edit.start)..usize::from(edit.end),
            edit.replacement.clone(),
        );
        let outcome = field.handle_edit(&text, &edit);
        match outcome.resolve(&text, &edit) {
            Ok(next) => {
                if outcome.is_rejected() {
                    assert_eq!(next, text);
                }
                text = next;
            }
            Err(err) => panic!("allowed edit could not be applied: {}", err),
        }
        let _ = field.input(&text);
    }
}

fuzz_target!(|edits: Vec<Edit>| {
    replay(CardNumberField::default(), &edits);
    replay(IbanField::default(), &edits);
    replay(ExpiryField::new(), &edits);
    replay(CvvField, &edits);
    replay(BicField, &edits);
});
