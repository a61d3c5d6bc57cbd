//! Fuzz target for expiry dates.
//!
//! Tests that expiry validation and editing never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payfield::edit::TextEdit;
use payfield::expiry::{handle_expiry_edit, is_valid_expiry_month, validate_expiry};
use payfield::YearMonth;

fuzz_target!(|data: &str| {
    let today = YearMonth::current();

    // These should never panic
    let input = validate_expiry(data, today);
    let _ = input.month();
    let _ = input.year();
    let _ = is_valid_expiry_month(data);
    let _ = data.parse::<YearMonth>();

    // A valid input always names a month that is not in the past
    if input.is_valid() {
        let (Some(month), Some(year)) = (input.month(), input.year()) else {
            panic!("valid expiry without month and year: {:?}", input);
        };
        assert!((1..=12).contains(&month));
        assert!(year >= u32::from(today.year()));
    }

    // Pasting anything leaves either a rejection or an MM/YY prefix
    let outcome = handle_expiry_edit("", &TextEdit::insert(0, data));
    if let Some(text) = outcome.text {
        assert!(text.len() <= 5);
    }
});
