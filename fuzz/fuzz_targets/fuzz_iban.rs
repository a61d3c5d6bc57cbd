//! Fuzz target for the IBAN checksum.
//!
//! Tests that checksum() never panics and ignores whitespace.

#![no_main]

use libfuzzer_sys::fuzz_target;
use payfield::{condense, validate_iban, IbanInput};

fuzz_target!(|data: &str| {
    let result = validate_iban(data);
    assert_eq!(result, validate_iban(&condense(data)));

    if let Some(input) = IbanInput::from_text(data) {
        assert_eq!(input.is_valid(), result.is_valid());
    }
});
