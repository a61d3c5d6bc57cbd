//! Expiry date entry example.
//!
//! Run with: `cargo run --example expiry_entry`

use payfield::field::{ExpiryField, InputField};
use payfield::{EditSession, YearMonth};

fn main() {
    println!("=== Expiry Date Entry ===\n");

    let today = YearMonth::new(2025, 4).unwrap_or_else(YearMonth::current);
    let field = ExpiryField::with_today(today);
    println!("Reference month: {}\n", today);

    // -------------------------------------------------------------------------
    // Keystrokes
    // -------------------------------------------------------------------------
    println!("--- Keystrokes ('<' is backspace) ---\n");

    let scenarios = [
        ("0425", "month completed, separator added"),
        ("527", "first digit 5 padded to 05/"),
        ("13", "month 13 rejected"),
        ("00", "month 00 rejected"),
        ("02<", "backspace removes the separator and the digit"),
        ("011<", "trailing separator dropped"),
    ];

    for (keys, description) in scenarios {
        let mut session = EditSession::new(&field);
        let steps = session.replay(keys);
        println!("  {:<6} {:?}", keys, steps);
        println!("         {}", description);
    }
    println!();

    // -------------------------------------------------------------------------
    // Validity
    // -------------------------------------------------------------------------
    println!("--- Validity ---\n");

    for text in ["04/25", "03/25", "12/30", "00/25", "04/2"] {
        match field.input(text) {
            Some(input) => println!(
                "  {:<6} valid: {:<5} month: {:?} year: {:?}",
                text,
                input.is_valid(),
                input.month(),
                input.year()
            ),
            None => println!("  {:<6} empty", text),
        }
    }
}
