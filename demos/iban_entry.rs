//! IBAN and BIC entry example.
//!
//! Run with: `cargo run --example iban_entry`

use payfield::field::{BicField, IbanField};
use payfield::{validate_iban, EditSession, SepaDirectDebitPayment};

fn main() {
    println!("=== IBAN Entry ===\n");

    // -------------------------------------------------------------------------
    // Checksums
    // -------------------------------------------------------------------------
    println!("--- MOD-97 checksums ---\n");

    let ibans = [
        "GB82 WEST 1234 5698 7654 32",
        "DE91 1000 0000 0123 4567 89",
        "CH56 0483 5012 3456 7800 9",
        "DE92 1000 0000 0123 4567 89",
        "GB1",
        "ÖB82 WEST 1234 5698 7654 32",
    ];

    for iban in ibans {
        println!("  {:<30} {}", iban, validate_iban(iban));
    }
    println!();

    // -------------------------------------------------------------------------
    // Typing
    // -------------------------------------------------------------------------
    println!("--- Typing (lower case is upper-cased) ---\n");

    let mut session = EditSession::new(IbanField::default());
    for step in session.replay("de9110000000") {
        println!("  \"{}\"", step);
    }
    session.type_str("0123456789");
    println!("  \"{}\"\n", session.text());

    // -------------------------------------------------------------------------
    // Alphabet
    // -------------------------------------------------------------------------
    println!("--- Alphabet ---\n");

    let mut rejected = EditSession::new(IbanField::default());
    println!("  leading digit accepted: {}", rejected.type_char('1'));
    rejected.type_str("CH56");
    println!("  letter after check digits accepted: {}", rejected.type_char('X'));
    println!();

    // -------------------------------------------------------------------------
    // Direct debit
    // -------------------------------------------------------------------------
    println!("--- Direct debit ---\n");

    let mut bic = EditSession::new(BicField);
    bic.type_str("cobadeffxxx");
    println!("  BIC display: \"{}\"", bic.text());

    let Some(iban) = session.input() else {
        println!("  no IBAN entered");
        return;
    };

    for guaranteed in [false, true] {
        match SepaDirectDebitPayment::from_inputs(
            &iban,
            bic.input().as_ref(),
            Some("Max Mustermann".to_string()),
            guaranteed,
        ) {
            Ok(payment) => println!("  {}: {:?}", payment.method(), payment),
            Err(e) => println!("  Error: {}", e),
        }
    }
}
