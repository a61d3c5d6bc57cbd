//! Card number, CVV and checkout example.
//!
//! Run with: `cargo run --example card_entry`

use payfield::edit::TextEdit;
use payfield::field::{CardNumberField, CvvField, ExpiryField};
use payfield::{CardPayment, CardType, EditSession, YearMonth};

fn main() {
    println!("=== Card Number Entry ===\n");

    // -------------------------------------------------------------------------
    // Typing digit by digit
    // -------------------------------------------------------------------------
    println!("--- Typing a Visa number ---\n");

    let mut session = EditSession::new(CardNumberField::default());
    for (key, text) in "4539260780952497".chars().zip(session.replay("4539260780952497")) {
        println!("  typed {}  ->  \"{}\"", key, text);
    }
    println!();

    // Extra digits are ignored
    let accepted = session.type_char('1');
    println!("17th digit accepted: {}", accepted);
    println!("Display: \"{}\"\n", session.text());

    // -------------------------------------------------------------------------
    // Backspace through a separator
    // -------------------------------------------------------------------------
    println!("--- Backspace ---\n");

    let mut session = EditSession::new(CardNumberField::default());
    session.type_str("4539");
    println!("  before: \"{}\"", session.text());
    session.backspace();
    println!("  after:  \"{}\"\n", session.text());

    // -------------------------------------------------------------------------
    // Card type changes regroup the display
    // -------------------------------------------------------------------------
    println!("--- Switching to American Express ---\n");

    let mut session = EditSession::new(CardNumberField::default());
    session.type_str("4539260780");
    println!("  Visa grouping: \"{}\"", session.text());
    session.apply(&TextEdit::new(0..1, "3"));
    println!("  Amex grouping: \"{}\"\n", session.text());

    // -------------------------------------------------------------------------
    // Pasting
    // -------------------------------------------------------------------------
    println!("--- Pasting ---\n");

    let pastes = [
        "370355496876137",
        "6789 1234 1234 1234 129",
        "4539-2607-8095-2497",
        "4539 2607 abcd",
    ];

    for paste in pastes {
        let mut session = EditSession::new(CardNumberField::default());
        if session.paste(paste) {
            let input = session.input();
            let card_type = input.as_ref().map_or(CardType::Unknown, |i| i.card_type());
            let valid = input.as_ref().is_some_and(|i| i.is_valid());
            println!(
                "  {:<25} -> \"{}\" ({}, valid: {})",
                paste,
                session.text(),
                card_type,
                valid
            );
        } else {
            println!("  {:<25} -> rejected", paste);
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------
    println!("--- Checkout ---\n");

    let mut number = EditSession::new(CardNumberField::default());
    let mut expiry = EditSession::new(ExpiryField::new());
    let mut cvv = EditSession::new(CvvField);

    number.type_str("5425233430109903");
    expiry.type_str(&format!("12{:02}", (YearMonth::current().year() + 2) % 100));
    cvv.type_str("123");

    let (Some(number), Some(expiry), Some(cvv)) = (number.input(), expiry.input(), cvv.input())
    else {
        println!("  incomplete form");
        return;
    };

    match CardPayment::from_inputs(&number, &cvv, &expiry) {
        Ok(payment) => {
            println!("  Method: {}", payment.method());
            println!("  Payment: {:?}", payment);
        }
        Err(e) => println!("  Error: {}", e),
    }
}
