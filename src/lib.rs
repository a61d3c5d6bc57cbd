//! # payfield
//!
//! Validation and as-you-type formatting for payment input fields.
//!
//! ## Features
//!
//! - Luhn validation of card numbers, MOD-97-10 validation of IBANs
//! - Card type detection from the first digit (Visa, Mastercard, Amex, Maestro)
//! - Grouping of digits into blocks while the user types
//! - Keystroke rules for `MM/YY` expiry dates, CVVs, IBANs and BICs
//! - Typed payment records built from validated field values
//!
//! ## Quick Start
//!
//! ```rust
//! use payfield::{validate_card_number, validate_iban, CardType, ValidationResult};
//!
//! // Checksums
//! assert_eq!(validate_card_number("4539 2607 8095 2497"), ValidationResult::ValidChecksum);
//! assert_eq!(validate_iban("GB82 WEST 1234 5698 7654 32"), ValidationResult::ValidChecksum);
//!
//! // Card type and brand-aware validation
//! let card_type = CardType::classify("3703 554968 76137");
//! assert_eq!(card_type, CardType::AmericanExpress);
//! assert!(card_type.validate("370355496876137").is_valid());
//! ```
//!
//! ## Grouping
//!
//! ```rust
//! use payfield::GroupingStyle;
//!
//! let style = GroupingStyle::fixed(4, 16);
//! assert_eq!(style.format("4539260780952497", " "), "4539 2607 8095 2497");
//!
//! let amex = GroupingStyle::variable([4, 6, 5], 15);
//! assert_eq!(amex.format("370355496876137", " "), "3703 554968 76137");
//! ```
//!
//! ## Handling Keystrokes
//!
//! A field controller decides, for every edit, whether the widget applies it
//! as typed, shows a substitute text or ignores it. [`EditSession`] plays the
//! widget's part:
//!
//! ```rust
//! use payfield::field::CardNumberField;
//! use payfield::EditSession;
//!
//! let mut session = EditSession::new(CardNumberField::default());
//! session.type_str("453926078095");
//! assert_eq!(session.text(), "4539 2607 8095 ");
//!
//! session.type_str("2497");
//! let input = session.input().unwrap();
//! assert!(input.is_valid());
//! assert_eq!(input.masked(), "**** **** **** 2497");
//! ```
//!
//! ## Payment Records
//!
//! ```rust
//! use payfield::{IbanInput, SepaDirectDebitPayment, PaymentMethod};
//!
//! let iban = IbanInput::from_text("DE91 1000 0000 0123 4567 89").unwrap();
//! let payment = SepaDirectDebitPayment::from_inputs(&iban, None, None, true).unwrap();
//! assert_eq!(payment.method(), PaymentMethod::SepaDirectDebitGuaranteed);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for value objects and payment records |
//! | `tracing` | Debug and trace events for edit decisions |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - `Debug` of card values shows masked numbers only
//! - Card numbers, CVVs and session text are zeroized on drop
//! - Card inputs compare in constant time
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

#[cfg(feature = "tracing")]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

pub mod card;
pub mod cvv;
pub mod edit;
pub mod error;
pub mod expiry;
pub mod field;
pub mod format;
pub mod iban;
pub mod input;
pub mod luhn;
pub mod mask;
pub mod payment;
pub mod session;
pub mod validate;

// Re-export main types at crate root
pub use card::CardType;
pub use edit::{Alphabet, EditOutcome, TextEdit};
pub use error::InputError;
pub use expiry::YearMonth;
pub use format::{condense, GroupingStyle};
pub use input::{BicInput, CardCvvInput, CardExpiryInput, CardNumberInput, IbanInput, PaymentInput};
pub use payment::{
    CardPayment, PaymentDataError, PaymentMethod, PaymentTypeData, SepaDirectDebitPayment,
};
pub use session::EditSession;
pub use validate::{validate_card_number, validate_iban, ValidationResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{CardNumberField, CvvField, ExpiryField, IbanField};

    const VISA: &str = "4539260780952497";
    const MASTERCARD: &str = "5425233430109903";
    const AMEX: &str = "370355496876137";
    const IBAN_DE: &str = "DE91100000000123456789";
    const IBAN_GB: &str = "GB82WEST12345698765432";

    #[test]
    fn test_card_numbers() {
        for (number, card_type) in [
            (VISA, CardType::Visa),
            (MASTERCARD, CardType::MasterCard),
            (AMEX, CardType::AmericanExpress),
        ] {
            assert_eq!(CardType::classify(number), card_type);
            assert_eq!(card_type.validate(number), ValidationResult::ValidChecksum);
            assert!(validate_card_number(number).is_valid());
        }
    }

    #[test]
    fn test_ibans() {
        assert!(validate_iban(IBAN_DE).is_valid());
        assert!(validate_iban(IBAN_GB).is_valid());
        assert_eq!(
            validate_iban("GB82WEST12345698765433"),
            ValidationResult::InvalidChecksum
        );
    }

    #[test]
    fn test_full_card_checkout() {
        let today = YearMonth::new(2025, 4).unwrap();

        let mut number = EditSession::new(CardNumberField::default());
        number.type_str(VISA);
        let mut expiry = EditSession::new(ExpiryField::with_today(today));
        expiry.type_str("1227");
        let mut cvv = EditSession::new(CvvField);
        cvv.type_str("1234");

        assert_eq!(number.text(), "4539 2607 8095 2497");
        assert_eq!(expiry.text(), "12/27");
        assert_eq!(cvv.text(), "123");

        let payment = CardPayment::from_inputs(
            &number.input().unwrap(),
            &cvv.input().unwrap(),
            &expiry.input().unwrap(),
        )
        .unwrap();
        assert_eq!(payment.number(), VISA);
        assert_eq!(payment.expiry_date(), "12/27");
        assert_eq!(PaymentTypeData::from(payment).method(), PaymentMethod::Card);
    }

    #[test]
    fn test_full_sepa_checkout() {
        let mut iban = EditSession::new(IbanField::default());
        iban.paste("de91 1000 0000 0123 4567 89");
        assert_eq!(iban.text(), "DE91 1000 0000 0123 4567 89");

        let input = iban.input().unwrap();
        assert_eq!(input.string_value(), IBAN_DE);
        let payment = SepaDirectDebitPayment::from_inputs(&input, None, None, false).unwrap();
        assert_eq!(payment.method().as_str(), "sepa-direct-debit");
    }

    #[test]
    fn test_debug_is_safe() {
        let input = CardNumberInput::from_text(VISA, " ").unwrap();
        let debug = format!("{:?}", input);
        assert!(!debug.contains(VISA));
        assert!(debug.contains("2497"));
    }
}
