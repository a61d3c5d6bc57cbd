//! Typed payment records handed to the request-encoding layer.
//!
//! Records are built from field values and hold only the fields the payment
//! backend expects. With the `serde` feature they serialize to exactly those
//! fields; no encoding happens in this crate.
//!
//! # Example
//!
//! ```
//! use payfield::payment::{CardPayment, PaymentMethod};
//!
//! let payment = CardPayment::new("4539260780952497", "123", 4, 2027).unwrap();
//! assert_eq!(payment.expiry_date(), "04/27");
//! assert_eq!(payment.method(), PaymentMethod::Card);
//!
//! assert!(CardPayment::new("4539260780952497", "12", 4, 2027).is_err());
//! ```

use crate::input::{BicInput, CardCvvInput, CardExpiryInput, CardNumberInput, IbanInput};
use crate::mask;
use std::fmt;
use zeroize::Zeroize;

/// Shortest card number accepted in a payment.
pub const MIN_PAYMENT_NUMBER_LENGTH: usize = 15;

/// Shortest CVC accepted in a payment.
pub const MIN_PAYMENT_CVC_LENGTH: usize = 3;

/// Payment methods the records in this module create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PaymentMethod {
    /// Credit card payment.
    #[cfg_attr(feature = "serde", serde(rename = "card"))]
    Card,
    /// SEPA direct debit.
    #[cfg_attr(feature = "serde", serde(rename = "sepa-direct-debit"))]
    SepaDirectDebit,
    /// SEPA direct debit with payment guarantee.
    #[cfg_attr(feature = "serde", serde(rename = "sepa-direct-debit-guaranteed"))]
    SepaDirectDebitGuaranteed,
}

impl PaymentMethod {
    /// Identifier used by the payment backend.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::SepaDirectDebit => "sepa-direct-debit",
            Self::SepaDirectDebitGuaranteed => "sepa-direct-debit-guaranteed",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when building a payment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDataError {
    /// Month is out of range (must be 1-12).
    InvalidMonth(u32),
    /// Year is out of range (must be 1-99 or 2001-2099).
    InvalidYear(u32),
    /// The CVC is too short.
    CvcTooShort {
        /// Actual length.
        length: usize,
    },
    /// The card number is too short.
    NumberTooShort {
        /// Actual length.
        length: usize,
    },
    /// A field value did not pass validation.
    InvalidInput(&'static str),
}

impl fmt::Display for PaymentDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid expiry month {}: must be 1-12", m),
            Self::InvalidYear(y) => write!(f, "invalid expiry year {}", y),
            Self::CvcTooShort { length } => {
                write!(
                    f,
                    "cvc has {} digits, at least {} required",
                    length, MIN_PAYMENT_CVC_LENGTH
                )
            }
            Self::NumberTooShort { length } => {
                write!(
                    f,
                    "card number has {} digits, at least {} required",
                    length, MIN_PAYMENT_NUMBER_LENGTH
                )
            }
            Self::InvalidInput(field) => write!(f, "{} input is not valid", field),
        }
    }
}

impl std::error::Error for PaymentDataError {}

/// A credit card payment.
///
/// # Security
///
/// - Debug output is masked
/// - Number and CVC are zeroed on drop
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardPayment {
    number: String,
    cvc: String,
    expiry_date: String,
}

impl CardPayment {
    /// Builds a card payment from raw values.
    ///
    /// `expiry_year` may be two-digit (`27`) or four-digit (`2027`). The
    /// number must have at least 15 characters and the CVC at least 3.
    pub fn new(
        number: &str,
        cvc: &str,
        expiry_month: u32,
        expiry_year: u32,
    ) -> Result<Self, PaymentDataError> {
        if !(1..=12).contains(&expiry_month) {
            return Err(PaymentDataError::InvalidMonth(expiry_month));
        }

        let year = if expiry_year > 2000 {
            expiry_year - 2000
        } else {
            expiry_year
        };
        if !(1..100).contains(&year) {
            return Err(PaymentDataError::InvalidYear(expiry_year));
        }

        let cvc_length = cvc.chars().count();
        if cvc_length < MIN_PAYMENT_CVC_LENGTH {
            return Err(PaymentDataError::CvcTooShort { length: cvc_length });
        }

        let number_length = number.chars().count();
        if number_length < MIN_PAYMENT_NUMBER_LENGTH {
            return Err(PaymentDataError::NumberTooShort {
                length: number_length,
            });
        }

        Ok(Self {
            number: number.to_string(),
            cvc: cvc.to_string(),
            expiry_date: format!("{:02}/{:02}", expiry_month, year),
        })
    }

    /// Builds a card payment from field values, which must all be valid.
    pub fn from_inputs(
        number: &CardNumberInput,
        cvv: &CardCvvInput,
        expiry: &CardExpiryInput,
    ) -> Result<Self, PaymentDataError> {
        if !number.is_valid() {
            return Err(PaymentDataError::InvalidInput("card number"));
        }
        if !cvv.is_valid() {
            return Err(PaymentDataError::InvalidInput("cvv"));
        }
        if !expiry.is_valid() {
            return Err(PaymentDataError::InvalidInput("expiry"));
        }

        let (Some(month), Some(year)) = (expiry.month(), expiry.year()) else {
            return Err(PaymentDataError::InvalidInput("expiry"));
        };

        Self::new(number.normalized_number(), cvv.cvv(), month, year)
    }

    /// Always [`PaymentMethod::Card`].
    #[inline]
    pub const fn method(&self) -> PaymentMethod {
        PaymentMethod::Card
    }

    /// The full card number.
    ///
    /// # Security Warning
    ///
    /// Never log this value.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The card verification code.
    #[inline]
    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Expiry as `MM/YY`.
    #[inline]
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }
}

impl fmt::Debug for CardPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardPayment")
            .field("number", &mask::mask_number(&self.number))
            .field("cvc", &"***")
            .field("expiry_date", &self.expiry_date)
            .finish()
    }
}

impl Drop for CardPayment {
    fn drop(&mut self) {
        self.number.zeroize();
        self.cvc.zeroize();
    }
}

/// A SEPA direct debit payment.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SepaDirectDebitPayment {
    iban: String,
    bic: Option<String>,
    holder: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    guaranteed: bool,
}

impl SepaDirectDebitPayment {
    /// Builds a direct debit from raw values.
    ///
    /// The BIC is only required by some countries.
    pub fn new(
        iban: impl Into<String>,
        bic: Option<String>,
        holder: Option<String>,
        guaranteed: bool,
    ) -> Self {
        Self {
            iban: iban.into(),
            bic,
            holder,
            guaranteed,
        }
    }

    /// Builds a direct debit from field values.
    ///
    /// The IBAN must be valid, and so must the BIC if one was entered.
    pub fn from_inputs(
        iban: &IbanInput,
        bic: Option<&BicInput>,
        holder: Option<String>,
        guaranteed: bool,
    ) -> Result<Self, PaymentDataError> {
        if !iban.is_valid() {
            return Err(PaymentDataError::InvalidInput("iban"));
        }
        if bic.is_some_and(|bic| !bic.is_valid()) {
            return Err(PaymentDataError::InvalidInput("bic"));
        }

        Ok(Self::new(
            iban.iban(),
            bic.map(|bic| bic.bic().to_string()),
            holder,
            guaranteed,
        ))
    }

    /// Guaranteed or plain direct debit.
    #[inline]
    pub const fn method(&self) -> PaymentMethod {
        if self.guaranteed {
            PaymentMethod::SepaDirectDebitGuaranteed
        } else {
            PaymentMethod::SepaDirectDebit
        }
    }

    /// The account IBAN.
    #[inline]
    pub fn iban(&self) -> &str {
        &self.iban
    }

    /// The bank BIC, if given.
    #[inline]
    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    /// The account holder, if given.
    #[inline]
    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }
}

impl fmt::Debug for SepaDirectDebitPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SepaDirectDebitPayment")
            .field("iban", &mask::mask_iban(&self.iban))
            .field("bic", &self.bic)
            .field("holder", &self.holder)
            .field("method", &self.method())
            .finish()
    }
}

/// Payment data for any supported method.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PaymentTypeData {
    /// Credit card.
    Card(CardPayment),
    /// SEPA direct debit, guaranteed or not.
    SepaDirectDebit(SepaDirectDebitPayment),
}

impl PaymentTypeData {
    /// The method of the wrapped record.
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Card(card) => card.method(),
            Self::SepaDirectDebit(sepa) => sepa.method(),
        }
    }
}

impl From<CardPayment> for PaymentTypeData {
    fn from(payment: CardPayment) -> Self {
        Self::Card(payment)
    }
}

impl From<SepaDirectDebitPayment> for PaymentTypeData {
    fn from(payment: SepaDirectDebitPayment) -> Self {
        Self::SepaDirectDebit(payment)
    }
}
