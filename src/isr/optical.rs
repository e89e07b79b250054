//! The ISR optical line, parsed positionally by payment-slip scanners.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{mod10_append, ZahlteilError};

use super::reference::{is_isr_reference, isr_subscription_number};

/// Largest amount encodable in the 10-digit cents field.
const MAX_AMOUNT_CENTS: u64 = 9_999_999_999;

/// ISR slips exist for CHF and EUR only; the slip type code differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsrCurrency {
    Chf,
    Eur,
}

impl IsrCurrency {
    /// Slip type code opening the optical line.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chf => "01",
            Self::Eur => "03",
        }
    }

    /// Map an ISO 4217 currency code; anything but CHF/EUR has no ISR.
    pub fn from_iso(code: &str) -> Option<Self> {
        match code {
            "CHF" => Some(Self::Chf),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }
}

/// Everything needed to print the optical line of an ISR payment slip.
///
/// The amount is the document amount; whether that is an invoice total or a
/// per-line total is the caller's call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsrSlip {
    pub amount: Decimal,
    pub currency: IsrCurrency,
    /// 27-digit structured reference.
    pub reference: String,
    /// Subscription number in dashed form, e.g. `01-162-8`.
    pub subscription: String,
}

impl IsrSlip {
    /// Assemble the optical line:
    /// `<type><amount cents, 10 digits><check>><reference>+ <subscription>>`
    ///
    /// The layout is fixed — downstream scanners parse it positionally, so
    /// the space after the `+` is part of the format.
    pub fn optical_line(&self) -> Result<String, ZahlteilError> {
        if !is_isr_reference(&self.reference) {
            return Err(ZahlteilError::InvalidFormat(format!(
                "'{}' is not a valid 27-digit ISR reference",
                self.reference
            )));
        }
        let subscription = isr_subscription_number(&self.subscription)?;
        let cents = (self.amount * Decimal::ONE_HUNDRED)
            .round()
            .to_u64()
            .filter(|cents| *cents <= MAX_AMOUNT_CENTS)
            .ok_or_else(|| {
                ZahlteilError::InvalidFormat(format!(
                    "amount {} cannot be encoded on an ISR slip",
                    self.amount
                ))
            })?;
        let left = mod10_append(&format!("{}{cents:010}", self.currency.code()))?;
        Ok(format!("{left}>{}+ {subscription}>", self.reference))
    }
}
